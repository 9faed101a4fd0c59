//! Stat blocks shown at the start of each battle turn.
use game_core::Combatant;

/// Stat block shown for each combatant at the start of a battle turn.
pub fn stat_lines(combatant: &Combatant) -> [String; 4] {
    [
        format!("Name: {}", combatant.name),
        format!("Health: {}", combatant.health),
        format!("Attack Power: {}", combatant.attack_power),
        format!("Defense Power: {}", combatant.defense_power),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_print_without_fraction() {
        let knight = Combatant::new("Rin", 75.0, 15.0, 10.0);

        assert_eq!(
            stat_lines(&knight),
            [
                "Name: Rin",
                "Health: 75",
                "Attack Power: 15",
                "Defense Power: 10",
            ]
        );
    }

    #[test]
    fn fractional_health_is_kept() {
        let slime = Combatant::new("Slime", 2.5, 1.0, 0.0);
        assert_eq!(stat_lines(&slime)[1], "Health: 2.5");
    }
}
