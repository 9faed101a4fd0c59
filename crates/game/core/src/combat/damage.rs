//! Damage calculation and application.

use crate::state::Combatant;

// ============================================================================
// Damage Calculation
// ============================================================================

/// Calculate damage from an attack.
///
/// # Formula
///
/// ```text
/// damage = max(attack_power - defense_power, 0)
/// ```
///
/// Damage is clamped here, before it is applied or displayed, so callers
/// never observe a negative value.
pub fn calculate_damage(attack_power: f32, defense_power: f32) -> f32 {
    (attack_power - defense_power).max(0.0)
}

/// Apply damage to current health.
///
/// # Returns
///
/// New health value (clamped to 0)
pub fn apply_damage(current_health: f32, damage: f32) -> f32 {
    (current_health - damage).max(0.0)
}

// ============================================================================
// Attack Resolution
// ============================================================================

/// Resolve one attack of `attacker` against `defender`.
///
/// Only the defender is mutated: its health is reduced by the calculated
/// damage and clamped to 0.
///
/// # Returns
///
/// The damage dealt (never negative).
pub fn attack(attacker: &Combatant, defender: &mut Combatant) -> f32 {
    let damage = calculate_damage(attacker.attack_power, defender.defense_power);
    defender.health = apply_damage(defender.health, damage);
    damage
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_is_attack_minus_defense() {
        assert_eq!(calculate_damage(15.0, 0.0), 15.0);
        assert_eq!(calculate_damage(12.0, 10.0), 2.0);
    }

    #[test]
    fn damage_never_goes_negative() {
        assert_eq!(calculate_damage(1.0, 10.0), 0.0);
        assert_eq!(calculate_damage(0.0, 0.0), 0.0);
    }

    #[test]
    fn apply_damage_clamps_to_zero() {
        assert_eq!(apply_damage(10.0, 15.0), 0.0);
        assert_eq!(apply_damage(10.0, 4.0), 6.0);
    }

    #[test]
    fn knight_one_shots_slime() {
        let knight = Combatant::new("Rin", 75.0, 15.0, 10.0);
        let mut slime = Combatant::new("Slime", 10.0, 1.0, 0.0);

        let dealt = attack(&knight, &mut slime);

        assert_eq!(dealt, 15.0);
        assert_eq!(slime.health, 0.0);
        assert!(slime.is_defeated());
        // Attacker is untouched
        assert_eq!(knight.health, 75.0);
    }

    #[test]
    fn blocked_attack_leaves_defender_unharmed() {
        let slime = Combatant::new("Slime", 10.0, 1.0, 0.0);
        let mut knight = Combatant::new("Rin", 75.0, 15.0, 10.0);

        let dealt = attack(&slime, &mut knight);

        assert_eq!(dealt, 0.0);
        assert_eq!(knight.health, 75.0);
    }
}
