use crate::config::CombatantSpec;

/// An entity with health, attack, and defense taking part in a battle.
///
/// Health never drops below 0; every damage application goes through
/// [`crate::combat::apply_damage`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub name: String,
    pub health: f32,
    pub attack_power: f32,
    pub defense_power: f32,
}

impl Combatant {
    pub fn new(
        name: impl Into<String>,
        health: f32,
        attack_power: f32,
        defense_power: f32,
    ) -> Self {
        Self {
            name: name.into(),
            health,
            attack_power,
            defense_power,
        }
    }

    /// Creates a fresh combatant from a static table entry.
    pub fn from_spec(spec: &CombatantSpec) -> Self {
        Self::new(
            spec.name.clone(),
            spec.health,
            spec.attack_power,
            spec.defense_power,
        )
    }

    /// Replaces the stats with a class preset, keeping the current name.
    pub fn apply_preset(&mut self, preset: &CombatantSpec) {
        self.health = preset.health;
        self.attack_power = preset.attack_power;
        self.defense_power = preset.defense_power;
    }

    /// Returns a copy whose attack power is raised by `stat_boost`.
    #[must_use]
    pub fn with_boost(&self, stat_boost: f32) -> Self {
        Self {
            attack_power: self.attack_power + stat_boost,
            ..self.clone()
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }
}
