//! Static configuration tables consumed when a session starts.

use crate::error::ConfigError;

/// One row of a combatant table: an enemy of the roster or a class preset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSpec {
    pub name: String,
    pub health: f32,
    pub attack_power: f32,
    pub defense_power: f32,
}

impl CombatantSpec {
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
}

/// One row of the item table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpec {
    pub name: String,
    pub stat_boost: f32,
}

impl ItemSpec {
    pub fn new(name: impl Into<String>, stat_boost: f32) -> Self {
        Self {
            name: name.into(),
            stat_boost,
        }
    }
}

/// Game tables: the enemy roster, the class presets, and the item table.
///
/// Enemies are fought in order. Classes are listed in menu order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub enemies: Vec<CombatantSpec>,
    pub classes: Vec<CombatantSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemSpec>,
}

impl GameConfig {
    /// Class selection is a menu and every menu offers at least two options.
    pub const MIN_CLASSES: usize = 2;

    pub fn new(enemies: Vec<CombatantSpec>, classes: Vec<CombatantSpec>) -> Self {
        Self {
            enemies,
            classes,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_items(mut self, items: Vec<ItemSpec>) -> Self {
        self.items = items;
        self
    }

    /// Checks the tables for entries the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enemies.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        if self.classes.len() < Self::MIN_CLASSES {
            return Err(ConfigError::NotEnoughClasses {
                required: Self::MIN_CLASSES,
                found: self.classes.len(),
            });
        }

        validate_combatants("enemies", &self.enemies)?;
        validate_combatants("classes", &self.classes)?;

        for (index, item) in self.items.iter().enumerate() {
            check_name("items", index, &item.name)?;
            check_stat("items", &item.name, "stat_boost", item.stat_boost)?;
        }

        Ok(())
    }
}

fn validate_combatants(table: &'static str, specs: &[CombatantSpec]) -> Result<(), ConfigError> {
    for (index, spec) in specs.iter().enumerate() {
        check_name(table, index, &spec.name)?;
        check_stat(table, &spec.name, "health", spec.health)?;
        check_stat(table, &spec.name, "attack_power", spec.attack_power)?;
        check_stat(table, &spec.name, "defense_power", spec.defense_power)?;
    }
    Ok(())
}

fn check_name(table: &'static str, index: usize, name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::EmptyName { table, index });
    }
    Ok(())
}

fn check_stat(
    table: &'static str,
    name: &str,
    stat: &'static str,
    value: f32,
) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidStat {
            table,
            name: name.to_owned(),
            stat,
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> Vec<CombatantSpec> {
        vec![
            CombatantSpec::new("Wizard", 50.0, 25.0, 5.0),
            CombatantSpec::new("Knight", 75.0, 15.0, 10.0),
        ]
    }

    #[test]
    fn accepts_valid_tables() {
        let config = GameConfig::new(vec![CombatantSpec::new("Slime", 10.0, 1.0, 0.0)], classes())
            .with_items(vec![ItemSpec::new("Iron Sword", 5.0)]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_roster() {
        let config = GameConfig::new(Vec::new(), classes());
        assert_eq!(config.validate(), Err(ConfigError::EmptyRoster));
    }

    #[test]
    fn rejects_single_class() {
        let config = GameConfig::new(
            vec![CombatantSpec::new("Slime", 10.0, 1.0, 0.0)],
            vec![CombatantSpec::new("Knight", 75.0, 15.0, 10.0)],
        );
        assert_eq!(
            config.validate(),
            Err(ConfigError::NotEnoughClasses {
                required: 2,
                found: 1
            })
        );
    }

    #[test]
    fn rejects_negative_and_non_finite_stats() {
        let config = GameConfig::new(vec![CombatantSpec::new("Slime", -1.0, 1.0, 0.0)], classes());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStat { stat: "health", .. })
        ));

        let config = GameConfig::new(
            vec![CombatantSpec::new("Slime", 10.0, f32::NAN, 0.0)],
            classes(),
        );
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStat {
                stat: "attack_power",
                ..
            })
        ));
    }

    #[test]
    fn rejects_blank_item_name() {
        let config = GameConfig::new(vec![CombatantSpec::new("Slime", 10.0, 1.0, 0.0)], classes())
            .with_items(vec![ItemSpec::new("  ", 5.0)]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyName {
                table: "items",
                index: 0
            })
        );
    }
}
