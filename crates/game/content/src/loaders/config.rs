//! Game configuration loader.

use anyhow::Context;
use game_core::GameConfig;

use crate::BUILTIN_CONFIG;
use crate::loaders::LoadResult;

/// Loader for game tables from RON documents.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the tables compiled into the crate.
    pub fn builtin() -> LoadResult<GameConfig> {
        Self::parse(BUILTIN_CONFIG).context("built-in arena tables are invalid")
    }

    /// Parse and validate tables from a RON document.
    ///
    /// RON format: a `GameConfig` struct with `enemies`, `classes`, and an
    /// optional `items` list.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse game config RON: {}", e))?;

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_load() {
        let config = ConfigLoader::builtin().unwrap();

        let roster: Vec<_> = config.enemies.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(roster, ["Slime", "Zom-B", "Wompus With Gun"]);

        let classes: Vec<_> = config.classes.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(classes, ["Wizard", "Knight"]);

        assert_eq!(config.items.len(), 2);
    }

    #[test]
    fn builtin_slime_and_knight_stats() {
        let config = ConfigLoader::builtin().unwrap();

        let slime = &config.enemies[0];
        assert_eq!(
            (slime.health, slime.attack_power, slime.defense_power),
            (10.0, 1.0, 0.0)
        );

        let knight = &config.classes[1];
        assert_eq!(
            (knight.health, knight.attack_power, knight.defense_power),
            (75.0, 15.0, 10.0)
        );
    }

    #[test]
    fn items_are_optional() {
        let config = ConfigLoader::parse(
            r#"(
                enemies: [(name: "Slime", health: 10.0, attack_power: 1.0, defense_power: 0.0)],
                classes: [
                    (name: "Wizard", health: 50.0, attack_power: 25.0, defense_power: 5.0),
                    (name: "Knight", health: 75.0, attack_power: 15.0, defense_power: 10.0),
                ],
            )"#,
        )
        .unwrap();

        assert!(config.items.is_empty());
    }

    #[test]
    fn rejects_malformed_ron() {
        let err = ConfigLoader::parse("(enemies: [").unwrap_err();
        assert!(err.to_string().contains("Failed to parse game config RON"));
    }

    #[test]
    fn rejects_invalid_tables() {
        let err = ConfigLoader::parse(
            r#"(
                enemies: [],
                classes: [
                    (name: "Wizard", health: 50.0, attack_power: 25.0, defense_power: 5.0),
                    (name: "Knight", health: 75.0, attack_power: 15.0, defense_power: 10.0),
                ],
            )"#,
        )
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<game_core::ConfigError>(),
            Some(&game_core::ConfigError::EmptyRoster)
        );
    }
}
