//! Scene controller driving a play session.
//!
//! The controller owns the [`GameState`] and the [`Console`]. Each call to
//! [`SceneController::update`] runs the handler of the current scene, which
//! may read one or more menu choices and move the session to another scene.
//! [`SceneController::run`] repeats this until the game is over.

use game_core::{BattleOutcome, GameConfig, GameState, Scene};

use crate::api::{Console, Result, RuntimeError};
use crate::format::stat_lines;
use crate::menu::{self, PROMPT_MARKER};

/// Line printed once the game loop has ended.
pub const FAREWELL: &str = "Thanks for playing!";

/// Line printed when the last enemy of the roster falls.
pub const VICTORY: &str = "You've slain all the enemies! You are a true warrior.";

/// Choices offered on each battle turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
enum BattleAction {
    Attack,
    Dodge,
    #[strum(serialize = "Equip Item")]
    EquipItem,
}

/// Owns the session state and advances it one scene at a time.
pub struct SceneController<C> {
    config: GameConfig,
    state: GameState,
    console: C,
}

impl<C: Console> SceneController<C> {
    /// Creates a controller for the given tables.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Config`] if the tables fail validation.
    pub fn new(config: GameConfig, console: C) -> Result<Self> {
        config.validate()?;
        let state = GameState::new(&config);

        Ok(Self {
            config,
            state,
            console,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Run the game loop to completion.
    ///
    /// End of input is treated as a request to quit: the loop stops and the
    /// farewell is still shown.
    pub fn run(&mut self) -> Result<()> {
        self.start();

        while !self.state.game_over {
            match self.update() {
                Ok(()) => {}
                Err(RuntimeError::InputClosed) => {
                    tracing::warn!(scene = %self.state.scene, "input closed, ending game");
                    self.state.game_over = true;
                }
                Err(err) => return Err(err),
            }
        }

        self.end()
    }

    /// Reset the session: first scene, full roster, item table.
    pub fn start(&mut self) {
        self.state.start(&self.config);
        tracing::info!(
            enemies = self.state.enemies.len(),
            items = self.state.items.len(),
            "session started"
        );
    }

    /// Run the handler of the current scene once.
    pub fn update(&mut self) -> Result<()> {
        let scene = self.state.scene;

        match scene {
            Scene::NamingInput => self.get_player_name()?,
            Scene::ClassSelection => self.character_selection()?,
            Scene::Battle => {
                self.battle()?;
                self.check_battle_results()?;
            }
            Scene::MainMenu => self.display_main_menu()?,
        }

        if self.state.scene != scene {
            tracing::info!(from = %scene, to = %self.state.scene, "scene transition");
        }

        Ok(())
    }

    /// Ask for the player's name and confirm it.
    ///
    /// The scene only advances once the player keeps the name; a blank name
    /// is asked for again straight away.
    pub fn get_player_name(&mut self) -> Result<()> {
        self.console.write_line("Please enter your name.")?;
        let name = self.console.read_line(PROMPT_MARKER)?.trim().to_owned();
        self.console.clear()?;

        if name.is_empty() {
            return Ok(());
        }

        let prompt = format!("You've entered {name}. Are you sure you want to keep this name?");
        if menu::confirm(&mut self.console, &prompt)? {
            tracing::debug!(%name, "player name confirmed");
            self.state.player.name = name;
            self.state.scene = Scene::ClassSelection;
        }

        Ok(())
    }

    /// Let the player pick a class preset and apply its stats.
    pub fn character_selection(&mut self) -> Result<()> {
        let prompt = format!(
            "Nice to meet you {}. Please select a character.",
            self.state.player.name
        );
        let labels: Vec<&str> = self
            .config
            .classes
            .iter()
            .map(|class| class.name.as_str())
            .collect();

        let choice = menu::get_input(&mut self.console, &prompt, &labels)?;
        let preset = &self.config.classes[choice];

        tracing::info!(class = %preset.name, "class selected");
        self.state.player.apply_preset(preset);
        self.state.scene = Scene::Battle;

        Ok(())
    }

    /// Play one turn against the current enemy.
    ///
    /// Dodging ends the turn with no retaliation. After any other action the
    /// enemy strikes back, even if the player's attack just defeated it.
    pub fn battle(&mut self) -> Result<()> {
        let Some(enemy) = self.state.current_enemy() else {
            return Ok(());
        };
        let enemy_name = enemy.name.clone();

        for line in stat_lines(&self.state.player) {
            self.console.write_line(&line)?;
        }
        self.console.write_line("")?;
        for line in stat_lines(enemy) {
            self.console.write_line(&line)?;
        }
        self.console.write_line("")?;

        let mut actions = vec![BattleAction::Attack, BattleAction::Dodge];
        if !self.state.items.is_empty() {
            actions.push(BattleAction::EquipItem);
        }

        let prompt = format!("A {enemy_name} stands in front of you! What will you do?");
        let choice = menu::get_input(&mut self.console, &prompt, &actions)?;

        match actions[choice] {
            BattleAction::Attack => {
                let damage = self.state.player_attack().unwrap_or_default();
                tracing::debug!(target_name = %enemy_name, damage, "player attacked");
                self.console
                    .write_line(&format!("You dealt {damage} damage!"))?;
            }
            BattleAction::Dodge => {
                tracing::debug!(target_name = %enemy_name, "player dodged");
                self.console
                    .write_line(&format!("You dodged the {enemy_name}'s attack!"))?;
                self.console.pause()?;
                self.console.clear()?;
                return Ok(());
            }
            BattleAction::EquipItem => self.equip_item()?,
        }

        let damage = self.state.enemy_attack().unwrap_or_default();
        tracing::debug!(attacker = %enemy_name, damage, "enemy retaliated");
        self.console
            .write_line(&format!("The {enemy_name} dealt {damage} damage!"))?;

        self.console.pause()?;
        self.console.clear()?;

        Ok(())
    }

    fn equip_item(&mut self) -> Result<()> {
        let labels: Vec<String> = self
            .state
            .items
            .iter()
            .map(|item| format!("{} (+{} attack)", item.name, item.stat_boost))
            .collect();

        let choice = menu::get_input(&mut self.console, "Which item will you equip?", &labels)?;

        if let Some(item) = self.state.equip(choice) {
            tracing::info!(item = %item.name, boost = item.stat_boost, "item equipped");
            let line = format!("You equipped the {}.", item.name);
            self.console.write_line(&line)?;
        }

        Ok(())
    }

    /// Check whether the player or the current enemy has fallen and move the
    /// session along.
    pub fn check_battle_results(&mut self) -> Result<()> {
        let outcome = self.state.check_battle_results();

        match &outcome {
            BattleOutcome::Ongoing => return Ok(()),
            BattleOutcome::PlayerSlain => {
                tracing::info!(player = %self.state.player.name, "player slain");
                self.console.write_line("You were slain...")?;
            }
            BattleOutcome::EnemySlain { defeated, next } => {
                tracing::info!(%defeated, %next, "enemy slain");
                self.console.write_line(&format!("You slayed the {defeated}"))?;
            }
            BattleOutcome::Victory { defeated } => {
                tracing::info!(defeated = ?defeated, "roster cleared");
                if let Some(defeated) = defeated {
                    self.console.write_line(&format!("You slayed the {defeated}"))?;
                }
            }
        }

        self.console.pause()?;
        self.console.clear()?;

        if matches!(outcome, BattleOutcome::Victory { .. }) {
            self.console.write_line(VICTORY)?;
        }

        Ok(())
    }

    /// Offer to play again. "Yes" starts a fresh session, "No" ends the game.
    pub fn display_main_menu(&mut self) -> Result<()> {
        if menu::confirm(&mut self.console, "Play Again?")? {
            self.start();
        } else {
            self.state.game_over = true;
        }

        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        tracing::info!("game over");
        self.console.write_line(FAREWELL)?;
        self.console.pause()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScriptedConsole;
    use game_core::{CombatantSpec, ConfigError};

    #[test]
    fn rejects_invalid_tables() {
        let config = GameConfig::new(
            Vec::new(),
            vec![
                CombatantSpec::new("Wizard", 50.0, 25.0, 5.0),
                CombatantSpec::new("Knight", 75.0, 15.0, 10.0),
            ],
        );

        let result = SceneController::new(config, ScriptedConsole::default());

        assert!(matches!(
            result,
            Err(RuntimeError::Config(ConfigError::EmptyRoster))
        ));
    }

    #[test]
    fn battle_actions_use_menu_labels() {
        assert_eq!(BattleAction::Attack.as_ref(), "Attack");
        assert_eq!(BattleAction::EquipItem.as_ref(), "Equip Item");
        assert_eq!(BattleAction::Dodge.to_string(), "Dodge");
    }
}
