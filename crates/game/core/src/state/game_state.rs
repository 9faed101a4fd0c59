use crate::combat;
use crate::config::GameConfig;

use super::{Combatant, InventoryItem, Scene};

/// Result of checking a battle after one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Both sides still stand; the battle continues.
    Ongoing,
    /// The player fell. The scene moves to the main menu.
    PlayerSlain,
    /// The current enemy fell and the next one in the roster steps up.
    EnemySlain { defeated: String, next: String },
    /// The roster is exhausted. The scene moves to the main menu.
    ///
    /// `defeated` is `None` only if no enemy was left to fight.
    Victory { defeated: Option<String> },
}

/// Canonical snapshot of a play session.
///
/// The current enemy is always `enemies[current_enemy_index]`; there is no
/// separate copy to keep in sync. `current_enemy_index == enemies.len()`
/// means the whole roster has been defeated.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub scene: Scene,
    pub game_over: bool,
    pub player: Combatant,
    pub enemies: Vec<Combatant>,
    pub current_enemy_index: usize,
    /// Item table populated at start.
    pub items: Vec<InventoryItem>,
    /// Item the player currently wields, if any.
    pub equipped: Option<InventoryItem>,
}

impl GameState {
    /// Creates a state ready for the first scene.
    pub fn new(config: &GameConfig) -> Self {
        let mut state = Self::default();
        state.start(config);
        state
    }

    /// Resets every session field and rebuilds the roster and item table
    /// from `config`.
    ///
    /// Used both at launch and when the player chooses to play again, so
    /// enemies always come back at full health.
    pub fn start(&mut self, config: &GameConfig) {
        self.game_over = false;
        self.scene = Scene::NamingInput;
        self.current_enemy_index = 0;
        self.player = Combatant::default();
        self.enemies = config.enemies.iter().map(Combatant::from_spec).collect();
        self.items = config.items.iter().map(InventoryItem::from_spec).collect();
        self.equipped = None;
    }

    pub fn current_enemy(&self) -> Option<&Combatant> {
        self.enemies.get(self.current_enemy_index)
    }

    pub fn all_enemies_defeated(&self) -> bool {
        self.current_enemy_index >= self.enemies.len()
    }

    /// The player as it fights: base stats plus the equipped item's boost.
    pub fn effective_player(&self) -> Combatant {
        match &self.equipped {
            Some(item) => self.player.with_boost(item.stat_boost),
            None => self.player.clone(),
        }
    }

    /// Equips the item at `index` in the item table.
    ///
    /// Returns the newly equipped item, or `None` if the index is out of range.
    pub fn equip(&mut self, index: usize) -> Option<&InventoryItem> {
        let item = self.items.get(index)?.clone();
        self.equipped = Some(item);
        self.equipped.as_ref()
    }

    /// The player attacks the current enemy.
    ///
    /// Returns the damage dealt, or `None` when no enemy is left.
    pub fn player_attack(&mut self) -> Option<f32> {
        let attacker = self.effective_player();
        let enemy = self.enemies.get_mut(self.current_enemy_index)?;
        Some(combat::attack(&attacker, enemy))
    }

    /// The current enemy attacks the player.
    ///
    /// Returns the damage dealt, or `None` when no enemy is left.
    pub fn enemy_attack(&mut self) -> Option<f32> {
        let enemy = self.enemies.get(self.current_enemy_index)?;
        Some(combat::attack(enemy, &mut self.player))
    }

    /// Decides whether the battle goes on after a turn.
    ///
    /// A fallen player ends the run regardless of the enemy's health. A fallen
    /// enemy advances the roster; once the roster is exhausted the scene moves
    /// to the main menu.
    pub fn check_battle_results(&mut self) -> BattleOutcome {
        if self.player.is_defeated() {
            self.scene = Scene::MainMenu;
            return BattleOutcome::PlayerSlain;
        }

        let Some(enemy) = self.current_enemy() else {
            self.scene = Scene::MainMenu;
            return BattleOutcome::Victory { defeated: None };
        };

        if !enemy.is_defeated() {
            return BattleOutcome::Ongoing;
        }

        let defeated = enemy.name.clone();
        self.current_enemy_index += 1;

        match self.current_enemy() {
            Some(next) => BattleOutcome::EnemySlain {
                defeated,
                next: next.name.clone(),
            },
            None => {
                self.scene = Scene::MainMenu;
                BattleOutcome::Victory {
                    defeated: Some(defeated),
                }
            }
        }
    }
}
