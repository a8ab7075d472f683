//! Arena module: the live world of one run.
//!
//! The Arena owns everything the step mutates or reads:
//! - The platforms and the goal zone, copied from the level and never changed
//! - The player
//! - The enemy roster, kept in spawn order
//!
//! # Ordering
//!
//! Enemies are stored in a `Vec` and only ever appended or pruned in place,
//! so iteration order is spawn order for the whole run. Combat relies on this:
//! the player's swing lands on the first overlapping enemy in that order.
//!
//! # Example
//!
//! ```
//! use parryfall_core::arena::Arena;
//! use parryfall_core::config::Tuning;
//! use parryfall_core::level::LevelConfig;
//!
//! let arena = Arena::from_level(&LevelConfig::castle(), &Tuning::default());
//!
//! assert_eq!(arena.platforms().len(), 9);
//! assert_eq!(arena.enemy_count(), 6);
//! assert_eq!(arena.enemies()[0].id().as_u64(), 0);
//! ```

use glam::Vec2;

use crate::config::Tuning;
use crate::entity::{Enemy, EntityId, Player};
use crate::geometry::Hitbox;
use crate::level::{LevelConfig, Platform};

/// The live world.
#[derive(Debug, Clone, PartialEq)]
pub struct Arena {
    platforms: Vec<Platform>,
    goal: Hitbox,
    player: Player,
    enemies: Vec<Enemy>,
    next_id: u64,
}

impl Arena {
    /// Builds the world described by `level`.
    ///
    /// Enemies get ids `0..n` in the order their spawns are listed.
    #[must_use]
    pub fn from_level(level: &LevelConfig, tuning: &Tuning) -> Self {
        let mut arena = Self {
            platforms: level.platforms.clone(),
            goal: level.goal,
            player: Player::new(level.player_spawn, &tuning.player),
            enemies: Vec::with_capacity(level.enemy_spawns.len()),
            next_id: 0,
        };
        for spawn in &level.enemy_spawns {
            arena.spawn_enemy(*spawn, tuning);
        }
        arena
    }

    /// Appends a new enemy at `position` and returns its id.
    pub fn spawn_enemy(&mut self, position: Vec2, tuning: &Tuning) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        self.enemies.push(Enemy::new(id, position, &tuning.enemy));
        id
    }

    /// Platforms in resolution order.
    #[must_use]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// The goal zone.
    #[must_use]
    pub fn goal(&self) -> &Hitbox {
        &self.goal
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Active enemies in spawn order.
    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Mutable access to the active enemies, in spawn order.
    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    /// Looks up an active enemy.
    #[must_use]
    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id() == id)
    }

    /// Looks up an active enemy mutably.
    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id() == id)
    }

    /// Number of active enemies.
    #[must_use]
    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    /// Removes every enemy whose health is at or below zero, returning their
    /// ids in spawn order.
    pub fn prune_defeated(&mut self) -> Vec<EntityId> {
        let mut removed = Vec::new();
        self.enemies.retain(|enemy| {
            if enemy.body.is_defeated() {
                removed.push(enemy.id());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Splits the arena into the pieces a resolver needs at once.
    pub(crate) fn split_mut(&mut self) -> (&[Platform], &mut Player, &mut [Enemy]) {
        (&self.platforms, &mut self.player, &mut self.enemies)
    }
}
