//! Actors of the simulation.
//!
//! There are two actor kinds, [`Player`] and [`Enemy`]. Both embed the same
//! [`Body`] record; kind-specific state sits next to it rather than behind a
//! trait, because the two are updated by different code paths.
//!
//! - [`EntityId`]: Stable identifier for enemies
//! - [`Facing`]: Horizontal direction
//! - [`ActorRef`]: Names either actor in events and views
//!
//! # Example
//!
//! ```
//! use glam::Vec2;
//! use parryfall_core::config::EnemyTuning;
//! use parryfall_core::entity::{Enemy, EntityId};
//!
//! let enemy = Enemy::new(EntityId::new(3), Vec2::new(400.0, 420.0), &EnemyTuning::default());
//!
//! assert_eq!(enemy.id().as_u64(), 3);
//! assert_eq!(enemy.patrol.left, 250.0);
//! ```

pub mod components;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{EnemyTuning, PlayerTuning};

pub use components::{AttackState, Body, ParryState, PatrolRange, DAMAGE_FLASH_DURATION};

/// Unique identifier for an enemy.
///
/// Assigned by the arena in spawn order and never reused within a run, so
/// ordering by id is the same as ordering by spawn.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    /// Creates a new `EntityId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// Horizontal direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    /// Towards negative x.
    Left,
    /// Towards positive x.
    #[default]
    Right,
}

impl Facing {
    /// `-1.0` for left, `1.0` for right.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Right for positive values, left otherwise.
    #[must_use]
    pub fn from_sign(value: f32) -> Self {
        if value > 0.0 {
            Self::Right
        } else {
            Self::Left
        }
    }

    /// The other direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Names one actor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRef {
    /// The player.
    Player,
    /// The enemy with this id.
    Enemy(EntityId),
}

impl fmt::Display for ActorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Enemy(id) => write!(f, "enemy {id}"),
        }
    }
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Physics and combat state.
    pub body: Body,
    /// Guard state.
    pub parry: ParryState,
}

impl Player {
    /// Creates the player at `spawn`.
    #[must_use]
    pub fn new(spawn: Vec2, tuning: &PlayerTuning) -> Self {
        Self {
            body: Body::new(spawn, &tuning.actor),
            parry: ParryState::default(),
        }
    }

    /// Whether the guard is up.
    #[must_use]
    pub fn is_parrying(&self) -> bool {
        self.parry.active
    }
}

/// An AI-driven melee enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    id: EntityId,
    /// Physics and combat state.
    pub body: Body,
    /// Turn-around points while patrolling, fixed at spawn.
    pub patrol: PatrolRange,
    /// Distance under which the enemy chases.
    pub chase_distance: f32,
    /// Distance under which a chasing enemy swings.
    pub attack_distance: f32,
}

impl Enemy {
    /// Creates an enemy at `spawn` with its patrol span centred there.
    #[must_use]
    pub fn new(id: EntityId, spawn: Vec2, tuning: &EnemyTuning) -> Self {
        Self {
            id,
            body: Body::new(spawn, &tuning.actor),
            patrol: PatrolRange::around(spawn.x, tuning.patrol_range),
            chase_distance: tuning.chase_distance,
            attack_distance: tuning.attack_distance,
        }
    }

    /// Returns this enemy's identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the [`ActorRef`] naming this enemy.
    #[must_use]
    pub const fn actor_ref(&self) -> ActorRef {
        ActorRef::Enemy(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod entity_id_tests {
        use super::*;

        #[test]
        fn ordering_and_formatting() {
            let a = EntityId::new(1);
            let b = EntityId::from(2);
            assert!(a < b);
            assert_eq!(format!("{a:?}"), "EntityId(1)");
            assert_eq!(format!("{b}"), "2");
        }
    }

    mod facing_tests {
        use super::*;

        #[test]
        fn sign_round_trip() {
            assert_eq!(Facing::from_sign(Facing::Left.sign()), Facing::Left);
            assert_eq!(Facing::from_sign(Facing::Right.sign()), Facing::Right);
            assert_eq!(Facing::Right.flipped(), Facing::Left);
        }

        #[test]
        fn zero_maps_to_left() {
            assert_eq!(Facing::from_sign(0.0), Facing::Left);
        }
    }

    mod actor_tests {
        use super::*;

        #[test]
        fn player_spawns_with_full_health() {
            let player = Player::new(Vec2::new(100.0, 400.0), &PlayerTuning::default());
            assert_eq!(player.body.health, 100.0);
            assert_eq!(player.body.size, Vec2::new(30.0, 40.0));
            assert!(!player.is_parrying());
        }

        #[test]
        fn enemy_uses_enemy_tuning() {
            let enemy = Enemy::new(EntityId::new(0), Vec2::new(700.0, 370.0), &EnemyTuning::default());
            assert_eq!(enemy.body.health, 30.0);
            assert_eq!(enemy.body.size, Vec2::new(28.0, 36.0));
            assert_eq!(enemy.patrol, PatrolRange::around(700.0, 300.0));
            assert_eq!(enemy.chase_distance, 400.0);
            assert_eq!(enemy.actor_ref(), ActorRef::Enemy(EntityId::new(0)));
        }

        #[test]
        fn actor_ref_display() {
            assert_eq!(ActorRef::Player.to_string(), "player");
            assert_eq!(ActorRef::Enemy(EntityId::new(4)).to_string(), "enemy 4");
        }
    }
}
