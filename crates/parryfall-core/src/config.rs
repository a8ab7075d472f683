//! Tunable constants for physics, actors and damage.
//!
//! All numbers the simulation reads live in [`Tuning`]. Defaults reproduce the
//! reference castle level. Every struct except [`ActorTuning`] is
//! `#[serde(default)]`, so a scenario
//! file only needs to name the values it overrides.
//!
//! # Units
//!
//! Distances are pixels, speeds are pixels per second and durations are
//! seconds. The one exception is [`WorldTuning::gravity`], which is added to
//! the vertical velocity once per frame regardless of the frame's `dt`.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, ensure_unit, ConfigResult};

/// World bounds and global physics constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    /// Width of the playable area; bodies are clamped into `[0, width - body_width]`.
    pub width: f32,
    /// Height of the visible area (informational for the renderer).
    pub height: f32,
    /// Any body whose `y` exceeds this dies instantly.
    pub death_y: f32,
    /// Added to `velocity.y` every frame.
    pub gravity: f32,
    /// Reserved; not read by the simulation.
    pub friction: f32,
    /// Gap left between a body and the platform it was pushed out of.
    pub collision_epsilon: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            death_y: 700.0,
            gravity: 0.6,
            friction: 0.8,
            collision_epsilon: 0.001,
        }
    }
}

impl WorldTuning {
    fn validate(&self) -> ConfigResult<()> {
        ensure_positive("world.width", self.width)?;
        ensure_positive("world.height", self.height)?;
        ensure_finite("world.death_y", self.death_y)?;
        ensure_non_negative("world.gravity", self.gravity)?;
        ensure_non_negative("world.friction", self.friction)?;
        ensure_non_negative("world.collision_epsilon", self.collision_epsilon)
    }
}

/// Values shared by every actor kind.
///
/// Unlike the other tuning blocks this one has no per-field defaults: an
/// `actor` block given in a scenario file must be complete, otherwise the
/// player defaults would silently leak into enemy values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorTuning {
    /// Body width.
    pub width: f32,
    /// Body height.
    pub height: f32,
    /// Full horizontal speed.
    pub speed: f32,
    /// Upward velocity applied on jump.
    pub jump_power: f32,
    /// Health at spawn.
    pub max_health: f32,
    /// Delay before another attack may start.
    pub attack_cooldown: f32,
    /// How long a swing's hitbox stays live.
    pub attack_duration: f32,
    /// Horizontal reach of a swing.
    pub attack_range: f32,
}

impl Default for ActorTuning {
    fn default() -> Self {
        Self {
            width: 30.0,
            height: 40.0,
            speed: 250.0,
            jump_power: 400.0,
            max_health: 100.0,
            attack_cooldown: 0.3,
            attack_duration: 0.4,
            attack_range: 40.0,
        }
    }
}

impl ActorTuning {
    fn validate(&self, prefix: &str) -> ConfigResult<()> {
        let field = |name: &str| format!("{prefix}.{name}");
        ensure_positive(&field("width"), self.width)?;
        ensure_positive(&field("height"), self.height)?;
        ensure_positive(&field("speed"), self.speed)?;
        ensure_positive(&field("jump_power"), self.jump_power)?;
        ensure_positive(&field("max_health"), self.max_health)?;
        ensure_positive(&field("attack_cooldown"), self.attack_cooldown)?;
        ensure_positive(&field("attack_duration"), self.attack_duration)?;
        ensure_non_negative(&field("attack_range"), self.attack_range)
    }
}

/// Player-specific tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Shared actor values.
    pub actor: ActorTuning,
    /// Delay between parry activations.
    pub parry_cooldown: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            actor: ActorTuning::default(),
            parry_cooldown: 0.2,
        }
    }
}

/// Enemy-specific tuning, including the AI thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Shared actor values.
    pub actor: ActorTuning,
    /// Horizontal distance under which a chasing enemy swings.
    pub attack_distance: f32,
    /// Horizontal distance under which the enemy chases instead of patrolling.
    pub chase_distance: f32,
    /// Width of the patrol span centred on the spawn point.
    pub patrol_range: f32,
    /// Fraction of full speed used while patrolling.
    pub patrol_speed_factor: f32,
    /// How far above the enemy the player must be before it jumps.
    pub jump_trigger_height: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            actor: ActorTuning {
                width: 28.0,
                height: 36.0,
                speed: 100.0,
                jump_power: 300.0,
                max_health: 30.0,
                attack_cooldown: 0.8,
                attack_duration: 0.3,
                attack_range: 40.0,
            },
            attack_distance: 60.0,
            chase_distance: 400.0,
            patrol_range: 300.0,
            patrol_speed_factor: 0.7,
            jump_trigger_height: 50.0,
        }
    }
}

/// Damage amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageTuning {
    /// Player swing landing on an enemy.
    pub player_attack: f32,
    /// Enemy swing landing on an unguarded player.
    pub enemy_attack: f32,
    /// Dealt back to an enemy whose swing meets a raised parry.
    pub parry_counter: f32,
}

impl Default for DamageTuning {
    fn default() -> Self {
        Self {
            player_attack: 15.0,
            enemy_attack: 10.0,
            parry_counter: 30.0,
        }
    }
}

/// Every tunable constant of the simulation.
///
/// # Example
///
/// ```
/// use parryfall_core::config::Tuning;
///
/// let mut tuning = Tuning::default();
/// assert!(tuning.validate().is_ok());
///
/// tuning.player.actor.attack_cooldown = 0.0;
/// assert!(tuning.validate().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// World bounds and gravity.
    pub world: WorldTuning,
    /// Player values.
    pub player: PlayerTuning,
    /// Enemy values and AI thresholds.
    pub enemy: EnemyTuning,
    /// Damage amounts.
    pub damage: DamageTuning,
}

impl Tuning {
    /// Checks every value, returning the first violation found.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`](crate::error::ConfigError) naming the first
    /// field that is out of range.
    pub fn validate(&self) -> ConfigResult<()> {
        self.world.validate()?;

        self.player.actor.validate("player.actor")?;
        ensure_positive("player.parry_cooldown", self.player.parry_cooldown)?;

        self.enemy.actor.validate("enemy.actor")?;
        ensure_non_negative("enemy.attack_distance", self.enemy.attack_distance)?;
        ensure_non_negative("enemy.chase_distance", self.enemy.chase_distance)?;
        ensure_non_negative("enemy.patrol_range", self.enemy.patrol_range)?;
        ensure_unit("enemy.patrol_speed_factor", self.enemy.patrol_speed_factor)?;
        ensure_non_negative("enemy.jump_trigger_height", self.enemy.jump_trigger_height)?;

        ensure_non_negative("damage.player_attack", self.damage.player_attack)?;
        ensure_non_negative("damage.enemy_attack", self.damage.enemy_attack)?;
        ensure_non_negative("damage.parry_counter", self.damage.parry_counter)
    }
}
