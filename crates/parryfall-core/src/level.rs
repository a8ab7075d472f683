//! Static level geometry: platforms, goal zone and spawn points.
//!
//! A [`LevelConfig`] is the immutable description of one stage. The arena
//! copies it at construction time and nothing in the simulation ever writes
//! back to it.
//!
//! # Example
//!
//! ```
//! use parryfall_core::level::LevelConfig;
//!
//! let level = LevelConfig::castle();
//! assert_eq!(level.platforms.len(), 9);
//! assert_eq!(level.enemy_spawns.len(), 6);
//! assert!(level.validate().is_ok());
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::geometry::Hitbox;

/// Immovable collision geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Platform {
    hitbox: Hitbox,
}

impl Platform {
    /// Creates a platform covering the given rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            hitbox: Hitbox::new(x, y, width, height),
        }
    }

    /// Rectangle occupied by the platform.
    #[must_use]
    pub fn hitbox(&self) -> &Hitbox {
        &self.hitbox
    }
}

impl From<Hitbox> for Platform {
    fn from(hitbox: Hitbox) -> Self {
        Self { hitbox }
    }
}

/// Description of a single stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// Platforms in resolution order. When a body overlaps two platforms in
    /// the same frame, earlier entries are resolved first.
    pub platforms: Vec<Platform>,
    /// Zone the player must touch to win.
    pub goal: Hitbox,
    /// Top-left corner of the player at spawn.
    pub player_spawn: Vec2,
    /// Top-left corner of each enemy at spawn. Order is kept for combat.
    pub enemy_spawns: Vec<Vec2>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self::castle()
    }
}

impl LevelConfig {
    /// The reference castle stage.
    #[must_use]
    pub fn castle() -> Self {
        Self {
            platforms: vec![
                // ground
                Platform::new(0.0, 550.0, 1200.0, 50.0),
                Platform::new(300.0, 450.0, 200.0, 20.0),
                Platform::new(600.0, 400.0, 200.0, 20.0),
                Platform::new(900.0, 350.0, 200.0, 20.0),
                Platform::new(150.0, 300.0, 150.0, 20.0),
                Platform::new(500.0, 250.0, 200.0, 20.0),
                Platform::new(850.0, 200.0, 150.0, 20.0),
                Platform::new(1100.0, 150.0, 200.0, 20.0),
                // goal ledge
                Platform::new(1100.0, 550.0, 100.0, 50.0),
            ],
            goal: Hitbox::new(1140.0, 500.0, 40.0, 40.0),
            player_spawn: Vec2::new(100.0, 400.0),
            enemy_spawns: vec![
                Vec2::new(400.0, 420.0),
                Vec2::new(700.0, 370.0),
                Vec2::new(1000.0, 320.0),
                Vec2::new(300.0, 270.0),
                Vec2::new(600.0, 220.0),
                Vec2::new(900.0, 170.0),
            ],
        }
    }

    /// An empty stage with only a goal and a player spawn. Handy for tests
    /// that place everything by hand.
    #[must_use]
    pub fn empty(player_spawn: Vec2, goal: Hitbox) -> Self {
        Self {
            platforms: Vec::new(),
            goal,
            player_spawn,
            enemy_spawns: Vec::new(),
        }
    }

    /// Checks that every rectangle is well formed and every spawn is finite.
    ///
    /// # Errors
    ///
    /// Returns the first offending platform, goal or spawn point.
    pub fn validate(&self) -> ConfigResult<()> {
        for (index, platform) in self.platforms.iter().enumerate() {
            check_rect(&format!("platform {index}"), platform.hitbox())?;
        }
        check_rect("goal", &self.goal)?;
        check_spawn("player", self.player_spawn)?;
        for (index, spawn) in self.enemy_spawns.iter().enumerate() {
            check_spawn(&format!("enemy {index}"), *spawn)?;
        }
        Ok(())
    }
}

fn check_rect(what: &str, hitbox: &Hitbox) -> ConfigResult<()> {
    if hitbox.is_well_formed() {
        Ok(())
    } else {
        Err(ConfigError::InvalidRect {
            what: what.to_owned(),
            x: hitbox.x,
            y: hitbox.y,
            width: hitbox.width,
            height: hitbox.height,
        })
    }
}

fn check_spawn(what: &str, spawn: Vec2) -> ConfigResult<()> {
    if spawn.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpawn {
            what: what.to_owned(),
            x: spawn.x,
            y: spawn.y,
        })
    }
}
