//! Per-frame decision making for both actor kinds.
//!
//! A controller turns whatever drives an actor (held keys for the player,
//! distance to the player for an enemy) into an [`Intent`]. The intent is
//! then applied to the actor's [`Body`](crate::entity::Body) before physics
//! integration. Controllers never touch state themselves.

pub mod ai;
pub mod player;

use serde::{Deserialize, Serialize};

use crate::entity::Facing;

pub use ai::{decide, AiDecision, AiMode};
pub use player::intent_from_input;

/// What an actor wants to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Intent {
    /// Horizontal velocity to set, overwriting last frame's.
    pub velocity_x: f32,
    /// New facing, or `None` to keep the current one.
    pub facing: Option<Facing>,
    /// Jump if grounded.
    pub jump: bool,
    /// Swing if the cooldown allows.
    pub attack: bool,
    /// Hold the guard up. Only the player can parry.
    pub parry: bool,
}
