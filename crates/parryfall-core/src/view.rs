//! Read-only snapshot for render and UI collaborators.
//!
//! A [`FrameView`] is built on demand from the arena and contains everything
//! a renderer draws and a HUD shows. It is plain data: serializable,
//! comparable, and detached from the simulation once built.
//!
//! Health is display-clamped here and only here. Inside the simulation it
//! may go negative.

use serde::{Deserialize, Serialize};

use crate::arena::Arena;
use crate::entity::{ActorRef, Body, Facing};
use crate::geometry::Hitbox;
use crate::simulation::GameState;

/// Drawable state of one actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    /// Which actor this is.
    pub actor: ActorRef,
    /// Bounding box.
    pub hitbox: Hitbox,
    /// Facing direction.
    pub facing: Facing,
    /// Whether a swing is live.
    pub attacking: bool,
    /// The live swing rectangle, if any.
    pub attack_hitbox: Option<Hitbox>,
    /// Whether the guard is up. Always `false` for enemies.
    pub parrying: bool,
    /// Health bar fill in `[0, 1]`.
    pub health_fraction: f32,
    /// Whether the damage flash is showing.
    pub flashing: bool,
}

impl ActorView {
    fn from_body(actor: ActorRef, body: &Body, parrying: bool) -> Self {
        Self {
            actor,
            hitbox: body.hitbox(),
            facing: body.facing,
            attacking: body.attack.active,
            attack_hitbox: body.attack.live_hitbox().copied(),
            parrying,
            health_fraction: body.health_fraction(),
            flashing: body.is_flashing(),
        }
    }
}

/// Values shown on the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    /// Player health, never below zero.
    pub health: f32,
    /// Player maximum health.
    pub max_health: f32,
    /// `health / max_health` in `[0, 1]`.
    pub health_fraction: f32,
}

/// Everything external collaborators read after a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    /// Steps taken so far.
    pub frame: u64,
    /// Run state, for the end-of-run overlay.
    pub state: GameState,
    /// The player.
    pub player: ActorView,
    /// Active enemies in spawn order.
    pub enemies: Vec<ActorView>,
    /// Platform rectangles in level order.
    pub platforms: Vec<Hitbox>,
    /// Goal zone.
    pub goal: Hitbox,
    /// HUD values.
    pub hud: HudView,
}

impl FrameView {
    /// Captures the current state of `arena`.
    #[must_use]
    pub fn capture(arena: &Arena, state: GameState, frame: u64) -> Self {
        let player = arena.player();
        let body = &player.body;
        Self {
            frame,
            state,
            player: ActorView::from_body(ActorRef::Player, body, player.is_parrying()),
            enemies: arena
                .enemies()
                .iter()
                .map(|enemy| ActorView::from_body(enemy.actor_ref(), &enemy.body, false))
                .collect(),
            platforms: arena.platforms().iter().map(|p| *p.hitbox()).collect(),
            goal: *arena.goal(),
            hud: HudView {
                health: body.health.max(0.0),
                max_health: body.max_health,
                health_fraction: body.health_fraction(),
            },
        }
    }
}
