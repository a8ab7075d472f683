//! Per-body motion integration.
//!
//! [`integrate`] advances one body by one frame once its intent has been
//! applied:
//!
//! 1. Add gravity to the vertical velocity (once per frame, not scaled by `dt`)
//! 2. Move by `velocity * dt` (semi-implicit Euler)
//! 3. Clamp `x` into the world
//! 4. Kill the body if it fell below the death line
//! 5. Clear `grounded`; platform collision sets it again if earned
//! 6. Tick the swing and damage-flash timers
//!
//! The hitbox is derived from the position, so there is no separate sync.

use serde::{Deserialize, Serialize};

use crate::config::WorldTuning;
use crate::entity::Body;

/// What happened to a body during integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Integration {
    /// The body is below the death line and its health was set to zero.
    pub fell_out: bool,
}

/// Advances `body` by `dt` seconds.
pub fn integrate(body: &mut Body, dt: f32, world: &WorldTuning) -> Integration {
    body.velocity.y += world.gravity;
    body.position += body.velocity * dt;

    // Left bound wins if the body is wider than the world.
    body.position.x = body.position.x.min(world.width - body.size.x).max(0.0);

    let fell_out = body.position.y > world.death_y;
    if fell_out {
        body.health = 0.0;
    }

    body.grounded = false;

    body.attack.tick(dt);
    body.damage_flash -= dt;

    Integration { fell_out }
}
