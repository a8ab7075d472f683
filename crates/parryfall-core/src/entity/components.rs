//! Component structs shared by the actor kinds.
//!
//! [`Body`] is the physics and combat record embedded in both
//! [`Player`](super::Player) and [`Enemy`](super::Enemy). The remaining
//! structs are the small timer-driven state machines hanging off it.
//!
//! # Timers
//!
//! Every countdown decrements by `dt` without clamping, so values go negative
//! once expired. Readiness is always tested with `<= 0.0`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::ActorTuning;
use crate::controller::Intent;
use crate::geometry::Hitbox;

use super::Facing;

/// How long a body flashes after taking damage. Rendering only.
pub const DAMAGE_FLASH_DURATION: f32 = 0.1;

// =============================================================================
// AttackState
// =============================================================================

/// Swing state machine.
///
/// A swing starts only when the cooldown is ready. It then stays live until
/// its own duration timer runs out, independent of further input. The hitbox
/// is a snapshot taken at the start of the swing and does not follow the body.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AttackState {
    /// Whether the swing can currently land.
    pub active: bool,
    /// Time until another swing may start.
    pub cooldown: f32,
    /// Time until the current swing closes.
    pub timer: f32,
    /// Rectangle swept by the last swing.
    pub hitbox: Hitbox,
}

impl AttackState {
    /// Whether a new swing may start.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.cooldown <= 0.0
    }

    /// Starts a swing in front of `body`, returning `true` if one started.
    ///
    /// While the cooldown is running nothing changes.
    pub fn try_start(&mut self, body: &Hitbox, facing: Facing, tuning: &ActorTuning) -> bool {
        if !self.is_ready() {
            return false;
        }

        let x = match facing {
            Facing::Right => body.right(),
            Facing::Left => body.x - tuning.attack_range,
        };
        self.active = true;
        self.cooldown = tuning.attack_cooldown;
        self.timer = tuning.attack_duration;
        self.hitbox = Hitbox::new(x, body.y, tuning.attack_range, body.height);
        true
    }

    /// The swing rectangle if the swing is live.
    #[must_use]
    pub fn live_hitbox(&self) -> Option<&Hitbox> {
        self.active.then_some(&self.hitbox)
    }

    /// Closes the swing early. The cooldown keeps running.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    /// Advances both timers and closes the swing once its duration is spent.
    pub fn tick(&mut self, dt: f32) {
        self.cooldown -= dt;
        self.timer -= dt;
        if self.active && self.timer <= 0.0 {
            self.active = false;
        }
    }
}

// =============================================================================
// ParryState
// =============================================================================

/// Guard state machine.
///
/// Raising the guard needs a ready cooldown and restarts it once. The guard
/// then stays up for as long as the button is held, and drops the moment it
/// is released.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParryState {
    /// Whether the guard is up.
    pub active: bool,
    /// Time until the guard may be raised again.
    pub cooldown: f32,
}

impl ParryState {
    /// Applies this frame's button state. Returns `true` if the guard was
    /// raised this frame.
    pub fn update(&mut self, held: bool, cooldown: f32) -> bool {
        if !held {
            self.active = false;
            return false;
        }
        if self.active || self.cooldown > 0.0 {
            return false;
        }
        self.active = true;
        self.cooldown = cooldown;
        true
    }

    /// Decrements the cooldown.
    pub fn tick(&mut self, dt: f32) {
        self.cooldown -= dt;
    }
}

// =============================================================================
// PatrolRange
// =============================================================================

/// Horizontal span an idle enemy walks back and forth in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatrolRange {
    /// Left turn-around point.
    pub left: f32,
    /// Right turn-around point.
    pub right: f32,
}

impl PatrolRange {
    /// Span of `range` centred on `spawn_x`.
    #[must_use]
    pub fn around(spawn_x: f32, range: f32) -> Self {
        let half = range / 2.0;
        Self {
            left: spawn_x - half,
            right: spawn_x + half,
        }
    }

    /// Whether `x` lies beyond either turn-around point.
    #[must_use]
    pub fn is_exceeded_by(&self, x: f32) -> bool {
        x < self.left || x > self.right
    }
}

// =============================================================================
// Body
// =============================================================================

/// Physics and combat record shared by every actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner.
    pub position: Vec2,
    /// Width and height.
    pub size: Vec2,
    /// Pixels per second; `y` grows downwards.
    pub velocity: Vec2,
    /// Set by platform collision this frame.
    pub grounded: bool,
    /// Current health; may go negative.
    pub health: f32,
    /// Health at spawn.
    pub max_health: f32,
    /// Direction the body faces and swings in.
    pub facing: Facing,
    /// Swing state.
    pub attack: AttackState,
    /// Remaining damage flash time.
    pub damage_flash: f32,
}

impl Body {
    /// Creates a body at rest at `position`, facing right.
    #[must_use]
    pub fn new(position: Vec2, tuning: &ActorTuning) -> Self {
        Self {
            position,
            size: Vec2::new(tuning.width, tuning.height),
            velocity: Vec2::ZERO,
            grounded: false,
            health: tuning.max_health,
            max_health: tuning.max_health,
            facing: Facing::Right,
            attack: AttackState::default(),
            damage_flash: 0.0,
        }
    }

    /// Bounding box at the current position.
    #[must_use]
    pub fn hitbox(&self) -> Hitbox {
        Hitbox::from_position(self.position, self.size)
    }

    /// Whether health has run out.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0.0
    }

    /// Health as a fraction of the maximum, clamped to `[0, 1]`.
    #[must_use]
    pub fn health_fraction(&self) -> f32 {
        if self.max_health > 0.0 {
            (self.health / self.max_health).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Whether the damage flash is showing.
    #[must_use]
    pub fn is_flashing(&self) -> bool {
        self.damage_flash > 0.0
    }

    /// Subtracts `amount` from health without clamping and starts the flash.
    pub fn take_damage(&mut self, amount: f32) {
        self.health -= amount;
        self.damage_flash = DAMAGE_FLASH_DURATION;
    }

    /// Applies movement and facing from `intent`. Jumps only from the
    /// ground; returns `true` if a jump happened.
    pub fn apply_intent(&mut self, intent: &Intent, jump_power: f32) -> bool {
        self.velocity.x = intent.velocity_x;
        if let Some(facing) = intent.facing {
            self.facing = facing;
        }
        if intent.jump && self.grounded {
            self.velocity.y = -jump_power;
            self.grounded = false;
            return true;
        }
        false
    }

    /// Starts a swing if `intent` asks for one and the cooldown allows it.
    pub fn try_attack(&mut self, intent: &Intent, tuning: &ActorTuning) -> bool {
        if !intent.attack {
            return false;
        }
        let hitbox = self.hitbox();
        self.attack.try_start(&hitbox, self.facing, tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> ActorTuning {
        ActorTuning::default()
    }

    mod attack_tests {
        use super::*;

        #[test]
        fn swing_right_starts_at_right_edge() {
            let mut attack = AttackState::default();
            let body = Hitbox::new(100.0, 200.0, 30.0, 40.0);
            assert!(attack.try_start(&body, Facing::Right, &tuning()));
            assert!(attack.active);
            assert_eq!(attack.cooldown, 0.3);
            assert_eq!(attack.timer, 0.4);
            assert_eq!(attack.hitbox, Hitbox::new(130.0, 200.0, 40.0, 40.0));
        }

        #[test]
        fn swing_left_reaches_back_by_range() {
            let mut attack = AttackState::default();
            let body = Hitbox::new(100.0, 200.0, 30.0, 40.0);
            attack.try_start(&body, Facing::Left, &tuning());
            assert_eq!(attack.hitbox, Hitbox::new(60.0, 200.0, 40.0, 40.0));
        }

        #[test]
        fn start_during_cooldown_is_a_no_op() {
            let mut attack = AttackState {
                cooldown: 0.1,
                ..AttackState::default()
            };
            let before = attack;
            let body = Hitbox::new(0.0, 0.0, 30.0, 40.0);
            assert!(!attack.try_start(&body, Facing::Right, &tuning()));
            assert_eq!(attack, before);
        }

        #[test]
        fn negative_cooldown_is_ready() {
            let attack = AttackState {
                cooldown: -0.05,
                ..AttackState::default()
            };
            assert!(attack.is_ready());
        }

        #[test]
        fn window_closes_on_its_own() {
            let mut attack = AttackState::default();
            attack.try_start(&Hitbox::ZERO, Facing::Right, &tuning());
            attack.tick(0.25);
            assert!(attack.active);
            attack.tick(0.25);
            assert!(!attack.active);
            // timers keep running below zero
            assert!(attack.cooldown < 0.0);
            assert!(attack.timer < 0.0);
        }

        #[test]
        fn cancel_keeps_cooldown() {
            let mut attack = AttackState::default();
            attack.try_start(&Hitbox::ZERO, Facing::Right, &tuning());
            attack.cancel();
            assert!(!attack.active);
            assert!(attack.live_hitbox().is_none());
            assert!(!attack.is_ready());
        }
    }

    mod parry_tests {
        use super::*;

        #[test]
        fn raise_sets_cooldown_once() {
            let mut parry = ParryState::default();
            assert!(parry.update(true, 0.2));
            assert!(parry.active);
            assert_eq!(parry.cooldown, 0.2);

            parry.tick(0.5);
            // still held: stays up without restarting the cooldown
            assert!(!parry.update(true, 0.2));
            assert!(parry.active);
            assert!(parry.cooldown < 0.0);
        }

        #[test]
        fn release_drops_guard_immediately() {
            let mut parry = ParryState::default();
            parry.update(true, 0.2);
            parry.update(false, 0.2);
            assert!(!parry.active);
            // cooldown is still running after release
            assert!(parry.cooldown > 0.0);
        }

        #[test]
        fn cannot_raise_while_cooling_down() {
            let mut parry = ParryState {
                active: false,
                cooldown: 0.1,
            };
            assert!(!parry.update(true, 0.2));
            assert!(!parry.active);
        }
    }

    mod body_tests {
        use super::*;

        #[test]
        fn hitbox_follows_position() {
            let mut body = Body::new(Vec2::new(10.0, 20.0), &tuning());
            assert_eq!(body.hitbox(), Hitbox::new(10.0, 20.0, 30.0, 40.0));
            body.position.x += 5.0;
            assert_eq!(body.hitbox().x, 15.0);
        }

        #[test]
        fn damage_is_unclamped() {
            let mut body = Body::new(Vec2::ZERO, &tuning());
            body.take_damage(150.0);
            assert_eq!(body.health, -50.0);
            assert!(body.is_defeated());
            assert!(body.is_flashing());
            assert_eq!(body.health_fraction(), 0.0);
        }

        #[test]
        fn jump_requires_ground() {
            let mut body = Body::new(Vec2::ZERO, &tuning());
            let intent = Intent {
                jump: true,
                ..Intent::default()
            };
            assert!(!body.apply_intent(&intent, 400.0));
            assert_eq!(body.velocity.y, 0.0);

            body.grounded = true;
            assert!(body.apply_intent(&intent, 400.0));
            assert_eq!(body.velocity.y, -400.0);
            assert!(!body.grounded);
        }

        #[test]
        fn intent_without_facing_keeps_facing() {
            let mut body = Body::new(Vec2::ZERO, &tuning());
            body.facing = Facing::Left;
            body.apply_intent(&Intent::default(), 400.0);
            assert_eq!(body.facing, Facing::Left);
            assert_eq!(body.velocity.x, 0.0);
        }
    }

    #[test]
    fn patrol_range_is_centred_on_spawn() {
        let patrol = PatrolRange::around(400.0, 300.0);
        assert_eq!(patrol.left, 250.0);
        assert_eq!(patrol.right, 550.0);
        assert!(!patrol.is_exceeded_by(550.0));
        assert!(patrol.is_exceeded_by(550.5));
        assert!(patrol.is_exceeded_by(249.0));
    }
}
