//! Body-versus-platform collision.
//!
//! Each overlapping (body, platform) pair is separated along the axis of
//! shallowest penetration. The chosen side must also agree with the body's
//! motion: a body is only pushed onto a platform's top while falling, out of
//! its bottom while rising, and out of a side while moving into it. If the
//! shallowest side fails its gate nothing is corrected for that pair.
//!
//! # Order
//!
//! Platforms are the outer loop, in level order. For each platform the player
//! is resolved first, then every enemy in spawn order. Changing this order
//! changes which platform wins when a body straddles two of them.
//!
//! # Known Limitation
//!
//! There is no sweep. A body fast enough to cross a platform within one frame
//! passes through it.

use serde::{Deserialize, Serialize};

use crate::arena::Arena;
use crate::config::Tuning;
use crate::entity::Body;
use crate::event::EventLog;
use crate::level::Platform;

use super::Resolver;

/// Side of a platform a body was pushed out through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Contact {
    /// Landed on the top face.
    Top,
    /// Bumped the underside.
    Bottom,
    /// Pushed back out of the left face.
    Left,
    /// Pushed back out of the right face.
    Right,
}

/// Separates `body` from `platform` if they overlap.
///
/// On success the offending coordinate is snapped `epsilon` clear of the face,
/// the matching velocity component is zeroed and, for a landing, the body
/// becomes grounded.
#[allow(clippy::float_cmp)]
pub fn resolve_platform_contact(body: &mut Body, platform: &Platform, epsilon: f32) -> Option<Contact> {
    let hitbox = body.hitbox();
    let face = platform.hitbox();
    if !hitbox.intersects(face) {
        return None;
    }

    let overlap_left = hitbox.right() - face.x;
    let overlap_right = face.right() - hitbox.x;
    let overlap_top = hitbox.bottom() - face.y;
    let overlap_bottom = face.bottom() - hitbox.y;
    let min = overlap_left
        .min(overlap_right)
        .min(overlap_top)
        .min(overlap_bottom);

    if min == overlap_top && body.velocity.y > 0.0 {
        body.position.y = face.y - body.size.y - epsilon;
        body.velocity.y = 0.0;
        body.grounded = true;
        Some(Contact::Top)
    } else if min == overlap_bottom && body.velocity.y < 0.0 {
        body.position.y = face.bottom() + epsilon;
        body.velocity.y = 0.0;
        Some(Contact::Bottom)
    } else if min == overlap_left && body.velocity.x > 0.0 {
        body.position.x = face.x - body.size.x - epsilon;
        body.velocity.x = 0.0;
        Some(Contact::Left)
    } else if min == overlap_right && body.velocity.x < 0.0 {
        body.position.x = face.right() + epsilon;
        body.velocity.x = 0.0;
        Some(Contact::Right)
    } else {
        None
    }
}

/// Resolves every body against every platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionResolver;

impl CollisionResolver {
    /// Creates a new collision resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for CollisionResolver {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn resolve(&self, arena: &mut Arena, tuning: &Tuning, _events: &mut EventLog) {
        let epsilon = tuning.world.collision_epsilon;
        let (platforms, player, enemies) = arena.split_mut();
        for platform in platforms {
            resolve_platform_contact(&mut player.body, platform, epsilon);
            for enemy in enemies.iter_mut() {
                resolve_platform_contact(&mut enemy.body, platform, epsilon);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActorTuning;
    use crate::level::LevelConfig;
    use glam::Vec2;

    const EPS: f32 = 0.001;

    fn body(x: f32, y: f32, velocity: Vec2) -> Body {
        let mut body = Body::new(Vec2::new(x, y), &ActorTuning::default());
        body.velocity = velocity;
        body
    }

    fn ground() -> Platform {
        Platform::new(0.0, 550.0, 1200.0, 50.0)
    }

    mod contact_tests {
        use super::*;

        #[test]
        fn landing_on_top_grounds_the_body() {
            // 30x40 body sinking 2px into the ground.
            let mut b = body(100.0, 512.0, Vec2::new(0.0, 10.0));
            let contact = resolve_platform_contact(&mut b, &ground(), EPS);
            assert_eq!(contact, Some(Contact::Top));
            assert!(b.grounded);
            assert_eq!(b.velocity.y, 0.0);
            assert_eq!(b.position.y, 550.0 - 40.0 - EPS);
        }

        #[test]
        fn resting_exactly_on_top_is_not_an_overlap() {
            let mut b = body(100.0, 510.0, Vec2::new(0.0, 0.6));
            assert_eq!(resolve_platform_contact(&mut b, &ground(), EPS), None);
            assert!(!b.grounded);
        }

        #[test]
        fn head_bump_from_below() {
            let ledge = Platform::new(300.0, 450.0, 200.0, 20.0);
            let mut b = body(400.0, 468.0, Vec2::new(0.0, -300.0));
            assert_eq!(resolve_platform_contact(&mut b, &ledge, EPS), Some(Contact::Bottom));
            assert_eq!(b.position.y, 470.0 + EPS);
            assert_eq!(b.velocity.y, 0.0);
            assert!(!b.grounded);
        }

        #[test]
        fn walking_into_left_face() {
            let wall = Platform::new(500.0, 0.0, 100.0, 600.0);
            let mut b = body(472.0, 300.0, Vec2::new(250.0, 0.0));
            assert_eq!(resolve_platform_contact(&mut b, &wall, EPS), Some(Contact::Left));
            assert_eq!(b.position.x, 500.0 - 30.0 - EPS);
            assert_eq!(b.velocity.x, 0.0);
        }

        #[test]
        fn walking_into_right_face() {
            let wall = Platform::new(500.0, 0.0, 100.0, 600.0);
            let mut b = body(598.0, 300.0, Vec2::new(-250.0, 0.0));
            assert_eq!(resolve_platform_contact(&mut b, &wall, EPS), Some(Contact::Right));
            assert_eq!(b.position.x, 600.0 + EPS);
        }

        #[test]
        fn gate_blocks_wrong_direction() {
            // Shallowest side is the top but the body is rising: no correction.
            let mut b = body(100.0, 512.0, Vec2::new(0.0, -5.0));
            let before = b.clone();
            assert_eq!(resolve_platform_contact(&mut b, &ground(), EPS), None);
            assert_eq!(b, before);
        }

        #[test]
        fn no_overlap_no_change() {
            let mut b = body(100.0, 100.0, Vec2::new(0.0, 10.0));
            let before = b.clone();
            assert_eq!(resolve_platform_contact(&mut b, &ground(), EPS), None);
            assert_eq!(b, before);
        }
    }

    mod resolver_tests {
        use super::*;

        #[test]
        fn grounds_player_and_enemies() {
            let mut level = LevelConfig::empty(Vec2::new(100.0, 512.0), crate::geometry::Hitbox::ZERO);
            level.platforms.push(ground());
            level.enemy_spawns.push(Vec2::new(400.0, 515.0));
            let tuning = Tuning::default();
            let mut arena = Arena::from_level(&level, &tuning);
            arena.player_mut().body.velocity.y = 5.0;
            arena.enemies_mut()[0].body.velocity.y = 5.0;

            CollisionResolver::new().resolve(&mut arena, &tuning, &mut EventLog::new());

            assert!(arena.player().body.grounded);
            assert!(arena.enemies()[0].body.grounded);
            assert_eq!(arena.enemies()[0].body.position.y, 550.0 - 36.0 - EPS);
        }

        /// Player sinking 2px into the ground and 7px into a thin slab laid
        /// over it, resolved against `platforms` in the given order.
        fn resolve_across(platforms: &[Platform]) -> Body {
            let mut level = LevelConfig::empty(Vec2::new(100.0, 512.0), crate::geometry::Hitbox::ZERO);
            level.platforms.extend_from_slice(platforms);
            let tuning = Tuning::default();
            let mut arena = Arena::from_level(&level, &tuning);
            arena.player_mut().body.velocity.y = 5.0;

            CollisionResolver::new().resolve(&mut arena, &tuning, &mut EventLog::new());
            arena.player().body.clone()
        }

        #[test]
        fn first_listed_platform_wins() {
            let slab = Platform::new(0.0, 545.0, 1200.0, 10.0);

            // Landing on the ground zeroes the fall, so the slab's gate fails.
            let ground_first = resolve_across(&[ground(), slab]);
            assert!(ground_first.grounded);
            assert_eq!(ground_first.position.y, 550.0 - 40.0 - EPS);

            let slab_first = resolve_across(&[slab, ground()]);
            assert!(slab_first.grounded);
            assert_eq!(slab_first.position.y, 545.0 - 40.0 - EPS);
            assert_ne!(ground_first.position, slab_first.position);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resolved_contact_leaves_no_overlap(
                x in -40.0f32..1240.0,
                y in 480.0f32..620.0,
                vx in -300.0f32..300.0,
                vy in -300.0f32..300.0,
            ) {
                let mut b = body(x, y, Vec2::new(vx, vy));
                let platform = ground();
                if resolve_platform_contact(&mut b, &platform, EPS).is_some() {
                    prop_assert!(!b.hitbox().intersects(platform.hitbox()));
                }
            }
        }
    }
}
