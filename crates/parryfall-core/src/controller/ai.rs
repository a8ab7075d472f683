//! Enemy behaviour: patrol until the player comes close, then chase.
//!
//! The choice is re-made from raw distance every frame. There is no
//! hysteresis, so an enemy standing right at the chase distance can flip
//! between modes from one frame to the next.
//!
//! # Thresholds
//!
//! Both thresholds are exclusive: an enemy exactly `chase_distance` away
//! patrols, and one exactly `attack_distance` away does not swing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::EnemyTuning;
use crate::entity::{Enemy, Facing};

use super::Intent;

/// Which behaviour was picked this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiMode {
    /// Walking the patrol span at reduced speed.
    Patrol,
    /// Running at the player.
    Chase,
}

/// Result of one AI evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiDecision {
    /// Behaviour picked.
    pub mode: AiMode,
    /// What to apply to the body.
    pub intent: Intent,
}

/// Decides what `enemy` does this frame given where the player stands.
///
/// `player_position` is the player's top-left corner; distances compare
/// top-left corners the same way for both actors.
#[must_use]
pub fn decide(enemy: &Enemy, player_position: Vec2, tuning: &EnemyTuning) -> AiDecision {
    let body = &enemy.body;
    let distance = (player_position.x - body.position.x).abs();

    if distance < enemy.chase_distance {
        let toward = Facing::from_sign(player_position.x - body.position.x);
        let intent = Intent {
            velocity_x: toward.sign() * tuning.actor.speed,
            facing: Some(toward),
            jump: player_position.y < body.position.y - tuning.jump_trigger_height,
            attack: distance < enemy.attack_distance,
            parry: false,
        };
        return AiDecision {
            mode: AiMode::Chase,
            intent,
        };
    }

    // Speed uses the current facing; a turn takes effect next frame.
    let velocity_x = body.facing.sign() * tuning.actor.speed * tuning.patrol_speed_factor;
    let facing = enemy
        .patrol
        .is_exceeded_by(body.position.x)
        .then(|| body.facing.flipped());

    AiDecision {
        mode: AiMode::Patrol,
        intent: Intent {
            velocity_x,
            facing,
            ..Intent::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityId;

    fn enemy_at(x: f32, y: f32) -> Enemy {
        Enemy::new(EntityId::new(0), Vec2::new(x, y), &EnemyTuning::default())
    }

    mod mode_tests {
        use super::*;

        #[test]
        fn exactly_chase_distance_patrols() {
            let enemy = enemy_at(500.0, 300.0);
            let decision = decide(&enemy, Vec2::new(900.0, 300.0), &EnemyTuning::default());
            assert_eq!(decision.mode, AiMode::Patrol);
        }

        #[test]
        fn just_inside_chase_distance_chases() {
            let enemy = enemy_at(500.0, 300.0);
            let decision = decide(&enemy, Vec2::new(899.9, 300.0), &EnemyTuning::default());
            assert_eq!(decision.mode, AiMode::Chase);
            assert_eq!(decision.intent.velocity_x, 100.0);
            assert_eq!(decision.intent.facing, Some(Facing::Right));
            assert!(!decision.intent.attack);
        }

        #[test]
        fn chases_to_the_left() {
            let enemy = enemy_at(500.0, 300.0);
            let decision = decide(&enemy, Vec2::new(300.0, 300.0), &EnemyTuning::default());
            assert_eq!(decision.intent.velocity_x, -100.0);
            assert_eq!(decision.intent.facing, Some(Facing::Left));
        }
    }

    mod chase_tests {
        use super::*;

        #[test]
        fn swings_when_close() {
            let enemy = enemy_at(500.0, 300.0);
            let decision = decide(&enemy, Vec2::new(540.0, 300.0), &EnemyTuning::default());
            assert!(decision.intent.attack);
        }

        #[test]
        fn attack_distance_is_exclusive() {
            let enemy = enemy_at(500.0, 300.0);
            let decision = decide(&enemy, Vec2::new(560.0, 300.0), &EnemyTuning::default());
            assert!(!decision.intent.attack);
        }

        #[test]
        fn jumps_only_when_player_is_well_above() {
            let enemy = enemy_at(500.0, 300.0);
            let tuning = EnemyTuning::default();
            assert!(decide(&enemy, Vec2::new(600.0, 249.0), &tuning).intent.jump);
            assert!(!decide(&enemy, Vec2::new(600.0, 250.0), &tuning).intent.jump);
        }
    }

    mod patrol_tests {
        use super::*;

        #[test]
        fn walks_at_reduced_speed() {
            let enemy = enemy_at(100.0, 300.0);
            let decision = decide(&enemy, Vec2::new(1000.0, 300.0), &EnemyTuning::default());
            assert!((decision.intent.velocity_x - 70.0).abs() < 1e-4);
            assert_eq!(decision.intent.facing, None);
            assert!(!decision.intent.jump && !decision.intent.attack);
        }

        #[test]
        fn turns_around_past_the_span() {
            let mut enemy = enemy_at(100.0, 300.0);
            enemy.body.position.x = enemy.patrol.right + 1.0;
            let decision = decide(&enemy, Vec2::new(1100.0, 300.0), &EnemyTuning::default());
            // still moving right this frame
            assert!(decision.intent.velocity_x > 0.0);
            assert_eq!(decision.intent.facing, Some(Facing::Left));
        }
    }
}
