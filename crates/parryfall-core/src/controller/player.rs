//! Keyboard-driven player control.

use crate::config::PlayerTuning;
use crate::entity::Facing;
use crate::input::{Action, InputState};

use super::Intent;

/// Maps held actions to an intent.
///
/// Left is applied before right with overwrite semantics, so holding both
/// moves right. With neither held the player stops and keeps its facing.
#[must_use]
pub fn intent_from_input(input: InputState, tuning: &PlayerTuning) -> Intent {
    let mut intent = Intent {
        jump: input.held(Action::Jump),
        attack: input.held(Action::Attack),
        parry: input.held(Action::Parry),
        ..Intent::default()
    };

    if input.held(Action::MoveLeft) {
        intent.velocity_x = -tuning.actor.speed;
        intent.facing = Some(Facing::Left);
    }
    if input.held(Action::MoveRight) {
        intent.velocity_x = tuning.actor.speed;
        intent.facing = Some(Facing::Right);
    }

    intent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_stops_and_keeps_facing() {
        let intent = intent_from_input(InputState::IDLE, &PlayerTuning::default());
        assert_eq!(intent, Intent::default());
    }

    #[test]
    fn left_moves_left() {
        let input = InputState::IDLE.with(Action::MoveLeft);
        let intent = intent_from_input(input, &PlayerTuning::default());
        assert_eq!(intent.velocity_x, -250.0);
        assert_eq!(intent.facing, Some(Facing::Left));
    }

    #[test]
    fn right_overrides_left() {
        let input = InputState::IDLE.with(Action::MoveLeft).with(Action::MoveRight);
        let intent = intent_from_input(input, &PlayerTuning::default());
        assert_eq!(intent.velocity_x, 250.0);
        assert_eq!(intent.facing, Some(Facing::Right));
    }

    #[test]
    fn buttons_pass_through() {
        let input = InputState::IDLE
            .with(Action::Jump)
            .with(Action::Attack)
            .with(Action::Parry);
        let intent = intent_from_input(input, &PlayerTuning::default());
        assert!(intent.jump && intent.attack && intent.parry);
        assert_eq!(intent.velocity_x, 0.0);
    }
}
