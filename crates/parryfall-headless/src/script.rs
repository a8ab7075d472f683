//! Scripted input sources standing in for a keyboard.

use std::fmt;
use std::str::FromStr;

use parryfall_core::input::{Action, Actions, InputState};
use parryfall_core::view::FrameView;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// How long the random script holds one combination, in steps.
const RANDOM_HOLD_STEPS: u32 = 12;

/// Horizontal distance under which the rush script raises its guard.
const RUSH_GUARD_DISTANCE: f32 = 80.0;

/// Which input source drives the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptKind {
    /// Nothing held, ever.
    Idle,
    /// Run right swinging, guard when an enemy is close.
    Rush,
    /// Seeded random combinations held for a few steps each.
    #[default]
    Random,
}

/// A script name that is not `idle`, `rush` or `random`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown script `{0}`")]
pub struct UnknownScript(pub String);

impl FromStr for ScriptKind {
    type Err = UnknownScript;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(Self::Idle),
            "rush" => Ok(Self::Rush),
            "random" => Ok(Self::Random),
            other => Err(UnknownScript(other.to_owned())),
        }
    }
}

impl fmt::Display for ScriptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Rush => write!(f, "rush"),
            Self::Random => write!(f, "random"),
        }
    }
}

/// Stateful input generator.
#[derive(Debug, Clone)]
pub struct Script {
    kind: ScriptKind,
    rng: ChaCha8Rng,
    held: InputState,
    steps: u32,
}

impl Script {
    /// A fresh script of `kind`; `seed` only matters for [`ScriptKind::Random`].
    pub fn new(kind: ScriptKind, seed: u64) -> Self {
        Self {
            kind,
            rng: ChaCha8Rng::seed_from_u64(seed),
            held: InputState::IDLE,
            steps: 0,
        }
    }

    /// Input for the next step, given what the player last saw.
    pub fn next_input(&mut self, view: &FrameView) -> InputState {
        let input = match self.kind {
            ScriptKind::Idle => InputState::IDLE,
            ScriptKind::Rush => rush(view),
            ScriptKind::Random => {
                if self.steps % RANDOM_HOLD_STEPS == 0 {
                    self.held = InputState::new(Actions::from_bits_truncate(self.rng.gen()));
                }
                self.held
            }
        };
        self.steps += 1;
        input
    }
}

fn rush(view: &FrameView) -> InputState {
    let player = &view.player.hitbox;
    let threatened = view
        .enemies
        .iter()
        .any(|enemy| (enemy.hitbox.x - player.x).abs() < RUSH_GUARD_DISTANCE);

    let input = InputState::IDLE.with(Action::MoveRight).with(Action::Attack);
    if threatened {
        input.with(Action::Parry)
    } else {
        input
    }
}
