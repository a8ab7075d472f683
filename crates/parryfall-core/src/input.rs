//! Per-frame input snapshot.
//!
//! Input collaborators keep a live map from logical action names to a
//! held flag. Once per frame the host copies that map into an
//! [`InputState`] and hands it to
//! [`Simulation::step`](crate::simulation::Simulation::step) by value, so the
//! simulation can never observe a key changing mid-frame.
//!
//! # Example
//!
//! ```
//! use parryfall_core::input::{Action, InputState};
//!
//! let input = InputState::from_held([
//!     (Action::MoveRight, true),
//!     (Action::Jump, true),
//!     (Action::Jump, false),
//! ]);
//!
//! assert!(input.held(Action::MoveRight));
//! // Only the latest state of a key is seen.
//! assert!(!input.held(Action::Jump));
//! ```

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of held actions.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Actions: u8 {
        /// Move towards negative x.
        const MOVE_LEFT = 1 << 0;
        /// Move towards positive x.
        const MOVE_RIGHT = 1 << 1;
        /// Jump when grounded.
        const JUMP = 1 << 2;
        /// Swing.
        const ATTACK = 1 << 3;
        /// Raise the guard.
        const PARRY = 1 << 4;
    }
}

/// A single logical action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Move left.
    #[serde(rename = "left")]
    MoveLeft,
    /// Move right.
    #[serde(rename = "right")]
    MoveRight,
    /// Jump.
    Jump,
    /// Attack.
    Attack,
    /// Parry.
    Parry,
}

impl Action {
    /// Every action, in bit order.
    pub const ALL: [Action; 5] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Jump,
        Action::Attack,
        Action::Parry,
    ];

    /// The flag this action sets in [`Actions`].
    #[must_use]
    pub const fn flag(self) -> Actions {
        match self {
            Self::MoveLeft => Actions::MOVE_LEFT,
            Self::MoveRight => Actions::MOVE_RIGHT,
            Self::Jump => Actions::JUMP,
            Self::Attack => Actions::ATTACK,
            Self::Parry => Actions::PARRY,
        }
    }

    /// Stable logical name used by input collaborators.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MoveLeft => "left",
            Self::MoveRight => "right",
            Self::Jump => "jump",
            Self::Attack => "attack",
            Self::Parry => "parry",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown action name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action `{0}`")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| UnknownAction(s.to_owned()))
    }
}

/// Snapshot of held actions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputState {
    actions: Actions,
}

impl InputState {
    /// Nothing held.
    pub const IDLE: Self = Self {
        actions: Actions::empty(),
    };

    /// Wraps a raw flag set.
    #[must_use]
    pub const fn new(actions: Actions) -> Self {
        Self { actions }
    }

    /// Builds a snapshot from `(action, held)` pairs. Later pairs for the same
    /// action overwrite earlier ones.
    #[must_use]
    pub fn from_held<I>(held: I) -> Self
    where
        I: IntoIterator<Item = (Action, bool)>,
    {
        let mut actions = Actions::empty();
        for (action, is_held) in held {
            actions.set(action.flag(), is_held);
        }
        Self { actions }
    }

    /// Returns a copy with `action` held.
    #[must_use]
    pub fn with(mut self, action: Action) -> Self {
        self.actions.insert(action.flag());
        self
    }

    /// Whether `action` is held this frame.
    #[must_use]
    pub const fn held(self, action: Action) -> bool {
        self.actions.contains(action.flag())
    }

    /// The raw flag set.
    #[must_use]
    pub const fn actions(self) -> Actions {
        self.actions
    }
}

impl From<Actions> for InputState {
    fn from(actions: Actions) -> Self {
        Self::new(actions)
    }
}
