//! # Parryfall Core
//!
//! Physics and combat simulation for the Parryfall side-scrolling platformer.
//!
//! This crate contains everything that decides what happens in a frame and
//! nothing that draws it: gravity and motion integration, platform
//! collision, melee swings and parries, enemy AI, and the win and loss
//! rules. Rendering, audio and input devices are collaborators that feed an
//! [`input::InputState`] in and read a [`view::FrameView`] out.
//!
//! ## Architecture
//!
//! - **Entities**: the player and enemies, sharing one [`entity::Body`] record
//! - **Controllers**: keyboard mapping for the player, patrol/chase AI for enemies
//! - **Resolvers**: collision and combat passes over the whole arena
//!
//! ## Usage
//!
//! ```
//! use parryfall_core::clock::{FixedTimestep, FIXED_DT};
//! use parryfall_core::config::Tuning;
//! use parryfall_core::input::InputState;
//! use parryfall_core::level::LevelConfig;
//! use parryfall_core::simulation::Simulation;
//!
//! let mut sim = Simulation::new(LevelConfig::castle(), Tuning::default())?;
//! let mut clock = FixedTimestep::default();
//!
//! // One display frame of 34ms runs two fixed steps.
//! for _ in 0..clock.advance(0.034) {
//!     sim.step(InputState::IDLE, FIXED_DT);
//! }
//! let frame = sim.view();
//! assert_eq!(frame.frame, 2);
//!
//! // The event log grows until drained; hosts drain it once per frame.
//! for record in sim.take_events() {
//!     println!("frame {}: {:?}", record.frame, record.event);
//! }
//! assert!(sim.events().is_empty());
//! # Ok::<(), parryfall_core::error::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod clock;
pub mod config;
pub mod controller;
pub mod entity;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod level;
pub mod resolver;
pub mod simulation;
pub mod view;

pub use arena::Arena;
pub use config::Tuning;
pub use error::ConfigError;
pub use input::{Action, InputState};
pub use level::LevelConfig;
pub use simulation::{GameState, Simulation};

#[cfg(test)]
mod tests;
