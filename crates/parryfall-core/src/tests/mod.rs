//! Test module for determinism and integration tests.
//!
//! - **Determinism tests**: Same level, tuning and inputs give identical runs
//! - **Integration tests**: Whole-step behaviour through `Simulation::step`
//! - **Helper functions**: Scenario setup shared by both
//!
//! # Test Structure
//!
//! - `determinism.rs`: Seeded random input replays
//! - `integration.rs`: End-to-end frame scenarios
//! - `helpers.rs`: Test setup utilities and factory functions

mod helpers;

// Re-export for convenience
pub use helpers::*;
