//! Test helper functions for setting up simulations and actors.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::clock::FIXED_DT;
use crate::config::Tuning;
use crate::entity::Enemy;
use crate::geometry::Hitbox;
use crate::input::{Action, Actions, InputState};
use crate::level::{LevelConfig, Platform};
use crate::simulation::{GameState, Simulation};

// =============================================================================
// Scenario Setup
// =============================================================================

/// Top of the flat ground used by [`flat_level`].
pub const GROUND_Y: f32 = 550.0;

/// Player height under default tuning.
pub const PLAYER_HEIGHT: f32 = 40.0;

/// Enemy height under default tuning.
pub const ENEMY_HEIGHT: f32 = 36.0;

/// A single ground slab across the world, the player standing on it at
/// `x = 100` and the goal far to the right.
pub fn flat_level(enemy_xs: &[f32]) -> LevelConfig {
    LevelConfig {
        platforms: vec![Platform::new(0.0, GROUND_Y, 1200.0, 50.0)],
        goal: Hitbox::new(1140.0, 500.0, 40.0, 40.0),
        player_spawn: Vec2::new(100.0, GROUND_Y - PLAYER_HEIGHT),
        enemy_spawns: enemy_xs
            .iter()
            .map(|&x| Vec2::new(x, GROUND_Y - ENEMY_HEIGHT))
            .collect(),
    }
}

/// Simulation over [`flat_level`] with default tuning.
pub fn flat_sim(enemy_xs: &[f32]) -> Simulation {
    Simulation::new(flat_level(enemy_xs), Tuning::default()).unwrap()
}

/// Simulation over the castle level with default tuning.
pub fn castle_sim() -> Simulation {
    Simulation::new(LevelConfig::castle(), Tuning::default()).unwrap()
}

// =============================================================================
// Input
// =============================================================================

/// Snapshot with every listed action held.
pub fn held(actions: &[Action]) -> InputState {
    actions
        .iter()
        .fold(InputState::IDLE, |input, &action| input.with(action))
}

/// A uniformly random snapshot.
pub fn random_input(rng: &mut ChaCha8Rng) -> InputState {
    InputState::new(Actions::from_bits_truncate(rng.gen::<u8>()))
}

/// Steps `frames` times with the same input, returning the final state.
pub fn run(sim: &mut Simulation, input: InputState, frames: usize) -> GameState {
    let mut state = sim.state();
    for _ in 0..frames {
        state = sim.step(input, FIXED_DT);
    }
    state
}

// =============================================================================
// Accessors
// =============================================================================

/// Moves the player without touching anything else.
pub fn place_player(sim: &mut Simulation, position: Vec2) {
    sim.arena_mut().player_mut().body.position = position;
}

/// The enemy at roster index `index`.
pub fn enemy(sim: &Simulation, index: usize) -> &Enemy {
    &sim.arena().enemies()[index]
}

/// Mutable access to the enemy at roster index `index`.
pub fn enemy_mut(sim: &mut Simulation, index: usize) -> &mut Enemy {
    &mut sim.arena_mut().enemies_mut()[index]
}

/// Current player health.
pub fn player_health(sim: &Simulation) -> f32 {
    sim.arena().player().body.health
}
