//! Simulation module with the per-frame step.
//!
//! The `Simulation` struct owns the arena and runs one frame per call to
//! [`Simulation::step`]:
//!
//! 1. **GUARD**: A finished run is frozen; the step returns immediately
//! 2. **PLAYER**: Apply input, start swings and the guard, integrate motion
//! 3. **ENEMIES**: Run the AI for each enemy in spawn order, integrate motion
//! 4. **RESOLUTION**: Run resolvers in order (collision, combat, extras)
//! 5. **OUTCOME**: Goal reached wins, health gone loses
//! 6. **PRUNE**: Remove defeated enemies
//!
//! Render and UI collaborators then read [`Simulation::view`].
//!
//! # Determinism
//!
//! The step uses no randomness, no wall clock and no hash-ordered storage.
//! Given the same level, tuning, `dt` sequence and input sequence, two
//! simulations produce identical frames.
//!
//! # Example
//!
//! ```
//! use parryfall_core::clock::FIXED_DT;
//! use parryfall_core::config::Tuning;
//! use parryfall_core::input::{Action, InputState};
//! use parryfall_core::level::LevelConfig;
//! use parryfall_core::simulation::{GameState, Simulation};
//!
//! let mut sim = Simulation::new(LevelConfig::castle(), Tuning::default())?;
//!
//! let walk = InputState::IDLE.with(Action::MoveRight);
//! for _ in 0..10 {
//!     sim.step(walk, FIXED_DT);
//! }
//!
//! assert_eq!(sim.frame(), 10);
//! assert_eq!(sim.state(), GameState::Playing);
//! # Ok::<(), parryfall_core::error::ConfigError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, trace_span};

use crate::arena::Arena;
use crate::config::Tuning;
use crate::controller::{decide, intent_from_input};
use crate::entity::ActorRef;
use crate::error::ConfigError;
use crate::event::{EventLog, EventRecord, GameEvent};
use crate::input::InputState;
use crate::level::LevelConfig;
use crate::resolver::{integrate, CollisionResolver, CombatResolver, Resolver};
use crate::view::FrameView;

// =============================================================================
// GameState
// =============================================================================

/// Whether the run is still going.
///
/// Leaving [`GameState::Playing`] is final: once a run is won or lost it
/// stays that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    /// The run is in progress.
    #[default]
    Playing,
    /// The player died.
    GameOver,
    /// The player reached the goal.
    Win,
}

impl GameState {
    /// Whether the run has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::GameOver => write!(f, "game_over"),
            Self::Win => write!(f, "win"),
        }
    }
}

// =============================================================================
// Simulation
// =============================================================================

/// One run of a level.
pub struct Simulation {
    arena: Arena,
    tuning: Tuning,
    resolvers: Vec<Box<dyn Resolver>>,
    events: EventLog,
    state: GameState,
    frame: u64,
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("arena", &self.arena)
            .field("tuning", &self.tuning)
            .field("resolvers", &format!("[{} resolvers]", self.resolvers.len()))
            .field("events", &self.events.len())
            .field("state", &self.state)
            .field("frame", &self.frame)
            .finish()
    }
}

impl Simulation {
    /// Validates `level` and `tuning` and builds the world.
    ///
    /// The run starts at frame 0 in [`GameState::Playing`] with the default
    /// resolvers (collision, then combat).
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found in the tuning, then the level.
    pub fn new(level: LevelConfig, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        level.validate()?;

        let arena = Arena::from_level(&level, &tuning);
        info!(
            platforms = arena.platforms().len(),
            enemies = arena.enemy_count(),
            "simulation created"
        );

        Ok(Self {
            arena,
            tuning,
            resolvers: vec![
                Box::new(CollisionResolver::new()),
                Box::new(CombatResolver::new()),
            ],
            events: EventLog::new(),
            state: GameState::Playing,
            frame: 0,
        })
    }

    /// Advances the run by one frame of `dt` seconds and returns the state
    /// after it.
    ///
    /// Once the run is over this does nothing, including not counting the
    /// frame.
    ///
    /// Events accumulate in [`Simulation::events`] until
    /// [`Simulation::take_events`] is called. Hosts should drain them every
    /// display frame; an unguarded player adds a `PlayerHit` per step.
    pub fn step(&mut self, input: InputState, dt: f32) -> GameState {
        if self.state.is_terminal() {
            return self.state;
        }

        let _span = trace_span!("step", frame = self.frame).entered();
        self.events.set_frame(self.frame);

        self.update_player(input, dt);
        self.update_enemies(dt);

        for resolver in &self.resolvers {
            resolver.resolve(&mut self.arena, &self.tuning, &mut self.events);
        }

        self.check_outcome();
        self.prune_defeated();

        self.frame += 1;
        self.state
    }

    fn update_player(&mut self, input: InputState, dt: f32) {
        let tuning = &self.tuning;
        let events = &mut self.events;
        let player = self.arena.player_mut();

        let intent = intent_from_input(input, &tuning.player);
        player.body.apply_intent(&intent, tuning.player.actor.jump_power);

        if player.body.try_attack(&intent, &tuning.player.actor) {
            trace!("player swing started");
            events.push(GameEvent::AttackStarted {
                actor: ActorRef::Player,
            });
        }
        if player.parry.update(intent.parry, tuning.player.parry_cooldown) {
            trace!("guard raised");
            events.push(GameEvent::ParryRaised);
        }

        let motion = integrate(&mut player.body, dt, &tuning.world);
        player.parry.tick(dt);

        if motion.fell_out {
            debug!(y = player.body.position.y, "player fell out of the world");
            events.push(GameEvent::FellOutOfWorld {
                actor: ActorRef::Player,
            });
        }
    }

    fn update_enemies(&mut self, dt: f32) {
        let tuning = &self.tuning;
        let events = &mut self.events;
        let player_position = self.arena.player().body.position;

        for enemy in self.arena.enemies_mut() {
            let decision = decide(enemy, player_position, &tuning.enemy);
            enemy.body.apply_intent(&decision.intent, tuning.enemy.actor.jump_power);

            if enemy.body.try_attack(&decision.intent, &tuning.enemy.actor) {
                trace!(enemy = %enemy.id(), "enemy swing started");
                events.push(GameEvent::AttackStarted {
                    actor: enemy.actor_ref(),
                });
            }

            if integrate(&mut enemy.body, dt, &tuning.world).fell_out {
                debug!(enemy = %enemy.id(), "enemy fell out of the world");
                events.push(GameEvent::FellOutOfWorld {
                    actor: enemy.actor_ref(),
                });
            }
        }
    }

    /// Goal first, then health. Both checks run, so a frame that reaches the
    /// goal and empties the health bar ends in [`GameState::GameOver`].
    fn check_outcome(&mut self) {
        let body = &self.arena.player().body;

        if body.hitbox().intersects(self.arena.goal()) {
            self.state = GameState::Win;
            self.events.push(GameEvent::GoalReached);
            info!(frame = self.frame, "goal reached");
        }
        if body.is_defeated() {
            self.state = GameState::GameOver;
            self.events.push(GameEvent::PlayerDefeated);
            info!(frame = self.frame, health = body.health, "player defeated");
        }
    }

    fn prune_defeated(&mut self) {
        for enemy in self.arena.prune_defeated() {
            debug!(%enemy, "enemy defeated");
            self.events.push(GameEvent::EnemyDefeated { enemy });
        }
    }

    /// Returns a read-only reference to the arena.
    #[must_use]
    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Returns a mutable reference to the arena.
    ///
    /// Use this for scenario setup between steps.
    #[must_use]
    pub fn arena_mut(&mut self) -> &mut Arena {
        &mut self.arena
    }

    /// Returns the tuning this run was built with.
    #[must_use]
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Returns the run state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of frames stepped so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Returns the event log without draining it.
    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Drains and returns all recorded events.
    pub fn take_events(&mut self) -> Vec<EventRecord> {
        self.events.take_events()
    }

    /// Captures what render and UI collaborators need for this frame.
    #[must_use]
    pub fn view(&self) -> FrameView {
        FrameView::capture(&self.arena, self.state, self.frame)
    }

    /// Adds a custom resolver, run after the default ones.
    pub fn add_resolver(&mut self, resolver: Box<dyn Resolver>) {
        self.resolvers.push(resolver);
    }

    /// Returns the number of resolvers in the simulation.
    #[must_use]
    pub fn resolver_count(&self) -> usize {
        self.resolvers.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
