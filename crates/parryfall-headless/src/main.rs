//! Headless Parryfall host.
//!
//! Emulates a display loop without a display: each emulated display frame
//! feeds its duration into a fixed-timestep clock, runs the steps that are
//! due with scripted input, and finally prints a JSON summary of the run.
//!
//! Settings come from the environment:
//!
//! - `PARRYFALL_SCENARIO`: JSON file with `level` and `tuning` (default: castle)
//! - `PARRYFALL_FRAMES`: display frames to emulate (default 3600)
//! - `PARRYFALL_SEED`: seed for the random script (default 42)
//! - `PARRYFALL_SCRIPT`: `random`, `rush` or `idle` (default `random`)
//! - `PARRYFALL_DISPLAY_HZ`: emulated refresh rate (default 60)
//! - `LOG_FORMAT=json`: structured logs; `RUST_LOG` filters them

mod config;
mod scenario;
mod script;

use anyhow::Context;
use parryfall_core::clock::FixedTimestep;
use parryfall_core::event::GameEvent;
use parryfall_core::simulation::{GameState, Simulation};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::Settings;
use crate::script::Script;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

/// What a finished run reports on stdout.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct RunSummary {
    script: String,
    seed: u64,
    outcome: GameState,
    display_frames: u64,
    steps: u64,
    player_health: f32,
    enemies_remaining: usize,
    enemies_defeated: usize,
    hits_taken: usize,
    parries: usize,
    swings: usize,
}

impl RunSummary {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::EnemyDefeated { .. } => self.enemies_defeated += 1,
            GameEvent::PlayerHit { .. } => self.hits_taken += 1,
            GameEvent::Parried { .. } => self.parries += 1,
            GameEvent::AttackStarted {
                actor: parryfall_core::entity::ActorRef::Player,
            } => self.swings += 1,
            _ => {}
        }
    }
}

fn run(sim: &mut Simulation, script: &mut Script, settings: &Settings) -> RunSummary {
    let mut clock = FixedTimestep::default();
    let frame_time = 1.0 / settings.display_hz;
    let mut summary = RunSummary {
        script: settings.script.to_string(),
        seed: settings.seed,
        ..RunSummary::default()
    };

    let mut view = sim.view();
    for _ in 0..settings.frames {
        summary.display_frames += 1;
        for _ in 0..clock.advance(frame_time) {
            let input = script.next_input(&view);
            sim.step(input, clock.step());
            view = sim.view();
        }

        for record in sim.take_events() {
            debug!(frame = record.frame, event = ?record.event, "event");
            summary.record(&record.event);
        }

        if sim.state().is_terminal() {
            break;
        }
    }

    summary.outcome = sim.state();
    summary.steps = sim.frame();
    summary.player_health = view.hud.health;
    summary.enemies_remaining = view.enemies.len();
    summary
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let settings = Settings::from_env();
    info!(?settings, "starting headless run");

    let scenario = scenario::load(settings.scenario.as_deref())?;
    let mut sim =
        Simulation::new(scenario.level, scenario.tuning).context("scenario failed validation")?;
    let mut script = Script::new(settings.script, settings.seed);

    let summary = run(&mut sim, &mut script, &settings);
    info!(outcome = %summary.outcome, steps = summary.steps, "run finished");

    println!(
        "{}",
        serde_json::to_string_pretty(&summary).context("failed to encode summary")?
    );
    Ok(())
}
