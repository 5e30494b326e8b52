//! Headless asteroids runner
//!
//! Plays one game with a simple aiming autopilot and logs the outcome. By
//! default time advances a fixed 1/60 s per tick; `--realtime` paces ticks
//! against the wall clock instead. The autopilot presses the configured keys,
//! so bindings are exercised exactly as a player's would be.

use std::f32::consts::PI;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;

use asteroids::prelude::*;
use rust_engine::config::Config;
use rust_engine::foundation::logging;
use rust_engine::foundation::math::{deg_to_rad, distance, TAU};
use rust_engine::foundation::time::Timer;

const TICK_RATE: f32 = 60.0;

/// Heading error within which the autopilot fires
const FIRE_CONE: f32 = 0.2;
/// Targets further than this are approached with short thrust bursts
const APPROACH_DISTANCE: f32 = 250.0;

#[derive(Parser, Debug)]
#[command(name = "asteroids", version, about = "Headless asteroids simulation driven by an autopilot")]
struct Args {
    /// Configuration file (.toml or .ron)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Frames to simulate
    #[arg(short, long, default_value_t = 3600)]
    frames: u64,

    /// Random seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Play-area width
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Play-area height
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Pace ticks against the wall clock instead of a fixed step
    #[arg(long)]
    realtime: bool,

    /// Write the default configuration to PATH and exit
    #[arg(long, value_name = "PATH")]
    write_default_config: Option<PathBuf>,
}

/// Turns toward the nearest asteroid, fires when lined up and nudges
/// forward when the target is far away
#[derive(Debug, Default)]
struct Autopilot {
    frame: u64,
}

impl Autopilot {
    fn steer(&mut self, state: &GameState, config: &GameplayConfig, input: &mut KeyboardInput) {
        self.frame += 1;
        // Half a turn step either side of the target
        let deadzone = deg_to_rad(config.ship_turn_degrees) / 2.0;
        let wanted = state
            .ship
            .as_ref()
            .filter(|ship| ship.visible)
            .map_or(Intents::empty(), |ship| self.plan(ship, &state.asteroids, deadzone));

        for intent in [Intents::TURN_LEFT, Intents::TURN_RIGHT, Intents::THRUST, Intents::FIRE] {
            if let Some(key) = input.bindings().keys_for(intent).first().copied() {
                input.handle_key(key, wanted.contains(intent));
            }
        }
    }

    fn plan(&self, ship: &Ship, asteroids: &[Asteroid], deadzone: f32) -> Intents {
        let Some(target) = asteroids.iter().min_by(|a, b| {
            distance(a.position, ship.position).total_cmp(&distance(b.position, ship.position))
        }) else {
            return Intents::empty();
        };

        let offset = target.position - ship.position;
        let bearing = offset.y.atan2(offset.x);
        let error = (bearing - ship.angle + PI).rem_euclid(TAU) - PI;

        let mut intents = Intents::empty();
        if error < -deadzone {
            intents |= Intents::TURN_LEFT;
        } else if error > deadzone {
            intents |= Intents::TURN_RIGHT;
        }
        if error.abs() < FIRE_CONE {
            intents |= Intents::FIRE;
        }
        if offset.magnitude() > APPROACH_DISTANCE && self.frame % 30 < 5 {
            intents |= Intents::THRUST;
        }
        intents
    }
}

fn main() -> Result<(), GameError> {
    logging::init_with_default("info");
    let args = Args::parse();

    if let Some(path) = &args.write_default_config {
        GameConfig::default().save_to_file(path)?;
        log::info!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let config = GameConfig::load_or_default(args.config.as_deref());
    let mut input = KeyboardInput::from_config(&config.controls)?;
    let area = PlayArea::new(args.width, args.height);

    let renderer = VectorRenderer::new();
    let audio = SynthAudio::new(config.audio.clone());
    let ui = LogDisplay::new();
    let mut sim = match args.seed {
        Some(seed) => Simulator::with_seed(config.gameplay.clone(), seed, renderer, audio, ui),
        None => Simulator::new(config.gameplay.clone(), renderer, audio, ui),
    };

    let mut timer = Timer::new();
    let mut pilot = Autopilot::default();
    sim.start(timer.total_time(), &area);

    let frame_budget = Duration::from_secs_f32(1.0 / TICK_RATE);
    for _ in 0..args.frames {
        if args.realtime {
            timer.update();
        } else {
            timer.advance(1.0 / TICK_RATE);
        }
        pilot.steer(sim.state(), sim.config(), &mut input);
        sim.tick(timer.total_time(), &input, &area);
        log::trace!(
            "frame {}: {} shapes, dt {:.4}s",
            sim.frames(),
            sim.renderer().frame().len(),
            timer.delta_time()
        );

        if sim.phase() == GamePhase::GameOver {
            break;
        }
        if args.realtime {
            thread::sleep(frame_budget);
        }
    }

    let state = sim.state();
    log::info!(
        "Finished after {} frames ({:.1}s, {:.1} fps): {}, level {}, score {}, {} lives left, {} sounds",
        sim.frames(),
        timer.total_time(),
        timer.average_fps(),
        state.phase,
        state.level,
        state.score,
        state.lives,
        sim.audio().cues_triggered(),
    );
    Ok(())
}
