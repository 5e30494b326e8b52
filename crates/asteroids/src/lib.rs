//! # Asteroids
//!
//! Simulation core of a vector-graphics asteroids game: a ship that rotates,
//! thrusts and fires, asteroids that split when shot, lives, levels and a
//! menu / playing / game-over cycle.
//!
//! The core is platform-free. Drawing, sound, input, the HUD and the
//! play-area size are reached through the traits in [`collaborators`], and
//! [`Simulator::tick`] is called once per display refresh.
//!
//! ```rust
//! use asteroids::prelude::*;
//!
//! let mut sim = Simulator::with_seed(
//!     GameplayConfig::default(),
//!     7,
//!     VectorRenderer::new(),
//!     SynthAudio::silent(),
//!     LogDisplay::new(),
//! );
//! let area = PlayArea::new(800.0, 600.0);
//!
//! sim.start(0.0, &area);
//! sim.tick(1.0 / 60.0, &Intents::FIRE, &area);
//!
//! assert_eq!(sim.phase(), GamePhase::Playing);
//! assert_eq!(sim.state().bullets.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod collaborators;
pub mod collision;
pub mod config;
pub mod entities;
pub mod simulator;
pub mod state;

use rust_engine::config::ConfigError;
use rust_engine::input::KeyParseError;

pub use simulator::Simulator;

/// Errors surfaced by the game binary
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Configuration file could not be read or written
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A control binding names an unknown key
    #[error("Invalid key binding: {0}")]
    Binding(#[from] KeyParseError),
}

/// Common imports for embedding the game
pub mod prelude {
    pub use crate::{
        collaborators::{
            AudioSystem, InputSource, Intents, KeyBindings, KeyboardInput, LogDisplay, PlayArea, Renderer,
            SoundCue, SynthAudio, TouchButton, UiDisplay, VectorRenderer, Viewport,
        },
        config::{AudioConfig, ControlsConfig, GameConfig, GameplayConfig},
        entities::{Asteroid, AsteroidSize, Bullet, Particle, Ship},
        simulator::Simulator,
        state::{GamePhase, GameState, ScheduledEvent},
        GameError,
    };
}
