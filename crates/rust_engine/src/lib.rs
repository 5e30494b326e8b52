//! # Rust Engine
//!
//! Engine foundation for 2D vector arcade games.
//!
//! ## Features
//!
//! - **Math**: nalgebra-backed `Vec2`, headings and toroidal wrapping
//! - **Timing**: wall-clock or fixed-step frame timer
//! - **Scheduling**: epoch-tagged one-shot deferred events
//! - **Input**: held-key tracking and key-name parsing for bindings
//! - **Audio**: procedural tone synthesis, rodio output behind the `audio` feature
//! - **Rendering**: vector draw lists for line-art presenters
//! - **Configuration**: TOML/RON settings files via serde
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_engine::prelude::*;
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.post(1.5, 0, "respawn");
//! assert!(scheduler.drain_due(1.0).is_empty());
//! assert_eq!(scheduler.drain_due(1.5).len(), 1);
//!
//! let wrapped = wrap_coordinate(-20.0, 800.0, 15.0);
//! assert_eq!(wrapped, 815.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod events;
pub mod input;
pub mod audio;
pub mod physics;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        audio::{AudioBackend, AudioBackendConfig, Sweep, Tone, Waveform},
        config::{Config, ConfigError, ConfigFormat},
        events::{DueEvent, Epoch, Scheduler},
        foundation::{
            math::{deg_to_rad, distance, heading, polar_offset, wrap_coordinate, wrap_point, Vec2, TAU},
            time::Timer,
        },
        input::{InputManager, KeyCode, KeyParseError},
        physics::BoundingCircle,
        render::{DrawList, DrawShape},
    };
}
