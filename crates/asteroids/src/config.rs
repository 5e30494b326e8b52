//! Game configuration
//!
//! Every tunable has a default equal to the classic arcade feel: physics
//! constants assume one update per display refresh at ~60 Hz, and the
//! wall-clock timings are in seconds.

use std::path::Path;

use rust_engine::config::Config;
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Audio settings
    pub audio: AudioConfig,

    /// Controls settings
    pub controls: ControlsConfig,
}

impl Config for GameConfig {}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Lives at the start of a game
    pub starting_lives: u32,

    /// Large asteroids spawned on level 1; each later level adds one
    pub base_asteroid_count: u32,

    /// Velocity kept per frame by the ship (exponential damping)
    pub friction: f32,

    /// Velocity added per frame while thrusting
    pub ship_thrust: f32,

    /// Turn rate in degrees per frame
    pub ship_turn_degrees: f32,

    /// Ship hit radius, also its wrap margin
    pub ship_radius: f32,

    /// Bullet speed in units per frame
    pub bullet_speed: f32,

    /// Bullet lifetime in frames
    pub bullet_life_frames: u32,

    /// Vertices in an asteroid outline
    pub asteroid_vertices: usize,

    /// Minimum distance between a level-start asteroid and the ship
    pub spawn_clearance: f32,

    /// Placement samples before clearance is ignored
    pub spawn_attempts: u32,

    /// Forgiveness subtracted from the ship/asteroid contact distance
    pub ship_hit_tolerance: f32,

    /// Particles released when an asteroid is shot
    pub asteroid_debris: usize,

    /// Particles released when the ship is destroyed
    pub ship_debris: usize,

    /// Minimum seconds between shots
    pub fire_cooldown: f64,

    /// Seconds a new ship ignores collisions
    pub invulnerability: f64,

    /// Seconds between a death and the respawn or game-over reveal
    pub respawn_delay: f64,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            base_asteroid_count: 3,
            friction: 0.98,
            ship_thrust: 0.15,
            ship_turn_degrees: 5.0,
            ship_radius: 15.0,
            bullet_speed: 7.0,
            bullet_life_frames: 60,
            asteroid_vertices: 12,
            spawn_clearance: 200.0,
            spawn_attempts: 100,
            ship_hit_tolerance: 5.0,
            asteroid_debris: 10,
            ship_debris: 30,
            fire_cooldown: 0.25,
            invulnerability: 2.0,
            respawn_delay: 1.5,
        }
    }
}

/// Audio configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    /// SFX volume (0.0 - 1.0)
    pub sfx_volume: f32,

    /// Audio enabled
    pub enabled: bool,
}

impl AudioConfig {
    /// Effective volume applied to every sound effect
    pub fn effective_volume(&self) -> f32 {
        if self.enabled {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            enabled: true,
        }
    }
}

/// Controls configuration
///
/// Each action accepts several key names; any of them triggers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Thrust keys
    pub thrust: Vec<String>,

    /// Left turn keys
    pub turn_left: Vec<String>,

    /// Right turn keys
    pub turn_right: Vec<String>,

    /// Fire keys
    pub fire: Vec<String>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            thrust: vec!["Up".to_string(), "W".to_string()],
            turn_left: vec!["Left".to_string(), "A".to_string()],
            turn_right: vec!["Right".to_string(), "D".to_string()],
            fire: vec!["Space".to_string()],
        }
    }
}

impl GameConfig {
    /// Load configuration from `path`, or return defaults if it is absent or unreadable
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default configuration, could not load {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
