//! Procedural sound effects
//!
//! Every sound is a single synthesized tone; there are no sample assets.

use rust_engine::audio::{create_backend, AudioBackend, AudioBackendConfig, NullBackend, Sweep, Tone, Waveform};

use super::AudioSystem;
use crate::config::AudioConfig;
use crate::entities::AsteroidSize;

/// Sound effects the game can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Laser shot
    Shoot,
    /// Engine rumble, retriggered every thrusting frame
    Thrust,
    /// Explosion pitched by size
    Explosion(AsteroidSize),
    /// Rising chime at the end of a level
    LevelCleared,
}

impl SoundCue {
    /// Tone for this cue
    pub fn tone(self) -> Tone {
        match self {
            SoundCue::Shoot => Tone {
                waveform: Waveform::Sawtooth,
                frequency: Sweep::exponential(800.0, 100.0),
                gain: Sweep::exponential(0.1, 0.01),
                duration: 0.15,
            },
            SoundCue::Thrust => Tone {
                waveform: Waveform::Square,
                frequency: Sweep::linear(80.0, 60.0),
                gain: Sweep::linear(0.05, 0.0),
                duration: 0.1,
            },
            SoundCue::Explosion(size) => {
                let (start, duration) = match size {
                    AsteroidSize::Large => (50.0, 0.4),
                    AsteroidSize::Medium => (100.0, 0.2),
                    AsteroidSize::Small => (200.0, 0.2),
                };
                Tone {
                    waveform: Waveform::Sawtooth,
                    frequency: Sweep::exponential(start, 10.0),
                    gain: Sweep::exponential(0.2, 0.01),
                    duration,
                }
            }
            // Pitch peaks after 0.2 s while the gain keeps fading to 0.3 s
            SoundCue::LevelCleared => Tone {
                waveform: Waveform::Sine,
                frequency: Sweep::linear(400.0, 800.0).within(0.2 / 0.3),
                gain: Sweep::linear(0.1, 0.0),
                duration: 0.3,
            },
        }
    }
}

/// Audio system that synthesizes each cue and hands it to a backend
pub struct SynthAudio {
    backend: Box<dyn AudioBackend>,
    config: AudioConfig,
    cues: u64,
    failures: u64,
}

impl SynthAudio {
    /// Open the platform backend (silent if no device is available)
    pub fn new(config: AudioConfig) -> Self {
        let backend = if config.enabled {
            create_backend(&AudioBackendConfig::default())
        } else {
            Self::silent_backend()
        };
        Self::with_backend(backend, config)
    }

    /// Use an already initialized backend
    pub fn with_backend(backend: Box<dyn AudioBackend>, config: AudioConfig) -> Self {
        Self { backend, config, cues: 0, failures: 0 }
    }

    /// Audio system that plays nothing
    pub fn silent() -> Self {
        Self::with_backend(Self::silent_backend(), AudioConfig { enabled: false, ..AudioConfig::default() })
    }

    fn silent_backend() -> Box<dyn AudioBackend> {
        let mut backend = NullBackend::new();
        if let Err(e) = backend.initialize(&AudioBackendConfig::default()) {
            log::warn!("Silent audio backend failed to initialize: {}", e);
        }
        Box::new(backend)
    }

    /// Play a cue; playback problems are logged and otherwise ignored
    pub fn play(&mut self, cue: SoundCue) {
        self.cues += 1;
        let volume = self.config.effective_volume();
        if volume <= 0.0 {
            return;
        }
        if let Err(e) = self.backend.play_tone(&cue.tone(), volume) {
            self.failures += 1;
            log::debug!("Dropped {:?} sound: {}", cue, e);
        }
    }

    /// Cues triggered so far, including muted ones
    pub fn cues_triggered(&self) -> u64 {
        self.cues
    }

    /// Cues the backend refused
    pub fn failures(&self) -> u64 {
        self.failures
    }
}

impl AudioSystem for SynthAudio {
    fn shoot_fired(&mut self) {
        self.play(SoundCue::Shoot);
    }

    fn thrust_active(&mut self) {
        self.play(SoundCue::Thrust);
    }

    fn explosion_occurred(&mut self, size: AsteroidSize) {
        self.play(SoundCue::Explosion(size));
    }

    fn level_cleared(&mut self) {
        self.play(SoundCue::LevelCleared);
    }
}

impl Drop for SynthAudio {
    fn drop(&mut self) {
        self.backend.shutdown();
    }
}
