//! Audio backend implementations
//!
//! Platform-independent abstraction over audio playback libraries.

#[cfg(feature = "audio")]
pub mod rodio_backend;

use crate::audio::synth::Tone;
use crate::audio::AudioError;

/// Audio backend trait for platform abstraction
///
/// Single-threaded: backends are driven from the game loop and every call
/// returns without waiting for playback.
pub trait AudioBackend {
    /// Initialize the audio backend
    fn initialize(&mut self, config: &AudioBackendConfig) -> Result<(), AudioError>;

    /// Shutdown the audio backend
    fn shutdown(&mut self);

    /// Check if backend is initialized
    fn is_initialized(&self) -> bool;

    /// Queue a synthesized tone at `volume` (0.0 - 1.0); fire and forget
    fn play_tone(&mut self, tone: &Tone, volume: f32) -> Result<(), AudioError>;
}

/// Configuration for audio backend
#[derive(Debug, Clone)]
pub struct AudioBackendConfig {
    /// Sample rate (e.g., 44100, 48000)
    pub sample_rate: u32,
}

impl Default for AudioBackendConfig {
    fn default() -> Self {
        Self { sample_rate: 44100 }
    }
}

/// Backend that accepts every tone and plays nothing
///
/// Used for headless runs, tests, and builds without the `audio` feature.
#[derive(Debug, Default)]
pub struct NullBackend {
    initialized: bool,
    played: usize,
}

impl NullBackend {
    /// Create a new null backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tones accepted so far
    pub fn played(&self) -> usize {
        self.played
    }
}

impl AudioBackend for NullBackend {
    fn initialize(&mut self, _config: &AudioBackendConfig) -> Result<(), AudioError> {
        self.initialized = true;
        Ok(())
    }

    fn shutdown(&mut self) {
        self.initialized = false;
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn play_tone(&mut self, tone: &Tone, volume: f32) -> Result<(), AudioError> {
        if !self.initialized {
            return Err(AudioError::BackendNotInitialized);
        }
        log::trace!("null audio: {:?} {:.2}s at volume {:.2}", tone.waveform, tone.duration, volume);
        self.played += 1;
        Ok(())
    }
}

/// Create the default audio backend for the platform
///
/// Falls back to [`NullBackend`] when no output device can be opened so a
/// missing sound card never stops the game.
pub fn create_backend(config: &AudioBackendConfig) -> Box<dyn AudioBackend> {
    #[cfg(feature = "audio")]
    {
        let mut backend = rodio_backend::RodioBackend::new();
        match backend.initialize(config) {
            Ok(()) => return Box::new(backend),
            Err(e) => log::warn!("Falling back to silent audio: {}", e),
        }
    }

    let mut backend = NullBackend::new();
    if let Err(e) = backend.initialize(config) {
        log::warn!("Silent audio backend failed to initialize: {}", e);
    }
    Box::new(backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::synth::{Sweep, Waveform};

    fn click() -> Tone {
        Tone {
            waveform: Waveform::Square,
            frequency: Sweep::linear(80.0, 60.0),
            gain: Sweep::linear(0.05, 0.0),
            duration: 0.1,
        }
    }

    #[test]
    fn test_null_backend_requires_initialization() {
        let mut backend = NullBackend::new();
        assert!(matches!(backend.play_tone(&click(), 1.0), Err(AudioError::BackendNotInitialized)));

        backend.initialize(&AudioBackendConfig::default()).unwrap();
        backend.play_tone(&click(), 1.0).unwrap();
        assert_eq!(backend.played(), 1);

        backend.shutdown();
        assert!(!backend.is_initialized());
    }

    #[test]
    fn test_created_backend_is_ready() {
        let backend = create_backend(&AudioBackendConfig::default());
        assert!(backend.is_initialized());
    }
}
