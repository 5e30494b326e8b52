//! Audio system
//!
//! Tone synthesis is always available; actual device output goes through an
//! [`AudioBackend`](backend::AudioBackend). With the `audio` feature the
//! default backend is rodio, otherwise a null backend that only logs.

pub mod backend;
pub mod synth;

pub use backend::{create_backend, AudioBackend, AudioBackendConfig, NullBackend};
pub use synth::{Ramp, Sweep, Tone, ToneSamples, Waveform};

/// Audio errors
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    /// Backend used before `initialize`
    #[error("Audio backend not initialized")]
    BackendNotInitialized,

    /// No output device or stream could be opened
    #[error("Audio initialization failed: {0}")]
    InitializationFailed(String),

    /// A sound could not be queued
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),
}
