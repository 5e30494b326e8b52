//! Rodio audio backend implementation
//!
//! Streams synthesized tones to the default output device. Each tone gets a
//! detached sink, so playback never blocks the caller.

use super::{AudioBackend, AudioBackendConfig};
use crate::audio::synth::{Tone, ToneSamples};
use crate::audio::AudioError;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
use std::time::Duration;

impl Source for ToneSamples {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        ToneSamples::sample_rate(self)
    }

    fn total_duration(&self) -> Option<Duration> {
        let rate = f64::from(ToneSamples::sample_rate(self));
        Some(Duration::from_secs_f64(self.total() as f64 / rate))
    }
}

/// Rodio-based audio backend
pub struct RodioBackend {
    /// Audio output stream (must be kept alive)
    _output_stream: Option<OutputStream>,
    /// Output stream handle for creating sinks
    stream_handle: Option<OutputStreamHandle>,
    /// Rate tones are rendered at
    sample_rate: u32,
}

impl RodioBackend {
    /// Create a new Rodio backend
    pub fn new() -> Self {
        Self {
            _output_stream: None,
            stream_handle: None,
            sample_rate: AudioBackendConfig::default().sample_rate,
        }
    }
}

impl AudioBackend for RodioBackend {
    fn initialize(&mut self, config: &AudioBackendConfig) -> Result<(), AudioError> {
        if self.stream_handle.is_some() {
            return Ok(());
        }
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| AudioError::InitializationFailed(e.to_string()))?;
        self._output_stream = Some(stream);
        self.stream_handle = Some(handle);
        self.sample_rate = config.sample_rate;
        log::info!("Rodio audio backend initialized at {} Hz", config.sample_rate);
        Ok(())
    }

    fn shutdown(&mut self) {
        self.stream_handle = None;
        self._output_stream = None;
    }

    fn is_initialized(&self) -> bool {
        self.stream_handle.is_some()
    }

    fn play_tone(&mut self, tone: &Tone, volume: f32) -> Result<(), AudioError> {
        let stream_handle = self.stream_handle.as_ref()
            .ok_or(AudioError::BackendNotInitialized)?;

        let sink = Sink::try_new(stream_handle)
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to create sink: {}", e)))?;
        sink.set_volume(volume.clamp(0.0, 1.0));
        sink.append(tone.samples(self.sample_rate));
        sink.detach();
        Ok(())
    }
}

impl Default for RodioBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::synth::{Sweep, Waveform};

    #[test]
    fn test_playback_without_initialization() {
        let mut backend = RodioBackend::new();
        let tone = Tone {
            waveform: Waveform::Sine,
            frequency: Sweep::linear(440.0, 440.0),
            gain: Sweep::linear(0.1, 0.0),
            duration: 0.1,
        };
        assert!(matches!(backend.play_tone(&tone, 1.0), Err(AudioError::BackendNotInitialized)));
    }

    #[test]
    fn test_backend_initialization() {
        let mut backend = RodioBackend::new();
        // May fail in CI/test environments without audio device
        if backend.initialize(&AudioBackendConfig::default()).is_ok() {
            assert!(backend.is_initialized());
            backend.shutdown();
            assert!(!backend.is_initialized());
        }
    }

    #[test]
    fn test_tone_source_duration() {
        let tone = Tone {
            waveform: Waveform::Square,
            frequency: Sweep::linear(80.0, 60.0),
            gain: Sweep::linear(0.05, 0.0),
            duration: 0.5,
        };
        let source = tone.samples(1000);
        assert_eq!(source.channels(), 1);
        assert_eq!(source.total_duration(), Some(Duration::from_millis(500)));
    }
}
