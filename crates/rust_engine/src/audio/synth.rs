//! Procedural tone synthesis
//!
//! Sound effects are described as a single oscillator whose frequency and
//! gain sweep from a start to an end value over the tone's duration, the way
//! a browser oscillator with scheduled ramps would produce them. Nothing is
//! loaded from disk.

use crate::foundation::math::TAU;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Pure sine
    Sine,
    /// 50% duty square
    Square,
    /// Rising sawtooth
    Sawtooth,
}

impl Waveform {
    /// Sample the waveform at `phase` cycles (only the fractional part matters)
    pub fn sample(self, phase: f32) -> f32 {
        let phase = phase.fract();
        match self {
            Waveform::Sine => (phase * TAU).sin(),
            Waveform::Square => {
                if phase < 0.5 { 1.0 } else { -1.0 }
            }
            Waveform::Sawtooth => 2.0 * phase - 1.0,
        }
    }
}

/// Interpolation curve of a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ramp {
    /// Straight line between start and end
    Linear,
    /// Constant ratio per unit time; needs strictly positive endpoints
    Exponential,
}

/// A value swept from `start` to `end` over part or all of a tone's duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Value at t = 0
    pub start: f32,
    /// Value once the sweep completes
    pub end: f32,
    /// Interpolation curve
    pub ramp: Ramp,
    /// Fraction of the tone over which the sweep runs; `end` is held afterwards
    pub span: f32,
}

impl Sweep {
    /// Linear sweep
    pub fn linear(start: f32, end: f32) -> Self {
        Self { start, end, ramp: Ramp::Linear, span: 1.0 }
    }

    /// Exponential sweep
    pub fn exponential(start: f32, end: f32) -> Self {
        Self { start, end, ramp: Ramp::Exponential, span: 1.0 }
    }

    /// Finish the sweep after `span` of the tone (clamped to `(0, 1]`)
    #[must_use]
    pub fn within(self, span: f32) -> Self {
        Self { span: span.clamp(f32::EPSILON, 1.0), ..self }
    }

    /// Value at normalized progress `t` in `[0, 1]`
    ///
    /// Exponential sweeps with a non-positive endpoint degrade to linear.
    pub fn value_at(&self, t: f32) -> f32 {
        let t = (t / self.span).clamp(0.0, 1.0);
        match self.ramp {
            Ramp::Exponential if self.start > 0.0 && self.end > 0.0 => {
                self.start * (self.end / self.start).powf(t)
            }
            _ => self.start + (self.end - self.start) * t,
        }
    }
}

/// A one-shot synthesized sound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Oscillator shape
    pub waveform: Waveform,
    /// Frequency sweep in Hz
    pub frequency: Sweep,
    /// Gain sweep
    pub gain: Sweep,
    /// Length in seconds
    pub duration: f32,
}

impl Tone {
    /// Number of samples this tone spans at `sample_rate`
    pub fn sample_count(&self, sample_rate: u32) -> usize {
        (self.duration.max(0.0) * sample_rate as f32).round() as usize
    }

    /// Render the tone as a finite sample stream
    pub fn samples(&self, sample_rate: u32) -> ToneSamples {
        ToneSamples {
            tone: *self,
            sample_rate: sample_rate.max(1),
            index: 0,
            total: self.sample_count(sample_rate),
            phase: 0.0,
        }
    }
}

/// Mono sample iterator over a [`Tone`]
#[derive(Debug, Clone)]
pub struct ToneSamples {
    tone: Tone,
    sample_rate: u32,
    index: usize,
    total: usize,
    phase: f32,
}

impl ToneSamples {
    /// Output sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Total number of samples produced
    pub fn total(&self) -> usize {
        self.total
    }
}

impl Iterator for ToneSamples {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.index >= self.total {
            return None;
        }
        let progress = self.index as f32 / self.total as f32;
        let value = self.tone.waveform.sample(self.phase) * self.tone.gain.value_at(progress);

        // Phase accumulates so frequency sweeps stay continuous
        self.phase = (self.phase + self.tone.frequency.value_at(progress) / self.sample_rate as f32).fract();
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ToneSamples {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn beep() -> Tone {
        Tone {
            waveform: Waveform::Sine,
            frequency: Sweep::linear(400.0, 800.0),
            gain: Sweep::linear(0.1, 0.0),
            duration: 0.3,
        }
    }

    #[test]
    fn test_waveform_ranges() {
        assert_eq!(Waveform::Square.sample(0.25), 1.0);
        assert_eq!(Waveform::Square.sample(0.75), -1.0);
        assert_relative_eq!(Waveform::Sawtooth.sample(0.0), -1.0);
        assert_relative_eq!(Waveform::Sawtooth.sample(0.5), 0.0);
        assert_relative_eq!(Waveform::Sine.sample(0.25), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_exponential_sweep_endpoints() {
        let sweep = Sweep::exponential(800.0, 100.0);
        assert_relative_eq!(sweep.value_at(0.0), 800.0);
        assert_relative_eq!(sweep.value_at(1.0), 100.0, epsilon = 1e-3);
        // Geometric midpoint
        assert_relative_eq!(sweep.value_at(0.5), 282.842_7, epsilon = 1e-2);
    }

    #[test]
    fn test_exponential_sweep_to_zero_falls_back_to_linear() {
        let sweep = Sweep::exponential(0.2, 0.0);
        assert_relative_eq!(sweep.value_at(0.5), 0.1);
    }

    #[test]
    fn test_partial_sweep_holds_end_value() {
        let sweep = Sweep::linear(400.0, 800.0).within(0.5);
        assert_relative_eq!(sweep.value_at(0.25), 600.0);
        assert_relative_eq!(sweep.value_at(0.5), 800.0);
        assert_relative_eq!(sweep.value_at(0.9), 800.0);
        assert_relative_eq!(Sweep::linear(1.0, 2.0).within(4.0).span, 1.0);
    }

    #[test]
    fn test_sample_count_matches_duration() {
        let tone = beep();
        assert_eq!(tone.sample_count(44_100), 13_230);
        assert_eq!(tone.samples(44_100).count(), 13_230);
        assert_eq!(tone.samples(44_100).len(), 13_230);
    }

    #[test]
    fn test_samples_stay_within_gain() {
        let tone = beep();
        assert!(tone.samples(8_000).all(|s| s.abs() <= 0.1 + 1e-6));
    }

    #[test]
    fn test_zero_duration_is_silent() {
        let tone = Tone { duration: 0.0, ..beep() };
        assert_eq!(tone.samples(44_100).next(), None);
    }
}
