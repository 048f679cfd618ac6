//! Input current generators that drive the integrate and fire lab.

use std::f32::consts::PI;
use rand::Rng;
use crate::distribution::gaussian;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Which generator produces the drive current
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputMode {
    /// Baseline current held constant
    #[default]
    Constant,
    /// Periodic rectangular pulses
    Pulse,
    /// Normally distributed current redrawn every step
    Noise,
    /// Sinusoidal current
    Sine,
}

/// Periodic rectangular pulse train
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PulseConfig {
    /// Time between pulse onsets (ms)
    pub interval: f32,
    /// Duration of each pulse (ms)
    pub width: f32,
    /// Current during a pulse (nA)
    pub amplitude: f32,
}

impl Default for PulseConfig {
    fn default() -> Self {
        PulseConfig {
            interval: 50., // ms
            width: 10., // ms
            amplitude: 3., // nA
        }
    }
}

impl PulseConfig {
    /// Current at the given time, the pulse is on while `time mod interval < width`,
    /// a non-positive interval never pulses
    pub fn current_at(&self, time: f32) -> f32 {
        if self.interval <= 0. {
            return 0.;
        }

        if time.rem_euclid(self.interval) < self.width {
            self.amplitude
        } else {
            0.
        }
    }
}

/// Gaussian noise current
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NoiseConfig {
    /// Mean current (nA)
    pub mean: f32,
    /// Standard deviation of the current (nA)
    pub sigma: f32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        NoiseConfig {
            mean: 1.5, // nA
            sigma: 1., // nA
        }
    }
}

impl NoiseConfig {
    /// Draws a current sample
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        gaussian(self.mean, self.sigma, rng)
    }
}

/// Sinusoidal current
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SineConfig {
    /// Oscillation frequency (Hz)
    pub frequency: f32,
    /// Peak current (nA)
    pub amplitude: f32,
}

impl Default for SineConfig {
    fn default() -> Self {
        SineConfig {
            frequency: 10., // Hz
            amplitude: 3., // nA
        }
    }
}

impl SineConfig {
    /// Current at the given simulation time (ms)
    pub fn current_at(&self, time: f32) -> f32 {
        let seconds = time / 1000.;

        self.amplitude * (2. * PI * self.frequency * seconds).sin()
    }
}

/// Every generator's configuration, only the record matching the selected
/// [`InputMode`] is read
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputCurrent {
    /// Selected generator
    pub mode: InputMode,
    /// Current used in [`InputMode::Constant`] (nA)
    pub base_current: f32,
    pub pulse: PulseConfig,
    pub noise: NoiseConfig,
    pub sine: SineConfig,
}

impl Default for InputCurrent {
    fn default() -> Self {
        InputCurrent {
            mode: InputMode::Constant,
            base_current: 2., // nA
            pulse: PulseConfig::default(),
            noise: NoiseConfig::default(),
            sine: SineConfig::default(),
        }
    }
}

impl InputCurrent {
    /// Constant current input
    pub fn constant(base_current: f32) -> Self {
        InputCurrent { mode: InputMode::Constant, base_current, ..InputCurrent::default() }
    }

    /// Pulse train input
    pub fn pulse(pulse: PulseConfig) -> Self {
        InputCurrent { mode: InputMode::Pulse, pulse, ..InputCurrent::default() }
    }

    /// Gaussian noise input
    pub fn noise(noise: NoiseConfig) -> Self {
        InputCurrent { mode: InputMode::Noise, noise, ..InputCurrent::default() }
    }

    /// Sinusoidal input
    pub fn sine(sine: SineConfig) -> Self {
        InputCurrent { mode: InputMode::Sine, sine, ..InputCurrent::default() }
    }

    /// Calculates the instantaneous current at `time` (ms), the random source is
    /// only drawn from in [`InputMode::Noise`]
    pub fn current_at<R: Rng + ?Sized>(&self, time: f32, rng: &mut R) -> f32 {
        match self.mode {
            InputMode::Constant => self.base_current,
            InputMode::Pulse => self.pulse.current_at(time),
            InputMode::Noise => self.noise.sample(rng),
            InputMode::Sine => self.sine.current_at(time),
        }
    }
}
