//! Poisson spike train lab, events are emitted with a probability proportional
//! to rate and elapsed time and only those inside a trailing time window are kept.

use std::collections::VecDeque;
use rand::{Rng, rngs::ThreadRng};
use crate::distribution::bernoulli_event;
use crate::error::{HistogramError, PointProcessError};
use super::{PointProcess, event_probability, histogram::IsiHistogram};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Configuration of the Poisson simulator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoissonParams {
    /// Length of the trailing window events are retained for (s)
    pub window: f32,
    /// Number of histogram bins
    pub bins: usize,
    /// Upper edge of the histogram (s)
    pub max_isi: f32,
}

impl Default for PoissonParams {
    fn default() -> Self {
        PoissonParams {
            window: 10., // s
            bins: 20,
            max_isi: 0.5, // s
        }
    }
}

impl PoissonParams {
    pub fn default_impl() -> Self {
        PoissonParams::default()
    }
}

/// Summary of the retained spike train
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoissonStats {
    /// Number of retained events
    pub event_count: usize,
    /// Events per second over the span of the trailing window
    pub observed_rate: f32,
    /// Mean inter-spike interval (s), `None` with fewer than two events
    pub mean_isi: Option<f32>,
    /// Standard deviation divided by mean of the intervals, close to `1` for a
    /// Poisson process
    pub coefficient_of_variation: Option<f32>,
}

/// Poisson-like event generator driven by elapsed wall clock time
#[derive(Debug, Clone)]
pub struct PoissonSimulator<R: Rng = ThreadRng> {
    params: PoissonParams,
    spike_times: VecDeque<f32>,
    rng: R,
}

impl PoissonSimulator<ThreadRng> {
    /// Returns the default simulator using the thread local random source
    pub fn default_impl() -> Self {
        PoissonSimulator {
            params: PoissonParams::default_impl(),
            spike_times: VecDeque::new(),
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> PoissonSimulator<R> {
    /// Creates a simulator drawing from the given random source
    pub fn with_rng(params: PoissonParams, rng: R) -> Result<Self, PointProcessError> {
        if !params.window.is_finite() || params.window <= 0. {
            return Err(PointProcessError::InvalidTimeWindow);
        }

        Ok(PoissonSimulator { params, spike_times: VecDeque::new(), rng })
    }

    /// Emits an event at `now` (s) with probability `rate * elapsed`, then prunes
    /// events older than the trailing window, returns whether an event was emitted
    pub fn observe_tick(&mut self, rate: f32, elapsed: f32, now: f32) -> bool {
        let emitted = bernoulli_event(event_probability(rate, elapsed), &mut self.rng);
        if emitted {
            self.spike_times.push_back(now);

            tracing::trace!(time = now, "poisson event");
        }

        self.prune(now);

        emitted
    }

    fn prune(&mut self, now: f32) {
        let cutoff = now - self.params.window;

        while let Some(oldest) = self.spike_times.front() {
            if *oldest >= cutoff {
                break;
            }
            self.spike_times.pop_front();
        }
    }

    /// Retained event times from oldest to newest (s)
    pub fn spike_times(&self) -> &VecDeque<f32> {
        &self.spike_times
    }

    /// Differences between consecutive retained event times (s)
    pub fn isis(&self) -> Vec<f32> {
        self.spike_times.iter()
            .zip(self.spike_times.iter().skip(1))
            .map(|(earlier, later)| later - earlier)
            .collect()
    }

    /// Bins the current intervals over `[0, max_isi)`
    pub fn isi_histogram(&self, bins: usize, max_isi: f32) -> Result<IsiHistogram, HistogramError> {
        IsiHistogram::from_intervals(&self.isis(), bins, max_isi)
    }

    /// Bins the current intervals using the configured bin count and range
    pub fn default_histogram(&self) -> Result<IsiHistogram, HistogramError> {
        self.isi_histogram(self.params.bins, self.params.max_isi)
    }

    pub fn stats(&self) -> PoissonStats {
        let event_count = self.spike_times.len();
        let isis = self.isis();

        let observed_rate = match (self.spike_times.front(), self.spike_times.back()) {
            (Some(first), Some(last)) if last > first => (event_count - 1) as f32 / (last - first),
            _ => 0.,
        };

        if isis.is_empty() {
            return PoissonStats { event_count, observed_rate, ..PoissonStats::default() };
        }

        let n = isis.len() as f32;
        let mean = isis.iter().sum::<f32>() / n;
        let variance = isis.iter()
            .map(|i| (i - mean).powf(2.))
            .sum::<f32>() / n;
        let coefficient_of_variation = if mean > 0. {
            Some(variance.sqrt() / mean)
        } else {
            None
        };

        PoissonStats {
            event_count,
            observed_rate,
            mean_isi: Some(mean),
            coefficient_of_variation,
        }
    }

    pub fn params(&self) -> &PoissonParams {
        &self.params
    }
}

impl<R: Rng> PointProcess for PoissonSimulator<R> {
    fn reset(&mut self) {
        self.spike_times.clear();

        tracing::debug!("poisson simulator reset");
    }
}
