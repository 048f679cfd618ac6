//! Coin flip lab, trials arrive at a fixed intrinsic rate and the most recent
//! outcomes are kept in a sliding window.

use std::collections::VecDeque;
use rand::{Rng, rngs::ThreadRng};
use crate::distribution::bernoulli_event;
use crate::error::PointProcessError;
use super::{PointProcess, event_probability};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Configuration of the Bernoulli simulator
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BernoulliParams {
    /// Expected number of trials per second
    pub flip_rate: f32,
    /// Number of outcomes retained
    pub window: usize,
}

impl Default for BernoulliParams {
    fn default() -> Self {
        BernoulliParams {
            flip_rate: 5., // trials per second
            window: 100,
        }
    }
}

impl BernoulliParams {
    pub fn default_impl() -> Self {
        BernoulliParams::default()
    }
}

/// Counts over the current outcome window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BernoulliStats {
    pub success_count: usize,
    pub total: usize,
}

impl BernoulliStats {
    /// Empirical success ratio, `0` when no trials have been observed
    pub fn ratio(&self) -> f32 {
        if self.total == 0 {
            return 0.;
        }

        self.success_count as f32 / self.total as f32
    }
}

/// Bernoulli trial generator driven by elapsed wall clock time
#[derive(Debug, Clone)]
pub struct BernoulliSimulator<R: Rng = ThreadRng> {
    params: BernoulliParams,
    outcomes: VecDeque<bool>,
    success_count: usize,
    rng: R,
}

impl BernoulliSimulator<ThreadRng> {
    /// Returns the default simulator using the thread local random source
    pub fn default_impl() -> Self {
        let params = BernoulliParams::default_impl();

        BernoulliSimulator {
            params,
            outcomes: VecDeque::with_capacity(params.window),
            success_count: 0,
            rng: rand::thread_rng(),
        }
    }
}

impl<R: Rng> BernoulliSimulator<R> {
    /// Creates a simulator drawing from the given random source
    pub fn with_rng(params: BernoulliParams, rng: R) -> Result<Self, PointProcessError> {
        if params.window == 0 {
            return Err(PointProcessError::ZeroWindow);
        }

        Ok(BernoulliSimulator {
            params,
            outcomes: VecDeque::with_capacity(params.window),
            success_count: 0,
            rng,
        })
    }

    /// Possibly draws a trial with success probability `p`, a trial occurs with
    /// probability `flip_rate * elapsed` (seconds), returns the outcome if one occurred
    pub fn observe_tick(&mut self, p: f32, elapsed: f32) -> Option<bool> {
        let chance = event_probability(self.params.flip_rate, elapsed);
        if !bernoulli_event(chance, &mut self.rng) {
            return None;
        }

        let outcome = bernoulli_event(p, &mut self.rng);
        self.record(outcome);

        Some(outcome)
    }

    /// Appends an outcome to the window, dropping the oldest when full
    pub fn record(&mut self, outcome: bool) {
        if self.outcomes.len() == self.params.window {
            if let Some(true) = self.outcomes.pop_front() {
                self.success_count -= 1;
            }
        }

        if outcome {
            self.success_count += 1;
        }
        self.outcomes.push_back(outcome);
    }

    pub fn stats(&self) -> BernoulliStats {
        BernoulliStats { success_count: self.success_count, total: self.outcomes.len() }
    }

    /// Outcomes from oldest to newest as `0` or `1`
    pub fn outcomes(&self) -> Vec<u8> {
        self.outcomes.iter().map(|i| *i as u8).collect()
    }

    pub fn params(&self) -> &BernoulliParams {
        &self.params
    }
}

impl<R: Rng> PointProcess for BernoulliSimulator<R> {
    fn reset(&mut self) {
        self.outcomes.clear();
        self.success_count = 0;

        tracing::debug!("bernoulli simulator reset");
    }
}
