//! Bounded rolling history of integrate and fire samples along with a frozen
//! ghost copy used for before and after comparisons.

use std::collections::VecDeque;
use std::collections::vec_deque::Iter;
use crate::error::HistoryError;
use super::integrate_and_fire::LifStepResult;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// One recorded step of the simulation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationSample {
    /// Time (ms)
    pub time: f32,
    /// Membrane potential (mV)
    pub voltage: f32,
    /// Whether the neuron spiked on this step
    pub spiked: bool,
    /// Input current (nA)
    pub applied_current: f32,
}

impl From<&LifStepResult> for SimulationSample {
    fn from(result: &LifStepResult) -> Self {
        SimulationSample {
            time: result.time,
            voltage: result.voltage,
            spiked: result.spiked,
            applied_current: result.applied_current,
        }
    }
}

/// Fixed capacity FIFO of samples, once full the oldest sample is evicted
/// for every new one
#[derive(Debug, Clone)]
pub struct TraceHistory {
    samples: VecDeque<SimulationSample>,
    capacity: usize,
}

impl Default for TraceHistory {
    fn default() -> Self {
        TraceHistory {
            samples: VecDeque::with_capacity(TraceHistory::DEFAULT_CAPACITY),
            capacity: TraceHistory::DEFAULT_CAPACITY,
        }
    }
}

impl TraceHistory {
    pub const DEFAULT_CAPACITY: usize = 500;

    /// Creates an empty history holding at most `capacity` samples
    pub fn new(capacity: usize) -> Result<Self, HistoryError> {
        if capacity == 0 {
            return Err(HistoryError::ZeroCapacity);
        }

        Ok(TraceHistory { samples: VecDeque::with_capacity(capacity), capacity })
    }

    /// Appends a sample, evicting the oldest if over capacity
    pub fn push(&mut self, sample: SimulationSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }

        self.samples.push_back(sample);
    }

    /// Freezes a copy of the current contents
    pub fn snapshot(&self) -> GhostTrace {
        GhostTrace { samples: self.samples.iter().copied().collect() }
    }

    /// Removes every sample, capacity is kept
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest retained sample
    pub fn first(&self) -> Option<&SimulationSample> {
        self.samples.front()
    }

    /// Most recent sample
    pub fn last(&self) -> Option<&SimulationSample> {
        self.samples.back()
    }

    pub fn get(&self, index: usize) -> Option<&SimulationSample> {
        self.samples.get(index)
    }

    /// Iterates from oldest to newest
    pub fn iter(&self) -> Iter<'_, SimulationSample> {
        self.samples.iter()
    }

    /// Number of spikes currently retained
    pub fn spike_count(&self) -> usize {
        self.samples.iter().filter(|i| i.spiked).count()
    }
}

impl<'a> IntoIterator for &'a TraceHistory {
    type Item = &'a SimulationSample;
    type IntoIter = Iter<'a, SimulationSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Frozen copy of a [`TraceHistory`], it has no mutating methods
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GhostTrace {
    samples: Vec<SimulationSample>,
}

impl GhostTrace {
    /// Samples from oldest to newest
    pub fn samples(&self) -> &[SimulationSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimulationSample> {
        self.samples.iter()
    }
}
