//! Stochastic point process labs, a Bernoulli trial generator and a Poisson
//! spike train generator, both advanced by elapsed wall clock time so their
//! expected event rate does not depend on how often they are ticked.

pub mod bernoulli;
pub mod histogram;
pub mod poisson;

pub use crate::distribution::exponential_density as theoretical_density;


/// Handles resetting accumulated state of a point process simulator
pub trait PointProcess {
    /// Clears every recorded outcome or event
    fn reset(&mut self);
}

/// Probability of an event during a tick lasting `elapsed` seconds for a
/// process with the given rate (events per second)
pub fn event_probability(rate: f32, elapsed: f32) -> f32 {
    rate * elapsed
}
