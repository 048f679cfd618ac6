//! Random draws used by the stochastic parts of the labs, every function
//! takes the random source explicitly so callers can substitute a seeded one.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};


/// Draws a standard normally distributed value (mean `0`, standard deviation `1`)
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    StandardNormal.sample(rng)
}

/// Draws from a normal distribution with the given mean and standard deviation,
/// if standard deviation is `0.` the mean is always returned, a negative standard
/// deviation mirrors the distribution rather than failing
pub fn gaussian<R: Rng + ?Sized>(mean: f32, std: f32, rng: &mut R) -> f32 {
    if std == 0.0 {
        return mean;
    }

    mean + std * standard_normal(rng)
}

/// Returns `true` with the given probability, probabilities at or above `1` always
/// succeed and probabilities at or below `0` never do
pub fn bernoulli_event<R: Rng + ?Sized>(probability: f32, rng: &mut R) -> bool {
    rng.gen::<f32>() < probability
}

/// Probability density of the exponential distribution with the given rate at `t`,
/// the expected inter-event interval distribution of a Poisson process
pub fn exponential_density(rate: f32, t: f32) -> f32 {
    rate * (-rate * t).exp()
}
