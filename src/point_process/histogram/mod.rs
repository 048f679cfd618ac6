//! Equal width binning of inter-spike intervals for comparison against the
//! exponential density expected of a Poisson process.

use crate::distribution::exponential_density;
use crate::error::HistogramError;


/// Histogram of intervals over `[0, max)`, values outside the range are dropped
#[derive(Debug, Clone, PartialEq)]
pub struct IsiHistogram {
    counts: Vec<usize>,
    max: f32,
    total: usize,
}

impl IsiHistogram {
    /// Creates an empty histogram with `bins` equal width bins over `[0, max)`
    pub fn new(bins: usize, max: f32) -> Result<Self, HistogramError> {
        if bins == 0 {
            return Err(HistogramError::ZeroBins);
        }
        if !max.is_finite() || max <= 0. {
            return Err(HistogramError::InvalidRange);
        }

        Ok(IsiHistogram { counts: vec![0; bins], max, total: 0 })
    }

    /// Bins every value of the given intervals
    pub fn from_intervals(intervals: &[f32], bins: usize, max: f32) -> Result<Self, HistogramError> {
        let mut histogram = IsiHistogram::new(bins, max)?;
        for interval in intervals {
            histogram.add(*interval);
        }

        Ok(histogram)
    }

    /// Adds an interval to its bin, returns whether it fell inside the range
    pub fn add(&mut self, interval: f32) -> bool {
        if !(0. ..self.max).contains(&interval) {
            return false;
        }

        let index = ((interval / self.bin_width()) as usize).min(self.counts.len() - 1);
        self.counts[index] += 1;
        self.total += 1;

        true
    }

    pub fn bin_width(&self) -> f32 {
        self.max / self.counts.len() as f32
    }

    /// Number of binned intervals
    pub fn total(&self) -> usize {
        self.total
    }

    /// Raw count per bin
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Midpoint of every bin
    pub fn bin_centers(&self) -> Vec<f32> {
        let width = self.bin_width();

        (0..self.counts.len())
            .map(|i| (i as f32 + 0.5) * width)
            .collect()
    }

    /// Counts normalized to a probability density (`count / (total * bin_width)`),
    /// all zero when nothing has been binned
    pub fn densities(&self) -> Vec<f32> {
        if self.total == 0 {
            return vec![0.; self.counts.len()];
        }

        let scale = self.total as f32 * self.bin_width();

        self.counts.iter()
            .map(|i| *i as f32 / scale)
            .collect()
    }

    /// Exponential density for the given rate sampled at each bin center
    pub fn theoretical_densities(&self, rate: f32) -> Vec<f32> {
        self.bin_centers()
            .iter()
            .map(|t| exponential_density(rate, *t))
            .collect()
    }
}
