use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for potential trace history errors
pub enum HistoryError {
    /// History must be able to hold at least one sample
    ZeroCapacity,
}

impl Display for HistoryError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            HistoryError::ZeroCapacity => "History capacity must be greater than zero",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for HistoryError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for potential histogram errors
pub enum HistogramError {
    /// Histogram must have at least one bin
    ZeroBins,
    /// Upper edge of the histogram must be positive and finite
    InvalidRange,
}

impl Display for HistogramError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            HistogramError::ZeroBins => "Histogram must have at least one bin",
            HistogramError::InvalidRange => "Histogram range must be positive and finite",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for HistogramError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for potential point process simulator errors
pub enum PointProcessError {
    /// Outcome window must be able to hold at least one trial
    ZeroWindow,
    /// Trailing time window must be positive and finite
    InvalidTimeWindow,
}

impl Display for PointProcessError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let err_msg = match self {
            PointProcessError::ZeroWindow => "Outcome window must hold at least one trial",
            PointProcessError::InvalidTimeWindow => "Trailing time window must be positive and finite",
        };

        write!(f, "{}", err_msg)
    }
}

impl Debug for PointProcessError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
pub enum NeuronLabsError {
    /// Errors related to trace history
    HistoryRelatedError(HistoryError),
    /// Errors related to histograms
    HistogramRelatedError(HistogramError),
    /// Errors related to point process simulators
    PointProcessRelatedError(PointProcessError),
}

impl Display for NeuronLabsError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            NeuronLabsError::HistoryRelatedError(err) => write!(f, "{}", err),
            NeuronLabsError::HistogramRelatedError(err) => write!(f, "{}", err),
            NeuronLabsError::PointProcessRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for NeuronLabsError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl std::error::Error for NeuronLabsError {}

impl From<HistoryError> for NeuronLabsError {
    fn from(err: HistoryError) -> NeuronLabsError {
        NeuronLabsError::HistoryRelatedError(err)
    }
}

impl From<HistogramError> for NeuronLabsError {
    fn from(err: HistogramError) -> NeuronLabsError {
        NeuronLabsError::HistogramRelatedError(err)
    }
}

impl From<PointProcessError> for NeuronLabsError {
    fn from(err: PointProcessError) -> NeuronLabsError {
        NeuronLabsError::PointProcessRelatedError(err)
    }
}
