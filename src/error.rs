//! Error types shared by the filter entry points.

use thiserror::Error;

/// Failures the filter entry points can report.
///
/// All conditions are detected synchronously before or during the single
/// processing pass. The same inputs always produce the same outcome, so
/// there is nothing to retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Kernel dimension is even or zero, or the coefficient slice does not
    /// match the declared dimension.
    #[error("kernel dimension must be odd and non-zero, got {size}")]
    InvalidKernelShape { size: usize },

    /// The operation requires at least one pixel.
    #[error("image must have non-zero width and height")]
    EmptyImage,

    /// Luma conversion was given a channel count it cannot interpret.
    #[error("unsupported channel count {channels}, expected 1, 3 or 4")]
    UnsupportedChannels { channels: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FilterError>;
