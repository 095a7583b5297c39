//! Error handling for the spanscan library
//!
//! Search misses are never errors: they surface as `None`. The variants here
//! cover range validation on spans and configuration handling.

use thiserror::Error;

/// Main error type for the spanscan library
#[derive(Error, Debug)]
pub enum SpanError {
    /// Index or length reaching past the underlying storage
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The offending index or end offset
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// Range whose start lies after its end, or whose end overflows
    #[error("Invalid range: start {start}, end {end}")]
    InvalidRange {
        /// Start offset of the requested range
        start: usize,
        /// End offset of the requested range
        end: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// I/O related errors (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpanError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create an invalid range error
    pub fn invalid_range(start: usize, end: usize) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::OutOfBounds { .. } => false,
            Self::InvalidRange { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "bounds",
            Self::InvalidRange { .. } => "range",
            Self::Configuration { .. } => "config",
            Self::Io(_) => "io",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SpanError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(SpanError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that a range is within bounds
#[inline]
pub fn check_range(start: usize, end: usize, size: usize) -> Result<()> {
    if start > end {
        return Err(SpanError::invalid_range(start, end));
    }
    if end > size {
        return Err(SpanError::out_of_bounds(end, size));
    }
    Ok(())
}

/// Resolve `start + len` into a validated end offset for storage of `size`
#[inline]
pub fn checked_end(start: usize, len: usize, size: usize) -> Result<usize> {
    let end = start
        .checked_add(len)
        .ok_or_else(|| SpanError::invalid_range(start, usize::MAX))?;
    check_range(start, end, size)?;
    Ok(end)
}
