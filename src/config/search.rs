//! Search fast-path configuration.

use super::{Config, ValidationError, parse_env_bool, parse_env_var};
use crate::error::{Result, SpanError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest byte length accepted as the `memchr` scan threshold.
pub const MIN_BYTE_SCAN_LEN: usize = 8;
/// Largest byte length accepted as the `memchr` scan threshold.
pub const MAX_BYTE_SCAN_LEN: usize = 4096;
/// Largest element count accepted as the byte-compare threshold.
pub const MAX_BYTE_COMPARE_LEN: usize = 1 << 20;

/// Tuning for the bitwise fast paths.
///
/// None of these settings change results: every combination produces the
/// same answers as plain element-wise comparison. They only choose which
/// code path computes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Let bit-comparable element types take the byte-level paths
    pub bitwise_fast_path: bool,
    /// Minimum haystack length in bytes before single-byte scans switch
    /// to `memchr`
    pub byte_scan_min_len: usize,
    /// Minimum element count before sequence comparison switches to a
    /// byte-range comparison
    pub byte_compare_min_len: usize,
}

impl SearchConfig {
    /// The default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        bitwise_fast_path: true,
        byte_scan_min_len: 32,
        byte_compare_min_len: 0,
    };

    /// Create the default configuration.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Set whether bit-comparable types may use byte-level paths.
    pub const fn with_bitwise_fast_path(mut self, enabled: bool) -> Self {
        self.bitwise_fast_path = enabled;
        self
    }

    /// Set the `memchr` scan threshold in bytes.
    pub const fn with_byte_scan_min_len(mut self, len: usize) -> Self {
        self.byte_scan_min_len = len;
        self
    }

    /// Set the byte-range comparison threshold in elements.
    pub const fn with_byte_compare_min_len(mut self, len: usize) -> Self {
        self.byte_compare_min_len = len;
        self
    }

    fn invalid(err: ValidationError) -> SpanError {
        SpanError::configuration(err.to_string())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Config for SearchConfig {
    fn validate(&self) -> Result<()> {
        if !(MIN_BYTE_SCAN_LEN..=MAX_BYTE_SCAN_LEN).contains(&self.byte_scan_min_len) {
            return Err(Self::invalid(
                ValidationError::new(
                    "byte_scan_min_len",
                    &self.byte_scan_min_len.to_string(),
                    "must cover at least one machine word and stay below the page size",
                )
                .with_suggestion(&format!("{}..={}", MIN_BYTE_SCAN_LEN, MAX_BYTE_SCAN_LEN)),
            ));
        }
        if self.byte_compare_min_len > MAX_BYTE_COMPARE_LEN {
            return Err(Self::invalid(
                ValidationError::new(
                    "byte_compare_min_len",
                    &self.byte_compare_min_len.to_string(),
                    "threshold would disable byte comparison for all practical inputs",
                )
                .with_suggestion(&format!("0..={}", MAX_BYTE_COMPARE_LEN)),
            ));
        }
        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.bitwise_fast_path = parse_env_bool(
            &format!("{}SEARCH_BITWISE", prefix),
            config.bitwise_fast_path,
        );
        config.byte_scan_min_len = parse_env_var(
            &format!("{}SEARCH_BYTE_SCAN_MIN_LEN", prefix),
            config.byte_scan_min_len,
        );
        config.byte_compare_min_len = parse_env_var(
            &format!("{}SEARCH_BYTE_COMPARE_MIN_LEN", prefix),
            config.byte_compare_min_len,
        );
        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            bitwise_fast_path: true,
            byte_scan_min_len: MIN_BYTE_SCAN_LEN,
            byte_compare_min_len: 0,
        }
    }

    fn memory_preset() -> Self {
        Self {
            bitwise_fast_path: false,
            byte_scan_min_len: MAX_BYTE_SCAN_LEN,
            byte_compare_min_len: MAX_BYTE_COMPARE_LEN,
        }
    }

    fn realtime_preset() -> Self {
        Self {
            bitwise_fast_path: true,
            byte_scan_min_len: 64,
            byte_compare_min_len: 16,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            SpanError::configuration(format!("Failed to serialize search config: {}", e))
        })?;
        std::fs::write(path.as_ref(), serialized).map_err(|e| {
            log::warn!(
                "Failed to write search config {}: {}",
                path.as_ref().display(),
                e
            );
            SpanError::Io(e)
        })?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            log::warn!(
                "Failed to read search config {}: {}",
                path.as_ref().display(),
                e
            );
            SpanError::Io(e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            SpanError::configuration(format!("Failed to parse search config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }
}
