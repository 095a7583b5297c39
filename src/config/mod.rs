//! Configuration APIs for spanscan
//!
//! Search behavior is tuned through plain configuration values that callers
//! construct and pass in explicitly. Nothing here is global: a [`SearchConfig`]
//! is copied into each [`SpanSearch`](crate::SpanSearch) and never mutated.
//!
//! # Configuration Traits
//!
//! The [`Config`] trait provides validation, environment initialization,
//! presets and JSON persistence for all configuration types.
//!
//! # Preset Configurations
//!
//! ```rust
//! use spanscan::config::{Config, SearchConfig};
//!
//! // Every fast path enabled, lowest thresholds
//! let config = SearchConfig::performance_preset();
//! assert!(config.bitwise_fast_path);
//!
//! // Element-wise comparison everywhere
//! let config = SearchConfig::memory_preset();
//! assert!(!config.bitwise_fast_path);
//! ```
//!
//! # Environment Initialization
//!
//! ```rust
//! use spanscan::config::{Config, SearchConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads SPANSCAN_SEARCH_* variables, falling back to defaults
//! let config = SearchConfig::from_env()?;
//! assert!(config.validate().is_ok());
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod search;


pub use search::SearchConfig;

/// Environment variable prefix used by [`Config::from_env`].
pub const ENV_PREFIX: &str = "SPANSCAN_";

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, `Err` with details if invalid.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `SPANSCAN_{COMPONENT}_{FIELD}`,
    /// for example `SPANSCAN_SEARCH_BYTE_SCAN_MIN_LEN=64`.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix(ENV_PREFIX)
    }

    /// Initialize configuration from environment variables with a custom prefix.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The environment variable prefix to use
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Get a performance-optimized preset configuration.
    fn performance_preset() -> Self;

    /// Get a memory-optimized preset configuration.
    ///
    /// Favors the smallest code paths over throughput.
    fn memory_preset() -> Self;

    /// Get a real-time preset configuration.
    ///
    /// Favors predictable per-call cost over peak throughput.
    fn realtime_preset() -> Self;

    /// Get a balanced preset configuration.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a file as JSON.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load configuration from a JSON file and validate it.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Configuration validation error details.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// The invalid value
    pub value: String,
    /// Description of why the value is invalid
    pub reason: String,
    /// Suggested valid values or ranges
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Create a new validation error.
    ///
    /// # Arguments
    ///
    /// * `field` - The field name that failed validation
    /// * `value` - The invalid value
    /// * `reason` - Description of why the value is invalid
    pub fn new(field: &str, value: &str, reason: &str) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
            suggestion: None,
        }
    }

    /// Add a suggestion for valid values.
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid configuration for field '{}': value '{}' is invalid ({})",
            self.field, self.value, self.reason
        )?;

        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". Suggested values: {}", suggestion)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean environment variable.
///
/// Accepts "true", "1", "yes", "on" (case-insensitive) as true,
/// everything else as false. Unset variables yield `default`.
pub fn parse_env_bool(var_name: &str, default: bool) -> bool {
    env::var(var_name)
        .ok()
        .map(|s| {
            let s = s.to_lowercase();
            matches!(s.as_str(), "true" | "1" | "yes" | "on")
        })
        .unwrap_or(default)
}
