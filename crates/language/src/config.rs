//! Loader configuration.
//!
//! The configuration is supplied by the embedding runtime, typically as a
//! TOML fragment:
//!
//! ```toml
//! [versions]
//! min = 13
//! max = 14
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::version::VersionRange;

/// Errors that can occur when building a loader configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("invalid version range: min {min} is greater than max {max}")]
	InvertedRange { min: u32, max: u32 },

	#[error("failed to parse loader config: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Settings for [`Loader`](crate::Loader).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
	/// Artifact versions the runtime accepts.
	pub versions: VersionRange,
}

impl LoaderConfig {
	pub const fn new(versions: VersionRange) -> Self {
		Self { versions }
	}

	pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}
}
