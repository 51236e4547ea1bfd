//! Artifact ABI versions understood by this runtime.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Deserialize;

use crate::config::ConfigError;

/// Newest artifact version this runtime reads.
pub const LANGUAGE_VERSION: u32 = 14;

/// Oldest artifact version this runtime still reads.
pub const MIN_COMPATIBLE_LANGUAGE_VERSION: u32 = 13;

/// Inclusive range of accepted artifact versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct VersionRange {
	min: u32,
	max: u32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRange {
	min: u32,
	max: u32,
}

impl TryFrom<RawRange> for VersionRange {
	type Error = ConfigError;

	fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
		Self::new(raw.min, raw.max)
	}
}

impl VersionRange {
	/// `MIN_COMPATIBLE_LANGUAGE_VERSION..=LANGUAGE_VERSION`.
	pub const DEFAULT: Self = Self {
		min: MIN_COMPATIBLE_LANGUAGE_VERSION,
		max: LANGUAGE_VERSION,
	};

	pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
		if min > max {
			return Err(ConfigError::InvertedRange { min, max });
		}
		Ok(Self { min, max })
	}

	pub const fn exact(version: u32) -> Self {
		Self {
			min: version,
			max: version,
		}
	}

	pub const fn min(self) -> u32 {
		self.min
	}

	pub const fn max(self) -> u32 {
		self.max
	}

	pub const fn contains(self, version: u32) -> bool {
		self.min <= version && version <= self.max
	}
}

impl Default for VersionRange {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl From<VersionRange> for RangeInclusive<u32> {
	fn from(range: VersionRange) -> Self {
		range.min..=range.max
	}
}

impl fmt::Display for VersionRange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.min == self.max {
			write!(f, "{}", self.min)
		} else {
			write!(f, "{}..={}", self.min, self.max)
		}
	}
}
