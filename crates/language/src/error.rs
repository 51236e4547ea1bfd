//! Load failures.

use sindarin_artifact::{HeaderError, Section};
use thiserror::Error;

use crate::version::VersionRange;

/// Coarse classification of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	MissingArtifact,
	IncompatibleVersion,
	CorruptArtifact,
}

/// Why an artifact was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
	#[error("no grammar artifact supplied")]
	MissingArtifact,

	#[error("incompatible grammar artifact version {found}, runtime supports {expected}")]
	IncompatibleVersion { found: u32, expected: VersionRange },

	#[error("corrupt grammar artifact: {0}")]
	CorruptArtifact(#[from] Corruption),
}

impl LoadError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::MissingArtifact => ErrorKind::MissingArtifact,
			Self::IncompatibleVersion { .. } => ErrorKind::IncompatibleVersion,
			Self::CorruptArtifact(_) => ErrorKind::CorruptArtifact,
		}
	}
}

impl From<HeaderError> for LoadError {
	fn from(err: HeaderError) -> Self {
		Self::CorruptArtifact(Corruption::Header(err))
	}
}

/// The structural check an artifact failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Corruption {
	#[error(transparent)]
	Header(#[from] HeaderError),

	#[error("{section} section ({offset}+{len}) extends past the {payload_len}-byte payload")]
	DanglingSection {
		section: Section,
		offset: u32,
		len: u32,
		payload_len: usize,
	},

	#[error("{section} section overlaps {previous}")]
	OverlappingSections { previous: Section, section: Section },

	#[error("{count} ({value}) exceeds {bound} ({limit})")]
	InconsistentCounts {
		count: &'static str,
		value: u32,
		bound: &'static str,
		limit: u32,
	},

	#[error("state_count ({state_count}) exceeds the 65536 states addressable by u16 state ids")]
	StateIdOverflow { state_count: u32 },

	#[error("language name is empty or not valid UTF-8")]
	InvalidName,

	#[error("{section} section ends inside an unterminated string")]
	UnterminatedString { section: Section },

	#[error("header declares {declared} symbols, symbol name table holds {actual}")]
	SymbolCount { declared: u32, actual: usize },

	#[error("header declares {declared} fields, field name table holds {actual}")]
	FieldCount { declared: u32, actual: usize },

	#[error("{section} section is {actual} bytes, counts imply {expected}")]
	SectionLength { section: Section, expected: u64, actual: u64 },
}
