//! Artifact layout constants.

use std::fmt;
use std::mem::size_of;

/// Magic bytes identifying a precompiled grammar table.
pub const MAGIC: &[u8; 8] = b"TSLANGv1";

/// Version written by [`ArtifactBuilder`](crate::ArtifactBuilder) unless overridden.
pub const CURRENT_VERSION: u32 = 14;

/// First version whose artifacts carry [`Section::PrimaryStateIds`].
pub const PRIMARY_STATE_IDS_VERSION: u32 = 14;

/// Bytes needed to read the magic and the version tag.
pub const TAG_LEN: usize = MAGIC.len() + size_of::<u32>();

/// Bytes of the fixed header, up to and including `section_count`.
pub const FIXED_HEADER_LEN: usize = offsets::DIRECTORY;

/// Bytes per `(offset, len)` directory entry.
pub const DIRECTORY_ENTRY_LEN: usize = 2 * size_of::<u32>();

/// Bytes per symbol in [`Section::SymbolMetadata`].
pub const SYMBOL_METADATA_ENTRY_LEN: u64 = 1;

/// Bytes per entry in [`Section::ParseTable`].
pub const PARSE_TABLE_ENTRY_LEN: u64 = size_of::<u16>() as u64;

/// Bytes per state in [`Section::LexModes`] (`lex_state`, `external_lex_state`).
pub const LEX_MODE_ENTRY_LEN: u64 = 2 * size_of::<u16>() as u64;

/// Bytes per state in [`Section::PrimaryStateIds`].
pub const STATE_ID_ENTRY_LEN: u64 = size_of::<u16>() as u64;

/// Most parse states an artifact can declare; state ids are `u16`.
pub const MAX_STATE_COUNT: u32 = u16::MAX as u32 + 1;

/// Byte offsets of the fixed header fields.
pub mod offsets {
	pub const MAGIC: usize = 0;
	pub const VERSION: usize = 8;
	pub const SYMBOL_COUNT: usize = 12;
	pub const TOKEN_COUNT: usize = 16;
	pub const EXTERNAL_TOKEN_COUNT: usize = 20;
	pub const STATE_COUNT: usize = 24;
	pub const LARGE_STATE_COUNT: usize = 28;
	pub const FIELD_COUNT: usize = 32;
	pub const SECTION_COUNT: usize = 36;
	pub const DIRECTORY: usize = 40;
}

/// Total header length for a directory of `section_count` entries.
pub const fn header_len(section_count: usize) -> usize {
	FIXED_HEADER_LEN + section_count * DIRECTORY_ENTRY_LEN
}

/// Payload sections, in directory order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
	/// UTF-8 language name.
	Name,
	/// NUL-terminated symbol names, one per symbol.
	SymbolNames,
	/// One flag byte per symbol.
	SymbolMetadata,
	/// NUL-terminated field names, one per field.
	FieldNames,
	/// Dense parse actions for the large states.
	ParseTable,
	/// Lexer modes, one entry per state.
	LexModes,
	/// Canonical state ids, one entry per state.
	PrimaryStateIds,
}

impl Section {
	pub const ALL: [Section; 7] = [
		Section::Name,
		Section::SymbolNames,
		Section::SymbolMetadata,
		Section::FieldNames,
		Section::ParseTable,
		Section::LexModes,
		Section::PrimaryStateIds,
	];

	/// Sections present in artifacts of the given version, in directory order.
	pub fn for_version(version: u32) -> &'static [Section] {
		static SECTIONS: [Section; 7] = Section::ALL;
		if version >= PRIMARY_STATE_IDS_VERSION {
			&SECTIONS
		} else {
			&SECTIONS[..SECTIONS.len() - 1]
		}
	}

	/// Position of this section in the directory.
	pub const fn index(self) -> usize {
		self as usize
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Section::Name => "name",
			Section::SymbolNames => "symbol_names",
			Section::SymbolMetadata => "symbol_metadata",
			Section::FieldNames => "field_names",
			Section::ParseTable => "parse_table",
			Section::LexModes => "lex_modes",
			Section::PrimaryStateIds => "primary_state_ids",
		}
	}
}

impl fmt::Display for Section {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn version_14_adds_primary_state_ids() {
		assert_eq!(Section::for_version(13).len(), 6);
		assert!(!Section::for_version(13).contains(&Section::PrimaryStateIds));
		assert_eq!(Section::for_version(14), &Section::ALL);
		assert_eq!(Section::for_version(15), &Section::ALL);
	}

	#[test]
	fn directory_order_matches_index() {
		for (i, section) in Section::ALL.iter().enumerate() {
			assert_eq!(section.index(), i);
		}
	}

	#[test]
	fn header_len_counts_directory() {
		assert_eq!(FIXED_HEADER_LEN, 40);
		assert_eq!(header_len(7), 96);
	}
}
