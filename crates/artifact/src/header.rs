//! Defensive header decoding.
//!
//! Only the tag, the structural counts and the section directory are
//! decoded here. Section contents stay opaque.

use thiserror::Error;

use crate::format::{self, MAGIC, Section, TAG_LEN, offsets};

/// Errors raised while decoding the fixed-layout header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
	#[error("artifact truncated: header needs {needed} bytes, artifact has {found}")]
	Truncated { needed: usize, found: usize },

	#[error("bad magic bytes, not a grammar table artifact")]
	BadMagic,

	#[error("version {version} artifacts have {expected} sections, header declares {found}")]
	SectionCount { version: u32, expected: usize, found: u32 },
}

/// A section's position within the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionRange {
	pub offset: u32,
	pub len: u32,
}

impl SectionRange {
	/// One past the last payload byte of the section.
	pub fn end(self) -> u64 {
		u64::from(self.offset) + u64::from(self.len)
	}
}

/// Decoded fixed-layout header of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactHeader {
	pub version: u32,
	pub symbol_count: u32,
	pub token_count: u32,
	pub external_token_count: u32,
	pub state_count: u32,
	pub large_state_count: u32,
	pub field_count: u32,
	sections: [Option<SectionRange>; Section::ALL.len()],
	len: usize,
}

/// Reads the version tag after checking the magic.
pub fn read_version(bytes: &[u8]) -> Result<u32, HeaderError> {
	if bytes.len() < TAG_LEN {
		return Err(HeaderError::Truncated {
			needed: TAG_LEN,
			found: bytes.len(),
		});
	}
	if &bytes[offsets::MAGIC..offsets::MAGIC + MAGIC.len()] != MAGIC {
		return Err(HeaderError::BadMagic);
	}
	read_u32(bytes, offsets::VERSION)
}

impl ArtifactHeader {
	/// Decodes the header. Never reads section contents.
	pub fn read(bytes: &[u8]) -> Result<Self, HeaderError> {
		let version = read_version(bytes)?;

		let fixed = format::FIXED_HEADER_LEN;
		if bytes.len() < fixed {
			return Err(HeaderError::Truncated {
				needed: fixed,
				found: bytes.len(),
			});
		}

		let expected = Section::for_version(version);
		let declared = read_u32(bytes, offsets::SECTION_COUNT)?;
		if usize::try_from(declared).ok() != Some(expected.len()) {
			return Err(HeaderError::SectionCount {
				version,
				expected: expected.len(),
				found: declared,
			});
		}

		let len = format::header_len(expected.len());
		if bytes.len() < len {
			return Err(HeaderError::Truncated {
				needed: len,
				found: bytes.len(),
			});
		}

		let mut sections = [None; Section::ALL.len()];
		for &section in expected {
			let entry = offsets::DIRECTORY + section.index() * format::DIRECTORY_ENTRY_LEN;
			sections[section.index()] = Some(SectionRange {
				offset: read_u32(bytes, entry)?,
				len: read_u32(bytes, entry + 4)?,
			});
		}

		Ok(Self {
			version,
			symbol_count: read_u32(bytes, offsets::SYMBOL_COUNT)?,
			token_count: read_u32(bytes, offsets::TOKEN_COUNT)?,
			external_token_count: read_u32(bytes, offsets::EXTERNAL_TOKEN_COUNT)?,
			state_count: read_u32(bytes, offsets::STATE_COUNT)?,
			large_state_count: read_u32(bytes, offsets::LARGE_STATE_COUNT)?,
			field_count: read_u32(bytes, offsets::FIELD_COUNT)?,
			sections,
			len,
		})
	}

	/// Directory entry for `section`, `None` if this version has no such section.
	pub fn section(&self, section: Section) -> Option<SectionRange> {
		self.sections[section.index()]
	}

	/// Directory entries present in this artifact, in directory order.
	pub fn sections(&self) -> impl Iterator<Item = (Section, SectionRange)> + '_ {
		Section::ALL
			.iter()
			.filter_map(|&section| self.section(section).map(|range| (section, range)))
	}

	/// Offset of the payload from the start of the artifact.
	pub fn payload_offset(&self) -> usize {
		self.len
	}
}

fn read_u32(bytes: &[u8], offset: usize) -> Result<u32, HeaderError> {
	let needed = offset + 4;
	bytes
		.get(offset..needed)
		.and_then(|b| b.try_into().ok())
		.map(u32::from_le_bytes)
		.ok_or(HeaderError::Truncated {
			needed,
			found: bytes.len(),
		})
}

#[cfg(test)]
mod tests;
