//! Artifacts for unit tests.

use sindarin_artifact::format::{DIRECTORY_ENTRY_LEN, offsets};
use sindarin_artifact::{ArtifactBuilder, ArtifactHeader, Section, SymbolFlags};

/// Five symbols (three terminals), two fields, ten states of which four are large.
pub(crate) fn builder() -> ArtifactBuilder {
	let named = SymbolFlags::VISIBLE | SymbolFlags::NAMED;
	ArtifactBuilder::new("fixture")
		.symbol("end", SymbolFlags::empty())
		.symbol("identifier", named)
		.symbol("=>", SymbolFlags::VISIBLE)
		.symbol("source_file", named)
		.symbol("_item", SymbolFlags::empty())
		.field("name")
		.field("body")
		.tokens(3, 0)
		.states(10, 4)
}

pub(crate) fn artifact() -> Vec<u8> {
	builder().build().unwrap()
}

pub(crate) fn put_u32(bytes: &mut [u8], offset: usize, value: u32) {
	bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

pub(crate) fn get_u32(bytes: &[u8], offset: usize) -> u32 {
	u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
}

/// Byte offset of the directory entry's `offset` field; `len` follows it.
pub(crate) fn directory_entry(section: Section) -> usize {
	offsets::DIRECTORY + section.index() * DIRECTORY_ENTRY_LEN
}

/// Absolute byte range of `section` within `bytes`.
pub(crate) fn section_span(bytes: &[u8], section: Section) -> std::ops::Range<usize> {
	let header = ArtifactHeader::read(bytes).unwrap();
	let range = header.section(section).unwrap();
	let start = header.payload_offset() + range.offset as usize;
	start..start + range.len as usize
}
