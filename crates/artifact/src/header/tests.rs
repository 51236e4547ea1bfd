use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::builder::{ArtifactBuilder, SymbolFlags};

fn sample() -> Vec<u8> {
	ArtifactBuilder::new("sample")
		.symbol("end", SymbolFlags::empty())
		.symbol("word", SymbolFlags::VISIBLE | SymbolFlags::NAMED)
		.tokens(2, 0)
		.states(3, 1)
		.build()
		.unwrap()
}

fn put_u32(bytes: &mut [u8], offset: usize, value: u32) {
	bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[test]
fn reads_version_tag() {
	assert_eq!(read_version(&sample()), Ok(14));
}

#[test]
fn short_input_is_truncated_before_magic() {
	assert_eq!(
		read_version(b"TSLANG"),
		Err(HeaderError::Truncated { needed: 12, found: 6 })
	);
}

#[test]
fn wrong_magic_is_rejected() {
	let mut bytes = sample();
	bytes[0] = b'X';
	assert_eq!(read_version(&bytes), Err(HeaderError::BadMagic));
	assert_eq!(ArtifactHeader::read(&bytes), Err(HeaderError::BadMagic));
}

#[test]
fn tag_without_counts_is_truncated() {
	let bytes = sample();
	assert_eq!(
		ArtifactHeader::read(&bytes[..20]),
		Err(HeaderError::Truncated { needed: 40, found: 20 })
	);
}

#[test]
fn section_count_must_match_version() {
	let mut bytes = sample();
	put_u32(&mut bytes, offsets::SECTION_COUNT, 6);
	assert_eq!(
		ArtifactHeader::read(&bytes),
		Err(HeaderError::SectionCount {
			version: 14,
			expected: 7,
			found: 6
		})
	);
}

#[test]
fn directory_must_fit() {
	let bytes = sample();
	assert_eq!(
		ArtifactHeader::read(&bytes[..60]),
		Err(HeaderError::Truncated { needed: 96, found: 60 })
	);
}

#[test]
fn payload_starts_after_directory() {
	let header = ArtifactHeader::read(&sample()).unwrap();
	assert_eq!(header.payload_offset(), format::header_len(7));
	assert_eq!(header.section(Section::Name), Some(SectionRange { offset: 0, len: 6 }));
}

proptest! {
	#[test]
	fn arbitrary_bytes_never_panic(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
		let _ = ArtifactHeader::read(&bytes);
	}

	#[test]
	fn arbitrary_tail_after_magic_never_panics(tail in proptest::collection::vec(any::<u8>(), 0..256)) {
		let mut bytes = MAGIC.to_vec();
		bytes.extend(tail);
		let _ = ArtifactHeader::read(&bytes);
	}
}
