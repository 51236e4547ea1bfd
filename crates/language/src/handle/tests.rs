use std::collections::HashSet;

use super::*;
use crate::fixtures::{artifact, builder};
use crate::loader::load;

#[test]
fn sections_expose_validated_payload() {
	let bytes = artifact();
	let language = load(&bytes).unwrap();
	assert_eq!(language.section(Section::Name), Some(&b"fixture"[..]));
	assert_eq!(
		language.section(Section::SymbolNames),
		Some(&b"end\0identifier\0=>\0source_file\0_item\0"[..])
	);
	assert_eq!(language.section(Section::SymbolMetadata).map(<[u8]>::len), Some(5));
	assert_eq!(language.section(Section::PrimaryStateIds).map(<[u8]>::len), Some(20));
}

#[test]
fn version_13_has_no_primary_state_ids() {
	let bytes = builder().version(13).build().unwrap();
	let language = load(&bytes).unwrap();
	assert_eq!(language.section(Section::PrimaryStateIds), None);
	assert!(language.section(Section::LexModes).is_some());
}

#[test]
fn equality_is_by_reference() {
	let bytes = artifact();
	let copy = bytes.clone();
	let a = load(&bytes).unwrap();
	let b = load(&bytes).unwrap();
	let c = load(&copy).unwrap();

	assert_eq!(a, b);
	assert_ne!(a, c);
	assert_eq!(a.symbol_count(), c.symbol_count());

	let set: HashSet<_> = [a, b, c].into_iter().collect();
	assert_eq!(set.len(), 2);
}

#[test]
fn debug_shows_metadata_not_payload() {
	let bytes = artifact();
	let language = load(&bytes).unwrap();
	let debug = format!("{language:?}");
	assert!(debug.contains("name: \"fixture\""));
	assert!(debug.contains("abi_version: 14"));
	assert!(!debug.contains("bytes"));
}

#[test]
fn handles_are_send_and_sync() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<LanguageHandle<'static>>();
}
