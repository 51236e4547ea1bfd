#![allow(unused_crate_dependencies)]

use std::thread;

use sindarin_language::{
	ARTIFACT, ErrorKind, LANGUAGE_NAME, LANGUAGE_VERSION, LoadError, Loader, LoaderConfig, Section, language,
};

#[test]
fn can_load_grammar() {
	let language = language();
	assert!(language.is_ok(), "error loading Sindarin grammar: {:?}", language.err());
}

#[test]
fn bundled_grammar_metadata() {
	let language = language().unwrap();
	assert_eq!(language.name(), LANGUAGE_NAME);
	assert_eq!(language.abi_version(), LANGUAGE_VERSION);
	assert_eq!(language.symbol_count(), 87);
	assert_eq!(language.token_count(), 30);
	assert_eq!(language.external_token_count(), 0);
	assert_eq!(language.field_count(), 29);
	assert_eq!(language.state_count(), 412);
	assert_eq!(language.large_state_count(), 64);
}

#[test]
fn bundled_symbol_table_starts_with_end() {
	let language = language().unwrap();
	let names = language.section(Section::SymbolNames).unwrap();
	assert!(names.starts_with(b"end\0line_comment\0"));
	assert_eq!(names.iter().filter(|&&b| b == 0).count(), 87);
}

#[test]
fn repeated_loads_are_equal() {
	assert_eq!(language().unwrap(), language().unwrap());
}

#[test]
fn concurrent_loads_agree() {
	let expected = language().unwrap();
	let loader = Loader::default();
	thread::scope(|s| {
		let workers: Vec<_> = (0..8)
			.map(|_| s.spawn(|| loader.load(Some(ARTIFACT))))
			.collect();
		for worker in workers {
			let language = worker.join().unwrap().unwrap();
			assert_eq!(language, expected);
		}
	});
}

#[test]
fn runtime_pinned_to_older_version_rejects_bundled_grammar() {
	let config = LoaderConfig::from_toml("[versions]\nmin = 12\nmax = 13\n").unwrap();
	let err = Loader::new(config).load(Some(ARTIFACT)).unwrap_err();
	assert_eq!(err.kind(), ErrorKind::IncompatibleVersion);
	assert!(matches!(err, LoadError::IncompatibleVersion { found: 14, .. }));
}
