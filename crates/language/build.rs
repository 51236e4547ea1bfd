//! Compiles the bundled Sindarin table description into `OUT_DIR/sindarin.bin`.

use std::env;
use std::path::PathBuf;

use sindarin_artifact::compile::{GrammarTable, write_artifact};

fn main() {
	let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
	let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));

	let table_path = manifest_dir.join("grammar").join("sindarin.toml");
	println!("cargo:rerun-if-changed={}", table_path.display());

	let table = GrammarTable::read(&table_path).unwrap_or_else(|e| panic!("failed to read grammar table: {e}"));
	write_artifact(&out_dir.join("sindarin.bin"), &table).unwrap_or_else(|e| panic!("failed to write grammar artifact: {e}"));
}
