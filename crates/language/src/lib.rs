//! Sindarin grammar table loading.
//!
//! This crate checks that a precompiled grammar table can be handed to a
//! parsing runtime before any parsing is attempted. Tables are produced out
//! of band by a grammar compiler; a stale, foreign or damaged table is
//! rejected here with a typed [`LoadError`] instead of failing deep inside
//! the parser.
//!
//! # Architecture
//!
//! * [`loader`]: Presence, version and structural checks
//! * [`handle`]: Validated [`LanguageHandle`]s and the [`ParserRuntime`] seam
//! * [`version`]: ABI versions this runtime accepts
//! * [`config`]: Loader configuration
//! * [`error`]: Load error taxonomy
//!
//! The Sindarin table bundled with this crate is compiled at build time from
//! `grammar/sindarin.toml` and exposed through [`language`].

pub mod config;
pub mod error;
#[cfg(test)]
mod fixtures;
pub mod handle;
pub mod loader;
mod validate;
pub mod version;

pub use config::{ConfigError, LoaderConfig};
pub use error::{Corruption, ErrorKind, LoadError};
pub use handle::{LanguageHandle, ParserRuntime};
pub use loader::{Loader, load};
pub use sindarin_artifact::Section;
pub use version::{LANGUAGE_VERSION, MIN_COMPATIBLE_LANGUAGE_VERSION, VersionRange};

/// Name of the bundled grammar.
pub const LANGUAGE_NAME: &str = "sindarin";

/// The precompiled Sindarin grammar table.
pub static ARTIFACT: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/sindarin.bin"));

/// Loads the bundled Sindarin grammar.
pub fn language() -> Result<LanguageHandle<'static>, LoadError> {
	load(ARTIFACT)
}
