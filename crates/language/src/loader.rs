//! Artifact loading.
//!
//! [`Loader::load`] runs three checks in order and stops at the first
//! failure:
//!
//! 1. presence: the artifact is supplied and non-empty
//! 2. version: the tag falls in the configured [`VersionRange`]
//! 3. structure: header, directory and section sizes agree
//!
//! The version check has to precede structural checks because the header
//! layout depends on the version.

use sindarin_artifact::{ArtifactHeader, read_version};

use crate::config::LoaderConfig;
use crate::error::LoadError;
use crate::handle::{LanguageHandle, ParserRuntime};
use crate::validate::check_structure;
use crate::version::VersionRange;

/// Validates grammar artifacts and wraps them in [`LanguageHandle`]s.
///
/// A loader holds nothing but its configuration; it can be shared across
/// threads and reused for any number of artifacts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loader {
	config: LoaderConfig,
}

impl Loader {
	pub const fn new(config: LoaderConfig) -> Self {
		Self { config }
	}

	/// Loader accepting exactly the versions `runtime` declares.
	pub fn for_runtime<'a, R: ParserRuntime<'a> + ?Sized>(runtime: &R) -> Self {
		Self::new(LoaderConfig::new(runtime.compatible_versions()))
	}

	pub fn config(&self) -> &LoaderConfig {
		&self.config
	}

	pub fn versions(&self) -> VersionRange {
		self.config.versions
	}

	/// Validates `artifact` and returns a handle borrowing it.
	pub fn load<'a>(&self, artifact: Option<&'a [u8]>) -> Result<LanguageHandle<'a>, LoadError> {
		let result = self.validate(artifact);
		match &result {
			Ok(language) => tracing::trace!(
				language = language.name(),
				version = language.abi_version(),
				symbols = language.symbol_count(),
				"grammar.load"
			),
			Err(err) => tracing::trace!(kind = ?err.kind(), error = %err, "grammar.load.rejected"),
		}
		result
	}

	fn validate<'a>(&self, artifact: Option<&'a [u8]>) -> Result<LanguageHandle<'a>, LoadError> {
		let bytes = match artifact {
			Some(bytes) if !bytes.is_empty() => bytes,
			_ => return Err(LoadError::MissingArtifact),
		};

		let version = read_version(bytes)?;
		let expected = self.config.versions;
		if !expected.contains(version) {
			return Err(LoadError::IncompatibleVersion {
				found: version,
				expected,
			});
		}

		let header = ArtifactHeader::read(bytes)?;
		let name = check_structure(bytes, &header)?;
		Ok(LanguageHandle::new(bytes, header, name))
	}
}

/// Loads `artifact` with the default [`Loader`].
pub fn load(artifact: &[u8]) -> Result<LanguageHandle<'_>, LoadError> {
	Loader::default().load(Some(artifact))
}
