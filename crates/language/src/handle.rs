//! Validated language handles and the runtime seam they are handed across.

use std::fmt;
use std::hash::{Hash, Hasher};

use sindarin_artifact::{ArtifactHeader, Section};

use crate::validate::section_bytes;
use crate::version::VersionRange;

/// A grammar artifact that passed every load check.
///
/// Handles borrow the artifact bytes, so a handle cannot outlive the
/// artifact it was loaded from. They are only produced by
/// [`Loader::load`](crate::Loader::load) and expose no mutable state.
///
/// Two handles compare equal when they wrap the same artifact bytes.
#[derive(Clone, Copy)]
pub struct LanguageHandle<'a> {
	bytes: &'a [u8],
	header: ArtifactHeader,
	name: &'a str,
}

impl<'a> LanguageHandle<'a> {
	pub(crate) fn new(bytes: &'a [u8], header: ArtifactHeader, name: &'a str) -> Self {
		Self { bytes, header, name }
	}

	pub fn name(&self) -> &'a str {
		self.name
	}

	pub fn abi_version(&self) -> u32 {
		self.header.version
	}

	pub fn symbol_count(&self) -> u32 {
		self.header.symbol_count
	}

	pub fn token_count(&self) -> u32 {
		self.header.token_count
	}

	pub fn external_token_count(&self) -> u32 {
		self.header.external_token_count
	}

	pub fn state_count(&self) -> u32 {
		self.header.state_count
	}

	pub fn large_state_count(&self) -> u32 {
		self.header.large_state_count
	}

	pub fn field_count(&self) -> u32 {
		self.header.field_count
	}

	/// Payload bytes of `section`, `None` if this artifact version has no such section.
	pub fn section(&self, section: Section) -> Option<&'a [u8]> {
		let payload = self.bytes.get(self.header.payload_offset()..)?;
		section_bytes(payload, self.header.section(section)?)
	}

	/// The whole artifact.
	pub fn as_bytes(&self) -> &'a [u8] {
		self.bytes
	}
}

impl PartialEq for LanguageHandle<'_> {
	fn eq(&self, other: &Self) -> bool {
		std::ptr::eq(self.bytes, other.bytes)
	}
}

impl Eq for LanguageHandle<'_> {}

impl Hash for LanguageHandle<'_> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.bytes.as_ptr().hash(state);
		self.bytes.len().hash(state);
	}
}

impl fmt::Debug for LanguageHandle<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LanguageHandle")
			.field("name", &self.name)
			.field("abi_version", &self.header.version)
			.field("symbol_count", &self.header.symbol_count)
			.field("state_count", &self.header.state_count)
			.finish_non_exhaustive()
	}
}

/// A parsing runtime that consumes validated languages borrowed for `'a`.
pub trait ParserRuntime<'a> {
	type Error;

	/// Artifact versions this runtime can execute.
	fn compatible_versions(&self) -> VersionRange {
		VersionRange::DEFAULT
	}

	/// Installs `language` as the grammar for subsequent parses.
	fn set_language(&mut self, language: LanguageHandle<'a>) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests;
