//! Artifact encoding.
//!
//! The builder lays out the header, the directory and the sections the
//! version calls for. Table contents it cannot know (parse actions, lexer
//! modes) are zero-filled at the sizes the counts imply, so the output is
//! structurally valid for whatever counts were given.

use bitflags::bitflags;
use thiserror::Error;

use crate::format::{
	CURRENT_VERSION, LEX_MODE_ENTRY_LEN, MAGIC, MAX_STATE_COUNT, PARSE_TABLE_ENTRY_LEN, STATE_ID_ENTRY_LEN,
	Section, header_len,
};

bitflags! {
	/// Per-symbol flags stored in [`Section::SymbolMetadata`].
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct SymbolFlags: u8 {
		const VISIBLE = 1;
		const NAMED = 1 << 1;
		const SUPERTYPE = 1 << 2;
	}
}

/// Errors raised while encoding an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
	#[error("{section} section exceeds the 4 GiB section limit")]
	SectionTooLarge { section: Section },

	#[error("{what} count does not fit in a u32")]
	CountOverflow { what: &'static str },

	#[error("{state_count} states exceed the 65536 addressable by u16 state ids")]
	StateIdOverflow { state_count: u32 },
}

/// Encodes a grammar table description into artifact bytes.
#[derive(Debug, Clone)]
pub struct ArtifactBuilder {
	version: u32,
	name: String,
	symbols: Vec<(String, SymbolFlags)>,
	fields: Vec<String>,
	token_count: u32,
	external_token_count: u32,
	state_count: u32,
	large_state_count: u32,
}

impl ArtifactBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			version: CURRENT_VERSION,
			name: name.into(),
			symbols: Vec::new(),
			fields: Vec::new(),
			token_count: 0,
			external_token_count: 0,
			state_count: 0,
			large_state_count: 0,
		}
	}

	pub fn version(mut self, version: u32) -> Self {
		self.version = version;
		self
	}

	pub fn symbol(mut self, name: impl Into<String>, flags: SymbolFlags) -> Self {
		self.symbols.push((name.into(), flags));
		self
	}

	pub fn field(mut self, name: impl Into<String>) -> Self {
		self.fields.push(name.into());
		self
	}

	/// Sets how many leading symbols are terminals, and how many of those are external.
	pub fn tokens(mut self, token_count: u32, external_token_count: u32) -> Self {
		self.token_count = token_count;
		self.external_token_count = external_token_count;
		self
	}

	/// Sets the parse state counts. Large states get dense parse table rows.
	pub fn states(mut self, state_count: u32, large_state_count: u32) -> Self {
		self.state_count = state_count;
		self.large_state_count = large_state_count;
		self
	}

	pub fn build(&self) -> Result<Vec<u8>, BuildError> {
		if self.state_count > MAX_STATE_COUNT {
			return Err(BuildError::StateIdOverflow {
				state_count: self.state_count,
			});
		}
		let sections = Section::for_version(self.version);
		let symbol_count = count(self.symbols.len(), "symbol")?;
		let field_count = count(self.fields.len(), "field")?;
		let section_count = count(sections.len(), "section")?;

		let mut payload = Vec::new();
		let mut directory = Vec::with_capacity(sections.len());
		for &section in sections {
			let start = payload.len();
			self.encode_section(section, symbol_count, &mut payload)?;
			let too_large = || BuildError::SectionTooLarge { section };
			let offset = u32::try_from(start).map_err(|_| too_large())?;
			let len = u32::try_from(payload.len() - start).map_err(|_| too_large())?;
			directory.push((offset, len));
		}

		let mut out = Vec::with_capacity(header_len(sections.len()) + payload.len());
		out.extend_from_slice(MAGIC);
		for value in [
			self.version,
			symbol_count,
			self.token_count,
			self.external_token_count,
			self.state_count,
			self.large_state_count,
			field_count,
			section_count,
		] {
			out.extend_from_slice(&value.to_le_bytes());
		}
		for (offset, len) in directory {
			out.extend_from_slice(&offset.to_le_bytes());
			out.extend_from_slice(&len.to_le_bytes());
		}
		out.extend_from_slice(&payload);
		Ok(out)
	}

	fn encode_section(&self, section: Section, symbol_count: u32, out: &mut Vec<u8>) -> Result<(), BuildError> {
		match section {
			Section::Name => out.extend_from_slice(self.name.as_bytes()),
			Section::SymbolNames => {
				for (name, _) in &self.symbols {
					push_c_str(out, name);
				}
			}
			Section::SymbolMetadata => out.extend(self.symbols.iter().map(|(_, flags)| flags.bits())),
			Section::FieldNames => {
				for name in &self.fields {
					push_c_str(out, name);
				}
			}
			Section::ParseTable => {
				let entries = u64::from(self.large_state_count) * u64::from(symbol_count);
				zero_fill(out, entries * PARSE_TABLE_ENTRY_LEN, section)?;
			}
			Section::LexModes => {
				zero_fill(out, u64::from(self.state_count) * LEX_MODE_ENTRY_LEN, section)?;
			}
			Section::PrimaryStateIds => {
				let reserve = u64::from(self.state_count) * STATE_ID_ENTRY_LEN;
				out.reserve(usize::try_from(reserve).map_err(|_| BuildError::SectionTooLarge { section })?);
				let ids = (0..=u16::MAX).take(self.state_count as usize);
				for id in ids {
					out.extend_from_slice(&id.to_le_bytes());
				}
			}
		}
		Ok(())
	}
}

fn count(len: usize, what: &'static str) -> Result<u32, BuildError> {
	u32::try_from(len).map_err(|_| BuildError::CountOverflow { what })
}

fn push_c_str(out: &mut Vec<u8>, s: &str) {
	out.extend_from_slice(s.as_bytes());
	out.push(0);
}

fn zero_fill(out: &mut Vec<u8>, len: u64, section: Section) -> Result<(), BuildError> {
	let len = usize::try_from(len)
		.ok()
		.filter(|&len| u32::try_from(len).is_ok())
		.ok_or(BuildError::SectionTooLarge { section })?;
	out.resize(out.len() + len, 0);
	Ok(())
}
