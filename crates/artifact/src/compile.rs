//! Build-time support for turning grammar table descriptions into artifacts.
//!
//! Gated behind the `compile` feature. A table description is a TOML file
//! listing the grammar's symbols, fields and state counts; build scripts
//! read it with [`GrammarTable::read`] and emit the artifact with
//! [`write_artifact`] into `OUT_DIR` for `include_bytes!`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::builder::{ArtifactBuilder, BuildError, SymbolFlags};
use crate::format::CURRENT_VERSION;

/// Name of the builtin end-of-input symbol, always symbol 0.
pub const END_SYMBOL: &str = "end";

#[derive(Debug, Error)]
pub enum CompileError {
	#[error("i/o error on {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid grammar table description: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("terminal symbol `{name}` follows a non-terminal; terminals must come first")]
	TerminalAfterRule { name: String },

	#[error(transparent)]
	Build(#[from] BuildError),
}

/// How a symbol participates in the grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
	/// Named terminal, e.g. `identifier`.
	Token,
	/// Anonymous terminal, e.g. `"fn"` or `"=>"`.
	Literal,
	/// Terminal produced by an external scanner.
	External,
	/// Visible named non-terminal.
	#[default]
	Rule,
	/// Non-terminal elided from the tree, e.g. `_statement`.
	Hidden,
	/// Hidden non-terminal exposed as a supertype.
	Supertype,
}

impl SymbolKind {
	pub fn is_terminal(self) -> bool {
		matches!(self, Self::Token | Self::Literal | Self::External)
	}

	pub fn flags(self) -> SymbolFlags {
		match self {
			Self::Token | Self::External | Self::Rule => SymbolFlags::VISIBLE | SymbolFlags::NAMED,
			Self::Literal => SymbolFlags::VISIBLE,
			Self::Hidden => SymbolFlags::empty(),
			Self::Supertype => SymbolFlags::NAMED | SymbolFlags::SUPERTYPE,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymbolSpec {
	pub name: String,
	#[serde(default)]
	pub kind: SymbolKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StateCounts {
	pub total: u32,
	pub large: u32,
}

/// A grammar table description as read from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrammarTable {
	pub name: String,
	#[serde(default = "current_version")]
	pub version: u32,
	pub states: StateCounts,
	#[serde(default)]
	pub fields: Vec<String>,
	#[serde(default)]
	pub symbols: Vec<SymbolSpec>,
}

fn current_version() -> u32 {
	CURRENT_VERSION
}

impl GrammarTable {
	pub fn from_toml(source: &str) -> Result<Self, CompileError> {
		Ok(toml::from_str(source)?)
	}

	pub fn read(path: &Path) -> Result<Self, CompileError> {
		let source = fs::read_to_string(path).map_err(|source| CompileError::Io {
			path: path.display().to_string(),
			source,
		})?;
		Self::from_toml(&source)
	}

	/// Converts the description into a builder, prepending the end symbol.
	pub fn to_builder(&self) -> Result<ArtifactBuilder, CompileError> {
		let mut builder = ArtifactBuilder::new(&self.name)
			.version(self.version)
			.symbol(END_SYMBOL, SymbolFlags::empty());

		let mut tokens = 1u32;
		let mut externals = 0u32;
		let mut in_rules = false;
		for symbol in &self.symbols {
			if symbol.kind.is_terminal() {
				if in_rules {
					return Err(CompileError::TerminalAfterRule {
						name: symbol.name.clone(),
					});
				}
				tokens += 1;
				if symbol.kind == SymbolKind::External {
					externals += 1;
				}
			} else {
				in_rules = true;
			}
			builder = builder.symbol(&symbol.name, symbol.kind.flags());
		}

		for field in &self.fields {
			builder = builder.field(field);
		}

		Ok(builder
			.tokens(tokens, externals)
			.states(self.states.total, self.states.large))
	}

	pub fn compile(&self) -> Result<Vec<u8>, CompileError> {
		Ok(self.to_builder()?.build()?)
	}
}

/// Compiles `table` and writes the artifact to `path`.
pub fn write_artifact(path: &Path, table: &GrammarTable) -> Result<(), CompileError> {
	let bytes = table.compile()?;
	fs::write(path, bytes).map_err(|source| CompileError::Io {
		path: path.display().to_string(),
		source,
	})
}
