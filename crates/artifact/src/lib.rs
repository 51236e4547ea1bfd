//! Precompiled grammar table artifacts.
//!
//! An artifact is the binary output of a grammar compiler: a magic tag, an
//! ABI version, fixed-layout metadata counts and a directory of
//! length-delimited sections over an opaque payload.
//!
//! # Layout
//!
//! ```text
//! 0       magic            8 bytes, b"TSLANGv1"
//! 8       version          u32 LE
//! 12..36  counts           symbol, token, external token, state,
//!                          large state, field (u32 LE each)
//! 36      section_count    u32 LE, fixed per version
//! 40      directory        (offset, len) u32 LE pairs, relative to payload
//! ...     payload
//! ```
//!
//! * [`format`]: Layout constants and the [`Section`] directory order
//! * [`header`]: Defensive decoding of the tag, counts and directory
//! * [`builder`]: Encoding table descriptions into artifact bytes
//! * `compile`: TOML table descriptions and artifact files for build scripts

pub mod builder;
#[cfg(feature = "compile")]
pub mod compile;
pub mod format;
pub mod header;

pub use builder::{ArtifactBuilder, BuildError, SymbolFlags};
pub use format::{CURRENT_VERSION, MAGIC, Section};
pub use header::{ArtifactHeader, HeaderError, SectionRange, read_version};
