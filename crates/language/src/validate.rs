//! Structural integrity checks.
//!
//! Everything here is derived from the header counts and the section
//! directory. Section contents are only inspected as far as their shape
//! goes: string tables are counted by terminator, fixed-width tables by
//! length.

use sindarin_artifact::format::{
	LEX_MODE_ENTRY_LEN, MAX_STATE_COUNT, PARSE_TABLE_ENTRY_LEN, STATE_ID_ENTRY_LEN, SYMBOL_METADATA_ENTRY_LEN,
};
use sindarin_artifact::{ArtifactHeader, Section, SectionRange};

use crate::error::Corruption;

/// Checks a decoded header against its artifact and returns the language name.
pub(crate) fn check_structure<'a>(bytes: &'a [u8], header: &ArtifactHeader) -> Result<&'a str, Corruption> {
	let payload = bytes.get(header.payload_offset()..).unwrap_or_default();
	check_layout(header, payload.len())?;
	check_counts(header)?;

	let mut name = None;
	for (section, range) in header.sections() {
		let data = section_bytes(payload, range).ok_or(Corruption::DanglingSection {
			section,
			offset: range.offset,
			len: range.len,
			payload_len: payload.len(),
		})?;
		match section {
			Section::Name => name = Some(check_name(data)?),
			Section::SymbolNames => {
				let actual = count_strings(section, data)?;
				if actual != header.symbol_count as usize {
					return Err(Corruption::SymbolCount {
						declared: header.symbol_count,
						actual,
					});
				}
			}
			Section::SymbolMetadata => {
				let expected = table_len(&[header.symbol_count], SYMBOL_METADATA_ENTRY_LEN);
				expect_len(section, data, expected)?;
			}
			Section::FieldNames => {
				let actual = count_strings(section, data)?;
				if actual != header.field_count as usize {
					return Err(Corruption::FieldCount {
						declared: header.field_count,
						actual,
					});
				}
			}
			Section::ParseTable => {
				let expected = table_len(&[header.large_state_count, header.symbol_count], PARSE_TABLE_ENTRY_LEN);
				expect_len(section, data, expected)?;
			}
			Section::LexModes => {
				expect_len(section, data, table_len(&[header.state_count], LEX_MODE_ENTRY_LEN))?;
			}
			Section::PrimaryStateIds => {
				expect_len(section, data, table_len(&[header.state_count], STATE_ID_ENTRY_LEN))?;
			}
		}
	}

	name.ok_or(Corruption::InvalidName)
}

/// Payload bytes of a section, `None` if the range leaves the payload.
pub(crate) fn section_bytes(payload: &[u8], range: SectionRange) -> Option<&[u8]> {
	let start = usize::try_from(range.offset).ok()?;
	let end = usize::try_from(range.end()).ok()?;
	payload.get(start..end)
}

/// Every section lies inside the payload, in directory order, without overlap.
fn check_layout(header: &ArtifactHeader, payload_len: usize) -> Result<(), Corruption> {
	let mut previous: Option<(Section, u64)> = None;
	for (section, range) in header.sections() {
		if range.end() > payload_len as u64 {
			return Err(Corruption::DanglingSection {
				section,
				offset: range.offset,
				len: range.len,
				payload_len,
			});
		}
		if let Some((prev, prev_end)) = previous {
			if u64::from(range.offset) < prev_end {
				return Err(Corruption::OverlappingSections { previous: prev, section });
			}
		}
		previous = Some((section, range.end()));
	}
	Ok(())
}

fn check_counts(header: &ArtifactHeader) -> Result<(), Corruption> {
	let bounds = [
		("token_count", header.token_count, "symbol_count", header.symbol_count),
		(
			"external_token_count",
			header.external_token_count,
			"token_count",
			header.token_count,
		),
		(
			"large_state_count",
			header.large_state_count,
			"state_count",
			header.state_count,
		),
	];
	for (count, value, bound, limit) in bounds {
		if value > limit {
			return Err(Corruption::InconsistentCounts {
				count,
				value,
				bound,
				limit,
			});
		}
	}
	if header.state_count > MAX_STATE_COUNT {
		return Err(Corruption::StateIdOverflow {
			state_count: header.state_count,
		});
	}
	Ok(())
}

fn check_name(data: &[u8]) -> Result<&str, Corruption> {
	match std::str::from_utf8(data) {
		Ok(name) if !name.is_empty() => Ok(name),
		_ => Err(Corruption::InvalidName),
	}
}

fn count_strings(section: Section, data: &[u8]) -> Result<usize, Corruption> {
	if data.last().is_some_and(|&b| b != 0) {
		return Err(Corruption::UnterminatedString { section });
	}
	Ok(data.iter().filter(|&&b| b == 0).count())
}

/// Byte length of a table with one `entry_len` entry per combination of `counts`.
fn table_len(counts: &[u32], entry_len: u64) -> Option<u64> {
	counts.iter().try_fold(entry_len, |len, &count| len.checked_mul(u64::from(count)))
}

/// `expected` is `None` when the implied length overflows; no section can match it.
fn expect_len(section: Section, data: &[u8], expected: Option<u64>) -> Result<(), Corruption> {
	let actual = data.len() as u64;
	let expected = expected.unwrap_or(u64::MAX);
	if actual != expected {
		return Err(Corruption::SectionLength {
			section,
			expected,
			actual,
		});
	}
	Ok(())
}
