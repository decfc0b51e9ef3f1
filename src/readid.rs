//! MGI → Illumina read identifier rewrite.
//!
//! MGI reads are named `<flowcell>L<lane>C<column>R<row:3><seq>/<mate>`, e.g.
//! `V350018879L4C001R0020000010/1`. Illumina names carry the same coordinates
//! in a different order plus run-level fields:
//!
//! ```text
//! <instrument>:<run>:<flowcell>:<lane>:<seq>:<column>:<row> <mate>:N:0:<i5>+<i7>
//! ```
//!
//! Numeric fields lose their zero padding on the way through. They are kept
//! as digit text, so there is no upper bound on their value.

use crate::error::FormatError;
use crate::meta::RunMetadata;

use std::fmt;

/// Coordinates parsed out of an MGI read name. Numeric fields hold their
/// digits with leading zeros removed (`"0"` for an all-zero field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MgiReadId<'a> {
    pub flowcell: &'a str,
    pub lane: &'a str,
    pub column: &'a str,
    pub row: &'a str,
    pub seq: &'a str,
    pub mate: u8,
}

impl<'a> MgiReadId<'a> {
    /// Parse a whole read name. The match is anchored at both ends: trailing
    /// text after the mate digit is rejected, so `.../12` is malformed even
    /// though a prefix-only match would read it as mate 1.
    pub fn parse(id: &'a str) -> Result<Self, FormatError> {
        let malformed = || FormatError::MalformedIdentifier { id: id.to_string() };

        let (body, mate) = id.rsplit_once('/').ok_or_else(malformed)?;
        let mate = match mate {
            "1" => 1,
            "2" => 2,
            _ => return Err(malformed()),
        };

        // Coordinate fields are pure digits, so the last marker letter of each
        // kind is the one that opens its field.
        let (rest, row_seq) = body.rsplit_once('R').ok_or_else(malformed)?;
        let (rest, column) = rest.rsplit_once('C').ok_or_else(malformed)?;
        let (flowcell, lane) = rest.rsplit_once('L').ok_or_else(malformed)?;

        if flowcell.is_empty() || !flowcell.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(malformed());
        }
        // all-ASCII digits, so byte 3 is a char boundary
        if row_seq.len() < 4 || !is_digits(row_seq) {
            return Err(malformed());
        }
        let (row, seq) = row_seq.split_at(3);

        Ok(Self {
            flowcell,
            lane: number(lane).ok_or_else(malformed)?,
            column: number(column).ok_or_else(malformed)?,
            row: number(row).ok_or_else(malformed)?,
            seq: number(seq).ok_or_else(malformed)?,
            mate,
        })
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Non-empty run of ASCII digits, rendered as a decimal without padding.
fn number(s: &str) -> Option<&str> {
    if !is_digits(s) {
        return None;
    }
    let trimmed = s.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed })
}

/// Illumina-style read name; rendered through `Display`.
#[derive(Debug, Clone, Copy)]
pub struct IlluminaReadId<'a> {
    meta: &'a RunMetadata,
    src: &'a MgiReadId<'a>,
}

impl<'a> IlluminaReadId<'a> {
    pub fn new(meta: &'a RunMetadata, src: &'a MgiReadId<'a>) -> Self {
        Self { meta, src }
    }
}

impl fmt::Display for IlluminaReadId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s) = (self.meta, self.src);
        write!(
            f,
            "{}:{}:{}:{}:{}:{}:{} {}:N:0:{}+{}",
            m.instrument_id, m.run_id, s.flowcell, s.lane, s.seq, s.column, s.row, s.mate, m.i5, m.i7
        )
    }
}

/// Rewrite one MGI read name into its Illumina form.
pub fn transcode(id: &str, meta: &RunMetadata) -> Result<String, FormatError> {
    let src = MgiReadId::parse(id)?;
    Ok(IlluminaReadId::new(meta, &src).to_string())
}
