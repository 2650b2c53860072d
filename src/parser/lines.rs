//! Line classification, cursor, and continuation joining
//!
//! The GenBank flat file encodes hierarchy purely through character-column
//! position and keyword recognition. Everything in this module is built on
//! inspecting fixed byte offsets of a line:
//!
//! ```text
//! LOCUS       SCU49845     5028 bp    DNA     PLN       21-JUN-1999
//! ^ column 1 non-blank: top-level field
//!      CDS             complement(<1..>206)
//!      ^ column 6 non-blank (column 1 blank): sub-level field / feature
//!                      /codon_start=3
//!                      ^ column 22 is '/': qualifier
//!                      TCGGCACTGGG...
//!                     ^ column 21 blank, column 22 not '/': continuation
//! ```
//!
//! A line shorter than an inspected offset is malformed input and yields
//! [`GbkitError::TruncatedLine`]; the classifier never treats a missing
//! column as blank.

use crate::error::{GbkitError, Result};
use crate::vocab;

/// Offset of the top-level ("meta") keyword column
pub const META_OFFSET: usize = 0;
/// Offset of the sub-level keyword / feature type column
pub const SUB_META_OFFSET: usize = 5;
/// Offset of the qualifier `/` column
pub const QUALIFIER_OFFSET: usize = 21;

const BLANK: u8 = b' ';

/// Byte at `offset`, or a truncation error naming the line and column
fn byte_at(line: &str, offset: usize, line_no: usize) -> Result<u8> {
    line.as_bytes()
        .get(offset)
        .copied()
        .ok_or(GbkitError::TruncatedLine {
            line: line_no,
            column: offset,
            length: line.len(),
        })
}

/// Top-level field line: non-blank at the meta column
pub fn is_meta_line(line: &str, line_no: usize) -> Result<bool> {
    Ok(byte_at(line, META_OFFSET, line_no)? != BLANK)
}

/// Sub-level field or feature declaration line: blank meta column, non-blank
/// sub-meta column
pub fn is_feature_line(line: &str, line_no: usize) -> Result<bool> {
    Ok(byte_at(line, META_OFFSET, line_no)? == BLANK
        && byte_at(line, SUB_META_OFFSET, line_no)? != BLANK)
}

/// Qualifier line: blank meta and sub-meta columns, `/` at the qualifier
/// column
pub fn is_qualifier_line(line: &str, line_no: usize) -> Result<bool> {
    Ok(byte_at(line, META_OFFSET, line_no)? == BLANK
        && byte_at(line, SUB_META_OFFSET, line_no)? == BLANK
        && byte_at(line, QUALIFIER_OFFSET, line_no)? == b'/')
}

/// Qualifier continuation line: blank meta and sub-meta columns, no `/` at
/// the qualifier column, blank one column before it
pub fn is_qualifier_continuation(line: &str, line_no: usize) -> Result<bool> {
    Ok(byte_at(line, META_OFFSET, line_no)? == BLANK
        && byte_at(line, SUB_META_OFFSET, line_no)? == BLANK
        && byte_at(line, QUALIFIER_OFFSET, line_no)? != b'/'
        && byte_at(line, QUALIFIER_OFFSET - 1, line_no)? == BLANK)
}

/// First token of a line after trimming, or `""` for blank lines
///
/// Continuation lines trim to text whose first token is compared against the
/// keyword vocabularies; an indented or empty line can therefore never be
/// mistaken for a field start by accident of spacing.
pub fn head_token(line: &str) -> &str {
    line.trim().split(' ').next().unwrap_or("")
}

/// Position-tracking cursor over a span of lines
///
/// `base` is the absolute index of the span's first line in the whole file,
/// so errors raised deep inside a block still report file line numbers.
/// Lookahead is explicit: `peek` returns `None` at end of input instead of
/// letting callers index out of range.
pub struct LineCursor<'a> {
    lines: &'a [String],
    pos: usize,
    base: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor over `lines`, where `lines[0]` is file line `base + 1`
    pub fn new(lines: &'a [String], base: usize) -> Self {
        Self {
            lines,
            pos: 0,
            base,
        }
    }

    /// Current line, or `None` at end of the span
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).map(String::as_str)
    }

    /// 1-based file line number of the current line
    pub fn line_no(&self) -> usize {
        self.base + self.pos + 1
    }

    /// Move to the next line
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Lines after the current one
    pub fn rest(&self) -> &'a [String] {
        self.lines.get(self.pos + 1..).unwrap_or(&[])
    }
}

/// Join a field's continuation lines into one normalized string
///
/// `tokens` is the field's first line split into whitespace tokens; the
/// keyword at index 0 is discarded. Each following line is appended (trimmed,
/// single-space separated) until a line whose first token is a member of the
/// combined keyword vocabulary marks the next field. The input lines are not
/// consumed; the dispatcher re-scans them and skips continuations by their
/// empty head token.
pub fn join_continuations(tokens: &[&str], rest: &[String]) -> String {
    let mut value = tokens.get(1..).unwrap_or(&[]).join(" ").trim().to_string();

    for line in rest {
        if vocab::is_keyword(head_token(line)) {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if value.is_empty() {
            value.push_str(trimmed);
        } else {
            value.push(' ');
            value.push_str(trimmed);
        }
    }

    value
}
