//! GenBank record parser
//!
//! The parser reads the whole input into an ordered line buffer up front,
//! then walks it once with a cursor. Each line's head token (the text before
//! the first space, so indented continuation lines dispatch nowhere) selects
//! a top-level handler; handlers view the remaining lines and return
//! structured fragments that assemble into the final
//! [`AnnotatedSequence`](crate::AnnotatedSequence).
//!
//! The scan is pure and deterministic: no I/O interleaves with parsing, no
//! state is shared between parses, and independent parses may run
//! concurrently with no coordination. For long-running inputs a
//! [`CancelToken`] can interrupt the walk at any top-level dispatch step.
//!
//! # Examples
//!
//! ```no_run
//! # fn main() -> gbkit::Result<()> {
//! let record = gbkit::read_path("plasmid.gb")?;
//! println!("{}: {} features", record.meta.locus.name, record.features.len());
//! # Ok(())
//! # }
//! ```

use crate::error::{GbkitError, Result};
use crate::io::{read_lines, CompressedReader, DataSource};
use crate::types::AnnotatedSequence;
use std::io::BufRead;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub mod features;
pub mod lines;
pub mod locus;
pub mod meta;
pub mod sequence;

use lines::LineCursor;

/// Shared flag for interrupting a running parse
///
/// Clone the token, hand one copy to the parser, and call
/// [`cancel`](CancelToken::cancel) from any thread; the parse returns
/// [`GbkitError::Cancelled`] at the next top-level field boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token in the not-cancelled state
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Parse a GenBank file into an [`AnnotatedSequence`]
///
/// Accepts plain or gzipped input (detected by content, not extension).
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<AnnotatedSequence> {
    Parser::from_path(path)?.parse()
}

/// Parse GenBank text already in memory
pub fn parse_str(text: &str) -> Result<AnnotatedSequence> {
    Parser::from_text(text).parse()
}

/// Top-level dispatcher over the record's line buffer
///
/// Use [`read_path`]/[`parse_str`] for the common case; construct a `Parser`
/// directly to attach a [`CancelToken`] or to inspect
/// [`skipped_fields`](Parser::skipped_fields) after the parse.
pub struct Parser {
    lines: Vec<String>,
    skipped: Vec<String>,
    cancel: Option<CancelToken>,
}

impl Parser {
    /// Create a parser over a local file, decompressing gzip transparently
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = CompressedReader::new(DataSource::from_path(path))?;
        Self::from_reader(reader)
    }

    /// Create a parser over any buffered reader
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::new(read_lines(reader)?))
    }

    /// Create a parser over text already in memory
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string).collect())
    }

    fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            skipped: Vec::new(),
            cancel: None,
        }
    }

    /// Attach a cancellation token checked at each top-level dispatch step
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Head tokens of unrecognized top-level fields skipped by the last parse
    ///
    /// Unknown keywords are dropped without error for forward compatibility
    /// with newer GenBank fields; this list lets a host report what was
    /// dropped.
    pub fn skipped_fields(&self) -> &[String] {
        &self.skipped
    }

    /// Walk the line buffer and assemble the record
    pub fn parse(&mut self) -> Result<AnnotatedSequence> {
        let mut record = AnnotatedSequence::default();
        self.skipped.clear();

        let lines = std::mem::take(&mut self.lines);
        let result = self.dispatch(&lines, &mut record);
        self.lines = lines;

        result.map(|()| record)
    }

    fn dispatch(&mut self, lines: &[String], record: &mut AnnotatedSequence) -> Result<()> {
        let meta = &mut record.meta;

        for (index, line) in lines.iter().enumerate() {
            if let Some(token) = &self.cancel {
                if token.is_cancelled() {
                    return Err(GbkitError::Cancelled);
                }
            }

            if line.trim().is_empty() {
                continue;
            }

            // Text before the first space: continuation and sub-level lines
            // start blank, so only genuine top-level lines produce a head.
            let head = line.split(' ').next().unwrap_or("");
            let line_no = index + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let rest = &lines[index + 1..];

            match head {
                "" => continue,
                "LOCUS" => meta.locus = locus::parse_locus(line, line_no)?,
                "DEFINITION" => meta.definition = lines::join_continuations(&tokens, rest),
                "ACCESSION" => meta.accession = lines::join_continuations(&tokens, rest),
                "VERSION" => meta.version = lines::join_continuations(&tokens, rest),
                "KEYWORDS" => meta.keywords = lines::join_continuations(&tokens, rest),
                "SOURCE" => {
                    let (source, organism) =
                        meta::parse_source_organism(&tokens, rest, line_no)?;
                    meta.source = source;
                    meta.organism = organism;
                }
                "REFERENCE" => {
                    meta.references
                        .push(meta::parse_reference(&tokens, rest, line_no)?);
                }
                "FEATURES" => {
                    let mut cursor = LineCursor::new(rest, index + 1);
                    record.features = features::parse_feature_table(&mut cursor)?;
                }
                "ORIGIN" => {
                    // Last top-level field; nothing after the sequence body
                    // is consulted.
                    record.sequence = sequence::extract_sequence(rest);
                    break;
                }
                other => self.skipped.push(other.to_string()),
            }
        }

        Ok(())
    }
}
