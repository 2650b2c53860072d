//! gbkit: GenBank flat-file parser
//!
//! # Overview
//!
//! gbkit parses the GenBank flat-file format — a fixed-column, line-oriented
//! representation of an annotated biological sequence — into a structured
//! in-memory record, so downstream tooling can work with sequence
//! annotations without re-parsing raw text.
//!
//! The format encodes hierarchy purely through character-column position and
//! keyword recognition: column 1 opens a top-level field (LOCUS, FEATURES,
//! ...), column 6 a sub-level field or feature declaration, and a `/` at
//! column 22 a feature qualifier. The parser classifies each line by those
//! offsets, joins continuation lines, and routes every top-level field to a
//! dedicated block parser.
//!
//! ## Quick Start
//!
//! ```no_run
//! # fn main() -> gbkit::Result<()> {
//! // Plain or gzipped input, detected by content
//! let record = gbkit::read_path("sequence.gb.gz")?;
//!
//! println!("{} ({})", record.meta.locus.name, record.meta.definition);
//! for feature in &record.features {
//!     println!("  {} at {}", feature.feature_type, feature.location);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`parser`]: line classification, continuation joining, and the block
//!   parsers behind [`read_path`] / [`parse_str`]
//! - [`types`]: the parsed record ([`AnnotatedSequence`] and its parts)
//! - [`vocab`]: static format vocabularies exposed as membership predicates
//! - [`io`]: file ingestion with transparent gzip decompression
//!
//! ## Error Handling
//!
//! All operations return [`Result`]; a parse failure names the offending
//! line and field instead of aborting the process, and file-level I/O errors
//! stay distinguishable from structural ones.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod io;
pub mod parser;
pub mod types;
pub mod vocab;

// Re-export commonly used types
pub use error::{GbkitError, Result};
pub use parser::{parse_str, read_path, CancelToken, Parser};
pub use types::{AnnotatedSequence, Feature, Locus, Meta, Reference};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
