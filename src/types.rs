//! Record types produced by the GenBank parser
//!
//! The parser's sole output is [`AnnotatedSequence`]: the record metadata
//! ([`Meta`]), the ordered feature table ([`Feature`]), and the raw letter
//! sequence. All types are plain data; once the parse returns they are never
//! mutated by the library.

use std::collections::HashMap;

/// Structured fields of the single LOCUS line
///
/// Produced once per record and immutable thereafter. The sequence length is
/// kept as the combined text (e.g. `"230218 bp"`), not parsed to an integer,
/// and the division code is expected to be a member of
/// [`GENBANK_DIVISIONS`](crate::vocab::GENBANK_DIVISIONS) but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locus {
    /// Locus name (e.g. "NC_001133")
    pub name: String,
    /// Length text with units (e.g. "230218 bp")
    pub sequence_length: String,
    /// Molecule type (e.g. "DNA", "ds-DNA")
    pub molecule_type: String,
    /// Whether the topology token was "circular"; false when the token is
    /// "linear" or absent
    pub circular: bool,
    /// Three-letter GenBank division code (e.g. "PLN")
    pub genbank_division: String,
    /// Modification date text (e.g. "12-NOV-2014")
    pub mod_date: String,
}

/// One entry of the FEATURES table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feature {
    /// Feature type (e.g. "CDS", "gene"); ideally a member of
    /// [`FEATURE_TYPES`](crate::vocab::FEATURE_TYPES)
    pub feature_type: String,
    /// Raw location string (e.g. "complement(3300..4037)"), not parsed further
    pub location: String,
    /// Qualifier label → value; keys are unique, the last occurrence of a
    /// duplicated label wins
    pub attributes: HashMap<String, String>,
}

/// One REFERENCE block
///
/// Any of the named sub-fields may be empty when the block omits it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reference {
    /// Reference index token; usually numeric but kept as text
    pub index: String,
    /// First base of the referenced range
    pub start: u64,
    /// Last base of the referenced range
    pub end: u64,
    /// AUTHORS field
    pub authors: String,
    /// TITLE field
    pub title: String,
    /// JOURNAL field
    pub journal: String,
    /// PUBMED field
    pub pubmed: String,
    /// REMARK field
    pub remark: String,
}

/// Record metadata assembled from the top-level fields
///
/// Scalar fields are overwritten if their keyword recurs in the file;
/// references accumulate in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Meta {
    /// Parsed LOCUS line
    pub locus: Locus,
    /// DEFINITION field
    pub definition: String,
    /// ACCESSION field
    pub accession: String,
    /// VERSION field
    pub version: String,
    /// KEYWORDS field
    pub keywords: String,
    /// Free-text part of the SOURCE block
    pub source: String,
    /// ORGANISM sub-field of the SOURCE block
    pub organism: String,
    /// REFERENCE blocks in file order
    pub references: Vec<Reference>,
}

/// A fully parsed GenBank record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotatedSequence {
    /// Record metadata
    pub meta: Meta,
    /// Feature table in declaration order
    pub features: Vec<Feature>,
    /// Raw sequence letters, original case and order, no digits or whitespace
    pub sequence: String,
}

impl AnnotatedSequence {
    /// Sequence length in letters (not the LOCUS length text)
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Check if the record carries no sequence letters
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
