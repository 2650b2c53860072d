//! Integration tests against a complete GenBank record
//!
//! These tests parse a full cloning-vector record (plain and gzipped) from
//! `tests/data/` and validate the assembled record end to end.

use gbkit::vocab::{is_division, is_feature_type, is_qualifier_name};
use gbkit::{read_path, AnnotatedSequence, Parser};
use std::path::PathBuf;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn parse_record() -> AnnotatedSequence {
    read_path(data_path("pgbk42.gb")).expect("failed to parse record")
}

#[test]
fn test_record_metadata() {
    let record = parse_record();
    let locus = &record.meta.locus;

    assert_eq!(locus.name, "pGBK42");
    assert_eq!(locus.sequence_length, "360 bp");
    assert_eq!(locus.molecule_type, "DNA");
    assert!(locus.circular);
    assert_eq!(locus.genbank_division, "SYN");
    assert!(is_division(&locus.genbank_division));
    assert_eq!(locus.mod_date, "03-FEB-2019");

    assert_eq!(
        record.meta.definition,
        "Cloning vector pGBK42, complete sequence; synthetic construct carrying \
         a beta-galactosidase alpha fragment."
    );
    assert_eq!(record.meta.accession, "GK000042");
    assert_eq!(record.meta.version, "GK000042.1");
    assert_eq!(record.meta.source, "synthetic DNA construct");
    assert_eq!(
        record.meta.organism,
        "synthetic DNA construct other sequences; artificial sequences; vectors."
    );
}

#[test]
fn test_record_references() {
    let record = parse_record();
    let references = &record.meta.references;

    assert_eq!(references.len(), 2);

    let first = &references[0];
    assert_eq!(first.index, "1");
    assert_eq!(first.start, 1);
    assert_eq!(first.end, 360);
    assert_eq!(first.authors, "Norrander,J., Kempe,T. and Messing,J.");
    assert_eq!(
        first.title,
        "Construction of improved M13 vectors using oligodeoxynucleotide-directed mutagenesis"
    );
    assert_eq!(first.journal, "Gene 26 (1), 101-106 (1983)");
    assert_eq!(first.pubmed, "6323249");
    assert_eq!(first.remark, "");

    let second = &references[1];
    assert_eq!(second.index, "2");
    assert_eq!(second.title, "Direct Submission");
    assert_eq!(second.remark, "Sequence update");
    assert_eq!(second.pubmed, "");
}

#[test]
fn test_record_features() {
    let record = parse_record();

    let kinds: Vec<&str> = record
        .features
        .iter()
        .map(|f| f.feature_type.as_str())
        .collect();
    assert_eq!(
        kinds,
        vec!["source", "promoter", "gene", "CDS", "misc_feature", "rep_origin", "gene"]
    );
    assert!(kinds.iter().all(|k| is_feature_type(k)));

    let source = &record.features[0];
    assert_eq!(source.location, "1..360");
    assert_eq!(source.attributes["organism"], "synthetic DNA construct");
    assert_eq!(source.attributes["lab_host"], "Escherichia coli");

    let cds = &record.features[3];
    assert_eq!(cds.location, "61..240");
    assert_eq!(cds.attributes["codon_start"], "1");
    assert_eq!(
        cds.attributes["product"],
        "beta-galactosidase alpha fragment"
    );
    // Wrapped translation lines concatenate without separators.
    assert_eq!(
        cds.attributes["translation"],
        "MTMITPSLHACRSTLEDPRVPSSNSLAVVLQRRDWENPGVTQLNRLAAHPPFASWRNSEE"
    );

    let pseudo_gene = &record.features[6];
    assert_eq!(pseudo_gene.location, "complement(320..350)");
    assert_eq!(pseudo_gene.attributes["gene"], "bla");
    assert_eq!(pseudo_gene.attributes["pseudo"], "");

    // Every qualifier label in the record is a known one.
    for feature in &record.features {
        for label in feature.attributes.keys() {
            assert!(is_qualifier_name(label), "unknown qualifier: {label}");
        }
    }
}

#[test]
fn test_record_sequence() {
    let record = parse_record();

    assert_eq!(record.sequence.len(), 360);
    assert!(record.sequence.starts_with("gctaaagaca"));
    assert!(record.sequence.ends_with("gagactagaa"));
    assert!(record
        .sequence
        .chars()
        .all(|c| c.is_ascii_alphabetic()));
}

#[test]
fn test_gzipped_input_parses_identically() {
    let plain = read_path(data_path("pgbk42.gb")).unwrap();
    let gzipped = read_path(data_path("pgbk42.gb.gz")).unwrap();
    assert_eq!(plain, gzipped);
}

#[test]
fn test_repeated_parse_is_deterministic() {
    assert_eq!(parse_record(), parse_record());
}

#[test]
fn test_skipped_fields_are_reported() {
    let mut parser = Parser::from_path(data_path("pgbk42.gb")).unwrap();
    let record = parser.parse().unwrap();

    // The COMMENT field is unmodeled: dropped from the record, surfaced in
    // the diagnostics list.
    assert_eq!(parser.skipped_fields(), ["COMMENT"]);
    assert_eq!(record.meta.locus.name, "pGBK42");
}
