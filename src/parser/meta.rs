//! SOURCE/ORGANISM and REFERENCE block parsers
//!
//! Both blocks nest sub-level fields under a top-level keyword line and rely
//! on the continuation joiner for their multi-line text.

use crate::error::{GbkitError, Result};
use crate::parser::lines::{head_token, is_meta_line, join_continuations};
use crate::types::Reference;
use crate::vocab;

/// Split the SOURCE block into its free-text source and nested organism
///
/// `tokens` is the SOURCE line split into whitespace tokens; `rest` are the
/// lines after it. Lines that are blank at the meta column and do not open
/// the ORGANISM sub-field extend the source text. The ORGANISM line plus its
/// continuations form the organism text. A top-level line before any
/// ORGANISM ends the block with an empty organism.
pub fn parse_source_organism(
    tokens: &[&str],
    rest: &[String],
    line_no: usize,
) -> Result<(String, String)> {
    let mut source = tokens.get(1..).unwrap_or(&[]).join(" ").trim().to_string();
    let mut organism = String::new();

    for (offset, line) in rest.iter().enumerate() {
        let head = head_token(line);
        if is_meta_line(line, line_no + 1 + offset)? {
            break;
        }
        if head == "ORGANISM" {
            let organism_tokens: Vec<&str> = line.split_whitespace().collect();
            organism = join_continuations(&organism_tokens, &rest[offset + 1..]);
            break;
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            if !source.is_empty() {
                source.push(' ');
            }
            source.push_str(trimmed);
        }
    }

    Ok((source, organism))
}

/// Expected token count of a reference header: `<index> (bases <start> to <end>)`
const REFERENCE_HEADER_TOKENS: usize = 5;

/// Parse one REFERENCE block into a [`Reference`]
///
/// The header text after the keyword has the shape
/// `<index> (bases <start> to <end>)`; a header with too few tokens or
/// non-numeric bounds is a [`GbkitError::MalformedReferenceHeader`]. The
/// lines that follow are scanned up to the next top-level keyword, and each
/// recognized sub-level field (AUTHORS, TITLE, JOURNAL, PUBMED, REMARK) is
/// joined over its span; unrecognized sub-level keywords are ignored.
pub fn parse_reference(tokens: &[&str], rest: &[String], line_no: usize) -> Result<Reference> {
    let header: Vec<&str> = tokens.get(1..).unwrap_or(&[]).to_vec();

    if header.len() < REFERENCE_HEADER_TOKENS {
        return Err(GbkitError::MalformedReferenceHeader {
            line: line_no,
            msg: format!(
                "expected '<index> (bases <start> to <end>)', found {} tokens",
                header.len()
            ),
        });
    }

    let parse_bound = |token: &str, which: &str| {
        token
            .trim_end_matches(')')
            .parse::<u64>()
            .map_err(|_| GbkitError::MalformedReferenceHeader {
                line: line_no,
                msg: format!("{which} bound {token:?} is not an integer"),
            })
    };

    let mut reference = Reference {
        index: header[0].to_string(),
        start: parse_bound(header[2], "start")?,
        end: parse_bound(header[4], "end")?,
        ..Reference::default()
    };

    for (offset, line) in rest.iter().enumerate() {
        let head = head_token(line);
        if vocab::is_top_level_keyword(head) {
            break;
        }
        let field = match head {
            "AUTHORS" => &mut reference.authors,
            "TITLE" => &mut reference.title,
            "JOURNAL" => &mut reference.journal,
            "PUBMED" => &mut reference.pubmed,
            "REMARK" => &mut reference.remark,
            _ => continue,
        };
        let field_tokens: Vec<&str> = line.split_whitespace().collect();
        *field = join_continuations(&field_tokens, &rest[offset + 1..]);
    }

    Ok(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn tokens(line: &str) -> Vec<&str> {
        line.split_whitespace().collect()
    }

    #[test]
    fn test_source_and_organism() {
        let rest = lines(&[
            "            (baker's yeast)",
            "  ORGANISM  Saccharomyces cerevisiae S288C",
            "            Eukaryota; Fungi; Dikarya; Ascomycota; Saccharomycotina;",
            "REFERENCE   1  (bases 1 to 230218)",
        ]);
        let (source, organism) = parse_source_organism(
            &tokens("SOURCE      Saccharomyces cerevisiae S288C"),
            &rest,
            1,
        )
        .unwrap();

        assert_eq!(source, "Saccharomyces cerevisiae S288C (baker's yeast)");
        assert_eq!(
            organism,
            "Saccharomyces cerevisiae S288C Eukaryota; Fungi; Dikarya; Ascomycota; Saccharomycotina;"
        );
    }

    #[test]
    fn test_source_without_organism() {
        let rest = lines(&["REFERENCE   1  (bases 1 to 100)"]);
        let (source, organism) =
            parse_source_organism(&tokens("SOURCE      synthetic DNA construct"), &rest, 1)
                .unwrap();

        assert_eq!(source, "synthetic DNA construct");
        assert_eq!(organism, "");
    }

    #[test]
    fn test_reference_header() {
        let reference = parse_reference(
            &tokens("REFERENCE   1  (bases 1 to 230218)"),
            &[],
            3,
        )
        .unwrap();

        assert_eq!(reference.index, "1");
        assert_eq!(reference.start, 1);
        assert_eq!(reference.end, 230218);
        assert_eq!(reference.authors, "");
        assert_eq!(reference.pubmed, "");
    }

    #[test]
    fn test_reference_sub_fields() {
        let rest = lines(&[
            "  AUTHORS   Goffeau,A., Barrell,B.G., Bussey,H., Davis,R.W.,",
            "            Dujon,B. and Oliver,S.G.",
            "  TITLE     Life with 6000 genes",
            "  JOURNAL   Science 274 (5287), 546 (1996)",
            "  PUBMED    8849441",
            "FEATURES             Location/Qualifiers",
        ]);
        let reference =
            parse_reference(&tokens("REFERENCE   1  (bases 1 to 230218)"), &rest, 3).unwrap();

        assert_eq!(
            reference.authors,
            "Goffeau,A., Barrell,B.G., Bussey,H., Davis,R.W., Dujon,B. and Oliver,S.G."
        );
        assert_eq!(reference.title, "Life with 6000 genes");
        assert_eq!(reference.journal, "Science 274 (5287), 546 (1996)");
        assert_eq!(reference.pubmed, "8849441");
        assert_eq!(reference.remark, "");
    }

    #[test]
    fn test_reference_stops_at_top_level_keyword() {
        // AUTHORS of the next block must not bleed into this one.
        let rest = lines(&[
            "  TITLE     First title",
            "REFERENCE   2  (bases 1 to 50)",
            "  AUTHORS   Next,B.",
        ]);
        let reference =
            parse_reference(&tokens("REFERENCE   1  (bases 1 to 50)"), &rest, 3).unwrap();

        assert_eq!(reference.title, "First title");
        assert_eq!(reference.authors, "");
    }

    #[test]
    fn test_reference_header_too_few_tokens() {
        let err = parse_reference(&tokens("REFERENCE   1"), &[], 12).unwrap_err();
        assert!(matches!(
            err,
            GbkitError::MalformedReferenceHeader { line: 12, .. }
        ));
    }

    #[test]
    fn test_reference_header_non_numeric_bounds() {
        let err = parse_reference(
            &tokens("REFERENCE   1  (bases one to 230218)"),
            &[],
            12,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GbkitError::MalformedReferenceHeader { line: 12, .. }
        ));
    }

    #[test]
    fn test_reference_single_spaced_header() {
        // Headers without the customary double space after the index parse
        // the same way.
        let reference =
            parse_reference(&tokens("REFERENCE 2 (bases 101 to 206)"), &[], 5).unwrap();
        assert_eq!(reference.index, "2");
        assert_eq!(reference.start, 101);
        assert_eq!(reference.end, 206);
    }
}
