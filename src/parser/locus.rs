//! LOCUS line parser
//!
//! The LOCUS line is the only fixed-token line of the record:
//!
//! ```text
//! LOCUS       NC_001133.9  230218 bp   DNA   linear   PLN  12-NOV-2014
//! ```
//!
//! Older format variants omit the `circular`/`linear` topology token, which
//! shifts the division and date one position left; both arities parse.

use crate::error::{GbkitError, Result};
use crate::types::Locus;

/// Index of the topology token when present
const TOPOLOGY_TOKEN: usize = 5;
/// Token count with the topology token
const TOKENS_WITH_TOPOLOGY: usize = 8;
/// Token count without the topology token
const TOKENS_WITHOUT_TOPOLOGY: usize = 7;

/// Parse the LOCUS line into its structured fields
///
/// Tokens are whitespace-delimited (runs of spaces collapse). A line with
/// fewer tokens than its arity requires is a [`GbkitError::MalformedLocus`];
/// the token list is never indexed past its end.
pub fn parse_locus(line: &str, line_no: usize) -> Result<Locus> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let has_topology = tokens
        .get(TOPOLOGY_TOKEN)
        .is_some_and(|t| *t == "circular" || *t == "linear");
    let required = if has_topology {
        TOKENS_WITH_TOPOLOGY
    } else {
        TOKENS_WITHOUT_TOPOLOGY
    };

    if tokens.len() < required {
        return Err(GbkitError::MalformedLocus {
            line: line_no,
            msg: format!("expected {} tokens, found {}", required, tokens.len()),
        });
    }

    let mut locus = Locus {
        name: tokens[1].to_string(),
        sequence_length: format!("{} {}", tokens[2], tokens[3]),
        molecule_type: tokens[4].to_string(),
        ..Locus::default()
    };

    if has_topology {
        locus.circular = tokens[5] == "circular";
        locus.genbank_division = tokens[6].to_string();
        locus.mod_date = tokens[7].to_string();
    } else {
        locus.genbank_division = tokens[5].to_string();
        locus.mod_date = tokens[6].to_string();
    }

    Ok(locus)
}
