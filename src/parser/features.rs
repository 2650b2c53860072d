//! FEATURES table parser
//!
//! A feature occupies one declaration line (type at the sub-meta column,
//! location as the last token) followed by any number of qualifier lines,
//! each possibly wrapped over qualifier continuation lines:
//!
//! ```text
//!      gene            complement(<1..>206)
//!                      /locus_tag="YAL069W"
//!                      /note="a note that keeps going and going and
//!                      going over several lines"
//! ```

use crate::error::Result;
use crate::parser::lines::{
    is_feature_line, is_meta_line, is_qualifier_continuation, is_qualifier_line, LineCursor,
};
use crate::types::Feature;

/// Parse the line span after the FEATURES header into the ordered feature list
///
/// The scan stops at the first line that is a top-level field or not a
/// feature line. That boundary is exactly the ORIGIN line (or malformed
/// input); running past it would misread raw sequence text as features, so
/// the guard must stay ahead of everything else in the loop. End of input in
/// the middle of a feature ends the table with whatever qualifiers have
/// accumulated.
pub fn parse_feature_table(cursor: &mut LineCursor<'_>) -> Result<Vec<Feature>> {
    let mut features = Vec::new();

    while let Some(line) = cursor.peek() {
        if is_meta_line(line, cursor.line_no())? || !is_feature_line(line, cursor.line_no())? {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let mut feature = Feature {
            feature_type: tokens.first().unwrap_or(&"").to_string(),
            location: tokens.last().unwrap_or(&"").to_string(),
            ..Feature::default()
        };

        cursor.advance();

        while let Some(line) = cursor.peek() {
            if !is_qualifier_line(line, cursor.line_no())? {
                break;
            }
            let mut qualifier = line.to_string();
            cursor.advance();

            while let Some(line) = cursor.peek() {
                if !is_qualifier_continuation(line, cursor.line_no())? {
                    break;
                }
                qualifier.push_str(line.trim());
                cursor.advance();
            }

            let (label, value) = split_qualifier(&qualifier);
            feature.attributes.insert(label, value);
        }

        features.push(feature);
    }

    Ok(features)
}

/// Split an accumulated qualifier into its label and value
///
/// Quotes, slashes, and newlines are stripped, then the text is split once on
/// `=`. A qualifier without `=` (e.g. `/pseudo`) gets an empty value.
fn split_qualifier(qualifier: &str) -> (String, String) {
    let cleaned: String = qualifier
        .chars()
        .filter(|c| !matches!(c, '"' | '/' | '\n'))
        .collect();

    match cleaned.split_once('=') {
        Some((label, value)) => (label.trim().to_string(), value.trim().to_string()),
        None => (cleaned.trim().to_string(), String::new()),
    }
}
