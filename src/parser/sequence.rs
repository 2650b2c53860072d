//! ORIGIN block sequence extractor

/// Extract the raw letter sequence from the lines after ORIGIN
///
/// Position numbers and grouping whitespace exist only for human readers;
/// everything that is not an ASCII letter is discarded. Letter case and
/// order are preserved. The `//` record terminator ends the block.
pub fn extract_sequence(rest: &[String]) -> String {
    let mut sequence = String::new();

    for line in rest {
        if line.trim_start().starts_with("//") {
            break;
        }
        sequence.extend(line.chars().filter(char::is_ascii_alphabetic));
    }

    sequence
}
