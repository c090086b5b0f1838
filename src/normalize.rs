use crate::patterns::PatternSet;

/// Remove every timestamp-prefix match and every correlation-tag match
/// from the input, leaving all other characters (newlines included) in
/// their original relative order.
///
/// Already-normalized text has no remaining matches, so a second pass
/// is a no-op.
pub fn normalize(patterns: &PatternSet, text: &str) -> String {
    // Order matters: the short bracket pair inside the prefix belongs
    // to the timestamp unit and must not be consumed as a tag first.
    let s = patterns.timestamp().replace_all(text, "");
    let s = patterns.correlation_id().replace_all(&s, "");
    s.into_owned()
}
