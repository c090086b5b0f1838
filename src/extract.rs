use crate::error::Error;
use crate::patterns::{PatternSet, Role};

/// Every non-overlapping match of the role's pattern against `text`,
/// in document order. `text` is expected to be normalized; matches may
/// span multiple lines. An empty result is a valid outcome.
///
/// When the pattern defines a capture group, group 1 is the segment
/// (this is how the SQL sentinels are excluded on both sides); the
/// whole match otherwise.
pub fn extract(patterns: &PatternSet, text: &str, role: Role) -> Result<Vec<String>, Error> {
    let re = patterns.extraction_pattern(role)?;
    let segments = re
        .captures_iter(text)
        .map(|caps| {
            let m = caps.get(1).unwrap_or_else(|| caps.get(0).unwrap());
            m.as_str().to_string()
        })
        .collect();
    Ok(segments)
}
