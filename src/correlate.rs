use ahash::AHashSet;
use serde::Serialize;

use crate::patterns::PatternSet;

/// One distinct correlation identifier and the zero-based index of the
/// first line it appears on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdGroup {
    pub id: String,
    pub first_line: usize,
}

/// Scan raw lines for correlation identifiers and index each distinct
/// id by first occurrence, ordered ascending by first line.
///
/// Lines keep their original positions. The timestamp prefix is
/// stripped per line for recognition only, so the short bracket pair
/// inside the prefix is never mistaken for a correlation tag; at most
/// one id (the first match in the remainder) counts per line.
///
/// First-line indices are strictly increasing across the output and no
/// id appears twice. A log with no ids yields an empty result.
pub fn group<S: AsRef<str>>(patterns: &PatternSet, lines: &[S]) -> Vec<IdGroup> {
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut out = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        let stripped = patterns.timestamp().replace(line.as_ref(), "");
        if let Some(m) = patterns.correlation_id().find(&stripped) {
            let id = m.as_str().to_string();
            if seen.insert(id.clone()) {
                out.push(IdGroup {
                    id,
                    first_line: index,
                });
            }
        }
    }
    out
}
