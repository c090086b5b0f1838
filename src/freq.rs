use std::collections::BTreeMap;

/// Tally occurrences of each distinct literal segment string. The sum
/// of the counts equals the length of the input sequence.
pub fn count_segments<S: AsRef<str>>(segments: &[S]) -> BTreeMap<String, usize> {
    let mut map: BTreeMap<String, usize> = BTreeMap::new();
    for seg in segments {
        *map.entry(seg.as_ref().to_string()).or_insert(0) += 1;
    }
    map
}
