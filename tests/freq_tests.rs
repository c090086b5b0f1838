use tracesift::freq::count_segments;

#[test]
fn counts_each_distinct_segment() {
    let segments = ["lock timeout", "bad handle", "lock timeout"];
    let table = count_segments(&segments);
    assert_eq!(table.get("lock timeout"), Some(&2));
    assert_eq!(table.get("bad handle"), Some(&1));
    assert_eq!(table.len(), 2);
}

#[test]
fn counts_sum_to_input_length() {
    let segments = ["a", "b", "a", "c", "a", "b"];
    let table = count_segments(&segments);
    let total: usize = table.values().sum();
    assert_eq!(total, segments.len());
}

#[test]
fn empty_input_yields_empty_table() {
    let segments: [&str; 0] = [];
    assert!(count_segments(&segments).is_empty());
}
