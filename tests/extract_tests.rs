use tracesift::extract::extract;
use tracesift::patterns::{PatternSet, Role};
use tracesift::Error;

#[test]
fn sql_segment_excludes_both_sentinels() {
    let patterns = PatternSet::new();
    let text = "Executing SQL SELECT 1 SQL execution completed ";
    let segments = extract(&patterns, text, Role::Sql).unwrap();
    assert_eq!(segments, vec!["SELECT 1 ".to_string()]);
}

#[test]
fn sql_segments_come_in_document_order() {
    let patterns = PatternSet::new();
    let text = "Executing SQL SELECT a FROM t SQL execution completed \
                noise \
                Executing SQL UPDATE t SET x = 1 SQL execution completed";
    let segments = extract(&patterns, text, Role::Sql).unwrap();
    assert_eq!(
        segments,
        vec!["SELECT a FROM t ".to_string(), "UPDATE t SET x = 1 ".to_string()]
    );
}

#[test]
fn sql_segment_may_span_lines() {
    let patterns = PatternSet::new();
    let text = "Executing SQL\nSELECT *\n  FROM orders\nSQL execution completed";
    let segments = extract(&patterns, text, Role::Sql).unwrap();
    assert_eq!(segments, vec!["SELECT *\n  FROM orders\n".to_string()]);
}

#[test]
fn unterminated_trailing_sql_block_is_dropped() {
    let patterns = PatternSet::new();
    let text = "Executing SQL SELECT 1 SQL execution completed \
                Executing SQL SELECT 2 but the log ends here";
    let segments = extract(&patterns, text, Role::Sql).unwrap();
    assert_eq!(segments, vec!["SELECT 1 ".to_string()]);
}

#[test]
fn error_block_takes_marker_line_and_indented_continuations() {
    let patterns = PatternSet::new();
    let text = "ERROR failed to prepare statement\n    at db.Statement.prepare\n    at db.Pool.acquire\nnext record";
    let segments = extract(&patterns, text, Role::Error).unwrap();
    assert_eq!(
        segments,
        vec!["ERROR failed to prepare statement\n    at db.Statement.prepare\n    at db.Pool.acquire".to_string()]
    );
}

#[test]
fn dispatch_block_stops_at_next_unindented_line() {
    let patterns = PatternSet::new();
    let text = "DefaultServerContext dispatching list orders\nERROR unrelated";
    let segments = extract(&patterns, text, Role::ContextDispatch).unwrap();
    assert_eq!(
        segments,
        vec!["DefaultServerContext dispatching list orders".to_string()]
    );
}

#[test]
fn custom_role_without_pattern_is_a_configuration_error() {
    let patterns = PatternSet::new();
    let err = extract(&patterns, "some text", Role::Custom).unwrap_err();
    assert!(matches!(err, Error::Configuration { role: Role::Custom }));
    assert_eq!(err.to_string(), "no pattern set for role Custom");
}

#[test]
fn custom_pattern_matches_whole_match_without_groups() {
    let mut patterns = PatternSet::new();
    patterns.set_custom(r"task-\d+");
    let segments = extract(&patterns, "task-1 then task-2", Role::Custom).unwrap();
    assert_eq!(segments, vec!["task-1".to_string(), "task-2".to_string()]);
}

#[test]
fn custom_pattern_with_capture_group_yields_group_text() {
    let mut patterns = PatternSet::new();
    patterns.set_custom(r"user=(\w+)");
    let segments = extract(&patterns, "user=alice user=bob", Role::Custom).unwrap();
    assert_eq!(segments, vec!["alice".to_string(), "bob".to_string()]);
}

#[test]
fn invalid_custom_pattern_surfaces_pattern_error() {
    let mut patterns = PatternSet::new();
    patterns.set_custom("(");
    let err = extract(&patterns, "anything", Role::Custom).unwrap_err();
    assert!(matches!(err, Error::Pattern(_)));
}

#[test]
fn empty_input_yields_empty_sequences_for_every_role() {
    let mut patterns = PatternSet::new();
    patterns.set_custom(r"\d+");
    for role in [Role::Sql, Role::ContextDispatch, Role::Error, Role::Custom] {
        let segments = extract(&patterns, "", role).unwrap();
        assert!(segments.is_empty(), "{role} on empty input");
    }
}

#[test]
fn duplicate_segments_are_preserved() {
    let patterns = PatternSet::new();
    let text = "ERROR lock timeout\nERROR lock timeout\n";
    let segments = extract(&patterns, text, Role::Error).unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0], segments[1]);
}
