use std::collections::BTreeMap;
use std::io::{self, Write};

use itertools::Itertools;
use serde::Serialize;

use crate::correlate::IdGroup;

/// One row of a frequency report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    pub segment: String,
    pub count: usize,
}

/// Frequency table as rows ordered by descending count, ties broken by
/// segment text.
pub fn frequency_rows(table: &BTreeMap<String, usize>) -> Vec<FrequencyRow> {
    table
        .iter()
        .map(|(segment, count)| FrequencyRow {
            segment: segment.clone(),
            count: *count,
        })
        .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.segment.cmp(&b.segment)))
        .collect()
}

/// Write segments one per line, newline-terminated.
///
/// A segment that itself contains newlines is written as-is, so a
/// line-based read-back will split it; callers needing a lossless
/// round trip must check for embedded newlines first.
pub fn write_segments<W: Write>(mut w: W, segments: &[String]) -> io::Result<()> {
    for seg in segments {
        w.write_all(seg.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Write the `Error,Frequency` CSV report: header row, then one row
/// per distinct segment with its count.
pub fn write_frequency_csv<W: Write>(
    mut w: W,
    table: &BTreeMap<String, usize>,
) -> io::Result<()> {
    writeln!(w, "Error,Frequency")?;
    for row in frequency_rows(table) {
        writeln!(w, "{},{}", csv_field(&row.segment), row.count)?;
    }
    Ok(())
}

fn csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub fn groups_to_json(groups: &[IdGroup]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(groups)
}

pub fn frequencies_to_json(table: &BTreeMap<String, usize>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&frequency_rows(table))
}
