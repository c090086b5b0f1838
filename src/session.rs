use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use once_cell::unsync::OnceCell;

use crate::correlate::{self, IdGroup};
use crate::error::Error;
use crate::extract;
use crate::freq;
use crate::normalize;
use crate::patterns::{PatternSet, Role};

/// Full content of one trace log, loaded once and consumed read-only
/// by every extraction and grouping call in a run.
#[derive(Debug, Clone)]
pub struct TraceLog {
    text: String,
}

impl TraceLog {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(Self {
            text: std::fs::read_to_string(path)?,
        })
    }

    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> Vec<&str> {
        self.text.lines().collect()
    }
}

impl From<String> for TraceLog {
    fn from(text: String) -> Self {
        Self { text }
    }
}

/// One parse run: a pattern set plus a loaded log. The log is read
/// once and its normalized form is computed at most once, shared by
/// every extraction call; grouping always works on the raw lines.
pub struct Session {
    patterns: PatternSet,
    log: TraceLog,
    normalized: OnceCell<String>,
}

impl Session {
    pub fn new(log: TraceLog) -> Self {
        Self::with_patterns(log, PatternSet::new())
    }

    pub fn with_patterns(log: TraceLog, patterns: PatternSet) -> Self {
        Self {
            patterns,
            log,
            normalized: OnceCell::new(),
        }
    }

    pub fn set_custom_pattern(&mut self, pattern: impl Into<String>) {
        self.patterns.set_custom(pattern);
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn log(&self) -> &TraceLog {
        &self.log
    }

    fn normalized(&self) -> &str {
        self.normalized
            .get_or_init(|| normalize::normalize(&self.patterns, self.log.text()))
    }

    /// Segments for an extraction role, over the normalized text.
    pub fn extract(&self, role: Role) -> Result<Vec<String>, Error> {
        extract::extract(&self.patterns, self.normalized(), role)
    }

    /// Distinct correlation ids with their first-occurrence line index.
    pub fn group(&self) -> Vec<IdGroup> {
        correlate::group(&self.patterns, &self.log.lines())
    }

    /// Occurrence counts for the segments of an extraction role.
    pub fn frequencies(&self, role: Role) -> Result<BTreeMap<String, usize>, Error> {
        Ok(freq::count_segments(&self.extract(role)?))
    }
}
