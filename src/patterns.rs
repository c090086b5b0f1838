use std::borrow::Cow;
use std::fmt;

use regex::Regex;

use crate::error::Error;

/// Semantic role of a pattern. Stripping roles are removed from the
/// text during normalization; extraction roles produce segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Timestamp,
    CorrelationId,
    Sql,
    ContextDispatch,
    Error,
    Custom,
}

impl Role {
    pub fn is_stripping(self) -> bool {
        matches!(self, Role::Timestamp | Role::CorrelationId)
    }

    pub fn is_extraction(self) -> bool {
        !self.is_stripping()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Timestamp => "Timestamp",
            Role::CorrelationId => "CorrelationId",
            Role::Sql => "SQL",
            Role::ContextDispatch => "ContextDispatch",
            Role::Error => "Error",
            Role::Custom => "Custom",
        };
        f.write_str(name)
    }
}

/// Token length bounds for the bracketed correlation-id pair.
pub const DEFAULT_ID_TOKEN_BOUNDS: (usize, usize) = (1, 16);

/// Marker literal opening a context-dispatch block.
pub const DEFAULT_DISPATCH_MARKER: &str = "DefaultServerContext";

/// Compiled patterns for one parse run.
///
/// Fixed patterns are compiled at construction and owned here for the
/// lifetime of the run. The custom pattern is kept as a raw string and
/// compiled at first use, so an invalid expression surfaces when
/// extraction is attempted rather than when it is registered.
pub struct PatternSet {
    timestamp: Regex,
    correlation_id: Regex,
    sql: Regex,
    context_dispatch: Regex,
    error: Regex,
    custom: Option<String>,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSet {
    pub fn new() -> Self {
        Self::configured(DEFAULT_ID_TOKEN_BOUNDS, DEFAULT_DISPATCH_MARKER)
    }

    /// Build a set with explicit id token bounds and dispatch marker.
    /// The marker is taken literally; callers wanting the original
    /// `CommandDispatcher ` or `Argument ` variants pass those here.
    pub fn configured((min, max): (usize, usize), dispatch_marker: &str) -> Self {
        // Date-time, level, and the adjacent short bracket pair are
        // emitted as one prefix unit, so they strip as one unit. The
        // trailing space goes with it: normalized records must start at
        // content, or indented continuation lines become ambiguous.
        let timestamp = Regex::new(
            r"\d{1,4}-\d{1,2}-\d{1,2} \d{1,2}:\d{1,2}:\d{1,2},\d{1,3} DEBUG \[\w{1,4} \w{1,4}\] ?",
        )
        .unwrap();
        let correlation_id =
            Regex::new(&format!(r"\[\w{{{min},{max}}} \w{{{min},{max}}}\]")).unwrap();
        // Both sentinels are excluded via the capture group. A start
        // marker with no end marker before end-of-text never matches,
        // which drops unterminated trailing statements outright.
        let sql = Regex::new(r"(?s)Executing SQL\s(.*?)SQL execution completed").unwrap();
        let context_dispatch = Regex::new(&format!(
            r"{}[^\n]*(?:\n[ \t]+[^\n]*)*",
            regex::escape(dispatch_marker)
        ))
        .unwrap();
        // Marker line plus any indented continuation lines, the shape
        // stack-trace blocks take once record prefixes are stripped.
        let error = Regex::new(r"ERROR [^\n]*(?:\n[ \t]+[^\n]*)*").unwrap();
        Self {
            timestamp,
            correlation_id,
            sql,
            context_dispatch,
            error,
            custom: None,
        }
    }

    /// Register the caller-supplied pattern for [`Role::Custom`]. The
    /// expression is not validated here.
    pub fn set_custom(&mut self, pattern: impl Into<String>) {
        self.custom = Some(pattern.into());
    }

    pub fn timestamp(&self) -> &Regex {
        &self.timestamp
    }

    pub fn correlation_id(&self) -> &Regex {
        &self.correlation_id
    }

    /// The compiled pattern for an extraction role: borrowed for the
    /// fixed roles, compiled on the spot for `Custom`.
    pub fn extraction_pattern(&self, role: Role) -> Result<Cow<'_, Regex>, Error> {
        match role {
            Role::Sql => Ok(Cow::Borrowed(&self.sql)),
            Role::ContextDispatch => Ok(Cow::Borrowed(&self.context_dispatch)),
            Role::Error => Ok(Cow::Borrowed(&self.error)),
            Role::Custom => match &self.custom {
                Some(pattern) => Ok(Cow::Owned(Regex::new(pattern)?)),
                None => Err(Error::Configuration { role }),
            },
            Role::Timestamp | Role::CorrelationId => Err(Error::Configuration { role }),
        }
    }
}
