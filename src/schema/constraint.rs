//! Constraint metadata attached to fields
//!
//! Constraints are descriptive only; nothing here enforces them.

use std::fmt;

/// Name of the serialization marker that never shows up in reports.
pub const JSON_PROPERTY: &str = "JsonProperty";

/// Time unit carried by duration bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Upper-case constant name, as used in constraint comments.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "NANOSECONDS",
            TimeUnit::Microseconds => "MICROSECONDS",
            TimeUnit::Milliseconds => "MILLISECONDS",
            TimeUnit::Seconds => "SECONDS",
            TimeUnit::Minutes => "MINUTES",
            TimeUnit::Hours => "HOURS",
            TimeUnit::Days => "DAYS",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declarative validation constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    NotEmpty,
    Min(i64),
    Max(i64),
    DurationMin { unit: TimeUnit, value: i64 },
    DurationMax { unit: TimeUnit, value: i64 },
    /// Serialization marker; suppressed in every rendering.
    JsonProperty,
    /// Any other constraint, rendered by its simple name.
    Unknown(String),
}

impl Constraint {
    pub fn unknown(name: impl Into<String>) -> Self {
        Constraint::Unknown(name.into())
    }

    pub fn min_duration(value: i64, unit: TimeUnit) -> Self {
        Constraint::DurationMin { unit, value }
    }

    pub fn max_duration(value: i64, unit: TimeUnit) -> Self {
        Constraint::DurationMax { unit, value }
    }

    /// True for the serialization marker, however it was declared.
    pub fn is_marker(&self) -> bool {
        match self {
            Constraint::JsonProperty => true,
            Constraint::Unknown(name) => name == JSON_PROPERTY,
            _ => false,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::NotEmpty => f.write_str("Not Empty"),
            Constraint::Min(n) => write!(f, "Min: {n}"),
            Constraint::Max(n) => write!(f, "Max: {n}"),
            Constraint::DurationMin { unit, value } => write!(f, "DurationMin: {unit} {value}"),
            Constraint::DurationMax { unit, value } => write!(f, "DurationMax: {unit} {value}"),
            Constraint::JsonProperty => f.write_str(JSON_PROPERTY),
            Constraint::Unknown(name) => f.write_str(name),
        }
    }
}

/// Build the `# <Type>( ... )` comment for a field.
///
/// Returns the bare `# <Type>` when no constraint qualifies; callers decide
/// whether that bare form is printed.
pub fn annotation_comment(simple_type: &str, constraints: &[Constraint]) -> String {
    let rendered: Vec<String> = constraints
        .iter()
        .filter(|c| !c.is_marker())
        .map(ToString::to_string)
        .collect();

    let mut out = format!("# {simple_type}");
    if !rendered.is_empty() {
        out.push_str("( ");
        out.push_str(&rendered.join("; "));
        out.push_str(" )");
    }
    out
}

/// Number of constraints that end up in a comment.
pub fn qualifying_count(constraints: &[Constraint]) -> usize {
    constraints.iter().filter(|c| !c.is_marker()).count()
}
