//! Runtime values read from configuration instances

use std::fmt;

use super::constraint::TimeUnit;

/// A count plus a unit, e.g. `30 seconds`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    pub count: i64,
    pub unit: TimeUnit,
}

impl Duration {
    pub const fn new(count: i64, unit: TimeUnit) -> Self {
        Self { count, unit }
    }

    pub const fn milliseconds(count: i64) -> Self {
        Self::new(count, TimeUnit::Milliseconds)
    }

    pub const fn seconds(count: i64) -> Self {
        Self::new(count, TimeUnit::Seconds)
    }

    pub const fn minutes(count: i64) -> Self {
        Self::new(count, TimeUnit::Minutes)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.unit.as_str().to_ascii_lowercase();
        // "1 second", "2 seconds"
        let units = if self.count == 1 {
            &units[..units.len() - 1]
        } else {
            units.as_str()
        };
        write!(f, "{} {}", self.count, units)
    }
}

/// The value of a scalar field
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Str(String),
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    Duration(Duration),
    /// Enum constant name
    Enum(String),
    /// Ordered key/value entries
    Mapping(Vec<(String, Value)>),
}

impl Value {
    pub fn enumeration(name: impl Into<String>) -> Self {
        Value::Enum(name.into())
    }

    pub fn empty_mapping() -> Self {
        Value::Mapping(Vec::new())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Long(n) => write!(f, "{n}"),
            Value::Double(d) => fmt_double(*d, f),
            Value::Duration(d) => write!(f, "{d}"),
            Value::Enum(name) => f.write_str(name),
            Value::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}={v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Doubles print like the JVM's `Double.toString`: plain decimal with at
/// least one fractional digit inside `[1e-3, 1e7)`, `<mantissa>E<exp>` outside.
fn fmt_double(d: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if d.is_nan() {
        return f.write_str("NaN");
    }
    if d.is_infinite() {
        return f.write_str(if d > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let magnitude = d.abs();
    if d == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return if d.fract() == 0.0 {
            write!(f, "{d:.1}")
        } else {
            write!(f, "{d}")
        };
    }

    let scientific = format!("{d:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        write!(f, "{mantissa}E{exponent}")
    } else {
        write!(f, "{mantissa}.0E{exponent}")
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Long(n)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Long(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl<K: ToString, V: Into<Value> + Clone> From<&std::collections::BTreeMap<K, V>> for Value {
    fn from(map: &std::collections::BTreeMap<K, V>) -> Self {
        Value::Mapping(
            map.iter()
                .map(|(k, v)| (k.to_string(), v.clone().into()))
                .collect(),
        )
    }
}
