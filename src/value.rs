use serde::{Deserialize, Serialize};
use std::fmt;

/// An uploaded file stored as an answer to a `file` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub name: String,
    pub mime_type: String,
    #[serde(default)]
    pub size_bytes: u64,
    /// Base64 payload as captured by the upload widget.
    #[serde(default)]
    pub data: String,
}

/// Runtime value of an answer or of a condition literal.
///
/// Deserializes from plain JSON: `null`, booleans, numbers, strings, arrays
/// and attachment objects. An absent answer is represented as `Null`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Value>),
    File(Attachment),
}

impl Value {
    /// Name of the variant, used in lint messages and traces.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::File(_) => "file",
        }
    }

    /// True for an absent answer, an empty string or an empty list.
    /// Zero and `false` are answers, not emptiness.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Bool(_) | Value::Number(_) | Value::File(_) => false,
        }
    }

    /// Strict equality. Values of different kinds never match, and compound
    /// values (lists, attachments) are only ever equal to themselves by
    /// identity, which two independently built values cannot share.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }

    /// Like `strict_eq`, except NaN matches NaN. Used for list membership.
    pub fn same_value_zero(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.strict_eq(other),
        }
    }

    /// Numeric coercion. Anything without a sensible numeric reading becomes
    /// NaN so that every ordered comparison against it is false.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Null => f64::NAN,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::Text(s) => parse_numeric_text(s),
            Value::List(items) => match items.as_slice() {
                [] => 0.0,
                // A one-element list reads as its element's text form.
                [single] => parse_numeric_text(&single.to_text()),
                _ => f64::NAN,
            },
            Value::File(_) => f64::NAN,
        }
    }

    /// Text coercion: numbers print without a trailing `.0`, lists are
    /// comma-joined and null is the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::Text(s) => s.clone(),
            Value::List(items) => items.iter().map(Value::to_text).collect::<Vec<_>>().join(","),
            Value::File(file) => file.name.clone(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "empty"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Text(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::File(file) => write!(f, "<file {}>", file.name),
        }
    }
}

pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Parses text the way a browser's `Number()` does for form input: blank is
/// zero, decimal and exponent literals parse, `Infinity` is accepted and
/// everything else is NaN.
fn parse_numeric_text(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    // `f64::from_str` also accepts "inf" and "nan", which form input must not.
    let well_formed = trimmed.len() - unsigned.len() <= 1
        && unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !well_formed {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
