//! Dynamic values flowing through a reduction.
//!
//! Rules may return anything a caller finds useful (a number, a verdict, a
//! replacement token, a list). `Value` is the small closed set of kinds the
//! engine carries between passes without interpreting them.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value (a reducer that produced nothing).
    #[default]
    Nil,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// Numeric view of the value, coercing loosely:
    ///
    /// ```text
    /// Text("  42 ") -> 42      Text("") -> 0      Text("4x") -> NaN
    /// Text("0x10")  -> 16      Text("-Infinity") -> -inf
    /// Bool(true)    -> 1       Nil      -> NaN    List(_)    -> NaN
    /// ```
    ///
    /// Text written by [`Display`](fmt::Display) reads back as the same number.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Text(s) => parse_number(s),
            Value::Nil | Value::List(_) => f64::NAN,
        }
    }

    /// Returns the boolean when the value *is* a boolean (no truthiness).
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    match s {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&s[2..], radix);
    }
    // `f64::from_str` accepts "inf"/"nan" spellings; only digits count here.
    if s.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Unsigned integer digits in `radix`; no digits at all is NaN.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc, c| c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d)))
        .unwrap_or(f64::NAN)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => {
                if n.is_infinite() {
                    f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
                } else if n.is_finite() && n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    // whole number: print without decimal point
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Text(s) => f.write_str(s),
            Value::List(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
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

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_coerces_like_a_loose_number() {
        let cases: Vec<(&str, f64)> =
            vec![
                ("42", 42.0),
                (" 7 ", 7.0),
                ("-1", -1.0),
                ("1.5", 1.5),
                ("", 0.0),
                ("1e3", 1000.0),
                ("Infinity", f64::INFINITY),
                ("+Infinity", f64::INFINITY),
                (" -Infinity", f64::NEG_INFINITY),
                ("0x10", 16.0),
                ("0XfF", 255.0),
                ("0b11", 3.0),
                ("0o7", 7.0),
            ];
        for (input, expected) in cases {
            assert_eq!(Value::from(input).to_number(), expected, "input {input:?}");
        }
        let nan_cases = vec!["4x", "inf", "infinity", "NaN", "0x", "0b12", "-0x10", "0x1.5"];
        for input in nan_cases {
            assert!(Value::from(input).to_number().is_nan(), "input {input:?}");
        }
        assert!(Value::Nil.to_number().is_nan());
        assert_eq!(Value::Bool(true).to_number(), 1.0);
    }

    #[test]
    fn displayed_numbers_read_back_unchanged() {
        for n in [f64::INFINITY, f64::NEG_INFINITY, -4.0, 0.25, 1e21] {
            let text = Value::Number(n).to_string();
            assert_eq!(Value::Text(text.clone()).to_number(), n, "text {text:?}");
        }
    }

    #[test]
    fn whole_numbers_display_without_fraction() {
        assert_eq!(Value::Number(10.0).to_string(), "10");
        assert_eq!(Value::Number(-4.0).to_string(), "-4");
        assert_eq!(Value::Number(0.5).to_string(), "0.5");
        assert_eq!(Value::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Nil.to_string(), "");
        assert_eq!(Value::List(vec![Value::from(1), Value::from("a")]).to_string(), "1,a");
    }
}
