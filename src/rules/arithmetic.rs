//! Arithmetic reducers over loosely coerced numbers.
//!
//! Operands go through [`Value::to_number`], so an empty fragment counts as
//! zero and non-numeric text as NaN.

use crate::{Result, Rule, Siblings, Value};

pub fn add(s: &Siblings<'_>) -> Result<Value> {
    Ok(Value::Number(s.number(0) + s.number(1)))
}

pub fn subtract(s: &Siblings<'_>) -> Result<Value> {
    Ok(Value::Number(s.number(0) - s.number(1)))
}

pub fn multiply(s: &Siblings<'_>) -> Result<Value> {
    Ok(Value::Number(s.number(0) * s.number(1)))
}

pub fn divide(s: &Siblings<'_>) -> Result<Value> {
    Ok(Value::Number(s.number(0) / s.number(1)))
}

/// `*`, `/`, `+`, then binary minus.
///
/// Binary minus must be followed by whitespace or the end of the input, so
/// `-1` stays a negative literal.
pub fn get() -> Vec<Rule> {
    vec![
        Rule { key: "*".into(), reduce: Box::new(multiply) },
        Rule { key: "/".into(), reduce: Box::new(divide) },
        Rule { key: "+".into(), reduce: Box::new(add) },
        Rule { key: re!(r"-(?:\s|$)"), reduce: Box::new(subtract) },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> Siblings<'static> {
        Siblings::new("", Some(Value::from(a)), Some(Value::from(b)))
    }

    #[test]
    fn reducers_coerce_fragments() {
        assert_eq!(add(&pair("3", "")).unwrap(), Value::Number(3.0));
        assert_eq!(subtract(&pair("-1", "-1")).unwrap(), Value::Number(0.0));
        assert_eq!(multiply(&pair("2", "3")).unwrap(), Value::Number(6.0));
        assert_eq!(divide(&pair("1", "4")).unwrap(), Value::Number(0.25));
    }

    #[test]
    fn missing_operand_is_nan() {
        let one_sided = Siblings::new("+", None, Some(Value::from("5")));
        assert!(add(&one_sided).unwrap().to_number().is_nan());
    }

    #[test]
    fn binary_minus_leaves_negative_literals_alone() {
        let rules = get();
        let minus = &rules[3].key;
        assert!(minus.matches("-"));
        assert!(!minus.matches("-1"));
    }
}
