//! Boolean connectives.
//!
//! Operands must be booleans, either produced by an earlier rule or written
//! literally as `true`/`false`; anything else counts as false.

use crate::{Result, Rule, Siblings, Value};

fn truth(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Text(text)) => text == "true",
        _ => false,
    }
}

pub fn and(s: &Siblings<'_>) -> Result<Value> {
    Ok(Value::Bool(truth(s.arg(0)) && truth(s.arg(1))))
}

pub fn or(s: &Siblings<'_>) -> Result<Value> {
    Ok(Value::Bool(truth(s.arg(0)) || truth(s.arg(1))))
}

pub fn get() -> Vec<Rule> {
    vec![Rule { key: "&&".into(), reduce: Box::new(and) }, Rule { key: "||".into(), reduce: Box::new(or) }]
}
