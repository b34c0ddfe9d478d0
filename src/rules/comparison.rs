//! Numeric comparisons producing booleans.

use crate::{Result, Rule, Siblings, Value};

pub fn gt(s: &Siblings<'_>) -> Result<Value> {
    Ok(Value::Bool(s.number(0) > s.number(1)))
}

pub fn lt(s: &Siblings<'_>) -> Result<Value> {
    Ok(Value::Bool(s.number(0) < s.number(1)))
}

pub fn ge(s: &Siblings<'_>) -> Result<Value> {
    Ok(Value::Bool(s.number(0) >= s.number(1)))
}

pub fn le(s: &Siblings<'_>) -> Result<Value> {
    Ok(Value::Bool(s.number(0) <= s.number(1)))
}

pub fn equal(s: &Siblings<'_>) -> Result<Value> {
    Ok(Value::Bool(s.number(0) == s.number(1)))
}

/// Two-character operators come first so the split never breaks `>=` apart.
pub fn get() -> Vec<Rule> {
    vec![
        Rule { key: ">=".into(), reduce: Box::new(ge) },
        Rule { key: "<=".into(), reduce: Box::new(le) },
        Rule { key: ">".into(), reduce: Box::new(gt) },
        Rule { key: "<".into(), reduce: Box::new(lt) },
        Rule { key: "=".into(), reduce: Box::new(equal) },
    ]
}
