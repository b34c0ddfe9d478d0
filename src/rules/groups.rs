//! Parenthesised groups.
//!
//! The group modifier matches an innermost `( ... )`, reduces its contents
//! with the same config and substitutes the resolved value back into the
//! string. The engine then restarts on the result, so nesting unwinds from
//! the inside out:
//!
//! ```text
//! "8 * (3 + (1 - 3))" -> "8 * (3 + -2)" -> "8 * 1" -> 8
//! ```

use crate::{Config, Modifier, Pattern, Result, parse};

/// An innermost, non-empty parenthesised group. A `^` inside the group
/// keeps it from matching.
pub fn parenthesized() -> Pattern {
    re!(r"\([^(^)]+\)")
}

/// Rewriter for [`parenthesized`]: resolve the group's contents and splice
/// the value's text in place of the first occurrence of the group.
pub fn resolve_group(matched: &str, full: &str, config: &Config) -> Result<String> {
    let inner = matched.strip_prefix('(').and_then(|s| s.strip_suffix(')')).unwrap_or(matched);
    let resolved = parse(config)?.process(inner)?;
    Ok(full.replacen(matched, &resolved.to_string(), 1))
}

/// Append the group modifier to `config`.
pub fn brackets(config: Config) -> Config {
    config.modifier(parenthesized(), resolve_group)
}

pub fn get() -> Vec<Modifier> {
    vec![Modifier { key: parenthesized(), rewrite: Box::new(resolve_group) }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::arithmetic;

    #[test]
    fn group_is_replaced_by_its_value() {
        let mut config = brackets(Config::new());
        config.rules.extend(arithmetic::get());
        assert_eq!(config.modifiers.len(), 1);

        let out = resolve_group("(1 + 2)", "4 + 2 * (1 + 2)", &config).unwrap();
        assert_eq!(out, "4 + 2 * 3");
    }

    #[test]
    fn only_innermost_groups_match() {
        let Pattern::Regex(re) = parenthesized() else {
            unreachable!("parenthesized() is a regex key");
        };
        assert_eq!(re.find("8 * (3 + (1 - 3))").map(|m| m.as_str()), Some("(1 - 3)"));
        assert!(re.find("()").is_none());
        assert!(re.find("(2 ^ 3)").is_none());
    }
}
