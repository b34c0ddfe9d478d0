//! Stock rule tables.
//!
//! These are ordinary engine callers: every reducer here follows the same
//! contract as a user-supplied one. [`default_config`] stacks them into a
//! small expression evaluator.

pub mod arithmetic;
pub mod comparison;
pub mod groups;
pub mod logic;

#[cfg(test)]
mod tests;

use crate::Config;

/// Parenthesised groups, then arithmetic, comparison and logic rules:
///
/// ```text
/// modifiers: \([^()]+\)
/// rules:     *  /  +  -  >=  <=  >  <  =  &&  ||
/// ```
///
/// Rule order is priority, so `*` binds before `/` and `+` before `-`.
pub fn default_config() -> Config {
    let mut config = Config::new();
    config.modifiers.extend(groups::get());
    config.rules.extend(arithmetic::get());
    config.rules.extend(comparison::get());
    config.rules.extend(logic::get());
    config
}
