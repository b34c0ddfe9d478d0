//! Rule compilation and indexing.
//!
//! This module holds the *static* side of the engine: what can be derived
//! from the rule table once and reused for every string a [`Parser`] sees.
//!
//! - **Splitter**: a single alternation of every rule key, in table order.
//!   Literal keys are escaped; regex keys contribute their source verbatim.
//!   Each member is wrapped in a non-capturing group so inline flags and
//!   top-level `|` stay local to their key.
//! - **Index** (`RuleIndex`): literal keys are listed with their text so the
//!   trigger scan can drop them cheaply; regex keys are always on.
//!
//! ## Invariants
//!
//! - `RuleId` is an index into `CompiledRules::rules` (the caller's table).
//! - The alternation preserves table order, so when two keys could match at
//!   the same offset the earlier rule wins the split.
//! - A key that is valid alone can still break the alternation (an `(?x)`
//!   comment with no trailing newline eats the closing group). That surfaces
//!   as `Error::Pattern` from [`CompiledRules::new`].
//!
//! [`Parser`]: super::Parser

use crate::{Pattern, Result, Rule, RuleId};
use regex::Regex;

/// Rule lookup tables used by the trigger scan.
#[derive(Default, Debug)]
pub struct RuleIndex<'a> {
    /// Rules that may fire on any input (regex keys).
    pub always_on: Vec<RuleId>,
    /// Rules that can only fire when their literal text occurs in the input.
    pub literal: Vec<(RuleId, &'a str)>,
}

/// Pre-compiled rule table.
#[derive(Debug)]
pub struct CompiledRules<'a> {
    pub rules: &'a [Rule],
    /// `None` when the table is empty: nothing to split on.
    pub splitter: Option<Regex>,
    pub index: RuleIndex<'a>,
}

impl<'a> CompiledRules<'a> {
    pub fn new(rules: &'a [Rule]) -> Result<Self> {
        let splitter = if rules.is_empty() {
            None
        } else {
            let alternation =
                rules.iter().map(|rule| format!("(?:{})", rule.key.source())).collect::<Vec<_>>().join("|");
            Some(Regex::new(&alternation)?)
        };

        let mut index = RuleIndex::default();
        for (id, rule) in rules.iter().enumerate() {
            match &rule.key {
                Pattern::Literal(lit) => index.literal.push((id, lit.as_str())),
                Pattern::Regex(_) => index.always_on.push(id),
            }
        }

        Ok(CompiledRules { rules, splitter, index })
    }
}
