//! Trigger scanning (input pre-classification).
//!
//! Before the reduction passes run, the string that is about to be
//! tokenized is scanned once to decide which rules can possibly fire.
//!
//! A literal key can only match a fragment that equals it, and every
//! fragment is a trimmed substring of the scanned string, so a literal key
//! absent from the string has nothing to match and its pass can be skipped.
//! Regex keys are always on: anchors and look-around make substring
//! reasoning unsound for them. The empty literal occurs in every string.
//!
//! Skipping is exact, not heuristic: gated and ungated runs produce the
//! same output.

use super::compiled_rules::RuleIndex;
use crate::RuleId;
use std::collections::HashSet;

/// Rules that may fire for one scanned string.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    pub active: HashSet<RuleId>,
}

impl TriggerInfo {
    /// Scan `input` against the literal keys in `index`.
    pub fn scan(input: &str, index: &RuleIndex<'_>) -> Self {
        let mut active: HashSet<RuleId> = index.always_on.iter().copied().collect();
        active.extend(index.literal.iter().filter(|(_, lit)| input.contains(lit)).map(|(id, _)| *id));
        TriggerInfo { active }
    }

    pub fn is_active(&self, id: RuleId) -> bool {
        self.active.contains(&id)
    }
}
