//! Engine run metrics.
//!
//! Every run records cheap timings and counts; [`Parser::process`] drops
//! them, [`Parser::process_verbose`] hands them back. Produced nodes are only
//! kept when [`Features::RECORD_NODES`] is set, since they clone each node.
//!
//! [`Parser::process`]: super::Parser::process
//! [`Parser::process_verbose`]: super::Parser::process_verbose
//! [`Features::RECORD_NODES`]: crate::Features::RECORD_NODES

use crate::{Node, RuleId};
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run, resolver included.
    pub total: Duration,
    /// Modifier rewrites in the order they happened (outermost run only).
    pub rewrites: Vec<RewriteMetrics>,
    /// Time spent splitting the final string.
    pub tokenize: Duration,
    /// Fragments produced by the tokenizer.
    pub chunks: usize,
    /// One entry per rule, in table order.
    pub passes: Vec<PassMetrics>,
    /// Time spent in the resolver.
    pub resolve: Duration,
}

/// A single modifier rewrite.
#[derive(Debug, Default, Clone)]
pub struct RewriteMetrics {
    pub pattern: String,
    pub matched: String,
    pub output: String,
    /// Time spent in the rewriter (nested parses included).
    pub duration: Duration,
}

/// Timing and counts for a single rule pass.
#[derive(Debug, Default, Clone)]
pub struct PassMetrics {
    pub rule: RuleId,
    /// Display form of the rule key.
    pub key: String,
    pub duration: Duration,
    /// Tokens the rule reduced.
    pub matches: usize,
    /// Distinct positions removed after the scan.
    pub pruned: usize,
    /// Sequence length before and after the pass.
    pub before: usize,
    pub after: usize,
    /// Set when the trigger scan ruled the pass out.
    pub skipped: bool,
    /// Nodes produced in this pass (only with `RECORD_NODES`).
    pub nodes: Vec<Node>,
}

/// Resolver output bundled with run metrics.
#[derive(Debug, Clone)]
pub struct RunResult<R> {
    pub output: R,
    pub metrics: RunMetrics,
}
