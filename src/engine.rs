//! Reduction engine.
//!
//! The engine is split into focused submodules under `src/engine/`, with
//! [`Parser`] as the entry point.
//!
//! ## How the parts work together
//!
//! ```text
//! Config.rules ──┐
//!                │  CompiledRules::new         (compiled_rules.rs)
//!                └──────────────┬─────────────  one alternation of all keys
//!                               │
//! input ── modifiers::rewrite ──┤  regex modifiers, whole string  (modifiers.rs)
//!            │ match            │  no match
//!            └─ restart on the  │
//!               rewritten text  v
//!                     chunker::chunk_str         (chunker.rs)
//!                       - split, keep delimiters, trim
//!                               │
//!                     TriggerInfo::scan          (trigger.rs)
//!                       - literal keys absent from the text are skipped
//!                               │
//!                               v
//!                     Parser::reduce_pass        (parser.rs)
//!                       - one pass per rule, table order
//!                       - PruneSet drops consumed neighbours (prune.rs)
//!                               │
//!                               v
//!                     resolver (default: resolve, resolve.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `compiled_rules.rs`: the combined split pattern and a literal/always-on
//!   index of the rule table.
//! - `trigger.rs`: which rules can possibly fire for a given string.
//! - `modifiers.rs`: whole-string rewrites that restart the pipeline.
//! - `chunker.rs`: the tokenizer.
//! - `parser.rs`: the per-rule scan-and-reduce passes.
//! - `prune.rs`: index bookkeeping for consumed neighbours.
//! - `resolve.rs`: the default resolver.
//! - `metrics.rs`: timing and per-pass data for a run.
//!
//! ## Debugging
//!
//! Traces go through the `log` facade under the `reductor` target. With the
//! bundled binary, `RUST_LOG=reductor=trace` prints every rewrite, pass and
//! reduction.

#[path = "engine/chunker.rs"]
mod chunker;
#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/modifiers.rs"]
mod modifiers;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/prune.rs"]
mod prune;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/trigger.rs"]
mod trigger;

#[allow(unused_imports)]
pub use compiled_rules::{CompiledRules, RuleIndex};
pub use metrics::{PassMetrics, RewriteMetrics, RunMetrics, RunResult};
pub use parser::Parser;
pub use resolve::{Resolved, resolve};
#[allow(unused_imports)]
pub use trigger::TriggerInfo;
