//! Scan-and-reduce parser.
//!
//! This module is the operational core of the engine:
//!
//! - Rewrite the whole string with modifiers until none matches, restarting
//!   the pipeline after every rewrite (see `modifiers.rs`).
//! - Split the result into fragments (see `chunker.rs`).
//! - Run one pass per rule, in table order, over the fragment sequence.
//! - Hand the final sequence to the resolver.
//!
//! ## Pass structure
//!
//! A pass never observes its own work. Every match reads its neighbours from
//! the sequence the pass started with; the matched position is replaced in
//! place and the neighbours are pruned together once the scan is over.
//!
//! ```text
//! rule ">"    ["2", ">", "1", ">", "0"]
//!                  ^1        ^3            matches
//! node@1 = gt("2", "1")   consumed {0,1,2}
//! node@3 = gt("1", "0")   consumed {2,3,4}     "1" is read by both
//! prune {0,2,4}           -> [node@1, node@3]
//! ```
//!
//! Two matches that share a neighbour both read its original value and the
//! neighbour is removed once. A node built in this pass is itself removed
//! when another match of the same pass marks its position, which happens
//! when a regex key matches two adjacent fragments.
//! Fragments only ever match as tokens; nodes only ever act as neighbours.

use super::chunker::chunk_str;
use super::compiled_rules::CompiledRules;
use super::metrics::{PassMetrics, RunMetrics, RunResult};
use super::modifiers;
use super::prune::PruneSet;
use super::resolve::{Resolved, resolve};
use super::trigger::TriggerInfo;
use crate::{Chunk, Config, Features, Node, Options, Result, Rule, RuleId, Siblings};
use std::fmt;
use std::time::Instant;

type Resolver<'a, R> = Box<dyn Fn(Vec<Chunk>) -> R + 'a>;

/// A rule table bound to a resolver.
///
/// Build one with [`parse`](crate::parse) or [`parse_with`](crate::parse_with),
/// then call [`process`](Parser::process) for every string. The parser only
/// borrows the [`Config`], so rewriters are free to build nested parsers over
/// the same config.
pub struct Parser<'a, R = Resolved> {
    config: &'a Config,
    compiled: CompiledRules<'a>,
    options: Options,
    resolver: Resolver<'a, R>,
}

impl<'a, R> fmt::Debug for Parser<'a, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("config", &self.config)
            .field("options", &self.options)
            .field("resolver", &"<function>")
            .finish()
    }
}

impl<'a> Parser<'a, Resolved> {
    /// Parser with the default [`resolve`] resolver.
    pub fn new(config: &'a Config) -> Result<Self> {
        Self::with_resolver(config, resolve)
    }
}

impl<'a, R> Parser<'a, R> {
    /// Parser whose final sequence goes to `resolver`.
    pub fn with_resolver(config: &'a Config, resolver: impl Fn(Vec<Chunk>) -> R + 'a) -> Result<Self> {
        let compiled = CompiledRules::new(&config.rules)?;
        let ignored = config.modifiers.iter().filter(|m| !m.key.is_regex()).count();
        if ignored > 0 {
            log::debug!("[modifier] {ignored} literal modifier key(s) will never fire");
        }
        Ok(Parser { config, compiled, options: Options::default(), resolver: Box::new(resolver) })
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    /// Reduce `input` and resolve the result.
    ///
    /// `None` reduces to an empty sequence. Reducer and rewriter errors abort
    /// the call and are returned unchanged.
    pub fn process<'s>(&self, input: impl Into<Option<&'s str>>) -> Result<R> {
        self.process_verbose(input).map(|run| run.output)
    }

    /// Like [`process`](Parser::process), also returning timings and per-pass data.
    pub fn process_verbose<'s>(&self, input: impl Into<Option<&'s str>>) -> Result<RunResult<R>> {
        let total_start = Instant::now();
        let mut metrics = RunMetrics::default();

        let chunks = self.run(input.into(), &mut metrics)?;

        let resolve_start = Instant::now();
        let output = (self.resolver)(chunks);
        metrics.resolve = resolve_start.elapsed();
        metrics.total = total_start.elapsed();

        Ok(RunResult { output, metrics })
    }

    /// Modifiers, then tokenize and reduce. A rewrite restarts the whole run
    /// on the rewritten string.
    fn run(&self, input: Option<&str>, metrics: &mut RunMetrics) -> Result<Vec<Chunk>> {
        let Some(text) = input else {
            log::debug!("[chunker] no input");
            return Ok(Vec::new());
        };

        if let Some(rewritten) = modifiers::rewrite(self.config, text, &mut metrics.rewrites)? {
            return self.run(Some(&rewritten), metrics);
        }

        let tokenize_start = Instant::now();
        let chunks = chunk_str(self.compiled.splitter.as_ref(), Some(text));
        metrics.tokenize = tokenize_start.elapsed();
        metrics.chunks = chunks.len();

        let trigger =
            self.options.features.contains(Features::GATE_RULES).then(|| TriggerInfo::scan(text, &self.compiled.index));

        self.reduce(chunks, trigger.as_ref(), metrics)
    }

    /// Apply every rule once, in table order.
    fn reduce(
        &self,
        mut chunks: Vec<Chunk>,
        trigger: Option<&TriggerInfo>,
        metrics: &mut RunMetrics,
    ) -> Result<Vec<Chunk>> {
        let record = self.options.features.contains(Features::RECORD_NODES);

        for (id, rule) in self.compiled.rules.iter().enumerate() {
            if trigger.is_some_and(|t| !t.is_active(id)) {
                log::trace!("[pass] rule={} key={} skipped", id, rule.key);
                metrics.passes.push(PassMetrics {
                    rule: id,
                    key: rule.key.to_string(),
                    before: chunks.len(),
                    after: chunks.len(),
                    skipped: true,
                    ..PassMetrics::default()
                });
                continue;
            }

            let (next, pass) = Self::reduce_pass(id, rule, chunks, record)?;
            log::debug!(
                "[pass] rule={} key={} matches={} pruned={} len={}->{}",
                id,
                rule.key,
                pass.matches,
                pass.pruned,
                pass.before,
                pass.after
            );
            metrics.passes.push(pass);
            chunks = next;
        }

        Ok(chunks)
    }

    /// One left-to-right scan for `rule` over `chunks`.
    fn reduce_pass(id: RuleId, rule: &Rule, chunks: Vec<Chunk>, record: bool) -> Result<(Vec<Chunk>, PassMetrics)> {
        let pass_start = Instant::now();
        let before = chunks.len();
        let mut prune = PruneSet::default();
        let mut produced: Vec<(usize, Node)> = Vec::new();

        for (i, chunk) in chunks.iter().enumerate() {
            let Some(token) = chunk.as_fragment().filter(|text| rule.key.matches(text)) else {
                continue;
            };

            let left = i.checked_sub(1);
            let right = Some(i + 1).filter(|&r| r < chunks.len());
            let siblings = Siblings::new(token, left.map(|l| chunks[l].value()), right.map(|r| chunks[r].value()));

            let result = (rule.reduce)(&siblings)?;
            log::trace!("[reduce] rule={} at={} args={:?} result={:?}", id, i, siblings.args(), result);

            let consumed: Vec<usize> = left.into_iter().chain(Some(i)).chain(right).collect();
            for neighbour in left.into_iter().chain(right) {
                prune.mark(neighbour);
            }
            produced.push((i, Node { rule: id, key: rule.key.clone(), token: token.to_string(), consumed, result }));
        }

        let matches = produced.len();
        let nodes = if record { produced.iter().map(|(_, node)| node.clone()).collect() } else { Vec::new() };

        let mut next = chunks;
        for (i, node) in produced {
            next[i] = Chunk::Reduced(node);
        }
        let pruned = prune.count_within(next.len());
        let next = prune.apply(next);

        let pass = PassMetrics {
            rule: id,
            key: rule.key.to_string(),
            duration: pass_start.elapsed(),
            matches,
            pruned,
            before,
            after: next.len(),
            skipped: false,
            nodes,
        };
        Ok((next, pass))
    }
}
