use crate::engine::{Parser, Resolved, RunMetrics};
use crate::{Chunk, Config, Node, Result};
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(crate::rules::default_config);

bitflags::bitflags! {
    /// Optional engine behaviour.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Features: u8 {
        /// Skip rule passes whose literal key does not occur in the string.
        /// Output is identical either way.
        const GATE_RULES   = 1 << 0;
        /// Keep every produced node in the per-pass metrics.
        const RECORD_NODES = 1 << 1;
    }
}

/// Options that affect how a [`Parser`] runs (never what it produces).
#[derive(Debug, Clone)]
pub struct Options {
    pub features: Features,
}

impl Default for Options {
    fn default() -> Self {
        Options { features: Features::GATE_RULES }
    }
}

/// Build a parser for `config` with the default resolver.
///
/// # Example
/// ```
/// use reductor::{Config, Value, parse};
///
/// let config = Config::new()
///     .rule("*", |s| Ok(Value::Number(s.number(0) * s.number(1))))
///     .rule("+", |s| Ok(Value::Number(s.number(0) + s.number(1))));
///
/// let out = parse(&config).unwrap().process("4 + 2 * 3").unwrap();
/// assert_eq!(out.value(), Some(&Value::Number(10.0)));
/// ```
///
/// With no rules there is nothing to split on: the whole trimmed input comes
/// back as a single fragment rather than one fragment per character.
pub fn parse(config: &Config) -> Result<Parser<'_, Resolved>> {
    Parser::new(config)
}

/// Build a parser for `config` whose final sequence goes to `resolver`.
pub fn parse_with<'a, R>(config: &'a Config, resolver: impl Fn(Vec<Chunk>) -> R + 'a) -> Result<Parser<'a, R>> {
    Parser::with_resolver(config, resolver)
}

/// Evaluate `text` with the stock arithmetic, comparison and logic rules
/// (see [`rules::default_config`](crate::rules::default_config)).
///
/// ```
/// use reductor::{Value, evaluate};
///
/// assert_eq!(evaluate("8 * (3 + (1 - 3))").unwrap().value(), Some(&Value::Number(8.0)));
/// ```
pub fn evaluate(text: &str) -> Result<Resolved> {
    parse(&DEFAULT_CONFIG)?.process(text)
}

/// A compact per-pass trace.
#[derive(Debug, Clone)]
pub struct PassSummary {
    pub pass: usize,
    pub rule: String,
    pub duration: Duration,
    pub matches: usize,
    pub pruned: usize,
    /// Sequence length after the pass.
    pub remaining: usize,
    pub skipped: bool,
    pub samples: Vec<NodeSummary>,
}

/// A compact node summary used in verbose traces.
#[derive(Debug, Clone)]
pub struct NodeSummary {
    pub consumed: Vec<usize>,
    pub token: String,
    pub preview: String,
}

/// A modifier rewrite, as reported by [`evaluate_verbose`].
#[derive(Debug, Clone)]
pub struct RewriteSummary {
    pub pattern: String,
    pub matched: String,
    pub output: String,
}

/// Additional details returned by [`evaluate_verbose`].
///
/// This is intentionally compact: it's meant for debugging rule tables, not
/// for dumping the whole run.
#[derive(Debug, Clone)]
pub struct ParseDetails {
    pub total: Duration,
    pub rewrites: Vec<RewriteSummary>,
    pub tokenize: Duration,
    /// Fragments produced by the tokenizer.
    pub chunks: usize,
    pub passes: Vec<PassSummary>,
    pub resolve: Duration,
    /// Keys of rules that were not ruled out by the trigger scan.
    pub active_rules: Vec<String>,
}

/// Result from [`evaluate_verbose`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub text: String,
    pub output: Resolved,
    pub elapsed: Duration,
    pub details: ParseDetails,
}

/// Evaluate `text` with the stock rules and return extra (compact) debug details.
pub fn evaluate_verbose(text: &str, options: &Options) -> Result<ParseResultVerbose> {
    let parser = parse(&DEFAULT_CONFIG)?.with_options(options.clone());
    let run = parser.process_verbose(text)?;

    Ok(ParseResultVerbose {
        text: text.to_string(),
        output: run.output,
        elapsed: run.metrics.total,
        details: details_from_metrics(&run.metrics),
    })
}

fn details_from_metrics(metrics: &RunMetrics) -> ParseDetails {
    let rewrites = metrics
        .rewrites
        .iter()
        .map(|r| RewriteSummary { pattern: r.pattern.clone(), matched: r.matched.clone(), output: r.output.clone() })
        .collect();

    let passes = metrics
        .passes
        .iter()
        .enumerate()
        .map(|(idx, pass)| PassSummary {
            pass: idx + 1,
            rule: pass.key.clone(),
            duration: pass.duration,
            matches: pass.matches,
            pruned: pass.pruned,
            remaining: pass.after,
            skipped: pass.skipped,
            samples: pass.nodes.iter().take(8).map(node_to_summary).collect(),
        })
        .collect();

    let active_rules = metrics.passes.iter().filter(|p| !p.skipped).map(|p| p.key.clone()).collect();

    ParseDetails {
        total: metrics.total,
        rewrites,
        tokenize: metrics.tokenize,
        chunks: metrics.chunks,
        passes,
        resolve: metrics.resolve,
        active_rules,
    }
}

fn node_to_summary(node: &Node) -> NodeSummary {
    NodeSummary { consumed: node.consumed.clone(), token: node.token.clone(), preview: format_preview(node) }
}

fn format_preview(node: &Node) -> String {
    let s = format!("{:?}", node.result);
    s.chars().take(80).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn evaluate_uses_the_stock_rules() {
        assert_eq!(evaluate("4 + 2 * (1 + 2)").unwrap(), Resolved::Value(Value::Number(10.0)));
        assert_eq!(evaluate("3 + 1 = (7 - 11) * -1").unwrap(), Resolved::Value(Value::Bool(true)));
        assert_eq!(evaluate("no operators here").unwrap().to_string(), "no operators here");
    }

    #[test]
    fn empty_rule_table_returns_the_trimmed_input() {
        let config = Config::new();
        let out = parse(&config).unwrap().process(" abc ").unwrap();
        assert_eq!(out, Resolved::Value(Value::from("abc")));
    }

    #[test]
    fn evaluate_verbose_reports_rewrites_and_passes() {
        let options = Options { features: Features::GATE_RULES | Features::RECORD_NODES };
        let res = evaluate_verbose("(4 + 2) * 3", &options).unwrap();

        assert_eq!(res.text, "(4 + 2) * 3");
        assert_eq!(res.output.value(), Some(&Value::Number(18.0)));
        assert_eq!(res.elapsed, res.details.total);

        assert_eq!(res.details.rewrites.len(), 1);
        assert_eq!(res.details.rewrites[0].matched, "(4 + 2)");
        assert_eq!(res.details.rewrites[0].output, "6 * 3");

        assert_eq!(res.details.chunks, 3);
        assert!(res.details.active_rules.contains(&"\"*\"".to_string()));
        assert!(!res.details.active_rules.contains(&"\"+\"".to_string()));
        let multiply = res.details.passes.iter().find(|p| p.rule == "\"*\"").unwrap();
        assert_eq!(multiply.matches, 1);
        assert_eq!(multiply.remaining, 1);
        assert_eq!(multiply.samples[0].consumed, vec![0, 1, 2]);
    }
}
