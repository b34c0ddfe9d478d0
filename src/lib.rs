//! A configurable, rule-driven string reducer.
//!
//! A [`Config`] holds an ordered table of token rules (literal or regex keys
//! mapped to reducers) and an optional table of whole-string modifiers. The
//! engine splits the input on the rule keys, then applies rules in table
//! order: each matching token swallows its immediate neighbours and is
//! replaced by the reducer's [`Value`]. A one-element result collapses to
//! its value.
//!
//! ```
//! use reductor::{Config, Resolved, Value, parse};
//!
//! let config = Config::new().rule(">", |s| Ok(Value::Bool(s.number(0) > s.number(1))));
//! let out = parse(&config).unwrap().process("1 > 0").unwrap();
//! assert_eq!(out, Resolved::Value(Value::Bool(true)));
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
pub mod rules;
mod value;

use regex::Regex;
use std::borrow::Cow;
use std::fmt;

pub use api::{
    Features, NodeSummary, Options, ParseDetails, ParseResultVerbose, PassSummary, RewriteSummary, evaluate,
    evaluate_verbose, parse, parse_with,
};
pub use engine::{Parser, PassMetrics, Resolved, RewriteMetrics, RunMetrics, RunResult, resolve};
pub use error::{Error, Result};
pub use value::Value;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
    pub use regex::Regex;
}

/// Rule identifier (index into [`Config::rules`]).
pub type RuleId = usize;

// --- Keys -------------------------------------------------------------------

/// A rule or modifier key: a literal token or a regular expression.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Matches a fragment whose text is exactly this string.
    Literal(String),
    /// Matches a fragment the expression finds a match in. When splitting,
    /// each capture group that took part in a match becomes an extra
    /// fragment right after the delimiter.
    Regex(Regex),
}

impl Pattern {
    /// Compile `source` into a `Pattern::Regex`.
    pub fn regex(source: &str) -> Result<Self> {
        Ok(Pattern::Regex(Regex::new(source)?))
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, Pattern::Regex(_))
    }

    /// Whether the fragment text `fragment` is a token for this key.
    pub fn matches(&self, fragment: &str) -> bool {
        match self {
            Pattern::Literal(lit) => lit == fragment,
            Pattern::Regex(re) => re.is_match(fragment),
        }
    }

    /// The key as a member of a combined alternation.
    pub(crate) fn source(&self) -> Cow<'_, str> {
        match self {
            Pattern::Literal(lit) => Cow::Owned(regex::escape(lit)),
            Pattern::Regex(re) => Cow::Borrowed(re.as_str()),
        }
    }
}

/// Literals compare by text, expressions by source.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Pattern::Literal(a), Pattern::Literal(b)) => a == b,
            (Pattern::Regex(a), Pattern::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(lit) => write!(f, "{lit:?}"),
            Pattern::Regex(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

impl From<&str> for Pattern {
    fn from(lit: &str) -> Self {
        Pattern::Literal(lit.to_string())
    }
}

impl From<String> for Pattern {
    fn from(lit: String) -> Self {
        Pattern::Literal(lit)
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Pattern::Regex(re)
    }
}

impl From<&Regex> for Pattern {
    fn from(re: &Regex) -> Self {
        Pattern::Regex(re.clone())
    }
}

// --- Rule tables --------------------------------------------------------------

/// The neighbours of a matched token, as handed to a [`Reducer`].
///
/// Only present neighbours are carried: a token at the start of the
/// sequence has no `left`, one at the end has no `right`. The positional
/// view ([`arg`](Siblings::arg)) numbers the present values left to right.
///
/// ```text
/// [ "4" , "*" , "3" ]   -> left=Some("4") right=Some("3")  arg(0)="4" arg(1)="3"
/// [ "*" , "3" ]         -> left=None      right=Some("3")  arg(0)="3"
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Siblings<'a> {
    token: &'a str,
    left: Option<Value>,
    right: Option<Value>,
}

impl<'a> Siblings<'a> {
    pub fn new(token: &'a str, left: Option<Value>, right: Option<Value>) -> Self {
        Siblings { token, left, right }
    }

    /// Text of the matched token fragment.
    pub fn token(&self) -> &'a str {
        self.token
    }

    pub fn left(&self) -> Option<&Value> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&Value> {
        self.right.as_ref()
    }

    /// Present neighbour values, left to right.
    pub fn args(&self) -> Vec<&Value> {
        self.left.iter().chain(self.right.iter()).collect()
    }

    /// The `n`th present neighbour value.
    pub fn arg(&self, n: usize) -> Option<&Value> {
        self.left.iter().chain(self.right.iter()).nth(n)
    }

    /// The `n`th present neighbour coerced with [`Value::to_number`]; NaN when absent.
    pub fn number(&self, n: usize) -> f64 {
        self.arg(n).map_or(f64::NAN, Value::to_number)
    }

    pub fn len(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type Reducer = Box<dyn Fn(&Siblings<'_>) -> Result<Value> + Send + Sync>;

/// Receives `(matched, full, config)` and returns the new full string.
pub type Rewriter = Box<dyn Fn(&str, &str, &Config) -> Result<String> + Send + Sync>;

/// A token rule: when a fragment matches `key`, `reduce` turns it and its
/// neighbours into a single value.
pub struct Rule {
    pub key: Pattern,
    pub reduce: Reducer,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("key", &self.key).field("reduce", &"<function>").finish()
    }
}

/// A whole-string rewrite applied before tokenization.
///
/// Only `Pattern::Regex` keys ever fire. A rewriter that leaves its own
/// trigger in the output recurses until the stack runs out.
pub struct Modifier {
    pub key: Pattern,
    pub rewrite: Rewriter,
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modifier").field("key", &self.key).field("rewrite", &"<function>").finish()
    }
}

/// Ordered modifier and rule tables. Order is priority.
#[derive(Debug, Default)]
pub struct Config {
    pub modifiers: Vec<Modifier>,
    pub rules: Vec<Rule>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; it runs after every rule already in the table.
    pub fn rule<P, F>(mut self, key: P, reduce: F) -> Self
    where
        P: Into<Pattern>,
        F: Fn(&Siblings<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        self.rules.push(Rule { key: key.into(), reduce: Box::new(reduce) });
        self
    }

    /// Append a modifier; it is tried after every modifier already in the table.
    pub fn modifier<P, F>(mut self, key: P, rewrite: F) -> Self
    where
        P: Into<Pattern>,
        F: Fn(&str, &str, &Config) -> Result<String> + Send + Sync + 'static,
    {
        self.modifiers.push(Modifier { key: key.into(), rewrite: Box::new(rewrite) });
        self
    }
}

// --- Chunks -----------------------------------------------------------------

/// A reduced token: the rule that fired, what it consumed and what it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Index of the rule in [`Config::rules`].
    pub rule: RuleId,
    /// Key of that rule.
    pub key: Pattern,
    /// Text of the matched token fragment.
    pub token: String,
    /// Positions consumed in the sequence the pass started from, ascending.
    pub consumed: Vec<usize>,
    pub result: Value,
}

/// An element of the sequence being reduced.
#[derive(Debug, Clone, PartialEq)]
pub enum Chunk {
    /// Trimmed input text (a token marker or the text between markers).
    Fragment(String),
    Reduced(Node),
}

impl Chunk {
    /// The value a neighbouring token sees: a node's result or the fragment text.
    pub fn value(&self) -> Value {
        match self {
            Chunk::Fragment(text) => Value::Text(text.clone()),
            Chunk::Reduced(node) => node.result.clone(),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Chunk::Fragment(text) => Value::Text(text),
            Chunk::Reduced(node) => node.result,
        }
    }

    pub fn as_fragment(&self) -> Option<&str> {
        match self {
            Chunk::Fragment(text) => Some(text),
            Chunk::Reduced(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Chunk::Reduced(node) => Some(node),
            Chunk::Fragment(_) => None,
        }
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chunk::Fragment(text) => f.write_str(text),
            Chunk::Reduced(node) => write!(f, "{}", node.result),
        }
    }
}

impl From<&str> for Chunk {
    fn from(text: &str) -> Self {
        Chunk::Fragment(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn siblings_number_present_values_left_to_right() {
        let both = Siblings::new("*", Some(Value::from("4")), Some(Value::from("3")));
        assert_eq!(both.len(), 2);
        assert_eq!(both.arg(0), Some(&Value::from("4")));
        assert_eq!(both.number(1), 3.0);

        let start = Siblings::new("*", None, Some(Value::from("3")));
        assert_eq!(start.len(), 1);
        assert_eq!(start.left(), None);
        assert_eq!(start.arg(0), Some(&Value::from("3")));
        assert!(start.number(1).is_nan());

        let alone = Siblings::new("*", None, None);
        assert!(alone.is_empty());
        assert!(alone.args().is_empty());
    }

    #[test]
    fn literal_and_regex_keys_match_fragments() {
        let lit = Pattern::from(">");
        assert!(lit.matches(">"));
        assert!(!lit.matches(">="));
        assert_eq!(lit.source(), ">");
        assert_eq!(Pattern::from("*").source(), r"\*");

        let re = re!(r"-(?:\s|$)");
        assert!(re.matches("-"));
        assert!(!re.matches("-1"));
        assert_eq!(re, Pattern::regex(r"-(?:\s|$)").unwrap());
        assert_ne!(re, Pattern::from(r"-(?:\s|$)"));
    }

    #[test]
    fn chunk_value_prefers_node_result() {
        let node = Chunk::Reduced(Node {
            rule: 0,
            key: Pattern::from("+"),
            token: "+".into(),
            consumed: vec![0, 1, 2],
            result: Value::Number(3.0),
        });
        assert_eq!(node.value(), Value::Number(3.0));
        assert_eq!(Chunk::from("abc").value(), Value::from("abc"));
        assert_eq!(node.to_string(), "3");
    }
}
