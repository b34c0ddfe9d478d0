//! Default resolution of a reduced sequence.
//!
//! ```text
//! [N(10)]            -> Value(Number(10))
//! ["no matches"]     -> Value(Text("no matches"))
//! [N(true), N(false)]-> Chunks([...])           (caller interprets)
//! []                 -> Chunks([])
//! ```

use crate::{Chunk, Value};
use std::fmt;

/// Output of the default resolver.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// The sequence reduced to a single element.
    Value(Value),
    /// Anything else, handed back as-is.
    Chunks(Vec<Chunk>),
}

impl Resolved {
    pub fn value(&self) -> Option<&Value> {
        match self {
            Resolved::Value(value) => Some(value),
            Resolved::Chunks(_) => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Resolved::Value(value) => Some(value),
            Resolved::Chunks(_) => None,
        }
    }

    pub fn chunks(&self) -> Option<&[Chunk]> {
        match self {
            Resolved::Chunks(chunks) => Some(chunks),
            Resolved::Value(_) => None,
        }
    }
}

/// Values print as themselves; leftover sequences print space-separated.
impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Value(value) => write!(f, "{value}"),
            Resolved::Chunks(chunks) => {
                for (idx, chunk) in chunks.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{chunk}")?;
                }
                Ok(())
            }
        }
    }
}

/// Collapse a one-element sequence to its value; return anything else whole.
///
/// This is the resolver [`parse`](crate::parse) installs. It is exported so
/// rewriters can collapse a nested parse before substituting it back.
pub fn resolve(mut chunks: Vec<Chunk>) -> Resolved {
    if chunks.len() == 1 {
        if let Some(only) = chunks.pop() {
            log::trace!("[resolve] single chunk -> value");
            return Resolved::Value(only.into_value());
        }
    }
    log::trace!("[resolve] {} chunks left unresolved", chunks.len());
    Resolved::Chunks(chunks)
}
