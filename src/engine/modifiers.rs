//! Modifier preprocessing.
//!
//! Modifiers see the *whole* string, before tokenization. They are tried in
//! table order; the first whose expression finds a match rewrites the
//! string and the caller restarts the pipeline on the result. Literal
//! modifier keys are accepted in a [`Config`] but never fire.

use super::metrics::RewriteMetrics;
use crate::{Config, Pattern, Result};
use std::time::Instant;

/// Apply the first matching modifier to `text`.
///
/// Returns `Ok(None)` when no modifier matches. A rewriter error is returned
/// as-is.
pub(crate) fn rewrite(config: &Config, text: &str, trace: &mut Vec<RewriteMetrics>) -> Result<Option<String>> {
    for modifier in &config.modifiers {
        let Pattern::Regex(re) = &modifier.key else {
            continue;
        };
        let Some(m) = re.find(text) else {
            continue;
        };

        let start = Instant::now();
        let output = (modifier.rewrite)(m.as_str(), text, config)?;
        log::debug!("[modifier] pattern={} matched={:?} input={:?} output={:?}", modifier.key, m.as_str(), text, output);

        trace.push(RewriteMetrics {
            pattern: modifier.key.to_string(),
            matched: m.as_str().to_string(),
            output: output.clone(),
            duration: start.elapsed(),
        });
        return Ok(Some(output));
    }
    Ok(None)
}
