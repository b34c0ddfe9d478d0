//! Tokenizer: split a string on the combined rule pattern.
//!
//! Delimiters are kept as their own pieces, interleaved with the text
//! between them, and every piece is trimmed. Piece boundaries follow the
//! usual "split with a capturing separator" rules:
//!
//! ```text
//! "1 > 0"    on />/   -> ["1", ">", "0"]
//! "> 0"      on />/   -> ["", ">", "0"]      (leading empty piece kept)
//! "1 >> 0"   on />/   -> ["1", ">", "", ">", "0"]
//! "ab"       on //    -> ["a", "", "b"]      (empty match at a piece start is skipped)
//! ""         on //    -> []
//! "x ab y"   on /(a)b/ -> ["x ", "ab", "a", " y"]   (participating groups follow the delimiter)
//! ```
//!
//! Capture groups inside a regex key each add a piece after the delimiter,
//! in group order. Groups that did not take part in the match add nothing.

use crate::Chunk;
use regex::Regex;

/// Tokenize `input` into fragments. `None` has no fragments; without a
/// splitter the whole trimmed string is a single fragment.
pub(crate) fn chunk_str(splitter: Option<&Regex>, input: Option<&str>) -> Vec<Chunk> {
    let Some(input) = input else {
        return Vec::new();
    };
    let pieces = match splitter {
        Some(re) => split_retaining(re, input),
        None => vec![input],
    };
    log::trace!("[chunker] input={:?} pieces={}", input, pieces.len());
    pieces.into_iter().map(|piece| Chunk::Fragment(piece.trim().to_string())).collect()
}

/// Split `s` on `re`, keeping every match (and its participating groups)
/// as pieces.
///
/// `p` is the start of the pending piece and `q` the search offset. A match
/// ending at `p` can only be an empty match at the piece start; it is
/// skipped by advancing `q` one character.
pub(crate) fn split_retaining<'s>(re: &Regex, s: &'s str) -> Vec<&'s str> {
    if s.is_empty() {
        return if re.is_match(s) { Vec::new() } else { vec![s] };
    }

    let mut pieces = Vec::new();
    let mut p = 0;
    let mut q = 0;

    while q < s.len() {
        let Some(caps) = re.captures_at(s, q) else {
            break;
        };
        let Some(m) = caps.get(0) else {
            break;
        };
        if m.start() >= s.len() {
            break;
        }
        if m.end() == p {
            q = next_char_boundary(s, m.start());
            continue;
        }
        pieces.push(&s[p..m.start()]);
        pieces.push(m.as_str());
        pieces.extend(caps.iter().skip(1).flatten().map(|group| group.as_str()));
        p = m.end();
        q = p;
    }

    pieces.push(&s[p..]);
    pieces
}

fn next_char_boundary(s: &str, at: usize) -> usize {
    s[at..].chars().next().map_or(s.len(), |c| at + c.len_utf8())
}
