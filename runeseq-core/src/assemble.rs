//! Building new sequences from pieces
//!
//! Each function computes the output length first and allocates once.

use crate::count::count;
use crate::search::index;

/// Concatenate `pieces`, placing `sep` between neighbours.
pub fn join(pieces: &[&[char]], sep: &[char]) -> Vec<char> {
    if pieces.is_empty() {
        return Vec::new();
    }
    let total = pieces.iter().map(|p| p.len()).sum::<usize>() + sep.len() * (pieces.len() - 1);

    let mut out = Vec::with_capacity(total);
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(sep);
        }
        out.extend_from_slice(piece);
    }
    out
}

/// `s` repeated `times` times.
pub fn repeat(s: &[char], times: usize) -> Vec<char> {
    s.repeat(times)
}

/// Copy of `s` with non-overlapping instances of `old` replaced by `new`.
///
/// At most `limit` replacements are made, or all of them when `limit` is
/// `None`. An empty `old` matches before every element and at the end.
///
/// ```rust
/// use runeseq_core::replace;
///
/// let s: Vec<char> = "oink oink oink".chars().collect();
/// let out = replace(&s, &['k'], &['y'], Some(2));
/// assert_eq!(out.iter().collect::<String>(), "oiny oiny oink");
/// ```
pub fn replace(s: &[char], old: &[char], new: &[char], limit: Option<usize>) -> Vec<char> {
    let matches = match limit {
        Some(0) => 0,
        _ => count(s, old),
    };
    let n = limit.map_or(matches, |limit| limit.min(matches));
    if n == 0 {
        return s.to_vec();
    }

    // Matches never overlap, so n * old.len() <= s.len()
    let mut out = Vec::with_capacity(s.len() - n * old.len() + n * new.len());
    let mut start = 0;
    for i in 0..n {
        let j = if old.is_empty() {
            if i > 0 {
                start + 1
            } else {
                start
            }
        } else {
            match index(&s[start..], old) {
                Some(offset) => start + offset,
                None => break,
            }
        };
        out.extend_from_slice(&s[start..j]);
        out.extend_from_slice(new);
        start = j + old.len();
    }
    out.extend_from_slice(&s[start..]);
    out
}
