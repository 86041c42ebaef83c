//! Generic split engine
//!
//! One algorithm serves `split`, `split_after`, `split_n` and
//! `split_after_n`. Pieces are views into the input; the result vector is
//! sized once before it is filled.

use crate::count::count;
use crate::search::equal;

/// Split `s` into all subsequences separated by `sep`.
///
/// The separators are not included in the pieces. An empty `sep` explodes `s`
/// into one piece per element.
///
/// ```rust
/// use runeseq_core::split;
///
/// let s: Vec<char> = "a,b,,c".chars().collect();
/// let pieces = split(&s, &[',']);
/// assert_eq!(pieces.len(), 4);
/// assert!(pieces[2].is_empty());
/// ```
pub fn split<'a>(s: &'a [char], sep: &[char]) -> Vec<&'a [char]> {
    gen_split(s, sep, false, None)
}

/// Split `s` after each instance of `sep`, keeping the separator at the end
/// of each piece. Concatenating the pieces reconstructs `s`.
pub fn split_after<'a>(s: &'a [char], sep: &[char]) -> Vec<&'a [char]> {
    gen_split(s, sep, true, None)
}

/// Split `s` around `sep` into at most `n` pieces.
///
/// `n == 0` yields no pieces at all. The last piece holds the unsplit
/// remainder of `s`.
pub fn split_n<'a>(s: &'a [char], sep: &[char], n: usize) -> Vec<&'a [char]> {
    gen_split(s, sep, false, Some(n))
}

/// Split `s` after each instance of `sep` into at most `n` pieces.
pub fn split_after_n<'a>(s: &'a [char], sep: &[char], n: usize) -> Vec<&'a [char]> {
    gen_split(s, sep, true, Some(n))
}

/// Split `s` around non-overlapping occurrences of `sep`.
///
/// When `keep_sep` is set, each piece extends past its separator. `limit`
/// caps the number of pieces; `None` means unbounded, in which case the
/// piece count is computed up front with [`count`].
fn gen_split<'a>(
    s: &'a [char],
    sep: &[char],
    keep_sep: bool,
    limit: Option<usize>,
) -> Vec<&'a [char]> {
    if limit == Some(0) {
        return Vec::new();
    }
    if sep.is_empty() {
        return explode(s, limit);
    }

    let n = match limit {
        Some(n) => n,
        None => count(s, sep) + 1,
    };
    let keep = if keep_sep { sep.len() } else { 0 };

    // There can never be more than len + 1 pieces
    let mut pieces = Vec::with_capacity(n.min(s.len() + 1));
    let first = sep[0];
    let mut start = 0;
    let mut i = 0;
    while i + sep.len() <= s.len() && pieces.len() + 1 < n {
        if s[i] == first && (sep.len() == 1 || equal(&s[i..i + sep.len()], sep)) {
            pieces.push(&s[start..i + keep]);
            start = i + sep.len();
            i += sep.len();
        } else {
            i += 1;
        }
    }
    pieces.push(&s[start..]);
    pieces
}

/// Split `s` into single-element pieces, at most `limit` of them.
///
/// When the limit is smaller than `s.len()`, the final piece absorbs the
/// remainder of `s`.
fn explode(s: &[char], limit: Option<usize>) -> Vec<&[char]> {
    let n = match limit {
        Some(n) if n < s.len() => n,
        _ => s.len(),
    };

    let mut pieces = Vec::with_capacity(n);
    if n == 0 {
        return pieces;
    }
    pieces.extend(s[..n - 1].chunks(1));
    pieces.push(&s[n - 1..]);
    pieces
}
