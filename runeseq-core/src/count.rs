//! Non-overlapping occurrence counting

use crate::search::{equal, index_rune};

/// Count the non-overlapping occurrences of `sep` in `s`.
///
/// Scanning is left to right and a match consumes its span before the scan
/// resumes. An empty `sep` yields `s.len() + 1`. No allocation is performed.
///
/// ```rust
/// use runeseq_core::count;
///
/// let s: Vec<char> = "aaaa".chars().collect();
/// assert_eq!(count(&s, &['a', 'a']), 2);
/// assert_eq!(count(&s, &[]), 5);
/// ```
pub fn count(s: &[char], sep: &[char]) -> usize {
    let n = sep.len();
    if n == 0 {
        return s.len() + 1;
    }
    if n > s.len() {
        return 0;
    }

    let first = sep[0];
    let candidates = &s[..=s.len() - n];
    let mut total = 0;
    let mut i = 0;
    while i < candidates.len() {
        if candidates[i] != first {
            match index_rune(&candidates[i..], first) {
                Some(offset) => i += offset,
                None => break,
            }
        }
        if n == 1 || equal(&s[i..i + n], sep) {
            total += 1;
            i += n;
        } else {
            i += 1;
        }
    }
    total
}
