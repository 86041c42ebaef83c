//! Equality and search primitives
//!
//! All offsets are code-point offsets into the searched sequence. A missing
//! match is reported as `None`.

/// Report whether `a` and `b` have the same length and the same elements.
pub fn equal(a: &[char], b: &[char]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x == y)
}

/// Offset of the first occurrence of `c` in `s`.
pub fn index_rune(s: &[char], c: char) -> Option<usize> {
    s.iter().position(|&x| x == c)
}

/// Offset of the last occurrence of `c` in `s`.
pub fn last_index_rune(s: &[char], c: char) -> Option<usize> {
    s.iter().rposition(|&x| x == c)
}

/// Offset of the first occurrence of `sep` as a contiguous run inside `s`.
///
/// An empty `sep` matches at offset 0. Candidates are located by scanning for
/// `sep[0]` and verifying the window; a failed window resumes the scan at the
/// next element so overlapping candidates are never skipped.
///
/// ```rust
/// use runeseq_core::index;
///
/// let s: Vec<char> = "abcabc".chars().collect();
/// assert_eq!(index(&s, &['b', 'c']), Some(1));
/// assert_eq!(index(&s, &['c', 'b']), None);
/// ```
pub fn index(s: &[char], sep: &[char]) -> Option<usize> {
    let n = sep.len();
    match n {
        0 => return Some(0),
        _ if n > s.len() => return None,
        1 => return index_rune(s, sep[0]),
        _ => {}
    }

    let first = sep[0];
    // Last offset where a full window still fits
    let candidates = &s[..=s.len() - n];
    let mut i = 0;
    while i < candidates.len() {
        if candidates[i] != first {
            i += index_rune(&candidates[i..], first)?;
        }
        if equal(&s[i..i + n], sep) {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Offset of the last occurrence of `sep` as a contiguous run inside `s`.
///
/// An empty `sep` matches at `s.len()`.
pub fn last_index(s: &[char], sep: &[char]) -> Option<usize> {
    let n = sep.len();
    match n {
        0 => return Some(s.len()),
        _ if n > s.len() => return None,
        1 => return last_index_rune(s, sep[0]),
        _ => {}
    }

    let first = sep[0];
    (0..=s.len() - n)
        .rev()
        .find(|&i| s[i] == first && equal(&s[i..i + n], sep))
}

/// Report whether `sub` occurs within `s`.
pub fn contains(s: &[char], sub: &[char]) -> bool {
    index(s, sub).is_some()
}

/// Report whether `s` begins with `prefix`.
pub fn has_prefix(s: &[char], prefix: &[char]) -> bool {
    s.len() >= prefix.len() && equal(&s[..prefix.len()], prefix)
}

/// Report whether `s` ends with `suffix`.
pub fn has_suffix(s: &[char], suffix: &[char]) -> bool {
    s.len() >= suffix.len() && equal(&s[s.len() - suffix.len()..], suffix)
}

/// Offset of the first element of `s` that is also in `chars`.
pub fn index_any(s: &[char], chars: &[char]) -> Option<usize> {
    if chars.is_empty() {
        return None;
    }
    s.iter().position(|c| chars.contains(c))
}

/// Offset of the first element satisfying `f`.
pub fn index_func<F>(s: &[char], mut f: F) -> Option<usize>
where
    F: FnMut(char) -> bool,
{
    s.iter().position(|&c| f(c))
}

/// Offset of the last element satisfying `f`.
pub fn last_index_func<F>(s: &[char], mut f: F) -> Option<usize>
where
    F: FnMut(char) -> bool,
{
    s.iter().rposition(|&c| f(c))
}
