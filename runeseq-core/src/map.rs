//! In-place element mapping with dropping
//!
//! [`map`] rewrites a sequence in its own storage. Dropped elements close up
//! the gap, so the write position never passes the read position and the
//! result is a shorter view over the same buffer.

/// Outcome of mapping one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mapped {
    /// Keep the element, replaced by this code point
    Keep(char),
    /// Remove the element from the output
    Drop,
}

impl From<char> for Mapped {
    fn from(c: char) -> Self {
        Mapped::Keep(c)
    }
}

impl From<Option<char>> for Mapped {
    fn from(c: Option<char>) -> Self {
        c.map_or(Mapped::Drop, Mapped::Keep)
    }
}

/// Apply `mapping` to every element of `s` in order, compacting kept results
/// toward the front of `s`.
///
/// Returns the view of `s` holding the kept elements. Elements past the
/// returned view are left in an unspecified state.
///
/// ```rust
/// use runeseq_core::{map, Mapped};
///
/// let mut s: Vec<char> = "hello world".chars().collect();
/// let out = map(
///     |c| if "aeiou".contains(c) { Mapped::Drop } else { Mapped::Keep(c) },
///     &mut s,
/// );
/// assert_eq!(out.iter().collect::<String>(), "hll wrld");
/// ```
pub fn map<F>(mut mapping: F, s: &mut [char]) -> &mut [char]
where
    F: FnMut(char) -> Mapped,
{
    let mut kept = 0;
    for read in 0..s.len() {
        if let Mapped::Keep(c) = mapping(s[read]) {
            s[kept] = c;
            kept += 1;
        }
    }
    &mut s[..kept]
}

/// Owned counterpart of [`map`]: compacts `s` in place and truncates it to
/// the kept elements, reusing its allocation.
pub fn map_vec<F>(mapping: F, mut s: Vec<char>) -> Vec<char>
where
    F: FnMut(char) -> Mapped,
{
    let kept = map(mapping, &mut s).len();
    s.truncate(kept);
    s
}
