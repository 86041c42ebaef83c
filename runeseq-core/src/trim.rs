//! Trimming views

use crate::search::{index_func, last_index_func};

/// Drop leading elements satisfying `f`.
pub fn trim_left_func<F>(s: &[char], mut f: F) -> &[char]
where
    F: FnMut(char) -> bool,
{
    match index_func(s, |c| !f(c)) {
        Some(i) => &s[i..],
        None => &[],
    }
}

/// Drop trailing elements satisfying `f`.
pub fn trim_right_func<F>(s: &[char], mut f: F) -> &[char]
where
    F: FnMut(char) -> bool,
{
    match last_index_func(s, |c| !f(c)) {
        Some(i) => &s[..=i],
        None => &[],
    }
}

/// Drop leading and trailing elements satisfying `f`.
pub fn trim_func<F>(s: &[char], mut f: F) -> &[char]
where
    F: FnMut(char) -> bool,
{
    trim_right_func(trim_left_func(s, &mut f), &mut f)
}

/// Drop leading and trailing Unicode whitespace.
pub fn trim_space(s: &[char]) -> &[char] {
    trim_func(s, char::is_whitespace)
}
