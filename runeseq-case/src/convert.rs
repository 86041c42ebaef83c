//! Case conversion of whole sequences
//!
//! Each conversion is [`map`] with a case function that always keeps the
//! element, so the output has the input's length and lives in its storage.

use runeseq_core::{map, Mapped};

use crate::mapper::{CaseKind, CaseMapper, UnicodeCase};
use crate::special::SpecialCase;

/// Map every element of `s` to upper case in place.
pub fn to_upper(s: &mut [char]) -> &mut [char] {
    to_upper_with(&UnicodeCase, s)
}

/// Map every element of `s` to lower case in place.
pub fn to_lower(s: &mut [char]) -> &mut [char] {
    to_lower_with(&UnicodeCase, s)
}

/// Map every element of `s` to title case in place.
pub fn to_title(s: &mut [char]) -> &mut [char] {
    to_title_with(&UnicodeCase, s)
}

/// Upper-case `s` in place, giving priority to the rules of `case`.
pub fn to_upper_special<'a>(case: &SpecialCase, s: &'a mut [char]) -> &'a mut [char] {
    to_upper_with(case, s)
}

/// Lower-case `s` in place, giving priority to the rules of `case`.
pub fn to_lower_special<'a>(case: &SpecialCase, s: &'a mut [char]) -> &'a mut [char] {
    to_lower_with(case, s)
}

/// Title-case `s` in place, giving priority to the rules of `case`.
pub fn to_title_special<'a>(case: &SpecialCase, s: &'a mut [char]) -> &'a mut [char] {
    to_title_with(case, s)
}

/// Upper-case `s` in place using `mapper`.
pub fn to_upper_with<'a, M>(mapper: &M, s: &'a mut [char]) -> &'a mut [char]
where
    M: CaseMapper + ?Sized,
{
    convert(mapper, CaseKind::Upper, s)
}

/// Lower-case `s` in place using `mapper`.
pub fn to_lower_with<'a, M>(mapper: &M, s: &'a mut [char]) -> &'a mut [char]
where
    M: CaseMapper + ?Sized,
{
    convert(mapper, CaseKind::Lower, s)
}

/// Title-case `s` in place using `mapper`.
pub fn to_title_with<'a, M>(mapper: &M, s: &'a mut [char]) -> &'a mut [char]
where
    M: CaseMapper + ?Sized,
{
    convert(mapper, CaseKind::Title, s)
}

fn convert<'a, M>(mapper: &M, kind: CaseKind, s: &'a mut [char]) -> &'a mut [char]
where
    M: CaseMapper + ?Sized,
{
    map(|c| Mapped::Keep(mapper.to_case(kind, c)), s)
}

/// Report whether `a` and `b` are equal under simple case folding.
///
/// ```rust
/// use runeseq_case::equal_fold;
///
/// let a: Vec<char> = "Straße".chars().collect();
/// let b: Vec<char> = "STRAßE".chars().collect();
/// assert!(equal_fold(&a, &b));
/// ```
pub fn equal_fold(a: &[char], b: &[char]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| fold_eq(x, y))
}

fn fold_eq(x: char, y: char) -> bool {
    let m = UnicodeCase;
    x == y || m.to_lower(x) == m.to_lower(y) || m.to_upper(x) == m.to_upper(y)
}
