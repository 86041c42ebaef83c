//! Field tokenizer over a classifying predicate
//!
//! A field is a maximal run of elements for which the predicate is false.
//! The tokenizer walks the input twice: the first pass counts fields so the
//! output is allocated exactly once, the second pass records them.

/// Split `s` around runs of Unicode whitespace.
///
/// Returns no fields when `s` is empty or contains only whitespace.
pub fn fields(s: &[char]) -> Vec<&[char]> {
    fields_func(s, char::is_whitespace)
}

/// Split `s` at each run of elements satisfying `is_separator`.
///
/// # Preconditions
///
/// `is_separator` is called twice for every element and must return the same
/// answer each time. An inconsistent predicate is a caller bug: debug builds
/// fail a `debug_assert_eq!` on the field count, release builds return a
/// different number of fields than were counted.
///
/// ```rust
/// use runeseq_core::fields_func;
///
/// let s: Vec<char> = "ab3cd".chars().collect();
/// let fields = fields_func(&s, |c| c.is_ascii_digit());
/// assert_eq!(fields, vec![&['a', 'b'][..], &['c', 'd'][..]]);
/// ```
pub fn fields_func<F>(s: &[char], mut is_separator: F) -> Vec<&[char]>
where
    F: FnMut(char) -> bool,
{
    let n = count_fields(s.iter().copied(), &mut is_separator);

    let mut fields = Vec::with_capacity(n);
    let mut field_start = None;
    for (i, &c) in s.iter().enumerate() {
        if is_separator(c) {
            if let Some(start) = field_start.take() {
                fields.push(&s[start..i]);
            }
        } else if field_start.is_none() {
            field_start = Some(i);
        }
    }
    if let Some(start) = field_start {
        fields.push(&s[start..]);
    }

    debug_assert_eq!(fields.len(), n, "separator predicate is not consistent");
    fields
}

/// Count separator-to-field transitions in `chars`.
pub(crate) fn count_fields<I, F>(chars: I, is_separator: &mut F) -> usize
where
    I: IntoIterator<Item = char>,
    F: FnMut(char) -> bool,
{
    let mut n = 0;
    let mut in_field = false;
    for c in chars {
        let was_in_field = in_field;
        in_field = !is_separator(c);
        if in_field && !was_in_field {
            n += 1;
        }
    }
    n
}
