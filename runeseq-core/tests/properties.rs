//! Property-based tests for the search and split primitives
//!
//! Inputs are drawn from a tiny alphabet so that separators actually occur,
//! overlap and sit at the edges of the sequence.

use proptest::prelude::*;
use runeseq_core::{
    contains, count, fields_func, index, join, last_index, map, split, split_after, split_n,
    Mapped,
};

fn alphabet() -> impl Strategy<Value = char> {
    prop_oneof![Just('a'), Just('b'), Just(','), Just('é'), Just('語')]
}

fn sequence() -> impl Strategy<Value = Vec<char>> {
    proptest::collection::vec(alphabet(), 0..48)
}

fn separator() -> impl Strategy<Value = Vec<char>> {
    proptest::collection::vec(alphabet(), 1..4)
}

proptest! {
    #[test]
    fn count_is_one_less_than_split_len(s in sequence(), sep in separator()) {
        prop_assert_eq!(count(&s, &sep), split(&s, &sep).len() - 1);
    }

    #[test]
    fn empty_separator_explodes(s in sequence()) {
        let pieces = split(&s, &[]);
        prop_assert_eq!(pieces.len(), s.len());
        prop_assert!(pieces.iter().all(|p| p.len() == 1));
        prop_assert_eq!(join(&pieces, &[]), s);
    }

    #[test]
    fn split_after_round_trips(s in sequence(), sep in separator()) {
        let pieces = split_after(&s, &sep);
        prop_assert_eq!(join(&pieces, &[]), s);
    }

    #[test]
    fn split_rejoins_with_separator(s in sequence(), sep in separator()) {
        let pieces = split(&s, &sep);
        prop_assert_eq!(join(&pieces, &sep), s);
    }

    #[test]
    fn split_n_zero_is_empty(s in sequence(), sep in proptest::collection::vec(alphabet(), 0..4)) {
        prop_assert!(split_n(&s, &sep, 0).is_empty());
    }

    #[test]
    fn split_n_caps_piece_count(s in sequence(), sep in separator(), n in 1usize..6) {
        let pieces = split_n(&s, &sep, n);
        prop_assert!(pieces.len() <= n);
        prop_assert_eq!(join(&pieces, &sep), s);
    }

    #[test]
    fn index_agrees_with_contains(s in sequence(), sep in separator()) {
        let found = index(&s, &sep);
        prop_assert_eq!(found.is_some(), contains(&s, &sep));
        if let Some(i) = found {
            prop_assert_eq!(&s[i..i + sep.len()], &sep[..]);
            // No earlier window matches
            prop_assert!(s.windows(sep.len()).take(i).all(|w| w != &sep[..]));
        }
    }

    #[test]
    fn last_index_is_last_window(s in sequence(), sep in separator()) {
        let expected = s.windows(sep.len()).rposition(|w| w == &sep[..]);
        prop_assert_eq!(last_index(&s, &sep), expected);
    }

    #[test]
    fn all_separator_predicate_yields_no_fields(s in sequence()) {
        prop_assert!(fields_func(&s, |_| true).is_empty());
    }

    #[test]
    fn fields_never_contain_separators(s in sequence()) {
        let fields = fields_func(&s, |c| c == ',');
        prop_assert!(fields.iter().all(|f| !f.is_empty() && !f.contains(&',')));
        let kept: Vec<char> = s.iter().copied().filter(|&c| c != ',').collect();
        prop_assert_eq!(join(&fields, &[]), kept);
    }

    #[test]
    fn map_keeps_accepted_in_order(s in sequence()) {
        let expected: Vec<char> = s.iter().copied().filter(|&c| c != 'a').collect();
        let mut buf = s.clone();
        let out = map(|c| if c == 'a' { Mapped::Drop } else { Mapped::Keep(c) }, &mut buf);
        prop_assert_eq!(&out[..], &expected[..]);
    }
}
