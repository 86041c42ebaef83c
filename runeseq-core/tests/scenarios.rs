//! End-to-end scenarios for the public API

use runeseq_core::{
    count, fields, fields_func, fields_func_from_bytes, index, last_index, map, split, split_n,
    Mapped,
};

fn runes(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn strings(pieces: &[&[char]]) -> Vec<String> {
    pieces.iter().map(|p| p.iter().collect()).collect()
}

#[test]
fn test_index_and_last_index() {
    let s = runes("abcabc");
    assert_eq!(index(&s, &runes("bc")), Some(1));
    assert_eq!(last_index(&s, &runes("bc")), Some(4));
}

#[test]
fn test_count_non_overlapping() {
    assert_eq!(count(&runes("aaaa"), &runes("aa")), 2);
}

#[test]
fn test_split_keeps_empty_pieces() {
    let s = runes("a,b,,c");
    assert_eq!(strings(&split(&s, &runes(","))), vec!["a", "b", "", "c"]);
}

#[test]
fn test_split_n_remainder() {
    let s = runes("a,b,c");
    assert_eq!(strings(&split_n(&s, &runes(","), 2)), vec!["a", "b,c"]);
}

#[test]
fn test_fields_default_whitespace() {
    let s = runes(" foo   bar  ");
    assert_eq!(strings(&fields(&s)), vec!["foo", "bar"]);
}

#[test]
fn test_map_drop_vowels() {
    let mut s = runes("hello world");
    let out = map(
        |c| {
            if "aeiou".contains(c) {
                Mapped::Drop
            } else {
                Mapped::Keep(c)
            }
        },
        &mut s,
    );
    assert_eq!(out.iter().collect::<String>(), "hll wrld");
}

#[test]
fn test_field_run_open_at_end() {
    let is_digit = |c: char| c.is_ascii_digit();
    assert_eq!(strings(&fields_func(&runes("abc"), is_digit)), vec!["abc"]);
    assert_eq!(strings(&fields_func(&runes("ab3"), is_digit)), vec!["ab"]);
}

#[test]
fn test_slice_and_byte_tokenizers_agree() {
    let text = "  Der schnelle\tbraune Fuchs  springt\u{2003}über 🦊 ";
    let from_slice: Vec<Vec<char>> = fields(&runes(text))
        .into_iter()
        .map(<[char]>::to_vec)
        .collect();
    let from_bytes = fields_func_from_bytes(text.as_bytes(), char::is_whitespace);
    assert_eq!(from_slice, from_bytes);
}
