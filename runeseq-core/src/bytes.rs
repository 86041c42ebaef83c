//! Field tokenizer over raw encoded buffers
//!
//! Decoding and classification happen in one walk. Malformed input stops the
//! walk: the lenient functions keep whatever was decoded before that point,
//! [`try_fields_func_from_bytes`] reports it instead.

use tracing::debug;

use crate::decode::{DecodeIter, Decoder, Utf8Decoder};
use crate::error::{DecodeError, Result};
use crate::fields::count_fields;

/// Decode `buf` as UTF-8 and split it around runs of Unicode whitespace.
pub fn fields_from_bytes(buf: &[u8]) -> Vec<Vec<char>> {
    fields_func_from_bytes(buf, char::is_whitespace)
}

/// Decode `buf` as UTF-8 and split it at each run of code points satisfying
/// `is_separator`.
///
/// Decoding stops silently at the first malformed or incomplete sequence;
/// fields decoded up to that point are still returned.
///
/// ```rust
/// use runeseq_core::fields_func_from_bytes;
///
/// let fields = fields_func_from_bytes(b"ab,cd,\xFFef", |c| c == ',');
/// assert_eq!(fields, vec![vec!['a', 'b'], vec!['c', 'd']]);
/// ```
pub fn fields_func_from_bytes<F>(buf: &[u8], is_separator: F) -> Vec<Vec<char>>
where
    F: FnMut(char) -> bool,
{
    fields_func_from_bytes_with(&Utf8Decoder, buf, is_separator)
}

/// Like [`fields_func_from_bytes`], decoding with a caller-supplied decoder.
pub fn fields_func_from_bytes_with<D, F>(
    decoder: &D,
    buf: &[u8],
    mut is_separator: F,
) -> Vec<Vec<char>>
where
    D: Decoder + ?Sized,
    F: FnMut(char) -> bool,
{
    let (fields, stopped_at) = scan_fields(decoder, buf, &mut is_separator);
    if let Some(offset) = stopped_at {
        debug!(
            offset,
            fields = fields.len(),
            "undecodable input, truncating field scan"
        );
    }
    fields
}

/// Strict variant of [`fields_func_from_bytes`].
///
/// Fails with [`DecodeError::Malformed`] carrying the byte offset of the
/// first sequence that could not be decoded.
pub fn try_fields_func_from_bytes<F>(buf: &[u8], mut is_separator: F) -> Result<Vec<Vec<char>>>
where
    F: FnMut(char) -> bool,
{
    match scan_fields(&Utf8Decoder, buf, &mut is_separator) {
        (fields, None) => Ok(fields),
        (_, Some(offset)) => Err(DecodeError::Malformed { offset }),
    }
}

/// Two-pass decode-and-classify walk.
///
/// Returns the fields and the offset where decoding stopped early, if any.
fn scan_fields<D, F>(
    decoder: &D,
    buf: &[u8],
    is_separator: &mut F,
) -> (Vec<Vec<char>>, Option<usize>)
where
    D: Decoder + ?Sized,
    F: FnMut(char) -> bool,
{
    let n = count_fields(DecodeIter::new(decoder, buf), is_separator);

    let mut fields = Vec::with_capacity(n);
    let mut field = Vec::new();
    let mut chars = DecodeIter::new(decoder, buf);
    for c in chars.by_ref() {
        if is_separator(c) {
            if !field.is_empty() {
                fields.push(std::mem::take(&mut field));
            }
        } else {
            field.push(c);
        }
    }
    if !field.is_empty() {
        fields.push(field);
    }

    debug_assert_eq!(fields.len(), n, "separator predicate is not consistent");
    (fields, chars.stopped_at())
}
