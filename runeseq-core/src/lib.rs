//! Search, split and tokenizing primitives over code-point sequences
//!
//! This crate mirrors the search/split contract of a byte-oriented string
//! toolkit, generalized to sequences of Unicode scalar values (`[char]`).
//! Every index is a code-point offset, never a byte offset, and every view
//! returned by a split or tokenizer borrows from the caller's sequence.
//!
//! # Architecture
//!
//! - **Search**: element and subsequence search, equality, containment
//! - **Counting**: non-overlapping occurrence counting
//! - **Split engine**: one parameterized algorithm behind `split`,
//!   `split_after` and their bounded variants
//! - **Fields**: run-length tokenizer over a classifying predicate, plus a
//!   twin that decodes raw UTF-8 buffers on the fly
//! - **Map**: in-place element transform with dropping
//!
//! # Example
//!
//! ```rust
//! use runeseq_core::{count, fields, index, split_n};
//!
//! let text: Vec<char> = "a,b,c".chars().collect();
//! let sep = [','];
//!
//! assert_eq!(index(&text, &sep), Some(1));
//! assert_eq!(count(&text, &sep), 2);
//!
//! let pieces = split_n(&text, &sep, 2);
//! assert_eq!(pieces, vec![&['a'][..], &['b', ',', 'c'][..]]);
//!
//! let words: Vec<char> = " foo   bar  ".chars().collect();
//! assert_eq!(fields(&words).len(), 2);
//! ```

#![warn(missing_docs)]

pub mod assemble;
pub mod bytes;
pub mod count;
pub mod decode;
pub mod error;
pub mod fields;
pub mod map;
pub mod search;
pub mod split;
pub mod trim;

// Re-export key operations
pub use assemble::{join, repeat, replace};
pub use bytes::{
    fields_from_bytes, fields_func_from_bytes, fields_func_from_bytes_with,
    try_fields_func_from_bytes,
};
pub use count::count;
pub use decode::{Decoder, Utf8Decoder};
pub use error::{DecodeError, Result};
pub use fields::{fields, fields_func};
pub use map::{map, map_vec, Mapped};
pub use search::{
    contains, equal, has_prefix, has_suffix, index, index_any, index_func, index_rune,
    last_index, last_index_func, last_index_rune,
};
pub use split::{split, split_after, split_after_n, split_n};
pub use trim::{trim_func, trim_left_func, trim_right_func, trim_space};
