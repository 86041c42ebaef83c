//! Case mapping for code-point sequences
//!
//! Case conversion is an instantiation of [`runeseq_core::map`] with a
//! per-element case function. The case functions come from a [`CaseMapper`]:
//! either the default [`UnicodeCase`] or a locale [`SpecialCase`] table such
//! as the embedded Turkish rules.
//!
//! # Example
//!
//! ```rust
//! use runeseq_case::{to_upper, to_upper_special, SpecialCase};
//!
//! let mut word: Vec<char> = "istanbul".chars().collect();
//! assert_eq!(to_upper(&mut word.clone()).iter().collect::<String>(), "ISTANBUL");
//!
//! let turkish = SpecialCase::builtin("tr").unwrap();
//! let upper = to_upper_special(turkish, &mut word);
//! assert_eq!(upper.iter().collect::<String>(), "İSTANBUL");
//! ```

#![warn(missing_docs)]

pub mod convert;
pub mod error;
pub mod mapper;
pub mod special;

pub use convert::{
    equal_fold, to_lower, to_lower_special, to_lower_with, to_title, to_title_special,
    to_title_with, to_upper, to_upper_special, to_upper_with,
};
pub use error::{CaseError, Result};
pub use mapper::{CaseKind, CaseMapper, UnicodeCase};
pub use special::{list_builtin_tables, CaseRange, SpecialCase};

// Sequence equality without case folding, re-exported for convenience
pub use runeseq_core::{contains, equal};
