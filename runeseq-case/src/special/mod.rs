//! Locale-specific case tables
//!
//! A [`SpecialCase`] overrides the default Unicode mapping for a handful of
//! ranges, e.g. the Turkish dotted and dotless I. Tables are described in
//! TOML; the common ones are embedded in the crate.

pub mod config;
mod loader;

pub use config::{MetadataConfig, RangeConfig, SpecialCaseConfig};
pub use loader::list_builtin_tables;

use std::cmp::Ordering;
use std::path::Path;

use tracing::debug;

use crate::error::{CaseError, Result};
use crate::mapper::{CaseKind, CaseMapper, UnicodeCase};

/// A contiguous range of code points sharing the same case deltas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseRange {
    /// First code point of the range
    pub lo: char,
    /// Last code point of the range (inclusive)
    pub hi: char,
    /// Delta added to map to upper case
    pub upper: i32,
    /// Delta added to map to lower case
    pub lower: i32,
    /// Delta added to map to title case
    pub title: i32,
}

impl CaseRange {
    /// Delta for the requested case
    pub fn delta(&self, kind: CaseKind) -> i32 {
        match kind {
            CaseKind::Upper => self.upper,
            CaseKind::Lower => self.lower,
            CaseKind::Title => self.title,
        }
    }
}

impl From<RangeConfig> for CaseRange {
    fn from(range: RangeConfig) -> Self {
        Self {
            lo: range.lo,
            hi: range.hi,
            upper: range.upper,
            lower: range.lower,
            title: range.title,
        }
    }
}

/// Case table with locale overrides on top of [`UnicodeCase`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialCase {
    code: String,
    name: String,
    /// Sorted by `lo`, non-overlapping
    ranges: Vec<CaseRange>,
}

impl SpecialCase {
    /// Build a table from ranges, validating their order.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        ranges: Vec<CaseRange>,
    ) -> Result<Self> {
        validate_ranges(&ranges)?;
        Ok(Self {
            code: code.into(),
            name: name.into(),
            ranges,
        })
    }

    /// Build a table from its deserialized configuration.
    pub fn from_config(config: SpecialCaseConfig) -> Result<Self> {
        let ranges = config.ranges.into_iter().map(CaseRange::from).collect();
        let table = Self::new(config.metadata.code, config.metadata.name, ranges)?;
        debug!(
            code = %table.code,
            ranges = table.ranges.len(),
            "loaded case table"
        );
        Ok(table)
    }

    /// Parse a table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SpecialCaseConfig = toml::from_str(content).map_err(|e| {
            CaseError::Configuration(format!("Failed to parse case table: {e}"))
        })?;
        Self::from_config(config)
    }

    /// Read and parse a table from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CaseError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Look up an embedded table by code (`"tr"`, `"az"`).
    pub fn builtin(code: &str) -> Result<&'static SpecialCase> {
        loader::builtin_table(code)
    }

    /// Table code, e.g. `"tr"`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable table name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The override ranges, sorted by lower bound
    pub fn ranges(&self) -> &[CaseRange] {
        &self.ranges
    }

    fn lookup(&self, c: char) -> Option<&CaseRange> {
        self.ranges
            .binary_search_by(|range| {
                if range.hi < c {
                    Ordering::Less
                } else if range.lo > c {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .ok()
            .map(|i| &self.ranges[i])
    }

    fn apply(&self, kind: CaseKind, c: char) -> char {
        match self.lookup(c) {
            Some(range) => shift(c, range.delta(kind)),
            None => UnicodeCase.to_case(kind, c),
        }
    }
}

impl CaseMapper for SpecialCase {
    fn to_upper(&self, c: char) -> char {
        self.apply(CaseKind::Upper, c)
    }

    fn to_lower(&self, c: char) -> char {
        self.apply(CaseKind::Lower, c)
    }

    fn to_title(&self, c: char) -> char {
        self.apply(CaseKind::Title, c)
    }
}

/// `c` moved by `delta`, or `c` itself when the result is not a scalar value.
fn shift(c: char, delta: i32) -> char {
    u32::from(c)
        .checked_add_signed(delta)
        .and_then(char::from_u32)
        .unwrap_or(c)
}

fn validate_ranges(ranges: &[CaseRange]) -> Result<()> {
    for range in ranges {
        if range.lo > range.hi {
            return Err(CaseError::InvertedRange {
                lo: range.lo,
                hi: range.hi,
            });
        }
    }
    for pair in ranges.windows(2) {
        if pair[1].lo <= pair[0].hi {
            return Err(CaseError::UnorderedRanges { lo: pair[1].lo });
        }
    }
    Ok(())
}
