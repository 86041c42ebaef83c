//! Serialized form of a case table

use serde::{Deserialize, Serialize};

/// A whole case table file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialCaseConfig {
    /// Table identity
    pub metadata: MetadataConfig,
    /// Override ranges, sorted by `lo`
    #[serde(default)]
    pub ranges: Vec<RangeConfig>,
}

/// The `[metadata]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Short code, e.g. `tr`
    pub code: String,
    /// Display name
    pub name: String,
}

/// One `[[ranges]]` entry; deltas default to 0 (unchanged)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct RangeConfig {
    pub lo: char,
    pub hi: char,
    #[serde(default)]
    pub upper: i32,
    #[serde(default)]
    pub lower: i32,
    #[serde(default)]
    pub title: i32,
}
