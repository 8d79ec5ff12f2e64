use crate::domain::constants::NO_MAX;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Per-class character counts derived from a single mask.
///
/// `length` is not the sum of the class counts: escaped markers and
/// unclassified literals (e.g. whitespace) break that equivalence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MaskCounts {
    pub lower: usize,
    pub upper: usize,
    pub digit: usize,
    pub special: usize,
    pub length: usize,
}

/// Inclusive min/max bounds for the five count dimensions.
///
/// A max of [`NO_MAX`] leaves the dimension unbounded above. Bounds are not
/// validated at construction; an inconsistent pair (e.g. min > max) makes
/// that dimension fail every mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Policy {
    pub min_lower: i64,
    pub max_lower: i64,
    pub min_upper: i64,
    pub max_upper: i64,
    pub min_digit: i64,
    pub max_digit: i64,
    pub min_special: i64,
    pub max_special: i64,
    pub min_length: i64,
    pub max_length: i64,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_lower: 0,
            max_lower: NO_MAX,
            min_upper: 0,
            max_upper: NO_MAX,
            min_digit: 0,
            max_digit: NO_MAX,
            min_special: 0,
            max_special: NO_MAX,
            min_length: 0,
            max_length: NO_MAX,
        }
    }
}

/// How the line sets read from the input files are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    Union,
    Intersect,
    Difference,
}

/// Row emitted by `inspect`: one mask and its class counts.
#[derive(Serialize)]
pub struct InspectReport {
    pub mask: String,
    #[serde(flatten)]
    pub counts: MaskCounts,
}
