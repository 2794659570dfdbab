//! Ordered level sequence with neighbor-average imputation.
//!
//! Turns the raw records of a [`LevelSource`] into a validated,
//! gap-free [`LevelSequence`]: every level in the requested range
//! appears exactly once, in construction (bottom-to-top) order, and
//! every missing steel quantity is reconstructed from its immediate
//! neighbors. Every reconstruction is recorded for auditability — no
//! value is ever invented silently.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::OptimizeError;
use crate::models::{Level, LevelRecord};

/// Source of per-level records for a boundary-inclusive range.
///
/// The external collaborator boundary: ingestion (file parsing, column
/// detection, locale handling) lives behind this trait. Implementations
/// must return records in construction (bottom-to-top) order and fail
/// with [`OptimizeError::UnknownLevel`] for an unresolvable boundary id.
pub trait LevelSource {
    /// Returns the ordered records between `start_id` and `end_id`, inclusive.
    fn get_levels(
        &self,
        start_id: &str,
        end_id: &str,
    ) -> Result<Vec<LevelRecord>, OptimizeError>;
}

/// In-memory [`LevelSource`] over an ordered record list.
///
/// Boundary ids may be given in either order; the inclusive slice is
/// returned in construction order either way.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLevelSource {
    records: Vec<LevelRecord>,
}

impl InMemoryLevelSource {
    /// Creates a source from records already in construction
    /// (bottom-to-top) order.
    pub fn new(records: Vec<LevelRecord>) -> Self {
        Self { records }
    }

    /// Creates a source from roof-first records, reversing them into
    /// construction order. Structural summaries typically list the roof
    /// level first.
    pub fn from_top_down(mut records: Vec<LevelRecord>) -> Self {
        records.reverse();
        Self::new(records)
    }

    fn position(&self, id: &str) -> Result<usize, OptimizeError> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| OptimizeError::UnknownLevel { id: id.to_string() })
    }
}

impl LevelSource for InMemoryLevelSource {
    fn get_levels(
        &self,
        start_id: &str,
        end_id: &str,
    ) -> Result<Vec<LevelRecord>, OptimizeError> {
        let mut start = self.position(start_id)?;
        let mut end = self.position(end_id)?;
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }
        Ok(self.records[start..=end].to_vec())
    }
}

/// How a missing steel quantity was reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImputationMethod {
    /// Average of the known values immediately before and after.
    NeighborAverage,
    /// Only one neighbor was usable; its value was copied directly.
    NeighborCopy,
}

impl fmt::Display for ImputationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImputationMethod::NeighborAverage => write!(f, "neighbor-average"),
            ImputationMethod::NeighborCopy => write!(f, "neighbor-copy"),
        }
    }
}

/// Audit record for one reconstructed steel quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImputationRecord {
    /// The level whose value was reconstructed.
    pub level_id: String,
    /// The value used in place of the missing quantity (tonf).
    pub reconstructed_value: f64,
    /// How the value was derived.
    pub method: ImputationMethod,
}

/// Validated, ordered, gap-free sequence of levels for one analysis range.
///
/// Owned by the caller and never mutated by the pipeline; evaluation
/// only borrows it, which keeps partition evaluation trivially
/// parallelizable.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSequence {
    levels: Vec<Level>,
    imputations: Vec<ImputationRecord>,
}

impl LevelSequence {
    /// Fetches the inclusive `start_id..=end_id` range from a source and
    /// builds a validated sequence, imputing any missing values.
    pub fn from_source(
        source: &dyn LevelSource,
        start_id: &str,
        end_id: &str,
    ) -> Result<Self, OptimizeError> {
        let records = source.get_levels(start_id, end_id)?;
        Self::from_records(records)
    }

    /// Builds a sequence directly from ordered records.
    ///
    /// A missing value becomes the average of the values immediately
    /// before and after it; the previous value may itself be freshly
    /// imputed, so a run of gaps fills forward. With only one usable
    /// neighbor that value is copied directly; with none the build
    /// fails with [`OptimizeError::InsufficientData`].
    pub fn from_records(records: Vec<LevelRecord>) -> Result<Self, OptimizeError> {
        if records.is_empty() {
            return Err(OptimizeError::EmptyResult("level range is empty".into()));
        }
        for record in &records {
            if let Some(value) = record.steel_per_level {
                if !(value >= 0.0) {
                    return Err(OptimizeError::InvalidParameter(format!(
                        "level '{}' has invalid steel quantity {value}",
                        record.id
                    )));
                }
            }
        }

        let mut levels: Vec<Level> = Vec::with_capacity(records.len());
        let mut imputations = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            let (value, imputed) = match record.steel_per_level {
                Some(value) => (value, false),
                None => {
                    let before = levels.last().map(|l| l.steel_per_level);
                    let after = records.get(idx + 1).and_then(|r| r.steel_per_level);
                    let (value, method) = match (before, after) {
                        (Some(b), Some(a)) => ((b + a) / 2.0, ImputationMethod::NeighborAverage),
                        (Some(b), None) => (b, ImputationMethod::NeighborCopy),
                        (None, Some(a)) => (a, ImputationMethod::NeighborCopy),
                        (None, None) => {
                            return Err(OptimizeError::InsufficientData {
                                id: record.id.clone(),
                            })
                        }
                    };
                    warn!(
                        level_id = %record.id,
                        value,
                        method = %method,
                        "imputed missing steel quantity"
                    );
                    imputations.push(ImputationRecord {
                        level_id: record.id.clone(),
                        reconstructed_value: value,
                        method,
                    });
                    (value, true)
                }
            };
            levels.push(Level {
                id: record.id.clone(),
                steel_per_level: value,
                metrics: record.metrics.clone(),
                imputed,
            });
        }

        Ok(Self {
            levels,
            imputations,
        })
    }

    /// The validated levels, in construction order.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Number of levels in the range.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether the sequence holds no levels. Never true for a
    /// successfully built sequence.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Every reconstruction performed while building this sequence.
    pub fn imputations(&self) -> &[ImputationRecord] {
        &self.imputations
    }

    /// Human-readable range label (`"L5 to L20"`).
    pub fn range_label(&self) -> String {
        match (self.levels.first(), self.levels.last()) {
            (Some(first), Some(last)) => format!("{} to {}", first.id, last.id),
            _ => String::new(),
        }
    }

    /// Sum of the per-level steel quantities (tonf), without any
    /// envelope effect. Lower bound for every scenario's total.
    pub fn steel_sum(&self) -> f64 {
        self.levels.iter().map(|l| l.steel_per_level).sum()
    }
}
