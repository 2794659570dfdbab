//! Level (floor) model.
//!
//! A level is one story of the analyzed tower segment: an identifier,
//! a steel quantity, and any secondary quantities carried through
//! unchanged from the source data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A raw per-level record as yielded by a level source.
///
/// The steel quantity may still be missing at this stage; building a
/// [`crate::sequence::LevelSequence`] reconstructs gaps from neighbors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRecord {
    /// Level identifier (e.g., `"L5"`, `"PISO 12"`).
    pub id: String,
    /// Steel quantity for this level (tonf). `None` = missing in source.
    pub steel_per_level: Option<f64>,
    /// Secondary quantities (concrete volume, formwork area, ...).
    pub metrics: HashMap<String, f64>,
}

impl LevelRecord {
    /// Creates a record. Pass `None` for a missing steel quantity.
    pub fn new(id: impl Into<String>, steel_per_level: impl Into<Option<f64>>) -> Self {
        Self {
            id: id.into(),
            steel_per_level: steel_per_level.into(),
            metrics: HashMap::new(),
        }
    }

    /// Adds a secondary quantity.
    pub fn with_metric(mut self, key: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(key.into(), value);
        self
    }
}

/// A validated level with a known steel quantity.
///
/// Created once when the sequence is built and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Level identifier.
    pub id: String,
    /// Steel quantity for this level (tonf, ≥ 0).
    pub steel_per_level: f64,
    /// Secondary quantities carried through unchanged.
    pub metrics: HashMap<String, f64>,
    /// Whether the steel quantity was reconstructed from neighbors.
    pub imputed: bool,
}

impl Level {
    /// Creates a level with a known steel quantity.
    pub fn new(id: impl Into<String>, steel_per_level: f64) -> Self {
        Self {
            id: id.into(),
            steel_per_level,
            metrics: HashMap::new(),
            imputed: false,
        }
    }

    /// Adds a secondary quantity.
    pub fn with_metric(mut self, key: impl Into<String>, value: f64) -> Self {
        self.metrics.insert(key.into(), value);
        self
    }
}
