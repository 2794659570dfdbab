//! Group cost model: envelope steel and construction duration.
//!
//! Costing one contiguous group is a pure function of its member levels
//! and the [`CostParameters`]. The fabrication rule itself — one shared
//! reinforcement design per group, sized for the heaviest member — is a
//! named, substitutable policy ([`EnvelopeCostPolicy`]), not a hard-coded
//! formula, so alternative costing rules can be swapped in later.

use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;
use crate::models::Level;

/// Productivity and calendar constants for costing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    /// Workdays for the first level of a group (full formwork and
    /// fabrication setup).
    pub days_first_in_group: f64,
    /// Workdays for each repeated level of a group (design reuse).
    pub days_repeated: f64,
    /// Workdays per calendar month, for day-to-month conversion.
    pub workdays_per_month: f64,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            days_first_in_group: 10.0,
            days_repeated: 7.0,
            workdays_per_month: 21.725,
        }
    }
}

impl CostParameters {
    /// Checks the constants are usable: day constants must be ≥ 0 and
    /// `workdays_per_month` strictly positive (it is a divisor).
    pub fn validate(&self) -> Result<(), OptimizeError> {
        if !(self.days_first_in_group >= 0.0) {
            return Err(OptimizeError::InvalidParameter(format!(
                "days_first_in_group must be >= 0, got {}",
                self.days_first_in_group
            )));
        }
        if !(self.days_repeated >= 0.0) {
            return Err(OptimizeError::InvalidParameter(format!(
                "days_repeated must be >= 0, got {}",
                self.days_repeated
            )));
        }
        if !(self.workdays_per_month > 0.0) {
            return Err(OptimizeError::InvalidParameter(format!(
                "workdays_per_month must be > 0, got {}",
                self.workdays_per_month
            )));
        }
        Ok(())
    }
}

/// Cost of one contiguous group under a costing policy.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCost {
    /// Steel of the shared design, per level (tonf).
    pub envelope_steel_per_level: f64,
    /// Total steel for the group (tonf).
    pub group_steel_total: f64,
    /// Construction duration for the group (workdays).
    pub group_duration_days: f64,
}

/// Strategy for costing one contiguous group of levels.
///
/// `levels` is never empty: partitions only produce non-empty groups.
pub trait CostPolicy: Send + Sync {
    /// Computes the cost of one group.
    fn group_cost(&self, levels: &[Level], params: &CostParameters) -> GroupCost;
}

/// One shared reinforcement design per group, sized for the heaviest
/// member level and reused across the whole group.
///
/// Envelope = max member steel; group total = envelope × level count;
/// duration = `days_first_in_group` + (level count − 1) ×
/// `days_repeated`, so a single-level group takes exactly
/// `days_first_in_group`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvelopeCostPolicy;

impl CostPolicy for EnvelopeCostPolicy {
    fn group_cost(&self, levels: &[Level], params: &CostParameters) -> GroupCost {
        let envelope = levels
            .iter()
            .map(|l| l.steel_per_level)
            .fold(0.0_f64, f64::max);
        let count = levels.len() as f64;
        GroupCost {
            envelope_steel_per_level: envelope,
            group_steel_total: envelope * count,
            group_duration_days: params.days_first_in_group + (count - 1.0) * params.days_repeated,
        }
    }
}
