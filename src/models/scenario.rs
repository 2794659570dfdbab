//! Scenario (solution) models.
//!
//! A scenario is one fully-costed candidate grouping: one k value plus
//! one complete contiguous partition, with every derived total. The
//! optimization result carries the ranked shortlist and the audit
//! trail (imputations, skipped k warnings, parameters used).

use serde::{Deserialize, Serialize};

use crate::cost::CostParameters;
use crate::sequence::ImputationRecord;

/// One contiguous group inside a scenario, fully costed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioGroup {
    /// Group identifier, 1-based in construction order.
    pub group_id: usize,
    /// Compact range label (`"L5-L7"`, or the bare id for one level).
    pub level_range: String,
    /// Member level ids, bottom-to-top.
    pub levels: Vec<String>,
    /// Envelope steel per level (tonf): max over the members.
    pub envelope_steel_per_level: f64,
    /// Total steel for the group (tonf): envelope × level count.
    pub group_steel_total: f64,
    /// Construction duration for the group (workdays).
    pub group_duration_days: f64,
}

/// A complete grouping scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// 1-based rank in the shortlist; 0 until ranked.
    pub rank: usize,
    /// Number of groups.
    pub k: usize,
    /// Per-group details, in construction order.
    pub groups: Vec<ScenarioGroup>,
    /// Total steel consumption (tonf).
    pub total_steel_tonf: f64,
    /// Total duration with strictly sequential groups (workdays).
    pub total_duration_days: f64,
    /// Total duration in months (days / workdays_per_month).
    pub total_duration_months: f64,
}

/// Final report of one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Ranked top-N scenarios, best first.
    pub scenarios: Vec<Scenario>,
    /// How many scenarios were evaluated across all valid k.
    pub total_scenarios_evaluated: usize,
    /// Number of levels in the analyzed range.
    pub levels_analyzed: usize,
    /// Human-readable range label (`"L5 to L20"`).
    pub level_range: String,
    /// The k values the caller asked for.
    pub requested_k_values: Vec<usize>,
    /// The k values that were actually enumerated.
    pub evaluated_k_values: Vec<usize>,
    /// Warnings recorded for skipped k values.
    pub warnings: Vec<String>,
    /// Every value reconstruction performed on the input range.
    pub imputations_log: Vec<ImputationRecord>,
    /// The cost parameters this run used.
    pub parameters: CostParameters,
}
