//! Optimization driver: enumeration × evaluation × ranking.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cost::{CostParameters, CostPolicy, EnvelopeCostPolicy};
use crate::error::OptimizeError;
use crate::evaluate::evaluate_scenario;
use crate::models::{OptimizationResult, Scenario};
use crate::partition::Partitions;
use crate::sequence::{LevelSequence, LevelSource};

use super::rank::rank_scenarios;

/// Default number of ranked scenarios returned.
pub const DEFAULT_TOP_N: usize = 5;

/// Accumulates every evaluated scenario for one run.
///
/// Per-run state, owned by the driver for the duration of the call:
/// no scenario is ever partially recorded, so abandoning a run between
/// partitions leaves nothing inconsistent behind.
#[derive(Debug, Default)]
struct ScenarioAccumulator {
    scenarios: Vec<Scenario>,
}

impl ScenarioAccumulator {
    fn push(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    fn len(&self) -> usize {
        self.scenarios.len()
    }
}

/// Floor grouping optimization driver.
///
/// Composes the partition enumerator, the costing policy, and the
/// scenario ranker over every requested group count.
///
/// # Example
/// ```
/// use floor_grouping::models::LevelRecord;
/// use floor_grouping::optimizer::Optimizer;
/// use floor_grouping::sequence::{InMemoryLevelSource, LevelSequence};
///
/// let source = InMemoryLevelSource::new(vec![
///     LevelRecord::new("L5", 5.0),
///     LevelRecord::new("L6", 5.0),
///     LevelRecord::new("L7", 4.5),
///     LevelRecord::new("L8", 6.0),
/// ]);
/// let sequence = LevelSequence::from_source(&source, "L5", "L8").unwrap();
/// let result = Optimizer::new().optimize(&sequence, &[2, 3]).unwrap();
/// assert_eq!(result.scenarios[0].rank, 1);
/// ```
#[derive(Clone)]
pub struct Optimizer {
    params: CostParameters,
    policy: Arc<dyn CostPolicy>,
    top_n: usize,
}

impl Optimizer {
    /// Creates a driver with default parameters and the envelope policy.
    pub fn new() -> Self {
        Self {
            params: CostParameters::default(),
            policy: Arc::new(EnvelopeCostPolicy),
            top_n: DEFAULT_TOP_N,
        }
    }

    /// Sets the costing parameters.
    pub fn with_parameters(mut self, params: CostParameters) -> Self {
        self.params = params;
        self
    }

    /// Replaces the costing policy.
    pub fn with_policy<P: CostPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Sets how many ranked scenarios are returned.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Runs the full enumeration for every valid candidate k and returns
    /// the ranked report.
    ///
    /// An out-of-range k (below 1 or above the level count) is skipped
    /// with a recorded warning; the run fails only if the parameters are
    /// invalid, no k was requested, every requested k is invalid, or no
    /// scenario was produced.
    pub fn optimize(
        &self,
        sequence: &LevelSequence,
        candidate_k_values: &[usize],
    ) -> Result<OptimizationResult, OptimizeError> {
        self.params.validate()?;
        if candidate_k_values.is_empty() {
            return Err(OptimizeError::InvalidParameter(
                "no candidate k values requested".into(),
            ));
        }

        let n = sequence.len();
        let mut warnings = Vec::new();
        let mut evaluated_k = Vec::new();
        let mut accumulator = ScenarioAccumulator::default();

        for &k in candidate_k_values {
            if k < 1 || k > n {
                let message = format!("skipping k={k}: outside valid range 1..={n}");
                warn!("{message}");
                warnings.push(message);
                continue;
            }

            let before = accumulator.len();
            for partition in Partitions::new(n, k) {
                let scenario =
                    evaluate_scenario(sequence, &partition, self.policy.as_ref(), &self.params)?;
                accumulator.push(scenario);
            }
            debug!(k, partitions = accumulator.len() - before, "enumerated candidate group count");
            evaluated_k.push(k);
        }

        if evaluated_k.is_empty() {
            return Err(OptimizeError::InvalidParameter(format!(
                "every requested k value is invalid for {n} levels"
            )));
        }
        if accumulator.len() == 0 {
            return Err(OptimizeError::EmptyResult(
                "no partition produced a scenario".into(),
            ));
        }

        let total_scenarios_evaluated = accumulator.len();
        let scenarios = rank_scenarios(accumulator.scenarios, self.top_n);

        Ok(OptimizationResult {
            scenarios,
            total_scenarios_evaluated,
            levels_analyzed: n,
            level_range: sequence.range_label(),
            requested_k_values: candidate_k_values.to_vec(),
            evaluated_k_values: evaluated_k,
            warnings,
            imputations_log: sequence.imputations().to_vec(),
            parameters: self.params.clone(),
        })
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a complete optimization against a level source.
///
/// Convenience entry point for a planning frontend: fetches the
/// inclusive `start_id..=end_id` range, imputes gaps, enumerates every
/// partition of every valid candidate k, and returns the ranked
/// shortlist of `top_n` scenarios.
pub fn run_optimization(
    source: &dyn LevelSource,
    start_id: &str,
    end_id: &str,
    candidate_k_values: &[usize],
    params: CostParameters,
    top_n: usize,
) -> Result<OptimizationResult, OptimizeError> {
    let sequence = LevelSequence::from_source(source, start_id, end_id)?;
    Optimizer::new()
        .with_parameters(params)
        .with_top_n(top_n)
        .optimize(&sequence, candidate_k_values)
}
