//! Scenario evaluation: one partition into one fully-costed scenario.
//!
//! Pure and side-effect free: the result depends only on the level
//! sequence, the partition, and the costing configuration. Evaluating
//! one partition never depends on another partition's result, so
//! callers may fan evaluation out across workers against the shared
//! read-only sequence and join before ranking.

use crate::cost::{CostParameters, CostPolicy};
use crate::error::OptimizeError;
use crate::models::{Scenario, ScenarioGroup};
use crate::partition::Partition;
use crate::sequence::LevelSequence;

/// Evaluates one partition of the level sequence into a costed scenario.
///
/// Checks at construction time that every level of the sequence falls
/// in exactly one group; a non-covering partition is rejected with
/// [`OptimizeError::InvalidParameter`]. The returned scenario carries
/// `rank == 0`; ranks are assigned by the ranker.
pub fn evaluate_scenario(
    sequence: &LevelSequence,
    partition: &Partition,
    policy: &dyn CostPolicy,
    params: &CostParameters,
) -> Result<Scenario, OptimizeError> {
    if !partition.covers(sequence.len()) {
        return Err(OptimizeError::InvalidParameter(format!(
            "partition with group sizes {:?} does not cover the {}-level sequence",
            partition.sizes(),
            sequence.len()
        )));
    }

    let levels = sequence.levels();
    let mut groups = Vec::with_capacity(partition.group_count());
    let mut total_steel = 0.0;
    let mut total_duration = 0.0;

    for (index, span) in partition.spans.iter().enumerate() {
        let members = &levels[span.clone()];
        let cost = policy.group_cost(members, params);

        let ids: Vec<String> = members.iter().map(|l| l.id.clone()).collect();
        let level_range = match ids.as_slice() {
            [only] => only.clone(),
            [first, .., last] => format!("{first}-{last}"),
            [] => unreachable!("covering partitions have no empty spans"),
        };

        total_steel += cost.group_steel_total;
        total_duration += cost.group_duration_days;

        groups.push(ScenarioGroup {
            group_id: index + 1,
            level_range,
            levels: ids,
            envelope_steel_per_level: cost.envelope_steel_per_level,
            group_steel_total: cost.group_steel_total,
            group_duration_days: cost.group_duration_days,
        });
    }

    Ok(Scenario {
        rank: 0,
        k: partition.group_count(),
        groups,
        total_steel_tonf: total_steel,
        total_duration_days: total_duration,
        total_duration_months: total_duration / params.workdays_per_month,
    })
}
