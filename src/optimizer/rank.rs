//! Two-key scenario ranking.

use std::cmp::Ordering;

use crate::models::Scenario;

/// Sorts scenarios by total steel ascending, breaking ties by total
/// duration ascending, assigns 1-based ranks, and keeps the best
/// `top_n`.
///
/// The sort is stable: scenarios with exactly equal (steel, duration)
/// keys keep their generation order, so the first-generated ranks
/// first.
pub fn rank_scenarios(mut scenarios: Vec<Scenario>, top_n: usize) -> Vec<Scenario> {
    scenarios.sort_by(compare);
    for (index, scenario) in scenarios.iter_mut().enumerate() {
        scenario.rank = index + 1;
    }
    scenarios.truncate(top_n);
    scenarios
}

fn compare(a: &Scenario, b: &Scenario) -> Ordering {
    a.total_steel_tonf
        .total_cmp(&b.total_steel_tonf)
        .then_with(|| a.total_duration_days.total_cmp(&b.total_duration_days))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_scenario(k: usize, steel: f64, duration: f64) -> Scenario {
        Scenario {
            rank: 0,
            k,
            groups: Vec::new(),
            total_steel_tonf: steel,
            total_duration_days: duration,
            total_duration_months: duration / 21.725,
        }
    }

    #[test]
    fn test_steel_is_primary_key() {
        let ranked = rank_scenarios(
            vec![
                make_scenario(2, 23.0, 30.0),
                make_scenario(3, 21.0, 40.0),
                make_scenario(4, 22.0, 20.0),
            ],
            5,
        );
        let steels: Vec<f64> = ranked.iter().map(|s| s.total_steel_tonf).collect();
        assert_eq!(steels, vec![21.0, 22.0, 23.0]);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_duration_breaks_steel_ties() {
        let ranked = rank_scenarios(
            vec![
                make_scenario(2, 21.0, 40.0),
                make_scenario(3, 21.0, 34.0),
            ],
            5,
        );
        assert_eq!(ranked[0].total_duration_days, 34.0);
        assert_eq!(ranked[1].total_duration_days, 40.0);
    }

    #[test]
    fn test_exact_ties_keep_generation_order() {
        let ranked = rank_scenarios(
            vec![
                make_scenario(4, 21.0, 34.0),
                make_scenario(2, 21.0, 34.0),
                make_scenario(3, 21.0, 34.0),
            ],
            5,
        );
        let ks: Vec<usize> = ranked.iter().map(|s| s.k).collect();
        assert_eq!(ks, vec![4, 2, 3]);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_top_n_truncation() {
        let scenarios = (0..10)
            .map(|i| make_scenario(2, i as f64, 10.0))
            .collect();
        let ranked = rank_scenarios(scenarios, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[2].rank, 3);
        assert_eq!(ranked[2].total_steel_tonf, 2.0);
    }

    #[test]
    fn test_adjacent_ranks_obey_ordering_law() {
        let scenarios = vec![
            make_scenario(2, 25.0, 10.0),
            make_scenario(2, 21.0, 50.0),
            make_scenario(3, 21.0, 30.0),
            make_scenario(4, 23.0, 20.0),
        ];
        let ranked = rank_scenarios(scenarios, 10);
        for pair in ranked.windows(2) {
            assert!(pair[0].total_steel_tonf <= pair[1].total_steel_tonf);
            if pair[0].total_steel_tonf == pair[1].total_steel_tonf {
                assert!(pair[0].total_duration_days <= pair[1].total_duration_days);
            }
        }
    }
}
