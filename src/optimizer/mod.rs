//! Optimization driver and scenario ranking.
//!
//! The driver composes the whole pipeline: for every requested group
//! count k it runs enumeration → costing → evaluation over each
//! partition, accumulates the scenarios, and hands them to the two-key
//! ranker.
//!
//! # Ranking
//!
//! Scenarios are ordered by total steel ascending, then total duration
//! ascending; exact ties keep generation order (stable sort). This is a
//! deliberate two-key ordering, not a Pareto front computation.

mod driver;
mod rank;

pub use driver::{run_optimization, Optimizer, DEFAULT_TOP_N};
pub use rank::rank_scenarios;
