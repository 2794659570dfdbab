//! Floor grouping optimization for rebar batch planning.
//!
//! Decides how to group a run of structurally identical building floors
//! into construction batches that share one fabricated reinforcement
//! design per batch — an "envelope" design sized for the heaviest member
//! floor — minimizing total steel consumed while reporting the resulting
//! construction duration of each candidate grouping.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Level`, `LevelRecord`, `Scenario`,
//!   `ScenarioGroup`, `OptimizationResult`
//! - **`sequence`**: Ordered level sequence with neighbor-average
//!   imputation of missing steel quantities
//! - **`partition`**: Lazy enumeration of all contiguous partitions of
//!   N levels into k non-empty groups
//! - **`cost`**: Group cost model and the substitutable costing policy
//! - **`evaluate`**: Partition → fully-costed scenario
//! - **`optimizer`**: Driver and two-key scenario ranking
//! - **`error`**: Error taxonomy for the whole pipeline
//!
//! # Pipeline
//!
//! Level Sequence → Partition Enumerator → Group Cost Model → Scenario
//! Evaluator → Scenario Ranker, composed by [`optimizer::Optimizer`].
//! The core is computation-only: no I/O, no ambient state, bit-for-bit
//! deterministic for identical inputs. Groups run strictly sequentially
//! in bottom-to-top construction order.

pub mod cost;
pub mod error;
pub mod evaluate;
pub mod models;
pub mod optimizer;
pub mod partition;
pub mod sequence;
