//! Domain models for floor grouping.
//!
//! Provides the core data types for grouping problems and their
//! results. All result-side types are serde-serializable so a planning
//! frontend can persist or present them without re-deriving anything.
//!
//! # Domain Mapping
//!
//! | floor-grouping | Construction |
//! |----------------|--------------|
//! | Level | One story of the tower segment |
//! | Group | Contiguous run of levels sharing one rebar design |
//! | Scenario | One complete partition into k groups, fully costed |
//! | OptimizationResult | Ranked shortlist plus audit trail |

mod level;
mod scenario;

pub use level::{Level, LevelRecord};
pub use scenario::{OptimizationResult, Scenario, ScenarioGroup};
