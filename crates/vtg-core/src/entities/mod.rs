//! Entity structs for the Vantage data model.
//!
//! [`InsightItem`] is the only input. Everything else is derived fresh on each
//! analysis run. All structs derive `Serialize`, `Deserialize`, and `JsonSchema`
//! for JSON roundtrip and schema validation.

mod insight;
mod path;
mod readiness;
mod roi;

pub use insight::InsightItem;
pub use path::{DependencyEdge, FoundationalItem, LearningPath, LearningPhase, QuickWin};
pub use readiness::{ComplexityBreakdown, Prerequisite, ReadinessScore};
pub use roi::RoiMetrics;
