//! # vtg-engine
//!
//! Readiness, ROI, and learning-path analysis over insight records.
//!
//! - [`readiness::ReadinessAnalyzer`]: status, complexity, prerequisites, setup time
//! - [`roi::RoiScorer`]: time saved, cost, return multiple, breakeven, recommendation
//! - [`path::LearningPathGenerator`]: dependency graph, cycle repair, ordering, phases
//! - [`IntelligenceEngine`]: runs all three and builds the prioritization dashboard
//!
//! Everything is synchronous and in-memory. Per-item analysis runs on rayon;
//! graph work runs after every item is scored. Poor input degrades to
//! conservative defaults and never produces an error.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod path;
pub mod readiness;
pub mod report;
pub mod roi;
pub mod text;

pub use engine::IntelligenceEngine;
pub use error::EngineError;
pub use path::LearningPathGenerator;
pub use readiness::ReadinessAnalyzer;
pub use report::generate_report;
pub use roi::RoiScorer;
