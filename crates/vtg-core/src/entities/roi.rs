use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Recommendation, UseFrequency};

/// Value estimate for one insight.
///
/// `roi_score` is a dimensionless return multiple and may be negative.
/// `breakeven_weeks` is `None` when the insight never pays for itself.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RoiMetrics {
    pub implementation_hours: f64,
    pub time_saved_per_use_minutes: f64,
    pub use_frequency: UseFrequency,
    pub annual_time_savings_hours: f64,
    pub annual_value: f64,
    pub recurring_annual_cost: f64,
    pub cost: f64,
    pub roi_score: f64,
    pub breakeven_weeks: Option<f64>,
    pub confidence: f64,
    pub top_bracket: bool,
    pub recommendation: Recommendation,
    pub reasoning: String,
}

impl RoiMetrics {
    /// Breakeven formatted for humans (`"3.2 weeks"` or `"never"`).
    #[must_use]
    pub fn breakeven_label(&self) -> String {
        self.breakeven_weeks
            .map_or_else(|| String::from("never"), |weeks| format!("{weeks:.1} weeks"))
    }
}
