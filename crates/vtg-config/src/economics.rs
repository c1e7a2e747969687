//! Economic assumptions used by ROI scoring.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Labor cost per implementation hour.
const fn default_hourly_rate() -> f64 {
    50.0
}

/// Value of one hour of saved time.
const fn default_value_per_hour() -> f64 {
    50.0
}

/// Annual cost assumed for a metered API mentioned without a price.
const fn default_metered_api_annual_cost() -> f64 {
    120.0
}

/// Floor for implementation hours.
const fn default_min_implementation_hours() -> f64 {
    0.05
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EconomicsConfig {
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,

    #[serde(default = "default_value_per_hour")]
    pub value_per_hour: f64,

    #[serde(default = "default_metered_api_annual_cost")]
    pub metered_api_annual_cost: f64,

    /// Division guard: implementation hours never drop below this.
    #[serde(default = "default_min_implementation_hours")]
    pub min_implementation_hours: f64,
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(),
            value_per_hour: default_value_per_hour(),
            metered_api_annual_cost: default_metered_api_annual_cost(),
            min_implementation_hours: default_min_implementation_hours(),
        }
    }
}

impl EconomicsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(self.hourly_rate.is_finite() && self.hourly_rate >= 0.0) {
            return Err(ConfigError::invalid(
                "economics.hourly_rate",
                "must be a finite, non-negative number",
            ));
        }
        if !(self.value_per_hour.is_finite() && self.value_per_hour > 0.0) {
            return Err(ConfigError::invalid(
                "economics.value_per_hour",
                "must be a finite, positive number",
            ));
        }
        if !(self.metered_api_annual_cost.is_finite() && self.metered_api_annual_cost >= 0.0) {
            return Err(ConfigError::invalid(
                "economics.metered_api_annual_cost",
                "must be a finite, non-negative number",
            ));
        }
        if !(self.min_implementation_hours.is_finite() && self.min_implementation_hours > 0.0) {
            return Err(ConfigError::invalid(
                "economics.min_implementation_hours",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}
