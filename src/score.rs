//! Pollutant scoring: AQI breakpoints, pollution index, category buckets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper end of the AQI scale.
pub const AQI_SCALE_MAX: i32 = 500;
/// Upper end of the pollution index scale.
pub const PI_SCALE_MAX: f64 = 500.0;

const TEMPERATURE_WEIGHT: f64 = 0.3;
const PM25_WEIGHT: f64 = 0.4;
const CO_WEIGHT: f64 = 1.2;
const BASELINE_WEIGHT: f64 = 0.8;

/// Air Quality Index from a PM2.5 concentration in µg/m³.
///
/// Piecewise-linear EPA-style breakpoints, truncated to an integer. Negative
/// input is a caller error; the orchestrator checks readings before dispatch.
#[must_use]
pub fn compute_aqi(pm25: f64) -> i32 {
    let aqi = if pm25 <= 12.0 {
        pm25 * 4.17
    } else if pm25 <= 35.4 {
        ((pm25 - 12.1) / 23.3) * 49.0 + 51.0
    } else if pm25 <= 55.4 {
        ((pm25 - 35.5) / 19.9) * 49.0 + 101.0
    } else if pm25 <= 150.4 {
        ((pm25 - 55.5) / 94.9) * 99.0 + 151.0
    } else {
        ((pm25 - 150.5) / 99.9) * 99.0 + 201.0
    };
    aqi as i32
}

/// Continuous pollution index from temperature, PM2.5, CO and a site baseline.
///
/// Weighted combination clamped to [0, 500]; `baseline` is a site
/// normalization constant (100 in the default configuration).
#[must_use]
pub fn compute_pollution_index(pm25: f64, temperature: f64, co: f64, baseline: f64) -> f64 {
    (TEMPERATURE_WEIGHT * temperature + PM25_WEIGHT * pm25 + CO_WEIGHT * co
        - BASELINE_WEIGHT * baseline)
        .clamp(0.0, PI_SCALE_MAX)
}

/// EPA descriptor bucket for an AQI value.
///
/// Serialized labels match the public API wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitiveGroups,
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    Hazardous,
}

impl AqiCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category bucket for an AQI value. Total over the integers; values above
/// the scale fall into `Hazardous`, values below zero into `Good`.
#[must_use]
pub fn categorize(aqi: i32) -> AqiCategory {
    match aqi {
        i32::MIN..=50 => AqiCategory::Good,
        51..=100 => AqiCategory::Moderate,
        101..=150 => AqiCategory::UnhealthyForSensitiveGroups,
        151..=200 => AqiCategory::Unhealthy,
        201..=300 => AqiCategory::VeryUnhealthy,
        _ => AqiCategory::Hazardous,
    }
}
