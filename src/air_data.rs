//! Transport-facing value objects
//!
//! These types mirror the JSON payloads of the public pollution API; field
//! spellings (`predictedAQI`, `treeCount`, `createdAt`, ...) are preserved
//! for interoperability with prior output.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::forecast::ForecastPoint;
use crate::remediation::{Recommendation, TreePlacement};
use crate::score::AqiCategory;

/// One raw environmental sample for a site, as supplied by the external
/// data source. Ephemeral; the engine never fetches or persists readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub location: String,
    /// Degrees north
    pub latitude: f64,
    /// Degrees east
    pub longitude: f64,
    /// PM2.5 in µg/m³
    pub pm25: f64,
    /// PM10 in µg/m³
    pub pm10: f64,
    /// NO2 in ppb
    pub no2: f64,
    /// O3 in ppb
    pub o3: f64,
    /// CO in ppm
    pub co: f64,
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

/// Derived severity scores for one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub aqi: i32,
    #[serde(rename = "pollutionIndex")]
    pub pollution_index: f64,
    pub category: AqiCategory,
}

/// Point-prediction request for a specific future date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub prediction_date: DateTime<Utc>,
}

/// Assembled point prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub id: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub prediction_date: DateTime<Utc>,
    #[serde(rename = "predictedAQI")]
    pub predicted_aqi: i32,
    #[serde(rename = "predictedPM25")]
    pub predicted_pm25: f64,
    pub confidence: f64,
    pub model_version: String,
    pub created_at: DateTime<Utc>,
}

/// Day-by-day forecast for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub forecast: Vec<ForecastPoint>,
}

/// One month of a yearly forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyForecast {
    pub month: u32,
    pub year: i32,
    pub date: NaiveDate,
    #[serde(rename = "predictedAQI")]
    pub predicted_aqi: i32,
    #[serde(rename = "predictedPM25")]
    pub predicted_pm25: f64,
    pub confidence: f64,
}

impl MonthlyForecast {
    #[must_use]
    pub fn from_point(point: &ForecastPoint) -> Self {
        Self {
            month: point.date.month(),
            year: point.date.year(),
            date: point.date,
            predicted_aqi: point.predicted_aqi,
            predicted_pm25: point.predicted_pm25,
            confidence: point.confidence,
        }
    }
}

/// Twelve-month forecast for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyForecast {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub year: i32,
    pub predictions: Vec<MonthlyForecast>,
}

/// Remediation simulation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Remediation area in km²
    pub area: f64,
    #[serde(rename = "currentAQI")]
    pub current_aqi: i32,
    #[serde(rename = "currentPI")]
    pub current_pi: f64,
}

/// Assembled remediation simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRecord {
    pub id: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub area: f64,
    #[serde(rename = "currentAQI")]
    pub current_aqi: i32,
    #[serde(rename = "currentPI")]
    pub current_pi: f64,
    pub trees_needed: u32,
    pub projected_reduction: f64,
    #[serde(rename = "projectedAQI")]
    pub projected_aqi: i32,
    pub density_limited: bool,
    pub tree_placements: Vec<TreePlacement>,
    pub created_at: DateTime<Utc>,
}

/// Assembled planting recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub id: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Analyzed area in km²
    pub area: f64,
    pub analysis: Recommendation,
    pub created_at: DateTime<Utc>,
}
