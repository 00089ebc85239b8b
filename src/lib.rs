//! Urban Air Quality Scoring & Remediation Engine
//!
//! This crate estimates urban air-pollution severity, forecasts its
//! near-future trajectory and recommends a spatial remediation plan:
//! - AQI and a continuous pollution index from raw pollutant readings
//! - point, day-by-day and monthly forecasts with seasonal adjustment and a
//!   horizon-decaying confidence estimate
//! - bio-urban tree demand, projected reduction and a jittered grid
//!   placement covering the target area
//!
//! The engine is synchronous and stateless across calls; all randomness is
//! drawn from an explicitly seeded generator, so identical seeds reproduce
//! identical output.
//!
//! # Example
//!
//! ```rust
//! use airshed::{Engine, SimulationRequest};
//!
//! let mut engine = Engine::from_seed(42);
//! let record = engine
//!     .simulate(&SimulationRequest {
//!         location: "New Delhi, India".to_string(),
//!         latitude: 28.6139,
//!         longitude: 77.2090,
//!         area: 1.0,
//!         current_aqi: 200,
//!         current_pi: 150.0,
//!     })
//!     .expect("valid request");
//!
//! assert_eq!(record.trees_needed, 2);
//! assert_eq!(record.projected_aqi, 198);
//! assert_eq!(record.tree_placements.len(), 2);
//! ```

pub mod air_data;
pub mod config;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod remediation;
pub mod score;

pub use air_data::{
    ForecastReport, MonthlyForecast, PredictionRecord, PredictionRequest, Reading,
    RecommendationReport, ScoreReport, SimulationRecord, SimulationRequest, YearlyForecast,
};
pub use config::EngineConfig;
pub use engine::{Engine, score_reading};
pub use error::{EngineError, Result};
pub use forecast::{BaselineModel, ForecastPoint, ForecastStrategy, Forecaster};
pub use remediation::{Recommendation, RemediationPlan, TreePlacement};
pub use score::{AqiCategory, categorize, compute_aqi, compute_pollution_index};

/// Round to 2 decimal places (pollutant, index and percentage values).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 6 decimal places (coordinates).
pub(crate) fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(0.996), 1.0);
        assert_eq!(round2(-2.719), -2.72);
        assert_eq!(round2(70.0), 70.0);
    }

    #[test]
    fn test_round6() {
        assert_eq!(round6(28.123456789), 28.123457);
        assert_eq!(round6(-0.12789e-5), -1e-6);
        assert_eq!(round6(77.209), 77.209);
    }
}
