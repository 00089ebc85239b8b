//! Request orchestration: validate, compute, assemble
//!
//! [`Engine`] is the composition layer over the scoring, forecasting and
//! remediation modules. It is stateless across calls; the only held state is
//! the configuration and the seeded random source, so engines built from the
//! same seed produce identical output and independent engines never
//! interfere.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::air_data::{
    ForecastReport, MonthlyForecast, PredictionRecord, PredictionRequest, Reading,
    RecommendationReport, ScoreReport, SimulationRecord, SimulationRequest, YearlyForecast,
};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::forecast::{BaselineModel, ForecastStrategy, Forecaster};
use crate::remediation;
use crate::round2;
use crate::score::{AQI_SCALE_MAX, categorize, compute_aqi, compute_pollution_index};

/// Longest prediction horizon, in days.
const MAX_HORIZON_DAYS: i64 = 365;
/// Longest day-by-day forecast range.
const MAX_FORECAST_DAYS: u32 = 365;
/// Inclusive suffix range for assembled record ids.
const ID_RANGE: std::ops::RangeInclusive<u32> = 1000..=9999;

/// Score one reading against a configuration.
///
/// # Errors
///
/// * `EngineError::InvalidReading` - a pollutant value is negative or
///   non-finite
pub fn score_reading(reading: &Reading, config: &EngineConfig) -> Result<ScoreReport> {
    validate_reading(reading)?;

    let aqi = compute_aqi(reading.pm25);
    let pollution_index =
        compute_pollution_index(reading.pm25, reading.temperature, reading.co, config.baseline);

    Ok(ScoreReport {
        aqi,
        pollution_index: round2(pollution_index),
        category: categorize(aqi),
    })
}

/// The scoring and simulation engine.
pub struct Engine<S: ForecastStrategy = BaselineModel> {
    config: EngineConfig,
    forecaster: Forecaster<S>,
    rng: ChaCha8Rng,
}

impl Engine {
    /// Engine with the default configuration and baseline strategy, seeded
    /// from the thread RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_seed(rand::thread_rng().next_u64())
    }

    /// Reproducible engine: identical seeds produce identical output.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::with_strategy(EngineConfig::default(), BaselineModel, seed)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ForecastStrategy> Engine<S> {
    /// Engine over a custom configuration and forecast strategy.
    pub fn with_strategy(config: EngineConfig, strategy: S, seed: u64) -> Self {
        Self {
            config,
            forecaster: Forecaster::with_strategy(strategy),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score one raw reading: AQI, pollution index and category.
    ///
    /// # Errors
    ///
    /// * `EngineError::InvalidReading` - a pollutant value is negative or
    ///   non-finite
    pub fn score(&self, reading: &Reading) -> Result<ScoreReport> {
        score_reading(reading, &self.config)
    }

    /// Predict AQI and PM2.5 for a specific future date.
    ///
    /// # Errors
    ///
    /// * `EngineError::DateNotInFuture` - target is not after the current time
    /// * `EngineError::DateBeyondHorizon` - target is more than a year out
    pub fn predict(&mut self, request: &PredictionRequest) -> Result<PredictionRecord> {
        let now = Utc::now();
        validate_prediction_date(request.prediction_date, now)?;
        debug!(location = %request.location, date = %request.prediction_date, "running point prediction");

        let point = self.forecaster.predict_point(
            &mut self.rng,
            now.date_naive(),
            request.prediction_date.date_naive(),
        );

        Ok(PredictionRecord {
            id: self.next_id("pred"),
            location: request.location.clone(),
            latitude: request.latitude,
            longitude: request.longitude,
            prediction_date: request.prediction_date,
            predicted_aqi: point.predicted_aqi,
            predicted_pm25: point.predicted_pm25,
            confidence: point.confidence,
            model_version: self.forecaster.model_version().to_string(),
            created_at: now,
        })
    }

    /// Day-by-day forecast of `days` points following `start`.
    ///
    /// # Errors
    ///
    /// * `EngineError::DaysOutOfRange` - `days` outside [1, 365]
    pub fn forecast_range(
        &mut self,
        location: &str,
        latitude: f64,
        longitude: f64,
        start: NaiveDate,
        days: u32,
    ) -> Result<ForecastReport> {
        if !(1..=MAX_FORECAST_DAYS).contains(&days) {
            return Err(EngineError::DaysOutOfRange(days));
        }
        debug!(location, days, "running day-by-day forecast");

        let forecast = self
            .forecaster
            .predict_series(&mut self.rng, start, days)
            .collect();

        Ok(ForecastReport {
            location: location.to_string(),
            latitude,
            longitude,
            forecast,
        })
    }

    /// Twelve monthly predictions for a full year.
    ///
    /// # Errors
    ///
    /// * `EngineError::UnsupportedYear` - any year other than the configured
    ///   supported year
    pub fn forecast_monthly(
        &mut self,
        location: &str,
        latitude: f64,
        longitude: f64,
        year: i32,
    ) -> Result<YearlyForecast> {
        if year != self.config.supported_year {
            return Err(EngineError::UnsupportedYear {
                requested: year,
                supported: self.config.supported_year,
            });
        }
        debug!(location, year, "running monthly forecast");

        let now = Utc::now().date_naive();
        let predictions = self
            .forecaster
            .predict_monthly(&mut self.rng, now, year)
            .iter()
            .map(MonthlyForecast::from_point)
            .collect();

        Ok(YearlyForecast {
            location: location.to_string(),
            latitude,
            longitude,
            year,
            predictions,
        })
    }

    /// Simulate bio-urban tree planting and its impact on pollution.
    ///
    /// # Errors
    ///
    /// * `EngineError::InvalidArea` - area is zero or negative
    /// * `EngineError::AqiOutOfRange` - current AQI outside [0, 500]
    pub fn simulate(&mut self, request: &SimulationRequest) -> Result<SimulationRecord> {
        validate_area(request.area)?;
        validate_aqi(request.current_aqi)?;
        debug!(location = %request.location, area = request.area, "running remediation simulation");

        let plan = remediation::build_plan(
            &mut self.rng,
            request.current_aqi,
            request.current_pi,
            request.latitude,
            request.longitude,
            request.area,
            &self.config,
        );

        Ok(SimulationRecord {
            id: self.next_id("sim"),
            location: request.location.clone(),
            latitude: request.latitude,
            longitude: request.longitude,
            area: request.area,
            current_aqi: request.current_aqi,
            current_pi: request.current_pi,
            trees_needed: plan.trees_needed,
            projected_reduction: plan.projected_reduction,
            projected_aqi: plan.projected_aqi,
            density_limited: plan.density_limited,
            tree_placements: plan.placements,
            created_at: Utc::now(),
        })
    }

    /// Planting recommendation for a site where only the AQI is known.
    ///
    /// Callers typically analyze one square kilometre (`area_km2 = 1.0`).
    ///
    /// # Errors
    ///
    /// * `EngineError::InvalidArea` - area is zero or negative
    /// * `EngineError::AqiOutOfRange` - current AQI outside [0, 500]
    pub fn recommend(
        &mut self,
        location: &str,
        latitude: f64,
        longitude: f64,
        current_aqi: i32,
        area_km2: f64,
    ) -> Result<RecommendationReport> {
        validate_area(area_km2)?;
        validate_aqi(current_aqi)?;

        let analysis = remediation::build_recommendation(
            &mut self.rng,
            current_aqi,
            latitude,
            longitude,
            area_km2,
            &self.config,
        );

        Ok(RecommendationReport {
            id: self.next_id("rec"),
            location: location.to_string(),
            latitude,
            longitude,
            area: area_km2,
            analysis,
            created_at: Utc::now(),
        })
    }

    fn next_id(&mut self, prefix: &str) -> String {
        format!("{prefix}_{}", self.rng.gen_range(ID_RANGE))
    }
}

fn validate_area(area: f64) -> Result<()> {
    if area > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidArea(area))
    }
}

fn validate_aqi(aqi: i32) -> Result<()> {
    if (0..=AQI_SCALE_MAX).contains(&aqi) {
        Ok(())
    } else {
        Err(EngineError::AqiOutOfRange(aqi))
    }
}

fn validate_prediction_date(date: DateTime<Utc>, now: DateTime<Utc>) -> Result<()> {
    if date <= now {
        return Err(EngineError::DateNotInFuture);
    }
    if date > now + Duration::days(MAX_HORIZON_DAYS) {
        return Err(EngineError::DateBeyondHorizon);
    }
    Ok(())
}

fn validate_reading(reading: &Reading) -> Result<()> {
    let pollutants = [
        ("pm25", reading.pm25),
        ("pm10", reading.pm10),
        ("no2", reading.no2),
        ("o3", reading.o3),
        ("co", reading.co),
    ];
    for (field, value) in pollutants {
        if !value.is_finite() || value < 0.0 {
            return Err(EngineError::invalid_field(field, value));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::AqiCategory;
    use chrono::{Datelike, TimeZone};

    fn delhi_reading(pm25: f64) -> Reading {
        Reading {
            location: "New Delhi, India".to_string(),
            latitude: 28.6139,
            longitude: 77.209,
            pm25,
            pm10: pm25 * 1.5,
            no2: 40.0,
            o3: 30.0,
            co: 2.0,
            temperature: 25.0,
            humidity: 55.0,
        }
    }

    fn simulation_request(area: f64, current_aqi: i32, current_pi: f64) -> SimulationRequest {
        SimulationRequest {
            location: "New Delhi, India".to_string(),
            latitude: 28.6139,
            longitude: 77.209,
            area,
            current_aqi,
            current_pi,
        }
    }

    #[test]
    fn score_reports_aqi_pi_and_category() {
        let engine = Engine::from_seed(1);

        // AQI breakpoint boundary: pm25 = 12 -> 50, 12.1 -> 51
        let report = engine.score(&delhi_reading(12.0)).unwrap();
        assert_eq!(report.aqi, 50);
        assert_eq!(report.category, AqiCategory::Good);

        let report = engine.score(&delhi_reading(12.1)).unwrap();
        assert_eq!(report.aqi, 51);
        assert_eq!(report.category, AqiCategory::Moderate);

        // PI: 0.3*25 + 0.4*90 + 1.2*2 - 0.8*100 = 7.5 + 36 + 2.4 - 80
        let report = engine.score(&delhi_reading(90.0)).unwrap();
        assert!((report.pollution_index - 0.0).abs() < 1e-9);
    }

    #[test]
    fn score_rejects_negative_pollutants() {
        let engine = Engine::from_seed(1);
        let mut reading = delhi_reading(50.0);
        reading.co = -1.0;

        let err = engine.score(&reading).unwrap_err();
        assert!(matches!(err, EngineError::InvalidReading(_)));
        assert!(err.to_string().contains("co"));
    }

    #[test]
    fn simulate_end_to_end() {
        let mut engine = Engine::from_seed(42);
        let record = engine
            .simulate(&simulation_request(1.0, 200, 150.0))
            .unwrap();

        // severity 175 -> 2 trees; 2 * 0.5%/km² = 1%; floor(200 * 0.99) = 198
        assert_eq!(record.trees_needed, 2);
        assert!((record.projected_reduction - 1.0).abs() < 1e-9);
        assert_eq!(record.projected_aqi, 198);
        assert!(!record.density_limited);
        assert_eq!(record.tree_placements.len(), 2);
        assert!(record.id.starts_with("sim_"));
        assert_eq!(record.current_aqi, 200);
        assert_eq!(record.area, 1.0);
    }

    #[test]
    fn simulate_rejects_non_positive_area() {
        let mut engine = Engine::from_seed(1);
        let err = engine
            .simulate(&simulation_request(0.0, 200, 150.0))
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidArea(0.0));
        assert_eq!(err.to_string(), "Area must be positive");
    }

    #[test]
    fn simulate_rejects_aqi_off_scale() {
        let mut engine = Engine::from_seed(1);
        for aqi in [-1, 501] {
            let err = engine
                .simulate(&simulation_request(1.0, aqi, 100.0))
                .unwrap_err();
            assert_eq!(err, EngineError::AqiOutOfRange(aqi));
            assert_eq!(err.to_string(), "AQI must be between 0 and 500");
        }
    }

    #[test]
    fn simulate_flags_density_limited_plans() {
        let mut engine = Engine::from_seed(1);
        // trunc(0.005 * 100) = 0: demand is capped below the computed need
        let record = engine
            .simulate(&simulation_request(0.005, 500, 500.0))
            .unwrap();
        assert!(record.density_limited);
        assert_eq!(record.trees_needed, 1);
    }

    #[test]
    fn identical_seeds_reproduce_identical_simulations() {
        let run = || {
            let mut engine = Engine::from_seed(7);
            engine
                .simulate(&simulation_request(4.0, 320, 210.0))
                .unwrap()
        };
        let (a, b) = (run(), run());
        assert_eq!(a.id, b.id);
        assert_eq!(a.tree_placements, b.tree_placements);
    }

    #[test]
    fn predict_accepts_a_near_future_date() {
        let mut engine = Engine::from_seed(2);
        let request = PredictionRequest {
            location: "New Delhi, India".to_string(),
            latitude: 28.6139,
            longitude: 77.209,
            prediction_date: Utc::now() + Duration::days(30),
        };
        let record = engine.predict(&request).unwrap();

        assert!(record.id.starts_with("pred_"));
        assert_eq!(record.model_version, "v1.0.0-beta");
        assert!((0..=500).contains(&record.predicted_aqi));
        assert!(record.predicted_pm25 >= 0.0);
        // 30 days out: confidence 1.0 - (30/365)*0.3, well above the floor
        assert!(record.confidence > 0.9 && record.confidence <= 1.0);
    }

    #[test]
    fn predict_rejects_past_and_far_dates() {
        let mut engine = Engine::from_seed(2);
        let mut request = PredictionRequest {
            location: "New Delhi, India".to_string(),
            latitude: 28.6139,
            longitude: 77.209,
            prediction_date: Utc::now() - Duration::days(1),
        };

        let err = engine.predict(&request).unwrap_err();
        assert_eq!(err, EngineError::DateNotInFuture);
        assert_eq!(err.to_string(), "Prediction date must be in the future");

        request.prediction_date = Utc::now() + Duration::days(400);
        let err = engine.predict(&request).unwrap_err();
        assert_eq!(err, EngineError::DateBeyondHorizon);
        assert_eq!(
            err.to_string(),
            "Prediction date cannot be more than 1 year in the future"
        );
    }

    #[test]
    fn forecast_range_validates_day_window() {
        let mut engine = Engine::from_seed(3);
        let start = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        for days in [0, 366] {
            let err = engine
                .forecast_range("Delhi", 28.6139, 77.209, start, days)
                .unwrap_err();
            assert_eq!(err, EngineError::DaysOutOfRange(days));
            assert_eq!(err.to_string(), "Days must be between 1 and 365");
        }

        let report = engine
            .forecast_range("Delhi", 28.6139, 77.209, start, 7)
            .unwrap();
        assert_eq!(report.forecast.len(), 7);
        assert_eq!(
            report.forecast[0].date,
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
        );
        assert_eq!(
            report.forecast[6].date,
            NaiveDate::from_ymd_opt(2026, 3, 8).unwrap()
        );
    }

    #[test]
    fn forecast_monthly_enforces_year_policy() {
        let mut engine = Engine::from_seed(3);

        let err = engine
            .forecast_monthly("Delhi", 28.6139, 77.209, 2025)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::UnsupportedYear {
                requested: 2025,
                supported: 2026
            }
        );
        assert_eq!(
            err.to_string(),
            "Currently only 2026 predictions are supported"
        );

        let report = engine
            .forecast_monthly("Delhi", 28.6139, 77.209, 2026)
            .unwrap();
        assert_eq!(report.year, 2026);
        assert_eq!(report.predictions.len(), 12);
        for (i, monthly) in report.predictions.iter().enumerate() {
            assert_eq!(monthly.month, i as u32 + 1);
            assert_eq!(monthly.date.day(), 15);
        }
    }

    #[test]
    fn recommend_validates_and_assembles() {
        let mut engine = Engine::from_seed(4);

        let err = engine
            .recommend("Delhi", 28.6139, 77.209, 180, -1.0)
            .unwrap_err();
        assert_eq!(err, EngineError::InvalidArea(-1.0));

        let report = engine
            .recommend("Delhi", 28.6139, 77.209, 180, 1.0)
            .unwrap();
        // pi = 90 -> severity 135 -> 2 trees; 1% reduction -> floor(180 * 0.99)
        assert!(report.id.starts_with("rec_"));
        assert_eq!(report.analysis.trees_recommended, 2);
        assert_eq!(report.analysis.projected_aqi, 178);
        assert_eq!(report.analysis.economics.estimated_cost_usd, 1000);
        assert_eq!(report.analysis.placements.len(), 2);
    }

    #[test]
    fn prediction_date_validation_is_strict() {
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();

        assert_eq!(
            validate_prediction_date(now, now),
            Err(EngineError::DateNotInFuture)
        );
        assert_eq!(
            validate_prediction_date(now - Duration::seconds(1), now),
            Err(EngineError::DateNotInFuture)
        );
        assert_eq!(validate_prediction_date(now + Duration::days(1), now), Ok(()));
        assert_eq!(
            validate_prediction_date(now + Duration::days(365), now),
            Ok(())
        );
        assert_eq!(
            validate_prediction_date(now + Duration::days(365) + Duration::seconds(1), now),
            Err(EngineError::DateBeyondHorizon)
        );
    }

    #[test]
    fn supported_year_follows_configuration() {
        let config = EngineConfig {
            supported_year: 2030,
            ..EngineConfig::default()
        };
        let mut engine = Engine::with_strategy(config, BaselineModel, 1);

        assert!(engine.forecast_monthly("Delhi", 28.6139, 77.209, 2030).is_ok());
        let err = engine
            .forecast_monthly("Delhi", 28.6139, 77.209, 2026)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Currently only 2030 predictions are supported"
        );
    }
}
