//! Pollution forecasting: pluggable prediction strategy, seasonal
//! adjustment, confidence decay, day-by-day and monthly series
//!
//! The arithmetic of [`BaselineModel`] is a deterministic-but-stochastic
//! stand-in for a trained model. Production deployments substitute their own
//! [`ForecastStrategy`]; the seasonal and confidence shaping applied around
//! the strategy stays the same.

use chrono::{Datelike, Duration, NaiveDate};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::round2;

/// Multiplier applied to winter-month predictions (Nov-Feb).
const WINTER_FACTOR: f64 = 1.3;
/// Multiplier applied to monsoon-month predictions (Jun-Sep).
const MONSOON_FACTOR: f64 = 0.7;
/// Smallest confidence the horizon decay can reach.
const CONFIDENCE_FLOOR: f64 = 0.5;
/// Confidence lost over a full year of horizon.
const CONFIDENCE_DECAY_PER_YEAR: f64 = 0.3;
/// Ceiling for predicted AQI and PM2.5 values.
const PREDICTION_CEILING: f64 = 500.0;

/// Raw model output before seasonal and confidence shaping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasePrediction {
    pub aqi: f64,
    pub pm25: f64,
}

/// A point-prediction model.
///
/// Implementations draw all randomness from the supplied generator so that
/// identical seeds reproduce identical forecasts.
pub trait ForecastStrategy {
    /// Predict base AQI and PM2.5 for `target`, before seasonal adjustment.
    fn predict(&mut self, rng: &mut dyn RngCore, target: NaiveDate) -> BasePrediction;

    /// Version tag reported on assembled prediction records.
    fn version(&self) -> &'static str;
}

/// Baseline strategy standing in for a trained model: draws a base AQI
/// uniformly in [50, 200] and derives PM2.5 as half of it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaselineModel;

impl ForecastStrategy for BaselineModel {
    fn predict(&mut self, rng: &mut dyn RngCore, _target: NaiveDate) -> BasePrediction {
        let aqi = f64::from(rng.gen_range(50..=200));
        BasePrediction {
            aqi,
            pm25: 0.5 * aqi,
        }
    }

    fn version(&self) -> &'static str {
        "v1.0.0-beta"
    }
}

/// One forecasted day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    /// Predicted AQI, clamped to [0, 500]
    #[serde(rename = "predictedAQI")]
    pub predicted_aqi: i32,
    /// Predicted PM2.5 in µg/m³, clamped to [0, 500], 2 decimal places
    #[serde(rename = "predictedPM25")]
    pub predicted_pm25: f64,
    /// Model confidence in [0.5, 1.0], non-increasing with horizon
    pub confidence: f64,
}

/// Seasonal multiplier for a calendar month: winter amplification,
/// monsoon damping, neutral otherwise.
#[must_use]
pub fn seasonal_factor(month: u32) -> f64 {
    match month {
        11 | 12 | 1 | 2 => WINTER_FACTOR,
        6..=9 => MONSOON_FACTOR,
        _ => 1.0,
    }
}

/// Confidence for a horizon of `days_ahead` whole days: linear decay from
/// 1.0, floored at 0.5.
#[must_use]
pub fn confidence_for(days_ahead: i64) -> f64 {
    (1.0 - (days_ahead as f64 / 365.0) * CONFIDENCE_DECAY_PER_YEAR).clamp(CONFIDENCE_FLOOR, 1.0)
}

/// Composes a [`ForecastStrategy`] with seasonal adjustment and confidence
/// decay into point, range and monthly forecasts.
#[derive(Debug, Clone, Default)]
pub struct Forecaster<S = BaselineModel> {
    strategy: S,
}

impl Forecaster<BaselineModel> {
    /// Forecaster using the baseline strategy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategy: BaselineModel,
        }
    }
}

impl<S: ForecastStrategy> Forecaster<S> {
    /// Forecaster over a custom prediction model.
    pub fn with_strategy(strategy: S) -> Self {
        Self { strategy }
    }

    #[must_use]
    pub fn model_version(&self) -> &'static str {
        self.strategy.version()
    }

    /// Predict a single future day.
    ///
    /// Draws the base prediction from the strategy, applies the seasonal
    /// factor for the target month, clamps AQI and PM2.5 onto the scale and
    /// derives confidence from the `now -> target` horizon. Rejecting past
    /// targets is the orchestrator's job, not this function's.
    pub fn predict_point(
        &mut self,
        rng: &mut dyn RngCore,
        now: NaiveDate,
        target: NaiveDate,
    ) -> ForecastPoint {
        let base = self.strategy.predict(rng, target);
        let factor = seasonal_factor(target.month());

        let predicted_aqi = ((base.aqi * factor) as i32).clamp(0, PREDICTION_CEILING as i32);
        let predicted_pm25 = (base.pm25 * factor).clamp(0.0, PREDICTION_CEILING);
        let days_ahead = (target - now).num_days();

        ForecastPoint {
            date: target,
            predicted_aqi,
            predicted_pm25: round2(predicted_pm25),
            confidence: round2(confidence_for(days_ahead)),
        }
    }

    /// Lazy day-by-day series of `days` points at `start+1 ..= start+days`,
    /// strictly chronological. One strategy draw per consumed point, so an
    /// unconsumed tail costs nothing; re-seeding the generator restarts the
    /// exact same sequence.
    pub fn predict_series<'a, R: RngCore>(
        &'a mut self,
        rng: &'a mut R,
        start: NaiveDate,
        days: u32,
    ) -> ForecastSeries<'a, S, R> {
        ForecastSeries {
            forecaster: self,
            rng,
            start,
            emitted: 0,
            days,
        }
    }

    /// Twelve monthly points for `year`, one per month at day 15.
    ///
    /// Year policy enforcement lives in the orchestrator.
    pub fn predict_monthly(
        &mut self,
        rng: &mut dyn RngCore,
        now: NaiveDate,
        year: i32,
    ) -> Vec<ForecastPoint> {
        (1..=12)
            .map(|month| {
                let target = NaiveDate::from_ymd_opt(year, month, 15)
                    .expect("day 15 exists in every month");
                self.predict_point(rng, now, target)
            })
            .collect()
    }
}

/// Iterator produced by [`Forecaster::predict_series`].
pub struct ForecastSeries<'a, S, R> {
    forecaster: &'a mut Forecaster<S>,
    rng: &'a mut R,
    start: NaiveDate,
    emitted: u32,
    days: u32,
}

impl<S: ForecastStrategy, R: RngCore> Iterator for ForecastSeries<'_, S, R> {
    type Item = ForecastPoint;

    fn next(&mut self) -> Option<ForecastPoint> {
        if self.emitted >= self.days {
            return None;
        }
        self.emitted += 1;
        let target = self.start + Duration::days(i64::from(self.emitted));
        Some(
            self.forecaster
                .predict_point(&mut *self.rng, self.start, target),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.days - self.emitted) as usize;
        (remaining, Some(remaining))
    }
}

impl<S: ForecastStrategy, R: RngCore> ExactSizeIterator for ForecastSeries<'_, S, R> {}
