//! Error Handling Example for the airshed engine
//!
//! This example demonstrates the engine's rejection taxonomy: every invalid
//! request fails synchronously with a human-readable reason, and nothing is
//! partially computed.
//!
//! Run with: cargo run --example error_handling

use airshed::{Engine, EngineError, PredictionRequest, SimulationRequest};
use chrono::{Duration, Utc};

/// Statistics for rejection tracking
#[derive(Debug, Default)]
struct RejectionStats {
    total_requests: u32,
    accepted: u32,
    invalid_area: u32,
    aqi_out_of_range: u32,
    date_rejections: u32,
    days_out_of_range: u32,
    unsupported_year: u32,
    other: u32,
}

impl RejectionStats {
    fn record_success(&mut self) {
        self.total_requests += 1;
        self.accepted += 1;
    }

    fn record_error(&mut self, error: &EngineError) {
        self.total_requests += 1;
        match error {
            EngineError::InvalidArea(_) => self.invalid_area += 1,
            EngineError::AqiOutOfRange(_) => self.aqi_out_of_range += 1,
            EngineError::DateNotInFuture | EngineError::DateBeyondHorizon => {
                self.date_rejections += 1;
            }
            EngineError::DaysOutOfRange(_) => self.days_out_of_range += 1,
            EngineError::UnsupportedYear { .. } => self.unsupported_year += 1,
            _ => self.other += 1,
        }
    }

    fn acceptance_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            (f64::from(self.accepted) / f64::from(self.total_requests)) * 100.0
        }
    }
}

fn simulation(area: f64, current_aqi: i32) -> SimulationRequest {
    SimulationRequest {
        location: "New Delhi, India".to_string(),
        latitude: 28.6139,
        longitude: 77.2090,
        area,
        current_aqi,
        current_pi: f64::from(current_aqi) * 0.5,
    }
}

fn main() {
    println!("🚦 airshed - Error Handling Example\n");

    let mut engine = Engine::from_seed(7);
    let mut stats = RejectionStats::default();

    // Simulation requests, valid and invalid
    println!("Simulation requests");
    println!("===================");
    for request in [
        simulation(1.0, 200),  // valid
        simulation(0.0, 200),  // area must be positive
        simulation(-4.0, 150), // negative area
        simulation(2.5, 501),  // AQI off scale
        simulation(2.5, -10),  // negative AQI
    ] {
        match engine.simulate(&request) {
            Ok(record) => {
                stats.record_success();
                println!(
                    "✅ area {:>4} km², AQI {:>3} -> {} trees",
                    request.area, request.current_aqi, record.trees_needed
                );
            }
            Err(e) => {
                stats.record_error(&e);
                println!(
                    "❌ area {:>4} km², AQI {:>3} -> {}",
                    request.area, request.current_aqi, e
                );
            }
        }
    }
    println!();

    // Prediction requests around the date window
    println!("Prediction requests");
    println!("===================");
    let offsets = [
        ("tomorrow", Duration::days(1)),
        ("yesterday", Duration::days(-1)),
        ("in six months", Duration::days(182)),
        ("in two years", Duration::days(730)),
    ];
    for (label, offset) in offsets {
        let request = PredictionRequest {
            location: "New Delhi, India".to_string(),
            latitude: 28.6139,
            longitude: 77.2090,
            prediction_date: Utc::now() + offset,
        };
        match engine.predict(&request) {
            Ok(record) => {
                stats.record_success();
                println!(
                    "✅ {label:>13} -> AQI {} (confidence {})",
                    record.predicted_aqi, record.confidence
                );
            }
            Err(e) => {
                stats.record_error(&e);
                println!("❌ {label:>13} -> {e}");
            }
        }
    }
    println!();

    // Forecast windows
    println!("Forecast requests");
    println!("=================");
    let start = Utc::now().date_naive();
    for days in [7, 0, 366] {
        match engine.forecast_range("New Delhi, India", 28.6139, 77.2090, start, days) {
            Ok(report) => {
                stats.record_success();
                println!("✅ {days:>3} day(s) -> {} points", report.forecast.len());
            }
            Err(e) => {
                stats.record_error(&e);
                println!("❌ {days:>3} day(s) -> {e}");
            }
        }
    }
    for year in [2026, 1999] {
        match engine.forecast_monthly("New Delhi, India", 28.6139, 77.2090, year) {
            Ok(report) => {
                stats.record_success();
                println!("✅ year {year} -> {} months", report.predictions.len());
            }
            Err(e) => {
                stats.record_error(&e);
                println!("❌ year {year} -> {e}");
            }
        }
    }
    println!();

    // Summary
    println!("Summary");
    println!("=======");
    println!("{stats:#?}");
    println!("Acceptance rate: {:.1}%", stats.acceptance_rate());
}
