//! Forecast Report Example for the airshed engine
//!
//! Prints a one-week and a monthly forecast for a location. Set
//! `RUST_LOG=debug` to watch the orchestrator's tracing output.
//!
//! Run with: RUST_LOG=debug cargo run --example forecast_report

use airshed::Engine;
use chrono::Utc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("📈 airshed - Forecast Report Example\n");

    let mut engine = Engine::from_seed(2026);
    let (location, lat, lon) = ("New Delhi, India", 28.6139, 77.2090);

    // One week, day by day
    println!("Next 7 days for {location}");
    println!("===========================");
    let report = engine.forecast_range(location, lat, lon, Utc::now().date_naive(), 7)?;
    for point in &report.forecast {
        println!(
            "{}  AQI {:>3}  PM2.5 {:>6} µg/m³  confidence {}",
            point.date, point.predicted_aqi, point.predicted_pm25, point.confidence
        );
    }
    println!();

    // The supported forecast year, month by month
    let year = engine.config().supported_year;
    println!("Monthly outlook for {year}");
    println!("========================");
    let yearly = engine.forecast_monthly(location, lat, lon, year)?;
    for monthly in &yearly.predictions {
        let bar = "█".repeat((monthly.predicted_aqi / 25).max(1) as usize);
        println!(
            "{:>2}/{}  AQI {:>3}  {}",
            monthly.month, monthly.year, monthly.predicted_aqi, bar
        );
    }

    Ok(())
}
