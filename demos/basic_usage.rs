//! Basic Usage Example for the airshed engine
//!
//! This example demonstrates the core functionality of the airshed library:
//! scoring a raw reading, simulating a bio-urban tree planting and asking for
//! a planting recommendation.
//!
//! Run with: cargo run --example basic_usage

use airshed::{Engine, Reading, SimulationRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🌳 airshed - Basic Usage Example\n");

    // A fixed seed makes every run of this walkthrough identical.
    let mut engine = Engine::from_seed(42);

    // Example 1: Score a raw reading
    println!("🌫️  Example 1: Score a Raw Reading");
    println!("=================================");

    let reading = Reading {
        location: "New Delhi, India".to_string(),
        latitude: 28.6139,
        longitude: 77.2090,
        pm25: 92.5,
        pm10: 138.75,
        no2: 44.0,
        o3: 31.0,
        co: 2.4,
        temperature: 31.0,
        humidity: 48.0,
    };

    let score = engine.score(&reading)?;
    println!("Location:        {}", reading.location);
    println!("PM2.5:           {} µg/m³", reading.pm25);
    println!("AQI:             {}", score.aqi);
    println!("Pollution index: {}", score.pollution_index);
    println!("Category:        {}\n", score.category);

    // Example 2: Simulate a planting over one square kilometre
    println!("🌲 Example 2: Remediation Simulation");
    println!("====================================");

    let record = engine.simulate(&SimulationRequest {
        location: reading.location.clone(),
        latitude: reading.latitude,
        longitude: reading.longitude,
        area: 1.0,
        current_aqi: 200,
        current_pi: 150.0,
    })?;

    println!("Simulation id:       {}", record.id);
    println!("Trees needed:        {}", record.trees_needed);
    println!("Projected reduction: {}%", record.projected_reduction);
    println!(
        "Projected AQI:       {} (from {})",
        record.projected_aqi, record.current_aqi
    );
    for placement in &record.tree_placements {
        println!(
            "  · {} tree(s) at ({}, {})",
            placement.tree_count, placement.latitude, placement.longitude
        );
    }
    println!();

    // Example 3: Planting recommendation when only the AQI is known
    println!("📋 Example 3: Planting Recommendation");
    println!("=====================================");

    let report = engine.recommend(&reading.location, reading.latitude, reading.longitude, 180, 1.0)?;
    let analysis = &report.analysis;

    println!("Current:   AQI {} ({})", analysis.current_aqi, analysis.current_category);
    println!("Projected: AQI {} ({})", analysis.projected_aqi, analysis.projected_category);
    println!("Trees:     {}", analysis.trees_recommended);
    println!(
        "Cost:      ${} (+${}/year maintenance)",
        analysis.economics.estimated_cost_usd, analysis.economics.annual_maintenance_usd
    );
    println!(
        "Timeline:  {} day(s) install, effective after {}",
        analysis.timeline.installation_days, analysis.timeline.effective_after
    );
    for benefit in &analysis.benefits {
        println!("  ✅ {benefit}");
    }

    Ok(())
}
