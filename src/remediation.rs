//! Remediation planning: bio-urban tree demand, projected reduction and
//! spatial placement
//!
//! Bio-urban trees are assumed 10x more effective than conventional trees;
//! one unit cleans [`EngineConfig::tree_effectiveness`] severity-units per
//! day over a square kilometre.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::EngineConfig;
use crate::score::{AqiCategory, categorize};
use crate::{round2, round6};

/// Kilometres per degree of latitude (local flat-plane approximation).
const KM_PER_DEGREE: f64 = 111.0;
/// Window before plantings measurably affect the AQI.
const EFFECTIVE_AFTER: &str = "3-6 months";
/// Time to full canopy effectiveness.
const FULL_MATURITY: &str = "1-2 years";
/// Rough residents served per square kilometre of remediated area.
const PEOPLE_PER_KM2: f64 = 10_000.0;

/// One grid cell's assigned location and tree count. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreePlacement {
    /// Degrees north, 6 decimal places
    pub latitude: f64,
    /// Degrees east, 6 decimal places
    pub longitude: f64,
    pub tree_count: u32,
}

/// Outcome of a remediation computation, before orchestrator assembly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemediationPlan {
    pub trees_needed: u32,
    /// Projected AQI reduction in percent, capped at 70
    pub projected_reduction: f64,
    #[serde(rename = "projectedAQI")]
    pub projected_aqi: i32,
    /// True when the density cap truncated the computed tree demand, so the
    /// plan achieves less than the theoretically required reduction
    pub density_limited: bool,
    pub placements: Vec<TreePlacement>,
}

/// Cost projections for a recommendation, in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub estimated_cost_usd: u64,
    pub cost_per_tree_usd: u32,
    pub annual_maintenance_usd: f64,
}

/// Installation and effectiveness timeline for a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationTimeline {
    pub installation_days: u32,
    pub effective_after: String,
    pub full_maturity: String,
}

/// Full planting recommendation: plan analysis plus the cost and timeline
/// derivations layered on top of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "currentAQI")]
    pub current_aqi: i32,
    pub current_category: AqiCategory,
    pub trees_recommended: u32,
    pub projected_reduction: f64,
    #[serde(rename = "projectedAQI")]
    pub projected_aqi: i32,
    pub projected_category: AqiCategory,
    pub density_limited: bool,
    pub placements: Vec<TreePlacement>,
    pub economics: CostEstimate,
    pub timeline: InstallationTimeline,
    pub benefits: Vec<String>,
}

/// Number of bio-urban trees needed to work `area_km2` at the given severity.
///
/// Severity is the mean of the pollution index and the AQI; demand is
/// `ceil(severity * area / effectiveness)`, clamped to at least one tree and
/// at most [`EngineConfig::max_trees_per_km2`] per km². The second return
/// value reports whether the density cap truncated the demand.
#[must_use]
pub fn units_needed(
    current_aqi: i32,
    current_pi: f64,
    area_km2: f64,
    config: &EngineConfig,
) -> (u32, bool) {
    let severity = (current_pi + f64::from(current_aqi)) / 2.0;
    let raw = ((severity * area_km2) / config.tree_effectiveness).ceil() as i64;
    let cap = (area_km2 * config.max_trees_per_km2) as i64;

    let density_limited = raw > cap;
    if density_limited {
        warn!(
            needed = raw,
            cap, "tree demand exceeds the density cap; plan will under-provision"
        );
    }

    (raw.min(cap).max(1) as u32, density_limited)
}

/// Projected reduction percentage and post-remediation AQI for `units` trees.
///
/// Each tree removes [`EngineConfig::reduction_per_tree_pct`] percent per
/// square kilometre; the total is capped at
/// [`EngineConfig::reduction_cap_pct`].
#[must_use]
pub fn projected_reduction(
    units: u32,
    current_aqi: i32,
    area_km2: f64,
    config: &EngineConfig,
) -> (f64, i32) {
    let per_unit = if area_km2 > 0.0 {
        config.reduction_per_tree_pct / area_km2
    } else {
        config.reduction_per_tree_pct
    };
    let total = (f64::from(units) * per_unit).min(config.reduction_cap_pct);
    let projected_aqi = ((f64::from(current_aqi) * (1.0 - total / 100.0)) as i32).max(0);

    (round2(total), projected_aqi)
}

/// Strategic placements for `units` trees around `(latitude, longitude)`.
///
/// Lays a `ceil(sqrt(units))`-sided grid over the area (111 km per degree,
/// flat-plane approximation), jitters each cell by up to a quarter cell on
/// both axes to avoid a perfect grid, and truncates the row-major traversal
/// after `units` cells. One tree per placement. Must not fail if the grid is
/// smaller than `units`; that bound is defensive only.
pub fn place_units(
    rng: &mut dyn RngCore,
    latitude: f64,
    longitude: f64,
    units: u32,
    area_km2: f64,
) -> Vec<TreePlacement> {
    let grid_size = f64::from(units).sqrt().ceil() as u32;
    if grid_size == 0 {
        return Vec::new();
    }
    let offset = area_km2.sqrt() / KM_PER_DEGREE / f64::from(grid_size);
    let jitter = offset / 4.0;
    let half_grid = f64::from(grid_size) / 2.0;

    let mut placements = Vec::with_capacity(units as usize);
    'grid: for i in 0..grid_size {
        for j in 0..grid_size {
            if placements.len() >= units as usize {
                break 'grid;
            }
            let lat_offset = (f64::from(i) - half_grid) * offset + rng.gen_range(-jitter..=jitter);
            let lon_offset = (f64::from(j) - half_grid) * offset + rng.gen_range(-jitter..=jitter);
            placements.push(TreePlacement {
                latitude: round6(latitude + lat_offset),
                longitude: round6(longitude + lon_offset),
                tree_count: 1,
            });
        }
    }
    placements
}

/// Full remediation plan: demand, projected reduction, placements.
pub fn build_plan(
    rng: &mut dyn RngCore,
    current_aqi: i32,
    current_pi: f64,
    latitude: f64,
    longitude: f64,
    area_km2: f64,
    config: &EngineConfig,
) -> RemediationPlan {
    let (trees_needed, density_limited) = units_needed(current_aqi, current_pi, area_km2, config);
    let (projected_reduction, projected_aqi) =
        projected_reduction(trees_needed, current_aqi, area_km2, config);
    let placements = place_units(rng, latitude, longitude, trees_needed, area_km2);

    RemediationPlan {
        trees_needed,
        projected_reduction,
        projected_aqi,
        density_limited,
        placements,
    }
}

/// Planting recommendation for a site where only the AQI is known.
///
/// Derives a simplified pollution index (`aqi * 0.5`), builds the plan and
/// attaches cost, timeline and benefit projections - pure functions of the
/// plan and configuration.
pub fn build_recommendation(
    rng: &mut dyn RngCore,
    current_aqi: i32,
    latitude: f64,
    longitude: f64,
    area_km2: f64,
    config: &EngineConfig,
) -> Recommendation {
    // Simplified PI when full readings are unavailable.
    let current_pi = f64::from(current_aqi) * 0.5;
    let plan = build_plan(
        rng,
        current_aqi,
        current_pi,
        latitude,
        longitude,
        area_km2,
        config,
    );

    let estimated_cost = u64::from(plan.trees_needed) * u64::from(config.cost_per_tree_usd);
    let annual_maintenance = round2(estimated_cost as f64 * config.annual_maintenance_rate);
    let installation_days = plan.trees_needed.div_ceil(config.trees_installed_per_day);

    Recommendation {
        current_aqi,
        current_category: categorize(current_aqi),
        trees_recommended: plan.trees_needed,
        projected_reduction: plan.projected_reduction,
        projected_aqi: plan.projected_aqi,
        projected_category: categorize(plan.projected_aqi),
        density_limited: plan.density_limited,
        benefits: vec![
            format!(
                "Reduce AQI from {current_aqi} to ~{}",
                plan.projected_aqi
            ),
            "10x more effective than traditional trees".to_string(),
            format!(
                "Clean air for ~{} people",
                (area_km2 * PEOPLE_PER_KM2) as i64
            ),
            "Minimal water and maintenance required".to_string(),
        ],
        placements: plan.placements,
        economics: CostEstimate {
            estimated_cost_usd: estimated_cost,
            cost_per_tree_usd: config.cost_per_tree_usd,
            annual_maintenance_usd: annual_maintenance,
        },
        timeline: InstallationTimeline {
            installation_days,
            effective_after: EFFECTIVE_AFTER.to_string(),
            full_maturity: FULL_MATURITY.to_string(),
        },
    }
}
