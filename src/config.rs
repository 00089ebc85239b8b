//! Engine tuning constants
//!
//! All tunable constants of the scoring and remediation formulas live here
//! so deployments can adjust them without touching the algorithms.

use serde::{Deserialize, Serialize};

/// Tuning constants injected into [`crate::Engine`].
///
/// Partial configuration files are accepted; missing fields fall back to
/// the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Site normalization constant subtracted from the pollution index
    /// (elevation/altitude proxy)
    pub baseline: f64,
    /// Severity-units one bio-urban tree cleans per day per km²
    pub tree_effectiveness: f64,
    /// Density cap: maximum trees per square kilometre
    pub max_trees_per_km2: f64,
    /// Percentage of AQI one tree removes over one square kilometre
    pub reduction_per_tree_pct: f64,
    /// Hard cap on total projected reduction, in percent
    pub reduction_cap_pct: f64,
    /// Installed cost of one bio-urban tree, in USD
    pub cost_per_tree_usd: u32,
    /// Annual maintenance as a fraction of installed cost
    pub annual_maintenance_rate: f64,
    /// Trees a crew can install per day
    pub trees_installed_per_day: u32,
    /// The only year the yearly forecast currently supports
    pub supported_year: i32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            baseline: 100.0,
            tree_effectiveness: 100.0,
            max_trees_per_km2: 100.0,
            reduction_per_tree_pct: 0.5,
            reduction_cap_pct: 70.0,
            cost_per_tree_usd: 500,
            annual_maintenance_rate: 0.10,
            trees_installed_per_day: 10,
            supported_year: 2026,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = EngineConfig::default();
        assert_eq!(config.baseline, 100.0);
        assert_eq!(config.tree_effectiveness, 100.0);
        assert_eq!(config.max_trees_per_km2, 100.0);
        assert_eq!(config.reduction_per_tree_pct, 0.5);
        assert_eq!(config.reduction_cap_pct, 70.0);
        assert_eq!(config.cost_per_tree_usd, 500);
        assert_eq!(config.annual_maintenance_rate, 0.10);
        assert_eq!(config.trees_installed_per_day, 10);
        assert_eq!(config.supported_year, 2026);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"supportedYear": 2027, "costPerTreeUsd": 650}"#)
                .expect("partial config should deserialize");
        assert_eq!(config.supported_year, 2027);
        assert_eq!(config.cost_per_tree_usd, 650);
        assert_eq!(config.baseline, 100.0);
        assert_eq!(config.reduction_cap_pct, 70.0);
    }
}
