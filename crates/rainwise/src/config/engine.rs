use serde::{Deserialize, Serialize};

/// Coefficients and fallbacks used by the feasibility engine.
///
/// `Default` yields the calibrated values; alternative parameter sets are only
/// meant for what-if analysis and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineParameters {
    /// Share of rainfall on the roof that becomes collectible runoff.
    pub runoff_coefficient: f64,
    /// Share of annual runoff targeted for recharge (sizing and savings).
    pub recharge_fraction: f64,
    /// Usable fraction of a recharge pit's nominal volume.
    pub pit_efficiency: f64,
    pub default_rainfall_mm: f64,
    pub default_gw_depth_m: f64,
    pub default_soil_permeability: f64,
    /// Water tariff in currency units per kilolitre.
    pub tariff_per_kl: f64,
    pub subsidy_rate: f64,
    pub maintenance_rate: f64,
    pub lifespan_years: u8,
}

impl Default for EngineParameters {
    fn default() -> Self {
        Self {
            runoff_coefficient: 0.85,
            recharge_fraction: 0.5,
            pit_efficiency: 0.6,
            default_rainfall_mm: 800.0,
            default_gw_depth_m: 15.0,
            default_soil_permeability: 40.0,
            tariff_per_kl: 35.0,
            subsidy_rate: 0.30,
            maintenance_rate: 0.045,
            lifespan_years: 15,
        }
    }
}
