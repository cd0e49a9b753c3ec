use serde::{Deserialize, Serialize};

use super::round_to;
use super::site::SiteProfile;

const ROOF_WEIGHT: f64 = 0.30;
const OPEN_SPACE_WEIGHT: f64 = 0.20;
const RAINFALL_WEIGHT: f64 = 0.20;
const GROUNDWATER_WEIGHT: f64 = 0.15;
const SOIL_WEIGHT: f64 = 0.15;

/// Groundwater deeper than this contributes nothing to the score.
const GW_REFERENCE_DEPTH_M: f64 = 50.0;

/// The five normalised sub-scores behind the composite feasibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub roof: u8,
    pub open_space: u8,
    pub rainfall: u8,
    pub groundwater: u8,
    pub soil: u8,
}

impl ScoreBreakdown {
    pub fn composite(&self) -> u8 {
        let weighted = ROOF_WEIGHT * f64::from(self.roof)
            + OPEN_SPACE_WEIGHT * f64::from(self.open_space)
            + RAINFALL_WEIGHT * f64::from(self.rainfall)
            + GROUNDWATER_WEIGHT * f64::from(self.groundwater)
            + SOIL_WEIGHT * f64::from(self.soil);
        weighted.round().clamp(0.0, 100.0) as u8
    }
}

/// Feasibility band derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeasibilityCategory {
    High,
    Moderate,
    Low,
}

impl FeasibilityCategory {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => FeasibilityCategory::High,
            50..=79 => FeasibilityCategory::Moderate,
            _ => FeasibilityCategory::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeasibilityCategory::High => "High",
            FeasibilityCategory::Moderate => "Moderate",
            FeasibilityCategory::Low => "Low",
        }
    }
}

/// Annual harvestable runoff in litres (1 mm over 1 m² is one litre).
pub(crate) fn annual_runoff_litres(site: &SiteProfile, runoff_coefficient: f64) -> f64 {
    round_to(site.roof_area_m2 * site.rainfall_mm * runoff_coefficient, 0)
}

/// Linear map of `value` from `[floor, ceiling]` onto `0..=100`, clamped.
pub(crate) fn normalize(value: f64, floor: f64, ceiling: f64) -> u8 {
    let scaled = ((value - floor) / (ceiling - floor) * 100.0).round();
    scaled.clamp(0.0, 100.0) as u8
}

pub(crate) fn score_site(site: &SiteProfile) -> ScoreBreakdown {
    let roof_raw = normalize(site.roof_area_m2, 10.0, 200.0);
    let factor = site
        .roof_material
        .map(|material| material.score_factor())
        .unwrap_or(1.0);
    let roof = (f64::from(roof_raw) * factor).round().clamp(0.0, 100.0) as u8;

    let gw_headroom = (GW_REFERENCE_DEPTH_M - site.gw_depth_m).max(0.0);

    ScoreBreakdown {
        roof,
        open_space: normalize(site.open_space_m2, 0.0, 50.0),
        rainfall: normalize(site.rainfall_mm, 200.0, 2000.0),
        groundwater: normalize(gw_headroom, 0.0, GW_REFERENCE_DEPTH_M),
        soil: normalize(site.soil_perm, 10.0, 100.0),
    }
}
