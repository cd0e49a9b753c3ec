mod economics;
mod impact;
mod scoring;
mod site;
mod sizing;
mod structures;

pub use economics::CostBenefit;
pub use impact::{EnvironmentalImpact, SustainabilityRating};
pub use scoring::{FeasibilityCategory, ScoreBreakdown};
pub use sizing::{PitDimensions, RecommendedDimensions, TrenchDimensions};
pub use structures::{StructureKind, StructureRecommendation};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::domain::AssessmentInput;
use crate::config::EngineParameters;
use site::SiteProfile;

/// Stateless evaluator turning one site assessment into one feasibility report.
///
/// The engine performs no I/O and holds no mutable state, so a single instance can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct FeasibilityEngine {
    params: EngineParameters,
}

impl FeasibilityEngine {
    pub fn new(params: EngineParameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &EngineParameters {
        &self.params
    }

    /// Compute a report stamped with the current time.
    pub fn compute(&self, input: &AssessmentInput) -> ReportOutput {
        self.compute_at(input, Utc::now())
    }

    /// Compute a report with a caller-supplied timestamp; identical inputs give identical reports.
    pub fn compute_at(&self, input: &AssessmentInput, generated_at: DateTime<Utc>) -> ReportOutput {
        let params = &self.params;
        let site = SiteProfile::resolve(input, params);

        let litres_per_year = scoring::annual_runoff_litres(&site, params.runoff_coefficient);
        let breakdown = scoring::score_site(&site);
        let feasibility_score = breakdown.composite();
        let category = FeasibilityCategory::from_score(feasibility_score);
        let recommended_structures = structures::recommend(&site);
        let recommended_dimensions = sizing::size_structures(
            litres_per_year,
            params.recharge_fraction,
            params.pit_efficiency,
        );
        let cost_benefit =
            economics::project_costs(&site, litres_per_year, feasibility_score, params);
        let environmental_impact = impact::project_impact(
            litres_per_year,
            feasibility_score,
            site.dwellers,
            params.recharge_fraction,
        );

        ReportOutput {
            litres_per_year,
            avg_rainfall_mm: site.rainfall_mm,
            feasibility_score,
            category,
            breakdown,
            recommended_structures,
            recommended_dimensions,
            cost_benefit,
            environmental_impact,
            generated_at_iso: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Compute a report with the calibrated engine parameters.
pub fn compute_feasibility(input: &AssessmentInput) -> ReportOutput {
    FeasibilityEngine::default().compute(input)
}

/// Feasibility report for a single assessment. Recomputed in full whenever the input changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutput {
    #[serde(rename = "litres_per_year")]
    pub litres_per_year: f64,
    #[serde(rename = "avgRainfall_mm")]
    pub avg_rainfall_mm: f64,
    pub feasibility_score: u8,
    pub category: FeasibilityCategory,
    pub breakdown: ScoreBreakdown,
    pub recommended_structures: Vec<StructureRecommendation>,
    pub recommended_dimensions: RecommendedDimensions,
    pub cost_benefit: CostBenefit,
    pub environmental_impact: EnvironmentalImpact,
    #[serde(rename = "generatedAtISO")]
    pub generated_at_iso: String,
}

impl ReportOutput {
    /// Highest-priority recommendation; every report carries at least one.
    pub fn primary_structure(&self) -> Option<&StructureRecommendation> {
        self.recommended_structures.first()
    }

    /// The first on-site structure, skipping the community-recharge override.
    pub fn on_site_structure(&self) -> Option<&StructureRecommendation> {
        self.recommended_structures
            .iter()
            .find(|rec| rec.kind != StructureKind::CommunityRecharge)
    }
}

/// Round half away from zero to `places` decimals.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
