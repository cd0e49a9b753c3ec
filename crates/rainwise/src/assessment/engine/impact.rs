use serde::{Deserialize, Serialize};

use super::round_to;

/// kg CO₂ per kL for tanker-delivered water.
const TANKER_CO2_PER_KL: f64 = 0.6;
/// kg CO₂ per kL for pumped groundwater.
const PUMPING_CO2_PER_KL: f64 = 0.3;
/// Share of offset supply assumed to be tanker delivery; the rest is pumping.
const TANKER_SHARE: f64 = 0.5;
const TANKER_CAPACITY_L: f64 = 6_000.0;
const MAX_DEPENDENCY_REDUCTION_PCT: f64 = 30.0;
const PUMPING_KWH_PER_KL: f64 = 0.6;
/// One household-year of demand: 135 L per person per day, four people.
const HOUSEHOLD_ANNUAL_DEMAND_L: f64 = 135.0 * 4.0 * 365.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SustainabilityRating {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl SustainabilityRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => SustainabilityRating::Excellent,
            60..=79 => SustainabilityRating::Good,
            40..=59 => SustainabilityRating::Fair,
            _ => SustainabilityRating::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SustainabilityRating::Excellent => "Excellent",
            SustainabilityRating::Good => "Good",
            SustainabilityRating::Fair => "Fair",
            SustainabilityRating::NeedsImprovement => "Needs Improvement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    #[serde(rename = "co2Saved_kg")]
    pub co2_saved_kg: f64,
    #[serde(rename = "groundwaterRecharge_L")]
    pub groundwater_recharge_l: f64,
    pub tanker_trips_avoided: f64,
    pub sustainability_rating: SustainabilityRating,
    pub groundwater_dependency_reduction_pct: f64,
    /// `None` when the household size is unknown or zero.
    pub per_capita_water_saved: Option<f64>,
    pub households_equivalent_served: f64,
    #[serde(rename = "energySaved_kWh")]
    pub energy_saved_kwh: f64,
    pub description_bullets: Vec<String>,
}

pub(crate) fn project_impact(
    litres_per_year: f64,
    feasibility_score: u8,
    dwellers: u32,
    recharge_fraction: f64,
) -> EnvironmentalImpact {
    let groundwater_recharge_l = round_to(litres_per_year * recharge_fraction, 0);
    let kl_avoided = groundwater_recharge_l / 1000.0;

    let blended_co2_per_kl =
        TANKER_SHARE * TANKER_CO2_PER_KL + (1.0 - TANKER_SHARE) * PUMPING_CO2_PER_KL;
    let co2_saved_kg = round_to(kl_avoided * blended_co2_per_kl, 1);
    let tanker_trips_avoided = round_to(groundwater_recharge_l / TANKER_CAPACITY_L, 1);
    let sustainability_rating = SustainabilityRating::from_score(feasibility_score);
    let groundwater_dependency_reduction_pct = round_to(
        MAX_DEPENDENCY_REDUCTION_PCT * f64::from(feasibility_score) / 100.0,
        1,
    );
    let per_capita_water_saved =
        (dwellers > 0).then(|| round_to(litres_per_year / f64::from(dwellers), 1));
    let households_equivalent_served = round_to(litres_per_year / HOUSEHOLD_ANNUAL_DEMAND_L, 1);
    let energy_saved_kwh = round_to(kl_avoided * PUMPING_KWH_PER_KL, 1);

    let mut impact = EnvironmentalImpact {
        co2_saved_kg,
        groundwater_recharge_l,
        tanker_trips_avoided,
        sustainability_rating,
        groundwater_dependency_reduction_pct,
        per_capita_water_saved,
        households_equivalent_served,
        energy_saved_kwh,
        description_bullets: Vec::new(),
    };
    impact.description_bullets = describe(&impact, litres_per_year);
    impact
}

fn describe(impact: &EnvironmentalImpact, litres_per_year: f64) -> Vec<String> {
    vec![
        format!(
            "Harvests about {litres_per_year} litres of rooftop runoff every year, enough for {} household(s).",
            impact.households_equivalent_served
        ),
        format!(
            "Recharges roughly {} litres of groundwater annually.",
            impact.groundwater_recharge_l
        ),
        format!(
            "Avoids about {} kg of CO₂ emissions per year.",
            impact.co2_saved_kg
        ),
        format!(
            "Replaces around {} water tanker trips each year.",
            impact.tanker_trips_avoided
        ),
        format!(
            "Saves approximately {} kWh of pumping energy annually.",
            impact.energy_saved_kwh
        ),
        format!(
            "Cuts groundwater dependency by about {}% (sustainability rating: {}).",
            impact.groundwater_dependency_reduction_pct,
            impact.sustainability_rating.label()
        ),
    ]
}
