use serde::{Deserialize, Serialize};

use super::round_to;
use super::site::SiteProfile;
use crate::config::EngineParameters;

const BASE_INSTALLATION_COST: f64 = 40_000.0;
const COST_PER_ROOF_M2: f64 = 300.0;
const COST_PER_OPEN_SPACE_M2: f64 = 500.0;
const MIN_INSTALLATION_COST: f64 = 60_000.0;
const MAX_INSTALLATION_COST: f64 = 250_000.0;

const SUBSIDY_MIN_SCORE: u8 = 50;
const SUBSIDY_MIN_ROOF_M2: f64 = 50.0;
const ROI_HORIZON_YEARS: f64 = 10.0;

/// Capital and operating projection for the recommended installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBenefit {
    pub installation_cost: f64,
    pub annual_maintenance: f64,
    pub lifespan_years: u8,
    pub annual_water_bill_savings: f64,
    pub subsidy_eligible: bool,
    pub subsidy_amount: f64,
    pub net_cost: f64,
    /// `None` when the site produces no savings.
    pub payback_years: Option<f64>,
    #[serde(rename = "roi10yr")]
    pub roi_10yr: Option<f64>,
}

pub(crate) fn project_costs(
    site: &SiteProfile,
    litres_per_year: f64,
    feasibility_score: u8,
    params: &EngineParameters,
) -> CostBenefit {
    let installation_cost = (BASE_INSTALLATION_COST
        + site.roof_area_m2 * COST_PER_ROOF_M2
        + site.open_space_m2 * COST_PER_OPEN_SPACE_M2)
        .clamp(MIN_INSTALLATION_COST, MAX_INSTALLATION_COST);
    let annual_maintenance = round_to(installation_cost * params.maintenance_rate, 0);
    let annual_water_bill_savings = round_to(
        litres_per_year / 1000.0 * params.tariff_per_kl * params.recharge_fraction,
        0,
    );

    let subsidy_eligible =
        feasibility_score >= SUBSIDY_MIN_SCORE && site.roof_area_m2 >= SUBSIDY_MIN_ROOF_M2;
    let subsidy_rate = if subsidy_eligible {
        params.subsidy_rate
    } else {
        0.0
    };
    let subsidy_amount = round_to(installation_cost * subsidy_rate, 0);
    let net_cost = installation_cost - subsidy_amount;

    let payback_years =
        (annual_water_bill_savings > 0.0).then(|| round_to(net_cost / annual_water_bill_savings, 1));

    let roi_10yr = match payback_years {
        Some(_) if net_cost > 0.0 => {
            let net_return = annual_water_bill_savings * ROI_HORIZON_YEARS
                - annual_maintenance * ROI_HORIZON_YEARS;
            Some(round_to(net_return / net_cost, 2))
        }
        _ => None,
    };

    CostBenefit {
        installation_cost,
        annual_maintenance,
        lifespan_years: params.lifespan_years,
        annual_water_bill_savings,
        subsidy_eligible,
        subsidy_amount,
        net_cost,
        payback_years,
        roi_10yr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(roof: f64, open: f64) -> SiteProfile {
        SiteProfile {
            roof_area_m2: roof,
            open_space_m2: open,
            rainfall_mm: 800.0,
            gw_depth_m: 15.0,
            soil_perm: 40.0,
            dwellers: 0,
            roof_material: None,
        }
    }

    #[test]
    fn installation_cost_is_clamped() {
        let params = EngineParameters::default();
        assert_eq!(project_costs(&site(0.0, 0.0), 0.0, 0, &params).installation_cost, 60_000.0);
        assert_eq!(
            project_costs(&site(2_000.0, 500.0), 0.0, 0, &params).installation_cost,
            250_000.0
        );
        assert_eq!(
            project_costs(&site(120.0, 15.0), 0.0, 0, &params).installation_cost,
            83_500.0
        );
    }

    #[test]
    fn scenario_projection() {
        let costs = project_costs(&site(120.0, 15.0), 122_400.0, 52, &EngineParameters::default());

        assert_eq!(costs.installation_cost, 83_500.0);
        assert_eq!(costs.annual_maintenance, 3_758.0);
        assert_eq!(costs.annual_water_bill_savings, 2_142.0);
        assert!(costs.subsidy_eligible);
        assert_eq!(costs.subsidy_amount, 25_050.0);
        assert_eq!(costs.net_cost, 58_450.0);
        assert_eq!(costs.payback_years, Some(27.3));
        assert_eq!(costs.roi_10yr, Some(-0.28));
        assert_eq!(costs.lifespan_years, 15);
    }

    #[test]
    fn subsidy_requires_score_and_roof_area() {
        let params = EngineParameters::default();
        assert!(!project_costs(&site(120.0, 15.0), 1_000.0, 49, &params).subsidy_eligible);
        assert!(!project_costs(&site(49.9, 15.0), 1_000.0, 90, &params).subsidy_eligible);
        assert!(project_costs(&site(50.0, 15.0), 1_000.0, 50, &params).subsidy_eligible);

        let ineligible = project_costs(&site(120.0, 15.0), 1_000.0, 10, &params);
        assert_eq!(ineligible.subsidy_amount, 0.0);
        assert_eq!(ineligible.net_cost, ineligible.installation_cost);
    }

    #[test]
    fn zero_savings_leave_payback_and_roi_unavailable() {
        let costs = project_costs(&site(0.0, 0.0), 0.0, 0, &EngineParameters::default());

        assert_eq!(costs.annual_water_bill_savings, 0.0);
        assert_eq!(costs.payback_years, None);
        assert_eq!(costs.roi_10yr, None);
    }

    #[test]
    fn unavailable_fields_serialize_as_null() {
        let costs = project_costs(&site(0.0, 0.0), 0.0, 0, &EngineParameters::default());
        let value = serde_json::to_value(&costs).expect("serializes");

        assert!(value["paybackYears"].is_null());
        assert!(value["roi10yr"].is_null());
        assert_eq!(value["installationCost"], 60_000.0);
    }
}
