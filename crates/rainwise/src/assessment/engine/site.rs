use crate::assessment::domain::{AssessmentInput, RoofMaterial};
use crate::config::EngineParameters;

/// Fully resolved site figures: every field is a concrete number.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SiteProfile {
    pub roof_area_m2: f64,
    pub open_space_m2: f64,
    pub rainfall_mm: f64,
    pub gw_depth_m: f64,
    pub soil_perm: f64,
    pub dwellers: u32,
    pub roof_material: Option<RoofMaterial>,
}

impl SiteProfile {
    pub(crate) fn resolve(input: &AssessmentInput, params: &EngineParameters) -> Self {
        Self {
            roof_area_m2: input.roof_area_m2.unwrap_or(0.0),
            open_space_m2: input.open_space_m2.unwrap_or(0.0),
            rainfall_mm: input.avg_rainfall_mm.unwrap_or(params.default_rainfall_mm),
            gw_depth_m: input.gw_depth_m.unwrap_or(params.default_gw_depth_m),
            soil_perm: input.soil_perm.unwrap_or(params.default_soil_permeability),
            dwellers: input.dwellers.unwrap_or(0),
            roof_material: input.roof_material.as_deref().and_then(RoofMaterial::parse),
        }
    }
}
