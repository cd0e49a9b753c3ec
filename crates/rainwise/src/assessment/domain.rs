use serde::{Deserialize, Serialize};

use super::input::{lenient_count, lenient_f64, lenient_text};

/// Identifier wrapper for stored site assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

impl std::fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Site description supplied by the surrounding application.
///
/// Every numeric field is optional. Missing or unparseable values fall back to zero,
/// or to the engine's enrichment defaults for rainfall, groundwater depth and soil
/// permeability. Alternate field spellings found in older stored documents are
/// accepted on input; output always uses the canonical names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AssessmentId>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub name: Option<String>,
    #[serde(flatten)]
    pub location: Location,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_count"
    )]
    pub dwellers: Option<u32>,
    #[serde(
        default,
        rename = "roofArea_m2",
        alias = "roofArea",
        alias = "roof_area_m2",
        deserialize_with = "lenient_f64"
    )]
    pub roof_area_m2: Option<f64>,
    #[serde(
        default,
        rename = "openSpace_m2",
        alias = "openSpace",
        alias = "open_space_m2",
        deserialize_with = "lenient_f64"
    )]
    pub open_space_m2: Option<f64>,
    #[serde(
        default,
        rename = "roofMaterial",
        alias = "roof_material",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub roof_material: Option<String>,
    #[serde(
        default,
        rename = "roofSlope_deg",
        alias = "roofSlope",
        alias = "roof_slope_deg",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_f64"
    )]
    pub roof_slope_deg: Option<f64>,
    #[serde(
        default,
        rename = "avgRainfall_mm",
        alias = "avgRainfall",
        alias = "rainfall_mm",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_f64"
    )]
    pub avg_rainfall_mm: Option<f64>,
    #[serde(
        default,
        rename = "gwDepth_m",
        alias = "gwDepth",
        alias = "groundwater_depth_m",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_f64"
    )]
    pub gw_depth_m: Option<f64>,
    #[serde(
        default,
        rename = "soilPerm",
        alias = "soilPermeability",
        alias = "soil_perm",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_f64"
    )]
    pub soil_perm: Option<f64>,
}

/// Geographic context carried through for display; never used numerically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "lat",
        deserialize_with = "lenient_f64"
    )]
    pub latitude: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "lng",
        alias = "lon",
        deserialize_with = "lenient_f64"
    )]
    pub longitude: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub address: Option<String>,
}

/// Roofing categories recognised when weighting the catchment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoofMaterial {
    Metal,
    Concrete,
    Tile,
    Asbestos,
    Thatch,
    Other,
}

impl RoofMaterial {
    const KEYWORDS: [(&'static [&'static str], RoofMaterial); 5] = [
        (&["metal", "sheet", "tin"], RoofMaterial::Metal),
        (&["concrete", "rcc"], RoofMaterial::Concrete),
        (&["tile"], RoofMaterial::Tile),
        (&["asbestos"], RoofMaterial::Asbestos),
        (&["thatch"], RoofMaterial::Thatch),
    ];

    /// Map free text onto a category by case-insensitive substring, first match wins.
    /// Blank text yields `None`; unrecognised text is `Other`.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        let material = Self::KEYWORDS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|key| normalized.contains(key)))
            .map(|(_, material)| *material)
            .unwrap_or(RoofMaterial::Other);
        Some(material)
    }

    /// Multiplier applied to the raw roof score.
    pub fn score_factor(self) -> f64 {
        match self {
            RoofMaterial::Metal => 1.0,
            RoofMaterial::Concrete => 0.95,
            RoofMaterial::Tile => 0.90,
            RoofMaterial::Asbestos => 0.85,
            RoofMaterial::Thatch => 0.75,
            RoofMaterial::Other => 0.90,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoofMaterial::Metal => "metal",
            RoofMaterial::Concrete => "concrete",
            RoofMaterial::Tile => "tile",
            RoofMaterial::Asbestos => "asbestos",
            RoofMaterial::Thatch => "thatch",
            RoofMaterial::Other => "other",
        }
    }
}

/// Lifecycle of a stored assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Submitted,
    Completed,
}

impl AssessmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssessmentStatus::Submitted => "submitted",
            AssessmentStatus::Completed => "completed",
        }
    }
}
