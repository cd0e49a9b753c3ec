use serde::{Deserialize, Serialize};

use super::site::SiteProfile;

/// Recharge structures the engine can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    #[serde(rename = "Convey runoff to community recharge or borewell (if available)")]
    CommunityRecharge,
    #[serde(rename = "Trench + multiple recharge pits")]
    TrenchWithPits,
    #[serde(rename = "Recharge pit(s)")]
    RechargePits,
    #[serde(rename = "Recharge shaft / well (professional)")]
    RechargeShaft,
    #[serde(rename = "Site inspection / percolation test")]
    SiteInspection,
}

impl StructureKind {
    pub fn label(&self) -> &'static str {
        match self {
            StructureKind::CommunityRecharge => {
                "Convey runoff to community recharge or borewell (if available)"
            }
            StructureKind::TrenchWithPits => "Trench + multiple recharge pits",
            StructureKind::RechargePits => "Recharge pit(s)",
            StructureKind::RechargeShaft => "Recharge shaft / well (professional)",
            StructureKind::SiteInspection => "Site inspection / percolation test",
        }
    }
}

/// One ranked recommendation.
///
/// `confidence` is a 0–1 fraction for on-site structures. The community-recharge
/// override reports 70 on a 0–100 scale; consumers must not compare the two directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureRecommendation {
    #[serde(rename = "type")]
    pub kind: StructureKind,
    pub confidence: f64,
    pub reason: String,
}

const COMMUNITY_RECHARGE_CONFIDENCE: f64 = 70.0;

/// Ordered recommendations, highest priority first.
pub(crate) fn recommend(site: &SiteProfile) -> Vec<StructureRecommendation> {
    let open = site.open_space_m2;
    let soil = site.soil_perm;

    let (kind, confidence, reason) = if open >= 10.0 && soil >= 25.0 {
        (
            StructureKind::TrenchWithPits,
            0.9,
            format!(
                "{open} m² of open space and soil permeability {soil} can absorb a trench feeding several recharge pits"
            ),
        )
    } else if open >= 4.0 && soil >= 20.0 {
        (
            StructureKind::RechargePits,
            0.8,
            format!("{open} m² of open space with soil permeability {soil} suits one or more recharge pits"),
        )
    } else if open < 4.0 && site.gw_depth_m <= 15.0 {
        (
            StructureKind::RechargeShaft,
            0.75,
            format!(
                "Limited open space ({open} m²) and groundwater at {} m favour a professionally built shaft or recharge well",
                site.gw_depth_m
            ),
        )
    } else {
        (
            StructureKind::SiteInspection,
            0.5,
            "Site conditions are inconclusive; run a percolation test before choosing a structure"
                .to_string(),
        )
    };

    let mut recommendations = Vec::with_capacity(2);

    if site.roof_area_m2 > 100.0 && open < 4.0 {
        recommendations.push(StructureRecommendation {
            kind: StructureKind::CommunityRecharge,
            confidence: COMMUNITY_RECHARGE_CONFIDENCE,
            reason: with_roof_note(
                format!(
                    "A {} m² roof yields more runoff than {open} m² of open ground can absorb",
                    site.roof_area_m2
                ),
                site,
            ),
        });
    }

    recommendations.push(StructureRecommendation {
        kind,
        confidence,
        reason: with_roof_note(reason, site),
    });

    recommendations
}

fn with_roof_note(reason: String, site: &SiteProfile) -> String {
    match site.roof_material {
        Some(material) => format!("{reason}. Roof material: {}.", material.label()),
        None => format!("{reason}."),
    }
}
