use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::round_to;

const MIN_PIT_DEPTH_M: f64 = 0.8;
const MAX_PIT_DEPTH_M: f64 = 2.0;
const TRENCH_WIDTH_M: f64 = 0.6;
const TRENCH_DEPTH_M: f64 = 0.8;

/// Cylindrical recharge pit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitDimensions {
    pub diameter_m: f64,
    pub depth_m: f64,
    pub volume_m3: f64,
}

/// Rectangular trench holding the same volume as the pit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrenchDimensions {
    pub width_m: f64,
    pub depth_m: f64,
    pub length_m: f64,
}

/// Sized structures; the trench is always offered alongside the pit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendedDimensions {
    pub pit: PitDimensions,
    pub trench: TrenchDimensions,
}

pub(crate) fn size_structures(
    litres_per_year: f64,
    recharge_fraction: f64,
    pit_efficiency: f64,
) -> RecommendedDimensions {
    let target_m3 = litres_per_year * recharge_fraction / 1000.0;
    let pit_volume_m3 = target_m3 / pit_efficiency;

    let depth_m = pit_volume_m3.sqrt().clamp(MIN_PIT_DEPTH_M, MAX_PIT_DEPTH_M);
    let diameter_m = (4.0 * pit_volume_m3 / (PI * depth_m)).sqrt();
    let trench_length_m = pit_volume_m3 / (TRENCH_WIDTH_M * TRENCH_DEPTH_M);

    RecommendedDimensions {
        pit: PitDimensions {
            diameter_m: round_to(diameter_m, 2),
            depth_m: round_to(depth_m, 2),
            volume_m3: round_to(pit_volume_m3, 3),
        },
        trench: TrenchDimensions {
            width_m: TRENCH_WIDTH_M,
            depth_m: TRENCH_DEPTH_M,
            length_m: round_to(trench_length_m, 2),
        },
    }
}
