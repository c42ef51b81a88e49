//! Team synergy and game-length parameters

use serde::{Deserialize, Serialize};

use super::Bounds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SynergyParams {
    /// Added to three tendency when weighting spacing (default: 0.5)
    pub spacing_tendency_offset: f32,
    /// Defense discount for players outside their natural zone (default: 0.8)
    pub off_zone_defense_factor: f32,
    /// Possessions per team at average ball movement and spacing (default: 96)
    pub pace_base: f32,
    /// default: 0.1
    pub pace_ball_move_weight: f32,
    /// default: 0.05
    pub pace_spacing_weight: f32,
    /// default: 90..=104
    pub pace_bounds: Bounds,
}

impl Default for SynergyParams {
    fn default() -> Self {
        Self {
            spacing_tendency_offset: 0.5,
            off_zone_defense_factor: 0.8,
            pace_base: 96.0,
            pace_ball_move_weight: 0.1,
            pace_spacing_weight: 0.05,
            pace_bounds: Bounds::new(90.0, 104.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameParams {
    /// Regulation periods the possession log is split into (default: 4)
    pub periods: u32,
    /// Play overtime while tied (default: false, ties stand)
    pub overtime: bool,
    /// Possessions per team in one overtime period (default: 10)
    pub overtime_possessions: u32,
    /// Stop after this many overtimes even if still tied (default: 4)
    pub max_overtimes: u32,
}

impl Default for GameParams {
    fn default() -> Self {
        Self { periods: 4, overtime: false, overtime_possessions: 10, max_overtimes: 4 }
    }
}
