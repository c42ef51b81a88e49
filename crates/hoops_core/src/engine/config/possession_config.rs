//! Turnover, assist and shot-selection parameters

use serde::{Deserialize, Serialize};

use super::Bounds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TurnoverParams {
    /// League-average turnover rate (default: 0.125)
    pub base: f32,
    /// Offensive ball movement above 50 lowers the rate (default: 0.001)
    pub ball_move_weight: f32,
    /// Defensive perimeter D above 50 raises it (default: 0.001)
    pub per_def_weight: f32,
    /// default: 0.06..=0.18
    pub bounds: Bounds,
}

impl Default for TurnoverParams {
    fn default() -> Self {
        Self {
            base: 0.125,
            ball_move_weight: 0.001,
            per_def_weight: 0.001,
            bounds: Bounds::new(0.06, 0.18),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssistParams {
    /// default: 0.45
    pub base: f32,
    /// default: 0.012
    pub ball_move_weight: f32,
    /// default: 0.006
    pub spacing_weight: f32,
    /// Shooter's own playmaking (default: 0.015)
    pub playmaking_weight: f32,
    /// default: 0.45..=0.97
    pub bounds: Bounds,
    /// Minimum passer weight when choosing who gets the assist (default: 1.0)
    pub passer_weight_floor: f32,
}

impl Default for AssistParams {
    fn default() -> Self {
        Self {
            base: 0.45,
            ball_move_weight: 0.012,
            spacing_weight: 0.006,
            playmaking_weight: 0.015,
            bounds: Bounds::new(0.45, 0.97),
            passer_weight_floor: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShotSelectionParams {
    /// Minimum shooter weight when picking who shoots (default: 0.05)
    pub usage_floor: f32,
    /// Added to the shooter's three tendency (default: 0.05)
    pub three_base: f32,
    /// default: 0.002
    pub spacing_weight: f32,
    /// default: 0.0015
    pub per_def_weight: f32,
    /// default: 0.03..=0.65
    pub three_bounds: Bounds,
    /// Rim pressure vs interior D edge → share of finishing in a two (default: 0.01)
    pub inside_bias_weight: f32,
    /// default: 0.5
    pub inside_bias_base: f32,
    /// default: 0.3..=0.7
    pub inside_bias_bounds: Bounds,
}

impl Default for ShotSelectionParams {
    fn default() -> Self {
        Self {
            usage_floor: 0.05,
            three_base: 0.05,
            spacing_weight: 0.002,
            per_def_weight: 0.0015,
            three_bounds: Bounds::new(0.03, 0.65),
            inside_bias_weight: 0.01,
            inside_bias_base: 0.5,
            inside_bias_bounds: Bounds::new(0.3, 0.7),
        }
    }
}
