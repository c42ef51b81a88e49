//! Rebound and putback parameters

use serde::{Deserialize, Serialize};

use super::Bounds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReboundParams {
    /// Offensive rebound rate between equal teams (default: 0.24)
    pub base: f32,
    /// Per point of team rebounding edge (default: 0.003)
    pub edge_weight: f32,
    /// default: 0.16..=0.34
    pub bounds: Bounds,
    /// Minimum rebounder weight (default: 1.0)
    pub weight_floor: f32,
}

impl Default for ReboundParams {
    fn default() -> Self {
        Self { base: 0.24, edge_weight: 0.003, bounds: Bounds::new(0.16, 0.34), weight_floor: 1.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PutbackParams {
    /// default: 0.54
    pub base: f32,
    /// default: 0.004
    pub finishing_weight: f32,
    /// default: 0.003
    pub int_def_weight: f32,
    /// default: 0.40..=0.80
    pub bounds: Bounds,
}

impl Default for PutbackParams {
    fn default() -> Self {
        Self {
            base: 0.54,
            finishing_weight: 0.004,
            int_def_weight: 0.003,
            bounds: Bounds::new(0.40, 0.80),
        }
    }
}
