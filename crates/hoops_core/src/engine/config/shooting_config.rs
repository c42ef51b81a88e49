//! Make, foul and free-throw parameters

use serde::{Deserialize, Serialize};

use super::Bounds;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShootingParams {
    /// Make rate when skill equals defense (default: 0.48)
    pub base: f32,
    /// Per rating point of skill over defense (default: 0.0035)
    pub skill_weight: f32,
    /// Subtracted for three-point attempts (default: 0.07)
    pub three_penalty: f32,
    /// default: 0.30..=0.73
    pub two_bounds: Bounds,
    /// default: 0.24..=0.52
    pub three_bounds: Bounds,
    /// Interior share of the defense faced on twos; the rest is perimeter (default: 0.7)
    pub interior_share: f32,
}

impl Default for ShootingParams {
    fn default() -> Self {
        Self {
            base: 0.48,
            skill_weight: 0.0035,
            three_penalty: 0.07,
            two_bounds: Bounds::new(0.30, 0.73),
            three_bounds: Bounds::new(0.24, 0.52),
            interior_share: 0.7,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FoulParams {
    /// default: 0.05
    pub base: f32,
    /// default: 0.002
    pub finishing_weight: f32,
    /// default: 0.001
    pub int_def_weight: f32,
    /// default: 0.03..=0.18
    pub bounds: Bounds,
    /// Free throws awarded on a missed two (default: 2)
    pub free_throws: u32,
}

impl Default for FoulParams {
    fn default() -> Self {
        Self {
            base: 0.05,
            finishing_weight: 0.002,
            int_def_weight: 0.001,
            bounds: Bounds::new(0.03, 0.18),
            free_throws: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FreeThrowParams {
    /// default: 0.44
    pub base: f32,
    /// default: 0.006
    pub ft_weight: f32,
    /// default: 0.001
    pub int_def_weight: f32,
    /// default: 0.50..=0.95
    pub bounds: Bounds,
}

impl Default for FreeThrowParams {
    fn default() -> Self {
        Self { base: 0.44, ft_weight: 0.006, int_def_weight: 0.001, bounds: Bounds::new(0.50, 0.95) }
    }
}
