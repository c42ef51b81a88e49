//! # Simulation Configuration
//!
//! Every tuning constant of the possession model lives here so balance can be
//! adjusted without touching the engine.
//!
//! ## Usage
//! ```rust
//! use hoops_core::engine::config::SimConfig;
//!
//! let config = SimConfig::default();
//! let shootout = SimConfig::shootout();
//! assert!(shootout.turnover.base < config.turnover.base);
//! ```
//!
//! A JSON file named by `HOOPS_SIM_CONFIG_PATH` replaces the defaults; see
//! [`SimConfig::from_env`].

mod game_config;
mod possession_config;
mod rebound_config;
mod shooting_config;

pub use game_config::{GameParams, SynergyParams};
pub use possession_config::{AssistParams, ShotSelectionParams, TurnoverParams};
pub use rebound_config::{PutbackParams, ReboundParams};
pub use shooting_config::{FoulParams, FreeThrowParams, ShootingParams};

use serde::{Deserialize, Serialize};
use std::{env, fs};

use crate::error::ConfigError;

pub const SIM_CONFIG_PATH_ENV: &str = "HOOPS_SIM_CONFIG_PATH";

/// Closed interval a computed probability (or pace) is clamped into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub lo: f32,
    pub hi: f32,
}

impl Bounds {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Clamp without panicking on inverted bounds (`lo` wins).
    #[inline]
    pub fn apply(&self, x: f32) -> f32 {
        x.min(self.hi).max(self.lo)
    }

    pub fn contains(&self, x: f32) -> bool {
        x >= self.lo && x <= self.hi
    }

    fn is_ordered(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite() && self.lo <= self.hi
    }

    fn is_probability(&self) -> bool {
        self.is_ordered() && self.lo >= 0.0 && self.hi <= 1.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SimConfig {
    #[serde(default)]
    pub turnover: TurnoverParams,
    #[serde(default)]
    pub assist: AssistParams,
    #[serde(default)]
    pub shot_selection: ShotSelectionParams,
    #[serde(default)]
    pub shooting: ShootingParams,
    #[serde(default)]
    pub foul: FoulParams,
    #[serde(default)]
    pub free_throw: FreeThrowParams,
    #[serde(default)]
    pub rebound: ReboundParams,
    #[serde(default)]
    pub putback: PutbackParams,
    #[serde(default)]
    pub synergy: SynergyParams,
    #[serde(default)]
    pub game: GameParams,
}

impl SimConfig {
    pub fn realistic() -> Self {
        Self::default()
    }

    /// Cleaner possessions and hotter shooting.
    pub fn shootout() -> Self {
        let mut cfg = Self::default();
        cfg.turnover.base = 0.10;
        cfg.shooting.base = 0.51;
        cfg.synergy.pace_base = 100.0;
        cfg
    }

    /// Slow, physical, mistake-prone games.
    pub fn grind() -> Self {
        let mut cfg = Self::default();
        cfg.turnover.base = 0.14;
        cfg.shooting.base = 0.46;
        cfg.synergy.pace_base = 91.0;
        cfg.foul.base = 0.07;
        cfg
    }

    pub fn from_preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "realistic" | "default" => Some(Self::realistic()),
            "shootout" => Some(Self::shootout()),
            "grind" => Some(Self::grind()),
            _ => None,
        }
    }

    /// Parse and validate. Missing sections fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_string(), source })?;
        Self::from_json(&content)
    }

    /// Load from `HOOPS_SIM_CONFIG_PATH`; unset or blank yields the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(SIM_CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };
        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }
        tracing::info!(path, "loading sim config from {SIM_CONFIG_PATH_ENV}");
        Self::from_file(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let probability_bounds = [
            ("turnover.bounds", self.turnover.bounds),
            ("assist.bounds", self.assist.bounds),
            ("shot_selection.three_bounds", self.shot_selection.three_bounds),
            ("shot_selection.inside_bias_bounds", self.shot_selection.inside_bias_bounds),
            ("shooting.two_bounds", self.shooting.two_bounds),
            ("shooting.three_bounds", self.shooting.three_bounds),
            ("foul.bounds", self.foul.bounds),
            ("free_throw.bounds", self.free_throw.bounds),
            ("rebound.bounds", self.rebound.bounds),
            ("putback.bounds", self.putback.bounds),
        ];
        for (label, bounds) in probability_bounds {
            if !bounds.is_probability() {
                return Err(ConfigError::Validation(format!(
                    "{label} must satisfy 0 <= lo <= hi <= 1, got {}..={}",
                    bounds.lo, bounds.hi
                )));
            }
        }

        let pace = self.synergy.pace_bounds;
        if !pace.is_ordered() || pace.lo <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "synergy.pace_bounds must be positive and ordered, got {}..={}",
                pace.lo, pace.hi
            )));
        }

        for (label, floor) in [
            ("shot_selection.usage_floor", self.shot_selection.usage_floor),
            ("assist.passer_weight_floor", self.assist.passer_weight_floor),
            ("rebound.weight_floor", self.rebound.weight_floor),
        ] {
            if !(floor.is_finite() && floor > 0.0) {
                return Err(ConfigError::Validation(format!("{label} must be > 0, got {floor}")));
            }
        }

        if !(0.0..=1.0).contains(&self.shooting.interior_share) {
            return Err(ConfigError::Validation(format!(
                "shooting.interior_share must be 0.0-1.0, got {}",
                self.shooting.interior_share
            )));
        }
        if self.game.periods == 0 {
            return Err(ConfigError::Validation("game.periods must be at least 1".to_string()));
        }
        if self.game.overtime && self.game.overtime_possessions == 0 {
            return Err(ConfigError::Validation(
                "game.overtime_possessions must be at least 1 when overtime is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert!((cfg.turnover.base - 0.125).abs() < 1e-6);
        assert_eq!(cfg.foul.free_throws, 2);
        assert!(!cfg.game.overtime);
    }

    #[test]
    fn test_presets_differ_in_expected_direction() {
        let realistic = SimConfig::realistic();
        let shootout = SimConfig::shootout();
        let grind = SimConfig::grind();
        assert!(shootout.shooting.base > realistic.shooting.base);
        assert!(grind.turnover.base > realistic.turnover.base);
        assert!(grind.synergy.pace_base < realistic.synergy.pace_base);
        for cfg in [shootout, grind] {
            assert!(cfg.validate().is_ok());
        }
        assert!(SimConfig::from_preset("Shootout").is_some());
        assert!(SimConfig::from_preset("arcade").is_none());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let cfg = SimConfig::from_json(r#"{"game": {"periods": 4, "overtime": true,
            "overtime_possessions": 10, "max_overtimes": 2}}"#)
        .unwrap();
        assert!(cfg.game.overtime);
        assert_eq!(cfg.game.max_overtimes, 2);
        assert_eq!(cfg.turnover, TurnoverParams::default());
    }

    #[test]
    fn test_single_param_override_keeps_siblings() {
        let cfg = SimConfig::from_json(r#"{"turnover": {"base": 0.1}}"#).unwrap();
        assert_eq!(cfg.turnover.base, 0.1);
        assert_eq!(
            cfg.turnover,
            TurnoverParams { base: 0.1, ..TurnoverParams::default() }
        );
        assert_eq!(cfg.shooting, ShootingParams::default());

        let cfg = SimConfig::from_json(r#"{"rebound": {}, "free_throw": {"base": 0.7}}"#).unwrap();
        assert_eq!(cfg.rebound, ReboundParams::default());
        assert_eq!(cfg.free_throw.base, 0.7);
    }

    #[test]
    fn test_validation_rejects_inverted_bounds() {
        let mut cfg = SimConfig::default();
        cfg.shooting.two_bounds = Bounds::new(0.8, 0.3);
        assert!(matches!(cfg.validate(), Err(ConfigError::Validation(_))));

        let mut cfg = SimConfig::default();
        cfg.free_throw.bounds = Bounds::new(0.5, 1.5);
        assert!(cfg.validate().is_err());

        let mut cfg = SimConfig::default();
        cfg.rebound.weight_floor = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(SimConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_bounds_apply() {
        let b = Bounds::new(0.2, 0.4);
        assert_eq!(b.apply(0.1), 0.2);
        assert_eq!(b.apply(0.9), 0.4);
        assert_eq!(b.apply(0.3), 0.3);
        assert!(b.contains(0.4));
    }

    #[test]
    fn test_config_serialization() {
        let cfg = SimConfig::grind();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed = SimConfig::from_json(&json).unwrap();
        assert_eq!(parsed, cfg);
    }
}
