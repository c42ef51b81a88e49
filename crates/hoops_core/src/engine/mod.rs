//! Game simulation engine
//!
//! - `config`: tunable constants, presets and file/env loading
//! - `synergy`: team-level metrics derived from player ratings
//! - `probability`: pure per-event probability formulas
//! - `possession`: one possession as a fixed sequence of random draws
//! - `game`: full game loop, periods and overtime

pub mod config;
pub mod game;
pub mod possession;
pub mod probability;
pub mod synergy;

pub use config::{SimConfig, SIM_CONFIG_PATH_ENV};
pub use game::{regulation_possessions, simulate_game, GameResult, PeriodScore, PossessionRecord};
pub use possession::{possession, PossessionContext, PossessionKind, PossessionOutcome};
pub use synergy::{team_synergy, TeamSynergy};
