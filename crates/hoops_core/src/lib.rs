//! # hoops_core - All-Time Draft & Possession Game Simulator
//!
//! Two teams snake-draft five players each from a pool of all-time greats
//! and role players, then a game is simulated possession by possession.
//!
//! ## Features
//! - Ratings derived from career stat lines
//! - Team synergy driving every possession probability
//! - Deterministic simulation (same seed = same result)
//! - Snake draft state machine with undo and auto-pick
//! - JSON API for external front ends

#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod data;
pub mod draft;
pub mod engine;
pub mod error;
pub mod models;
pub mod player;
pub mod report;

pub use api::{simulate_game_json, GameRequest, GameResponse, TeamRequest};
pub use data::{find_builtin, load_pool, player_pool};
pub use draft::{auto_draft, draft_sequential, DraftState};
pub use engine::{simulate_game, GameResult, SimConfig, TeamSynergy};
pub use error::{ConfigError, HoopsError, Result};
pub use models::{BoxScore, Player, PlayerProfile, Position, Side, Team};
pub use report::{box_rows, render_final, synergy_bar, BoxRow, SynergyMetric};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON API schema version accepted and emitted by [`simulate_game_json`].
pub const SCHEMA_VERSION: u8 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_auto_draft_then_simulate() {
        let mut pool = player_pool();
        let (a, b) = draft_sequential("Team A", "Team B", &mut pool).unwrap();
        let result = simulate_game(&a, &b, Some(12345), &SimConfig::default()).unwrap();
        assert_eq!(result.box_score.len(), 10);
        assert!(result.possessions >= 180);
    }
}
