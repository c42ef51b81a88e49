use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::data::find_builtin;
use crate::engine::{simulate_game, PeriodScore, SimConfig, TeamSynergy};
use crate::error::{HoopsError, Result};
use crate::models::{Lineup, Position, Team};
use crate::report::{box_rows, BoxRow};
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRequest {
    pub name: String,
    /// Player name per position, e.g. `{"PG": "Magic Johnson", ...}`.
    pub lineup: BTreeMap<Position, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRequest {
    pub schema_version: u8,
    #[serde(default)]
    pub seed: Option<u64>,
    pub team_a: TeamRequest,
    pub team_b: TeamRequest,
    /// Engine tuning; when absent `HOOPS_SIM_CONFIG_PATH` or the defaults apply.
    #[serde(default)]
    pub config: Option<SimConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub team_a: String,
    pub team_b: String,
    pub score_a: u32,
    pub score_b: u32,
    pub possessions: u32,
    pub periods: Vec<PeriodScore>,
    pub synergy_a: TeamSynergy,
    pub synergy_b: TeamSynergy,
    pub box_a: Vec<BoxRow>,
    pub box_b: Vec<BoxRow>,
}

fn resolve_team(req: &TeamRequest) -> Result<Team> {
    let mut lineup = Lineup::new();
    let mut seen = HashSet::new();
    for pos in Position::ALL {
        let Some(name) = req.lineup.get(&pos) else {
            return Err(HoopsError::IncompleteLineup { team: req.name.clone(), position: pos });
        };
        let player =
            find_builtin(name).ok_or_else(|| HoopsError::PlayerNotFound(name.trim().to_string()))?;
        if !player.plays(pos) {
            return Err(HoopsError::IneligiblePosition {
                name: player.name().to_string(),
                position: pos,
            });
        }
        if !seen.insert(player.name().to_string()) {
            return Err(HoopsError::DuplicatePlayer(player.name().to_string()));
        }
        lineup.set(pos, player);
    }
    Team::new(req.name.clone(), lineup)
}

/// Typed entry point behind [`simulate_game_json`].
pub fn run_game_request(request: GameRequest) -> Result<GameResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(HoopsError::SchemaMismatch {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let team_a = resolve_team(&request.team_a)?;
    let team_b = resolve_team(&request.team_b)?;
    let config = match request.config {
        Some(config) => config,
        None => SimConfig::from_env()?,
    };

    let result = simulate_game(&team_a, &team_b, request.seed, &config)?;

    Ok(GameResponse {
        schema_version: SCHEMA_VERSION,
        seed: result.seed,
        team_a: team_a.name.clone(),
        team_b: team_b.name.clone(),
        score_a: result.score.0,
        score_b: result.score.1,
        possessions: result.possessions,
        box_a: box_rows(&team_a, &result),
        box_b: box_rows(&team_b, &result),
        periods: result.periods,
        synergy_a: result.synergy_a,
        synergy_b: result.synergy_b,
    })
}

/// Simulate a game described by a JSON request and return the JSON response.
pub fn simulate_game_json(request_json: &str) -> Result<String> {
    let request: GameRequest = serde_json::from_str(request_json)?;
    let response = run_game_request(request)?;
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(seed: Option<u64>) -> String {
        let seed = seed.map_or("null".to_string(), |s| s.to_string());
        format!(
            r#"{{
                "schema_version": 1,
                "seed": {seed},
                "team_a": {{"name": "Bulls", "lineup": {{
                    "PG": "Derek Harper", "SG": "Michael Jordan", "SF": "Bryon Russell",
                    "PF": "Horace Grant", "C": "Luc Longley"}}}},
                "team_b": {{"name": "Suns", "lineup": {{
                    "PG": "Steve Nash", "SG": "Raja Bell", "SF": "Shane Battier",
                    "PF": "Boris Diaw", "C": "Tyson Chandler"}}}}
            }}"#
        )
    }

    #[test]
    fn test_seeded_request_is_deterministic() {
        let first = simulate_game_json(&request(Some(99))).unwrap();
        let second = simulate_game_json(&request(Some(99))).unwrap();
        assert_eq!(first, second);

        let response: GameResponse = serde_json::from_str(&first).unwrap();
        assert_eq!(response.seed, 99);
        assert_eq!(response.schema_version, SCHEMA_VERSION);
        assert_eq!(response.box_a.len(), 5);
        assert_eq!(response.box_a.iter().map(|r| r.pts).sum::<u32>(), response.score_a);
        assert_eq!(response.box_b.iter().map(|r| r.pts).sum::<u32>(), response.score_b);
    }

    #[test]
    fn test_missing_seed_is_reported() {
        let json = simulate_game_json(&request(None)).unwrap();
        let response: GameResponse = serde_json::from_str(&json).unwrap();
        let replay = simulate_game_json(&request(Some(response.seed))).unwrap();
        assert_eq!(json, replay);
    }

    #[test]
    fn test_schema_mismatch() {
        let json = request(Some(1)).replace("\"schema_version\": 1", "\"schema_version\": 2");
        let err = simulate_game_json(&json).unwrap_err();
        assert!(matches!(err, HoopsError::SchemaMismatch { found: 2, expected: 1 }));
    }

    #[test]
    fn test_unknown_player() {
        let json = request(Some(1)).replace("Luc Longley", "Luke Longly");
        let err = simulate_game_json(&json).unwrap_err();
        assert!(matches!(err, HoopsError::PlayerNotFound(name) if name == "Luke Longly"));
    }

    #[test]
    fn test_player_on_both_teams() {
        let json = request(Some(1)).replace("Tyson Chandler", "Luc Longley");
        let err = simulate_game_json(&json).unwrap_err();
        assert!(matches!(err, HoopsError::DuplicatePlayer(_)));
    }

    #[test]
    fn test_missing_position() {
        let json = request(Some(1)).replace(r#""C": "Tyson Chandler""#, r#""PG2": "x""#);
        assert!(simulate_game_json(&json).is_err());

        let mut req: GameRequest = serde_json::from_str(&request(Some(1))).unwrap();
        req.team_b.lineup.remove(&Position::C);
        let err = run_game_request(req).unwrap_err();
        assert!(matches!(err, HoopsError::IncompleteLineup { position: Position::C, .. }));
    }

    #[test]
    fn test_inline_config_applies() {
        let mut req: GameRequest = serde_json::from_str(&request(Some(5))).unwrap();
        let mut cfg = SimConfig::default();
        cfg.game.periods = 2;
        req.config = Some(cfg);
        let response = run_game_request(req).unwrap();
        assert_eq!(response.periods.len(), 2);
    }
}
