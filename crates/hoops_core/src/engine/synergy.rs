//! Team-level synergy from individual ratings
//!
//! Synergy depends only on the five players, so a game computes it once per
//! team and every possession reads the cached value.

use serde::{Deserialize, Serialize};

use super::config::SynergyParams;
use crate::models::{Player, Team};

/// Team averages on roughly the 0..100 rating scale, plus pace in possessions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamSynergy {
    pub spacing: f32,
    pub rim_pressure: f32,
    pub ball_move: f32,
    pub int_def: f32,
    pub per_def: f32,
    pub rebounding: f32,
    pub pace: f32,
}

pub fn team_synergy(team: &Team, params: &SynergyParams) -> TeamSynergy {
    let players = team.all_players();
    let n = players.len().max(1) as f32;
    let mean = |f: &dyn Fn(&Player) -> f32| players.iter().map(f).sum::<f32>() / n;

    let spacing = mean(&|p: &Player| {
        p.ratings.three * (params.spacing_tendency_offset + p.ratings.three_tendency)
    });
    let rim_pressure = mean(&|p: &Player| p.ratings.finishing);
    let ball_move = mean(&|p: &Player| p.ratings.playmaking);
    let int_def = mean(&|p: &Player| {
        if p.position().is_big() {
            p.ratings.int_def
        } else {
            p.ratings.int_def * params.off_zone_defense_factor
        }
    });
    let per_def = mean(&|p: &Player| {
        if p.position().is_perimeter() {
            p.ratings.per_def
        } else {
            p.ratings.per_def * params.off_zone_defense_factor
        }
    });
    let rebounding = mean(&|p: &Player| p.ratings.rebounding);

    let pace = params.pace_base
        + (ball_move - 50.0) * params.pace_ball_move_weight
        + (spacing - 50.0) * params.pace_spacing_weight;

    TeamSynergy {
        spacing,
        rim_pressure,
        ball_move,
        int_def,
        per_def,
        rebounding,
        pace: params.pace_bounds.apply(pace),
    }
}

impl TeamSynergy {
    pub fn of(team: &Team) -> Self {
        team_synergy(team, &SynergyParams::default())
    }
}
