//! Automatic drafting: best available overall at each position

use super::pool::{best_of, list_by_position};
use crate::error::{HoopsError, Result};
use crate::models::{Lineup, Player, Position, Team};

/// Fill PG..C in order with the best eligible player left, removing each
/// pick from `pool`.
pub fn auto_draft(name: &str, pool: &mut Vec<Player>) -> Result<Team> {
    let mut lineup = Lineup::new();
    for pos in Position::ALL {
        let pick = best_of(list_by_position(pos, pool))
            .map(|p| p.name().to_string())
            .ok_or(HoopsError::NoCandidates(pos))?;
        let idx = pool
            .iter()
            .position(|p| p.name() == pick)
            .ok_or_else(|| HoopsError::PlayerNotFound(pick.clone()))?;
        let player = pool.remove(idx);
        tracing::debug!(team = name, position = %pos, player = player.name(), "auto pick");
        lineup.set(pos, player);
    }
    Team::new(name, lineup)
}

/// Team A fills all five positions, then Team B from what remains.
pub fn draft_sequential(team_a: &str, team_b: &str, pool: &mut Vec<Player>) -> Result<(Team, Team)> {
    let a = auto_draft(team_a, pool)?;
    let b = auto_draft(team_b, pool)?;
    Ok((a, b))
}
