//! Snake draft between two teams
//!
//! Five rounds, one pick per team per round. Odd rounds open with Team A,
//! even rounds with Team B. Each pick names the position it fills.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pool::{best_of, list_by_position, position_in_pool, sample_options, DEFAULT_OPTIONS};
use crate::error::{HoopsError, Result};
use crate::models::{Lineup, Player, Position, Side, Team};

pub const ROUNDS: u8 = 5;
pub const TOTAL_PICKS: usize = ROUNDS as usize * 2;

/// One completed pick, kept so it can be undone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickRecord {
    pub side: Side,
    pub round: u8,
    pub position: Position,
    pub player: Player,
    /// Where the player sat in the available pool before the pick.
    pool_index: usize,
}

#[derive(Debug, Clone)]
pub struct DraftState {
    pool: Vec<Player>,
    names: [String; 2],
    lineups: [Lineup; 2],
    round: u8,
    pick_in_round: u8,
    history: Vec<PickRecord>,
    /// Options on screen per position for the current pick.
    shown: [Option<Vec<Player>>; 5],
    options_per_pick: usize,
}

impl DraftState {
    pub fn new(pool: Vec<Player>) -> Self {
        Self::with_names(pool, Side::A.default_name(), Side::B.default_name())
    }

    pub fn with_names(pool: Vec<Player>, team_a: impl Into<String>, team_b: impl Into<String>) -> Self {
        Self {
            pool,
            names: [team_a.into(), team_b.into()],
            lineups: [Lineup::new(), Lineup::new()],
            round: 1,
            pick_in_round: 0,
            history: Vec::with_capacity(TOTAL_PICKS),
            shown: Default::default(),
            options_per_pick: DEFAULT_OPTIONS,
        }
    }

    pub fn options_per_pick(mut self, k: usize) -> Self {
        self.options_per_pick = k.max(1);
        self
    }

    pub fn pool(&self) -> &[Player] {
        &self.pool
    }

    pub fn team_name(&self, side: Side) -> &str {
        &self.names[side.index()]
    }

    pub fn lineup(&self, side: Side) -> &Lineup {
        &self.lineups[side.index()]
    }

    pub fn history(&self) -> &[PickRecord] {
        &self.history
    }

    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn is_complete(&self) -> bool {
        self.history.len() >= TOTAL_PICKS
    }

    /// Team due to pick, or `None` once all ten picks are in.
    pub fn on_the_clock(&self) -> Option<Side> {
        if self.is_complete() {
            return None;
        }
        let opener = if self.round % 2 == 1 { Side::A } else { Side::B };
        Some(if self.pick_in_round == 0 { opener } else { opener.other() })
    }

    pub fn unfilled_positions(&self, side: Side) -> Vec<Position> {
        self.lineups[side.index()].unfilled()
    }

    fn clock_for(&self, pos: Position) -> Result<Side> {
        let side = self.on_the_clock().ok_or(HoopsError::DraftComplete)?;
        if self.lineups[side.index()].get(pos).is_some() {
            return Err(HoopsError::PositionFilled {
                team: self.team_name(side).to_string(),
                position: pos,
            });
        }
        Ok(side)
    }

    /// Options for the current pick at `pos`, sampled on first request and
    /// cached per position until the pick is made or undone.
    pub fn options<R: Rng + ?Sized>(&mut self, pos: Position, rng: &mut R) -> Result<&[Player]> {
        self.clock_for(pos)?;
        if self.shown[pos.index()].is_none() {
            self.sample(pos, rng);
        }
        Ok(self.shown[pos.index()].as_deref().unwrap_or_default())
    }

    /// Discard the cached options for `pos` and draw a fresh set.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, pos: Position, rng: &mut R) -> Result<&[Player]> {
        self.clock_for(pos)?;
        self.sample(pos, rng);
        Ok(self.shown[pos.index()].as_deref().unwrap_or_default())
    }

    fn sample<R: Rng + ?Sized>(&mut self, pos: Position, rng: &mut R) {
        let players = sample_options(pos, &self.pool, self.options_per_pick, rng);
        tracing::debug!(position = %pos, shown = players.len(), "sampled draft options");
        self.shown[pos.index()] = Some(players);
    }

    /// Like [`make_pick`](Self::make_pick), but `name` must be one of the
    /// options currently shown at `pos`.
    pub fn pick_shown(&mut self, pos: Position, name: &str) -> Result<&PickRecord> {
        self.clock_for(pos)?;
        let wanted = name.trim().to_lowercase();
        let offered = self.shown[pos.index()]
            .iter()
            .flatten()
            .any(|p| p.name().to_lowercase() == wanted);
        if !offered {
            if let Some(i) = position_in_pool(name, &self.pool) {
                if self.pool[i].plays(pos) {
                    return Err(HoopsError::NotOffered {
                        name: self.pool[i].name().to_string(),
                        position: pos,
                    });
                }
            }
        }
        self.make_pick(pos, name)
    }

    /// Draft `name` into `pos` for the team on the clock.
    pub fn make_pick(&mut self, pos: Position, name: &str) -> Result<&PickRecord> {
        let side = self.clock_for(pos)?;
        let Some(pool_index) = position_in_pool(name, &self.pool) else {
            tracing::warn!(name, "pick rejected: player not available");
            return Err(HoopsError::PlayerNotFound(name.trim().to_string()));
        };
        if !self.pool[pool_index].plays(pos) {
            return Err(HoopsError::IneligiblePosition {
                name: self.pool[pool_index].name().to_string(),
                position: pos,
            });
        }

        let player = self.pool.remove(pool_index);
        self.lineups[side.index()].set(pos, player.clone());
        tracing::info!(
            team = self.team_name(side),
            round = self.round,
            position = %pos,
            player = player.name(),
            "draft pick"
        );
        self.history.push(PickRecord { side, round: self.round, position: pos, player, pool_index });
        self.advance();
        self.shown = Default::default();
        Ok(&self.history[self.history.len() - 1])
    }

    /// Best overall among the options on screen for `pos`, or among every
    /// eligible player when none are shown.
    pub fn auto_pick(&mut self, pos: Position) -> Result<&PickRecord> {
        self.clock_for(pos)?;
        let from_shown = self.shown[pos.index()].as_ref().and_then(|shown| {
            best_of(shown.iter().filter(|p| self.pool.iter().any(|q| q.name() == p.name())))
        });
        let choice = from_shown
            .or_else(|| best_of(list_by_position(pos, &self.pool)))
            .map(|p| p.name().to_string())
            .ok_or(HoopsError::NoCandidates(pos))?;
        self.make_pick(pos, &choice)
    }

    /// Revert the most recent pick. Empty history leaves the draft unchanged.
    pub fn undo(&mut self) -> Option<PickRecord> {
        let record = self.history.pop()?;
        self.lineups[record.side.index()].clear(record.position);
        let at = record.pool_index.min(self.pool.len());
        self.pool.insert(at, record.player.clone());
        self.step_back();
        self.shown = Default::default();
        tracing::info!(
            team = self.team_name(record.side),
            player = record.player.name(),
            "pick undone"
        );
        Some(record)
    }

    fn advance(&mut self) {
        self.pick_in_round += 1;
        if self.pick_in_round == 2 {
            self.pick_in_round = 0;
            self.round += 1;
        }
    }

    fn step_back(&mut self) {
        if self.pick_in_round > 0 {
            self.pick_in_round -= 1;
        } else if self.round > 1 {
            self.round -= 1;
            self.pick_in_round = 1;
        }
    }

    pub fn into_teams(self) -> Result<(Team, Team)> {
        if !self.is_complete() {
            return Err(HoopsError::DraftIncomplete { remaining: TOTAL_PICKS - self.history.len() });
        }
        let [name_a, name_b] = self.names;
        let [lineup_a, lineup_b] = self.lineups;
        Ok((Team::new(name_a, lineup_a)?, Team::new(name_b, lineup_b)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::player_pool;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fill(draft: &mut DraftState, picks: &[(Position, &str)]) {
        for (pos, name) in picks {
            draft.make_pick(*pos, name).unwrap();
        }
    }

    const FULL_DRAFT: [(Position, &str); 10] = [
        (Position::PG, "Magic Johnson"),
        (Position::C, "Shaquille O'Neal"),
        (Position::PG, "Stephen Curry"),
        (Position::C, "Hakeem Olajuwon"),
        (Position::SG, "Michael Jordan"),
        (Position::SG, "Kobe Bryant"),
        (Position::SF, "Kevin Durant"),
        (Position::SF, "Larry Bird"),
        (Position::PF, "Tim Duncan"),
        (Position::PF, "Kevin Garnett"),
    ];

    #[test]
    fn test_snake_order() {
        let mut draft = DraftState::new(player_pool());
        let mut order = Vec::new();
        for (pos, name) in FULL_DRAFT {
            order.push(draft.on_the_clock().unwrap());
            draft.make_pick(pos, name).unwrap();
        }
        use Side::{A, B};
        assert_eq!(order, vec![A, B, B, A, A, B, B, A, A, B]);
        assert_eq!(draft.on_the_clock(), None);
        assert!(draft.is_complete());
    }

    #[test]
    fn test_pick_removes_from_pool() {
        let mut draft = DraftState::new(player_pool());
        let before = draft.pool().len();
        let record = draft.make_pick(Position::SG, "michael jordan").unwrap();
        assert_eq!(record.player.name(), "Michael Jordan");
        assert_eq!(record.side, Side::A);
        assert_eq!(draft.pool().len(), before - 1);
        assert!(draft.lineup(Side::A).get(Position::SG).is_some());

        let err = draft.make_pick(Position::SG, "Michael Jordan").unwrap_err();
        assert!(matches!(err, HoopsError::PlayerNotFound(_)));
    }

    #[test]
    fn test_rejections_are_recoverable() {
        let mut draft = DraftState::new(player_pool());
        let err = draft.make_pick(Position::C, "Stephen Curry").unwrap_err();
        assert!(matches!(err, HoopsError::IneligiblePosition { .. }));
        assert!(err.is_recoverable());

        fill(&mut draft, &[(Position::PG, "Magic Johnson"), (Position::C, "Shaquille O'Neal")]);
        // B picks again in round 2 and already has a center
        let err = draft.make_pick(Position::C, "Hakeem Olajuwon").unwrap_err();
        assert!(matches!(err, HoopsError::PositionFilled { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_undo_restores_everything() {
        let mut draft = DraftState::new(player_pool());
        let pristine: Vec<String> = draft.pool().iter().map(|p| p.name().to_string()).collect();
        assert!(draft.undo().is_none());
        assert_eq!(draft.on_the_clock(), Some(Side::A));

        fill(&mut draft, &FULL_DRAFT[..3]);
        assert_eq!(draft.round(), 2);
        assert_eq!(draft.undo().map(|r| r.player.name().to_string()), Some("Stephen Curry".into()));
        assert_eq!(draft.on_the_clock(), Some(Side::B));
        assert_eq!(draft.round(), 2);
        draft.undo();
        assert_eq!(draft.round(), 1);
        assert_eq!(draft.on_the_clock(), Some(Side::B));
        draft.undo();
        assert_eq!(draft.on_the_clock(), Some(Side::A));
        assert_eq!(draft.round(), 1);

        let restored: Vec<String> = draft.pool().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(restored, pristine);
        assert_eq!(draft.unfilled_positions(Side::B).len(), 5);
    }

    #[test]
    fn test_options_cached_until_reshuffle() {
        let mut draft = DraftState::new(player_pool());
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let first: Vec<String> =
            draft.options(Position::PG, &mut rng).unwrap().iter().map(|p| p.name().to_string()).collect();
        let again: Vec<String> =
            draft.options(Position::PG, &mut rng).unwrap().iter().map(|p| p.name().to_string()).collect();
        assert_eq!(first, again);
        assert_eq!(first.len(), DEFAULT_OPTIONS);

        let mut changed = false;
        for _ in 0..5 {
            let fresh: Vec<String> = draft
                .reshuffle(Position::PG, &mut rng)
                .unwrap()
                .iter()
                .map(|p| p.name().to_string())
                .collect();
            changed |= fresh != first;
        }
        assert!(changed);
    }

    #[test]
    fn test_options_cached_per_position() {
        let mut draft = DraftState::new(player_pool());
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let names = |players: &[Player]| players.iter().map(|p| p.name().to_string()).collect::<Vec<_>>();
        let guards = names(draft.options(Position::PG, &mut rng).unwrap());
        let wings = names(draft.options(Position::SG, &mut rng).unwrap());
        assert_eq!(names(draft.options(Position::PG, &mut rng).unwrap()), guards);
        assert_eq!(names(draft.options(Position::SG, &mut rng).unwrap()), wings);

        // a pick clears every cached list
        let first = guards[0].clone();
        draft.pick_shown(Position::PG, &first).unwrap();
        assert!(draft.shown.iter().all(Option::is_none));
    }

    #[test]
    fn test_pick_shown_only_accepts_offered_names() {
        let mut draft = DraftState::new(player_pool()).options_per_pick(2);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let shown: Vec<String> =
            draft.options(Position::PG, &mut rng).unwrap().iter().map(|p| p.name().to_string()).collect();
        let hidden = list_by_position(Position::PG, draft.pool())
            .into_iter()
            .map(|p| p.name().to_string())
            .find(|n| !shown.contains(n))
            .unwrap();

        let err = draft.pick_shown(Position::PG, &hidden).unwrap_err();
        assert!(matches!(err, HoopsError::NotOffered { .. }));
        assert!(err.is_recoverable());
        assert!(draft.history().is_empty());

        let err = draft.pick_shown(Position::PG, "Nobody").unwrap_err();
        assert!(matches!(err, HoopsError::PlayerNotFound(_)));
        let err = draft.pick_shown(Position::PG, "Shaquille O'Neal").unwrap_err();
        assert!(matches!(err, HoopsError::IneligiblePosition { .. }));

        let record = draft.pick_shown(Position::PG, &shown[1].to_uppercase()).unwrap();
        assert_eq!(record.player.name(), shown[1]);
    }

    #[test]
    fn test_auto_pick_prefers_shown_options() {
        let mut draft = DraftState::new(player_pool());
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let shown: Vec<Player> = draft.options(Position::SF, &mut rng).unwrap().to_vec();
        let expected = best_of(shown.iter()).map(|p| p.name().to_string());
        let record = draft.auto_pick(Position::SF).unwrap();
        assert_eq!(Some(record.player.name().to_string()), expected);

        // nothing shown for B: best eligible in the whole pool
        let pool = draft.pool().to_vec();
        let best = best_of(list_by_position(Position::C, &pool)).map(|p| p.name().to_string());
        let record = draft.auto_pick(Position::C).unwrap();
        assert_eq!(Some(record.player.name().to_string()), best);
    }

    #[test]
    fn test_into_teams() {
        let mut draft = DraftState::with_names(player_pool(), "Lakers", "Rockets");
        fill(&mut draft, &FULL_DRAFT[..9]);
        let err = draft.clone().into_teams().unwrap_err();
        assert!(matches!(err, HoopsError::DraftIncomplete { remaining: 1 }));

        fill(&mut draft, &FULL_DRAFT[9..]);
        assert!(matches!(draft.make_pick(Position::PG, "Steve Nash"), Err(HoopsError::DraftComplete)));
        let (a, b) = draft.into_teams().unwrap();
        assert_eq!(a.name, "Lakers");
        assert_eq!(a.player(Position::C).name(), "Hakeem Olajuwon");
        assert_eq!(b.player(Position::PG).name(), "Stephen Curry");
    }
}
