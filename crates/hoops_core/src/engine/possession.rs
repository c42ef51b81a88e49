//! Single-possession outcome model
//!
//! Draw order is fixed: turnover, shooter, assisted, shot type, foul, make,
//! then the free-throw and rebound chains. Keeping the order stable is what
//! makes a seeded game reproducible.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::SimConfig;
use super::probability;
use super::synergy::TeamSynergy;
use crate::models::{Player, Stat, StatUpdate, Team};

/// How a possession ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PossessionKind {
    Turnover,
    MadeTwo,
    MadeThree,
    /// Fouled on a missed two and made at least one free throw.
    FreeThrows,
    /// Offensive rebound converted on the putback.
    Putback,
    MissedPutback,
    DefensiveRebound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PossessionOutcome {
    pub points: u32,
    pub kind: PossessionKind,
    pub updates: Vec<StatUpdate>,
}

impl PossessionOutcome {
    fn new(kind: PossessionKind) -> Self {
        Self { points: 0, kind, updates: Vec::new() }
    }

    fn credit(&mut self, player: &Player, stat: Stat, value: u32) {
        self.updates.push(StatUpdate::new(player.name(), stat, value));
    }

    fn finish(mut self, kind: PossessionKind, points: u32) -> Self {
        self.kind = kind;
        self.points = points;
        self
    }
}

/// Everything a possession reads; synergies are precomputed per game.
#[derive(Debug, Clone, Copy)]
pub struct PossessionContext<'a> {
    pub offense: &'a Team,
    pub defense: &'a Team,
    pub off_syn: &'a TeamSynergy,
    pub def_syn: &'a TeamSynergy,
    pub config: &'a SimConfig,
}

/// Weighted draw over a non-empty slice of players.
fn pick_weighted<'a, R, F>(players: &[&'a Player], rng: &mut R, weight: F) -> &'a Player
where
    R: Rng + ?Sized,
    F: Fn(&Player) -> f32,
{
    // Weight floors are validated positive and a team always fields five.
    match players.choose_weighted(rng, |p| weight(p)) {
        Ok(p) => *p,
        Err(_) => players[0],
    }
}

pub fn possession<R: Rng + ?Sized>(ctx: &PossessionContext, rng: &mut R) -> PossessionOutcome {
    let cfg = ctx.config;
    let (off, def) = (ctx.off_syn, ctx.def_syn);
    let players: Vec<&Player> = ctx.offense.all_players().iter().collect();
    let mut outcome = PossessionOutcome::new(PossessionKind::Turnover);

    let usage_floor = cfg.shot_selection.usage_floor;
    let by_usage = |p: &Player| p.ratings.usage.max(usage_floor);

    if rng.gen::<f32>() < probability::turnover(off, def, &cfg.turnover) {
        let handler = pick_weighted(&players, rng, by_usage);
        outcome.credit(handler, Stat::Tov, 1);
        return outcome.finish(PossessionKind::Turnover, 0);
    }

    let shooter = pick_weighted(&players, rng, by_usage);
    let sr = &shooter.ratings;

    let assisted = rng.gen::<f32>() < probability::assist(off, sr, &cfg.assist);
    let is_three = rng.gen::<f32>()
        < probability::three_point_attempt(off, def, sr, &cfg.shot_selection);

    let (skill, defense) =
        probability::shot_matchup(is_three, off, def, sr, &cfg.shot_selection, &cfg.shooting);
    let make_prob = probability::make(skill, defense, is_three, &cfg.shooting);

    let foul_prob = probability::shooting_foul(sr, def, &cfg.foul);
    let drew_foul = !is_three && rng.gen::<f32>() < foul_prob;

    let made = rng.gen::<f32>() < make_prob;

    outcome.credit(shooter, Stat::Fga, 1);
    if is_three {
        outcome.credit(shooter, Stat::Fg3a, 1);
    }

    if made {
        let points = if is_three { 3 } else { 2 };
        outcome.credit(shooter, Stat::Pts, points);
        outcome.credit(shooter, Stat::Fgm, 1);
        if is_three {
            outcome.credit(shooter, Stat::Fg3m, 1);
        }
        if assisted {
            let mates: Vec<&Player> =
                players.iter().copied().filter(|p| p.name() != shooter.name()).collect();
            let floor = cfg.assist.passer_weight_floor;
            let passer = pick_weighted(&mates, rng, |p| p.ratings.playmaking.max(floor));
            outcome.credit(passer, Stat::Ast, 1);
        }
        let kind = if is_three { PossessionKind::MadeThree } else { PossessionKind::MadeTwo };
        return outcome.finish(kind, points);
    }

    if drew_foul {
        let attempts = cfg.foul.free_throws;
        let ft_prob = probability::free_throw(sr, def, &cfg.free_throw);
        let makes = (0..attempts).filter(|_| rng.gen::<f32>() < ft_prob).count() as u32;
        outcome.credit(shooter, Stat::Fta, attempts);
        if makes > 0 {
            outcome.credit(shooter, Stat::Ftm, makes);
            outcome.credit(shooter, Stat::Pts, makes);
            return outcome.finish(PossessionKind::FreeThrows, makes);
        }
        // both missed: live ball
    }

    let rebound_floor = cfg.rebound.weight_floor;
    let by_boards = |p: &Player| p.ratings.rebounding.max(rebound_floor);

    if rng.gen::<f32>() < probability::offensive_rebound(off, def, &cfg.rebound) {
        let boarder = pick_weighted(&players, rng, by_boards);
        outcome.credit(boarder, Stat::Orb, 1);

        // The shooter, not the rebounder, takes the putback.
        let putback_prob = probability::putback(sr, def, &cfg.putback);
        outcome.credit(shooter, Stat::Fga, 1);
        if rng.gen::<f32>() < putback_prob {
            outcome.credit(shooter, Stat::Fgm, 1);
            outcome.credit(shooter, Stat::Pts, 2);
            return outcome.finish(PossessionKind::Putback, 2);
        }
        return outcome.finish(PossessionKind::MissedPutback, 0);
    }

    let defenders: Vec<&Player> = ctx.defense.all_players().iter().collect();
    let dboarder = pick_weighted(&defenders, rng, by_boards);
    outcome.credit(dboarder, Stat::Drb, 1);
    outcome.finish(PossessionKind::DefensiveRebound, 0)
}
