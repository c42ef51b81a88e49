//! Full-game simulation
//!
//! Runs alternating possessions for both teams, accumulates the box score and
//! splits scoring into periods.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::config::SimConfig;
use super::possession::{possession, PossessionContext, PossessionKind};
use super::synergy::{team_synergy, TeamSynergy};
use crate::error::{HoopsError, Result};
use crate::models::{BoxScore, Side, Team};

/// Points scored by each team in one period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodScore {
    /// 1-based; overtime periods continue the count after regulation.
    pub number: u32,
    pub overtime: bool,
    pub a: u32,
    pub b: u32,
}

impl PeriodScore {
    fn new(number: u32, overtime: bool) -> Self {
        Self { number, overtime, a: 0, b: 0 }
    }

    pub fn label(&self, regulation: u32) -> String {
        if self.overtime {
            match self.number - regulation {
                1 => "OT".to_string(),
                n => format!("{n}OT"),
            }
        } else {
            format!("Q{}", self.number)
        }
    }
}

/// One line of the play log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PossessionRecord {
    pub number: u32,
    pub period: u32,
    pub offense: Side,
    pub kind: PossessionKind,
    pub points: u32,
    /// Running score `(a, b)` after this possession.
    pub score: (u32, u32),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameResult {
    pub seed: u64,
    pub team_a: String,
    pub team_b: String,
    pub score: (u32, u32),
    pub box_score: BoxScore,
    pub synergy_a: TeamSynergy,
    pub synergy_b: TeamSynergy,
    /// Total possessions for both teams, overtime included.
    pub possessions: u32,
    pub periods: Vec<PeriodScore>,
    pub log: Vec<PossessionRecord>,
}

impl GameResult {
    pub fn synergy(&self, side: Side) -> &TeamSynergy {
        match side {
            Side::A => &self.synergy_a,
            Side::B => &self.synergy_b,
        }
    }

    pub fn points(&self, side: Side) -> u32 {
        match side {
            Side::A => self.score.0,
            Side::B => self.score.1,
        }
    }

    pub fn is_tied(&self) -> bool {
        self.score.0 == self.score.1
    }

    pub fn winner(&self) -> Option<Side> {
        match self.score.0.cmp(&self.score.1) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn overtimes(&self) -> usize {
        self.periods.iter().filter(|p| p.overtime).count()
    }
}

/// Possessions per team in regulation: floor of the mean pace.
pub fn regulation_possessions(a: &TeamSynergy, b: &TeamSynergy) -> u32 {
    ((a.pace + b.pace) / 2.0).floor().max(0.0) as u32
}

fn check_rosters(team_a: &Team, team_b: &Team) -> Result<()> {
    if let Some(dup) = team_a.all_players().iter().find(|p| team_b.contains(p.name())) {
        tracing::warn!(player = dup.name(), "player rostered on both teams");
        return Err(HoopsError::DuplicatePlayer(dup.name().to_string()));
    }
    Ok(())
}

struct GameRun<'a> {
    team_a: &'a Team,
    team_b: &'a Team,
    synergy_a: TeamSynergy,
    synergy_b: TeamSynergy,
    config: &'a SimConfig,
    box_score: BoxScore,
    score: (u32, u32),
    log: Vec<PossessionRecord>,
}

impl GameRun<'_> {
    fn play<R: Rng + ?Sized>(&mut self, offense: Side, period: &mut PeriodScore, rng: &mut R) {
        let ctx = match offense {
            Side::A => PossessionContext {
                offense: self.team_a,
                defense: self.team_b,
                off_syn: &self.synergy_a,
                def_syn: &self.synergy_b,
                config: self.config,
            },
            Side::B => PossessionContext {
                offense: self.team_b,
                defense: self.team_a,
                off_syn: &self.synergy_b,
                def_syn: &self.synergy_a,
                config: self.config,
            },
        };
        let outcome = possession(&ctx, rng);
        for update in &outcome.updates {
            self.box_score.apply(update);
        }
        match offense {
            Side::A => {
                self.score.0 += outcome.points;
                period.a += outcome.points;
            }
            Side::B => {
                self.score.1 += outcome.points;
                period.b += outcome.points;
            }
        }
        self.log.push(PossessionRecord {
            number: self.log.len() as u32 + 1,
            period: period.number,
            offense,
            kind: outcome.kind,
            points: outcome.points,
            score: self.score,
        });
    }
}

/// Simulate a full game.
///
/// With `seed == None` a seed is drawn from entropy; either way the seed used
/// is returned so the game can be replayed exactly.
pub fn simulate_game(
    team_a: &Team,
    team_b: &Team,
    seed: Option<u64>,
    config: &SimConfig,
) -> Result<GameResult> {
    config.validate()?;
    check_rosters(team_a, team_b)?;

    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let synergy_a = team_synergy(team_a, &config.synergy);
    let synergy_b = team_synergy(team_b, &config.synergy);
    let per_team = regulation_possessions(&synergy_a, &synergy_b);
    let total = per_team * 2;

    tracing::debug!(
        seed,
        pace_a = synergy_a.pace,
        pace_b = synergy_b.pace,
        per_team,
        "starting game {} vs {}",
        team_a.name,
        team_b.name
    );

    let mut box_score = BoxScore::new();
    box_score.register(team_a);
    box_score.register(team_b);

    let mut run = GameRun {
        team_a,
        team_b,
        synergy_a,
        synergy_b,
        config,
        box_score,
        score: (0, 0),
        log: Vec::with_capacity(total as usize),
    };

    let game = &config.game;
    let block = (total / game.periods).max(1);
    let mut periods: Vec<PeriodScore> =
        (1..=game.periods).map(|n| PeriodScore::new(n, false)).collect();

    for i in 0..total {
        let idx = (i / block).min(game.periods - 1) as usize;
        let offense = if i % 2 == 0 { Side::A } else { Side::B };
        run.play(offense, &mut periods[idx], &mut rng);
    }

    if game.overtime {
        let mut played = 0;
        while run.score.0 == run.score.1 && played < game.max_overtimes {
            played += 1;
            let mut period = PeriodScore::new(game.periods + played, true);
            for i in 0..game.overtime_possessions * 2 {
                let offense = if i % 2 == 0 { Side::A } else { Side::B };
                run.play(offense, &mut period, &mut rng);
            }
            tracing::debug!(overtime = played, a = period.a, b = period.b, "overtime complete");
            periods.push(period);
        }
    }

    let result = GameResult {
        seed,
        team_a: team_a.name.clone(),
        team_b: team_b.name.clone(),
        score: run.score,
        possessions: run.log.len() as u32,
        box_score: run.box_score,
        synergy_a,
        synergy_b,
        periods,
        log: run.log,
    };

    tracing::info!(
        seed,
        possessions = result.possessions,
        "final: {} {} - {} {}",
        result.team_a,
        result.score.0,
        result.score.1,
        result.team_b
    );
    Ok(result)
}
