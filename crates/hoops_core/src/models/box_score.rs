use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Team;

/// Counting stats tracked per player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Pts,
    Fga,
    Fgm,
    Fg3a,
    Fg3m,
    Fta,
    Ftm,
    Ast,
    Orb,
    Drb,
    Tov,
}

/// One increment produced by a possession.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatUpdate {
    pub player: String,
    pub stat: Stat,
    pub value: u32,
}

impl StatUpdate {
    pub fn new(player: &str, stat: Stat, value: u32) -> Self {
        Self { player: player.to_string(), stat, value }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatLine {
    pub pts: u32,
    pub fga: u32,
    pub fgm: u32,
    pub fg3a: u32,
    pub fg3m: u32,
    pub fta: u32,
    pub ftm: u32,
    pub ast: u32,
    pub orb: u32,
    pub drb: u32,
    pub tov: u32,
}

impl StatLine {
    pub fn apply(&mut self, stat: Stat, value: u32) {
        let field = match stat {
            Stat::Pts => &mut self.pts,
            Stat::Fga => &mut self.fga,
            Stat::Fgm => &mut self.fgm,
            Stat::Fg3a => &mut self.fg3a,
            Stat::Fg3m => &mut self.fg3m,
            Stat::Fta => &mut self.fta,
            Stat::Ftm => &mut self.ftm,
            Stat::Ast => &mut self.ast,
            Stat::Orb => &mut self.orb,
            Stat::Drb => &mut self.drb,
            Stat::Tov => &mut self.tov,
        };
        *field += value;
    }

    pub fn rebounds(&self) -> u32 {
        self.orb + self.drb
    }

    pub fn add(&mut self, other: &StatLine) {
        self.pts += other.pts;
        self.fga += other.fga;
        self.fgm += other.fgm;
        self.fg3a += other.fg3a;
        self.fg3m += other.fg3m;
        self.fta += other.fta;
        self.ftm += other.ftm;
        self.ast += other.ast;
        self.orb += other.orb;
        self.drb += other.drb;
        self.tov += other.tov;
    }

    /// Field-goal percentage, `None` without attempts.
    pub fn fg_pct(&self) -> Option<f32> {
        (self.fga > 0).then(|| self.fgm as f32 / self.fga as f32)
    }
}

/// Per-player lines for one game, keyed by player name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BoxScore {
    lines: BTreeMap<String, StatLine>,
}

impl BoxScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed zeroed lines for every player on `team`.
    pub fn register(&mut self, team: &Team) {
        for player in team.all_players() {
            self.lines.entry(player.name().to_string()).or_default();
        }
    }

    pub fn apply(&mut self, update: &StatUpdate) {
        self.lines.entry(update.player.clone()).or_default().apply(update.stat, update.value);
    }

    pub fn line(&self, name: &str) -> StatLine {
        self.lines.get(name).copied().unwrap_or_default()
    }

    pub fn team_totals(&self, team: &Team) -> StatLine {
        let mut totals = StatLine::default();
        for player in team.all_players() {
            totals.add(&self.line(player.name()));
        }
        totals
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatLine)> {
        self.lines.iter().map(|(name, line)| (name.as_str(), line))
    }
}
