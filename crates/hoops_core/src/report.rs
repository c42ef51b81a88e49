//! Text and tabular rendering of a finished game

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::{GameResult, TeamSynergy};
use crate::models::{Side, StatLine, Team};

/// One row of a team box score table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoxRow {
    pub player: String,
    pub pts: u32,
    /// `made-attempted`
    pub fg: String,
    pub three: String,
    pub ft: String,
    pub ast: u32,
    pub reb: u32,
    pub orb: u32,
    pub drb: u32,
    pub tov: u32,
}

impl BoxRow {
    fn from_line(player: &str, line: &StatLine) -> Self {
        Self {
            player: player.to_string(),
            pts: line.pts,
            fg: format!("{}-{}", line.fgm, line.fga),
            three: format!("{}-{}", line.fg3m, line.fg3a),
            ft: format!("{}-{}", line.ftm, line.fta),
            ast: line.ast,
            reb: line.rebounds(),
            orb: line.orb,
            drb: line.drb,
            tov: line.tov,
        }
    }
}

/// Rows for `team` in lineup order.
pub fn box_rows(team: &Team, result: &GameResult) -> Vec<BoxRow> {
    team.all_players()
        .iter()
        .map(|p| BoxRow::from_line(p.name(), &result.box_score.line(p.name())))
        .collect()
}

/// Synergy metrics in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynergyMetric {
    Spacing,
    RimPressure,
    BallMove,
    IntDef,
    PerDef,
    Rebounding,
    Pace,
}

impl SynergyMetric {
    pub const ALL: [SynergyMetric; 7] = [
        SynergyMetric::Spacing,
        SynergyMetric::RimPressure,
        SynergyMetric::BallMove,
        SynergyMetric::IntDef,
        SynergyMetric::PerDef,
        SynergyMetric::Rebounding,
        SynergyMetric::Pace,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SynergyMetric::Spacing => "Spacing",
            SynergyMetric::RimPressure => "Rim",
            SynergyMetric::BallMove => "Ball Move",
            SynergyMetric::IntDef => "Int D",
            SynergyMetric::PerDef => "Per D",
            SynergyMetric::Rebounding => "Reb",
            SynergyMetric::Pace => "Pace",
        }
    }

    pub fn value(&self, syn: &TeamSynergy) -> f32 {
        match self {
            SynergyMetric::Spacing => syn.spacing,
            SynergyMetric::RimPressure => syn.rim_pressure,
            SynergyMetric::BallMove => syn.ball_move,
            SynergyMetric::IntDef => syn.int_def,
            SynergyMetric::PerDef => syn.per_def,
            SynergyMetric::Rebounding => syn.rebounding,
            SynergyMetric::Pace => syn.pace,
        }
    }
}

/// Bar fill 0..=100. Pace maps 90..104 onto the bar; other metrics already
/// sit on a 0..100 scale and are clamped.
pub fn synergy_bar(metric: SynergyMetric, value: f32) -> u8 {
    let pct = match metric {
        SynergyMetric::Pace => (value - 90.0) * 100.0 / (104.0 - 90.0),
        _ => value,
    };
    if pct.is_nan() {
        return 0;
    }
    pct.clamp(0.0, 100.0) as u8
}

fn synergy_summary(syn: &TeamSynergy) -> String {
    format!(
        "spacing {:.1}, rim {:.1}, ball-move {:.1}, int D {:.1}, per D {:.1}, reb {:.1}, pace {:.1}",
        syn.spacing, syn.rim_pressure, syn.ball_move, syn.int_def, syn.per_def, syn.rebounding, syn.pace
    )
}

/// Final-score report; `Display` renders the full text.
pub struct FinalReport<'a> {
    result: &'a GameResult,
    teams: [&'a Team; 2],
    regulation_periods: u32,
}

impl<'a> FinalReport<'a> {
    pub fn new(result: &'a GameResult, team_a: &'a Team, team_b: &'a Team) -> Self {
        let regulation_periods = result.periods.iter().filter(|p| !p.overtime).count() as u32;
        Self { result, teams: [team_a, team_b], regulation_periods }
    }

    fn write_team(&self, f: &mut fmt::Formatter<'_>, team: &Team) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "--- {} Box ---", team.name)?;
        writeln!(
            f,
            "{:<22}  {:>3}  {:>6}  {:>6}  {:>6}  {:>3}  {:>11}  {:>3}",
            "PLAYER", "PTS", "FG", "3P", "FT", "AST", "REB (O/D)", "TOV"
        )?;
        for row in box_rows(team, self.result) {
            write_row(f, &row)?;
        }
        let totals = BoxRow::from_line("TOTAL", &self.result.box_score.team_totals(team));
        write_row(f, &totals)
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &BoxRow) -> fmt::Result {
    let reb = format!("{} ({}/{})", row.reb, row.orb, row.drb);
    writeln!(
        f,
        "{:<22}  {:>3}  {:>6}  {:>6}  {:>6}  {:>3}  {:>11}  {:>3}",
        row.player, row.pts, row.fg, row.three, row.ft, row.ast, reb, row.tov
    )
}

impl fmt::Display for FinalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.result;
        let [a, b] = self.teams;
        writeln!(f, "================ FINAL ================")?;
        writeln!(f, "{} {}  -  {} {}", a.name, r.score.0, b.name, r.score.1)?;
        writeln!(f, "Possessions: {}  (seed {})", r.possessions, r.seed)?;

        writeln!(f)?;
        writeln!(f, "Team Synergy (0-100 approx)")?;
        for (team, side) in [(a, Side::A), (b, Side::B)] {
            writeln!(f, "- {}: {}", team.name, synergy_summary(r.synergy(side)))?;
        }

        writeln!(f)?;
        let labels: Vec<String> =
            r.periods.iter().map(|p| format!("{:>4}", p.label(self.regulation_periods))).collect();
        writeln!(f, "{:<22}{}  {:>4}", "", labels.join(""), "T")?;
        for (team, side) in [(a, Side::A), (b, Side::B)] {
            let cells: Vec<String> = r
                .periods
                .iter()
                .map(|p| format!("{:>4}", if side == Side::A { p.a } else { p.b }))
                .collect();
            writeln!(f, "{:<22}{}  {:>4}", team.name, cells.join(""), r.points(side))?;
        }

        self.write_team(f, a)?;
        self.write_team(f, b)
    }
}

pub fn render_final(result: &GameResult, team_a: &Team, team_b: &Team) -> String {
    FinalReport::new(result, team_a, team_b).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::find_builtin;
    use crate::engine::{simulate_game, SimConfig};
    use crate::models::Player;

    fn team(name: &str, names: [&str; 5]) -> Team {
        let players: [Player; 5] = names.map(|n| find_builtin(n).unwrap());
        Team::from_players(name, players)
    }

    fn game() -> (Team, Team, GameResult) {
        let a = team("Celtics", ["Jason Kidd", "Ray Allen", "Paul Pierce", "Kevin Garnett", "Bill Russell"]);
        let b = team("Spurs", ["Tony Parker", "Manu Ginobili", "Kawhi Leonard", "Tim Duncan", "Dwight Howard"]);
        let r = simulate_game(&a, &b, Some(2024), &SimConfig::default()).unwrap();
        (a, b, r)
    }

    #[test]
    fn test_synergy_bar_normalisation() {
        assert_eq!(synergy_bar(SynergyMetric::Pace, 90.0), 0);
        assert_eq!(synergy_bar(SynergyMetric::Pace, 97.0), 50);
        assert_eq!(synergy_bar(SynergyMetric::Pace, 110.0), 100);
        assert_eq!(synergy_bar(SynergyMetric::Spacing, 63.7), 63);
        assert_eq!(synergy_bar(SynergyMetric::IntDef, -4.0), 0);
        assert_eq!(synergy_bar(SynergyMetric::Rebounding, 140.0), 100);
    }

    #[test]
    fn test_box_rows_follow_lineup() {
        let (a, _, r) = game();
        let rows = box_rows(&a, &r);
        let names: Vec<&str> = rows.iter().map(|row| row.player.as_str()).collect();
        assert_eq!(names, ["Jason Kidd", "Ray Allen", "Paul Pierce", "Kevin Garnett", "Bill Russell"]);
        assert_eq!(rows.iter().map(|row| row.pts).sum::<u32>(), r.score.0);
        assert!(rows.iter().all(|row| row.reb == row.orb + row.drb));
    }

    #[test]
    fn test_render_final_contents() {
        let (a, b, r) = game();
        let text = render_final(&r, &a, &b);
        assert!(text.starts_with("================ FINAL ================"));
        assert!(text.contains(&format!("Celtics {}  -  Spurs {}", r.score.0, r.score.1)));
        assert!(text.contains(&format!("Possessions: {}", r.possessions)));
        assert!(text.contains("--- Celtics Box ---"));
        assert!(text.contains("--- Spurs Box ---"));
        assert!(text.contains("Q4"));
        assert_eq!(text.matches("TOTAL").count(), 2);
        for p in a.all_players().iter().chain(b.all_players()) {
            assert!(text.contains(p.name()));
        }
    }
}
