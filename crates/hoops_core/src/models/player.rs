use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::HoopsError;
use crate::player::ratings::{build_player_ratings, PlayerRatings};

/// Lineup slot. Declaration order is lineup order (PG first, C last).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    pub const ALL: [Position; 5] =
        [Position::PG, Position::SG, Position::SF, Position::PF, Position::C];

    pub fn code(&self) -> &'static str {
        match self {
            Position::PG => "PG",
            Position::SG => "SG",
            Position::SF => "SF",
            Position::PF => "PF",
            Position::C => "C",
        }
    }

    /// Slot index in `Position::ALL`.
    pub fn index(&self) -> usize {
        match self {
            Position::PG => 0,
            Position::SG => 1,
            Position::SF => 2,
            Position::PF => 3,
            Position::C => 4,
        }
    }

    pub fn is_perimeter(&self) -> bool {
        matches!(self, Position::PG | Position::SG | Position::SF)
    }

    pub fn is_big(&self) -> bool {
        matches!(self, Position::PF | Position::C)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Position {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PG" => Ok(Position::PG),
            "SG" => Ok(Position::SG),
            "SF" => Ok(Position::SF),
            "PF" => Ok(Position::PF),
            "C" => Ok(Position::C),
            other => Err(HoopsError::InvalidPosition(other.to_string())),
        }
    }
}

/// Decade a player's prime belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Era {
    #[serde(rename = "60s")]
    Sixties,
    #[serde(rename = "70s")]
    Seventies,
    #[serde(rename = "80s")]
    Eighties,
    #[serde(rename = "90s")]
    Nineties,
    #[serde(rename = "00s")]
    Aughts,
    #[serde(rename = "10s")]
    Tens,
    #[serde(rename = "20s")]
    Twenties,
}

impl Era {
    pub fn label(&self) -> &'static str {
        match self {
            Era::Sixties => "60s",
            Era::Seventies => "70s",
            Era::Eighties => "80s",
            Era::Nineties => "90s",
            Era::Aughts => "00s",
            Era::Tens => "10s",
            Era::Twenties => "20s",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Era {
    type Err = HoopsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "60s" => Ok(Era::Sixties),
            "70s" => Ok(Era::Seventies),
            "80s" => Ok(Era::Eighties),
            "90s" => Ok(Era::Nineties),
            "00s" => Ok(Era::Aughts),
            "10s" => Ok(Era::Tens),
            "20s" => Ok(Era::Twenties),
            other => Err(HoopsError::InvalidPlayer {
                name: String::new(),
                reason: format!("unknown era '{other}'"),
            }),
        }
    }
}

/// Career line a player is rated from.
///
/// Percentages (`ts`, `three_pct`, `ft_pct`, `three_rate`) are fractions in 0..=1.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerProfile {
    pub name: String,
    pub pos_primary: Position,
    #[serde(default)]
    pub pos_secondary: Vec<Position>,
    pub era: Era,
    pub ppg: f32,
    pub rpg: f32,
    pub apg: f32,
    pub ts: f32,
    pub three_pct: f32,
    pub ft_pct: f32,
    pub obpm: f32,
    pub dbpm: f32,
    pub ws48: f32,
    pub three_rate: f32,
    pub height_in: u8,
    pub weight_lb: u16,
}

/// A draftable player: career profile plus derived ratings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub profile: PlayerProfile,
    pub ratings: PlayerRatings,
}

impl Player {
    pub fn new(profile: PlayerProfile) -> Self {
        let ratings = build_player_ratings(&profile);
        Self { profile, ratings }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn position(&self) -> Position {
        self.profile.pos_primary
    }

    /// True when `pos` is the player's primary or a listed secondary position.
    pub fn plays(&self, pos: Position) -> bool {
        self.profile.pos_primary == pos || self.profile.pos_secondary.contains(&pos)
    }

    pub fn overall(&self) -> f32 {
        self.ratings.overall()
    }

    /// One-line summary used by draft option lists.
    pub fn label(&self) -> String {
        let p = &self.profile;
        format!(
            "{} ({}) | PPG {:.1}, 3P% {}%, TS {:.3}",
            p.name,
            p.pos_primary,
            p.ppg,
            (p.three_pct * 100.0) as u32,
            p.ts
        )
    }
}

impl From<PlayerProfile> for Player {
    fn from(profile: PlayerProfile) -> Self {
        Player::new(profile)
    }
}
