use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Player, Position};
use crate::error::{HoopsError, Result};

/// Which of the two drafting teams.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn index(&self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    pub fn other(&self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn default_name(&self) -> &'static str {
        match self {
            Side::A => "Team A",
            Side::B => "Team B",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.default_name())
    }
}

/// A lineup under construction: one optional slot per position.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Lineup {
    slots: [Option<Player>; 5],
}

impl Lineup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Position) -> Option<&Player> {
        self.slots[pos.index()].as_ref()
    }

    /// Fill `pos`, returning whatever previously occupied it.
    pub fn set(&mut self, pos: Position, player: Player) -> Option<Player> {
        self.slots[pos.index()].replace(player)
    }

    pub fn clear(&mut self, pos: Position) -> Option<Player> {
        self.slots[pos.index()].take()
    }

    pub fn unfilled(&self) -> Vec<Position> {
        Position::ALL.iter().copied().filter(|pos| self.get(*pos).is_none()).collect()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Five players, one per position, in lineup order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "TeamRecord")]
pub struct Team {
    pub name: String,
    players: Vec<Player>,
}

/// Unchecked wire form of [`Team`].
#[derive(Deserialize)]
struct TeamRecord {
    name: String,
    players: Vec<Player>,
}

impl TryFrom<TeamRecord> for Team {
    type Error = HoopsError;

    fn try_from(record: TeamRecord) -> Result<Self> {
        let TeamRecord { name, players } = record;
        if players.len() != Position::ALL.len() {
            return Err(HoopsError::RosterSize { team: name, found: players.len() });
        }
        Ok(Self { name, players })
    }
}

impl Team {
    pub fn new(name: impl Into<String>, lineup: Lineup) -> Result<Self> {
        let name = name.into();
        let mut players = Vec::with_capacity(Position::ALL.len());
        for (pos, slot) in Position::ALL.iter().zip(lineup.slots) {
            match slot {
                Some(player) => players.push(player),
                None => return Err(HoopsError::IncompleteLineup { team: name, position: *pos }),
            }
        }
        Ok(Self { name, players })
    }

    /// Convenience constructor taking players already in PG..C order.
    pub fn from_players(name: impl Into<String>, players: [Player; 5]) -> Self {
        Self { name: name.into(), players: players.into() }
    }

    pub fn all_players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, pos: Position) -> &Player {
        &self.players[pos.index()]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name() == name)
    }
}
