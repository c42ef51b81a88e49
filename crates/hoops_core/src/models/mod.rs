pub mod box_score;
pub mod player;
pub mod team;

pub use box_score::{BoxScore, Stat, StatLine, StatUpdate};
pub use player::{Era, Player, PlayerProfile, Position};
pub use team::{Lineup, Side, Team};
