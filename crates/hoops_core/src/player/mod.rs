//! Player rating system

pub mod ratings;

pub use ratings::{build_player_ratings, scale_to_99, PlayerRatings, RATING_MAX};
