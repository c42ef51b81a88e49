//! Career line → 0..99 rating conversion
//!
//! Each rating scales one or more career stats against a typical NBA range and
//! blends them. `usage` and `three_tendency` are shares, not 0..99 ratings.

use serde::{Deserialize, Serialize};

use crate::models::PlayerProfile;

/// Ceiling of the rating scale.
pub const RATING_MAX: f32 = 99.0;

/// Derived, engine-facing ratings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PlayerRatings {
    pub finishing: f32,
    pub three: f32,
    pub mid: f32,
    pub ft: f32,
    pub playmaking: f32,
    pub per_def: f32,
    pub int_def: f32,
    pub rebounding: f32,
    pub athletic: f32,
    /// Share of team shots (0.10..=0.40).
    pub usage: f32,
    /// Share of own shots taken from three (0.0..=0.60).
    pub three_tendency: f32,
}

impl PlayerRatings {
    /// Draft-value heuristic: offense + defense + half of rebounding.
    pub fn overall(&self) -> f32 {
        self.finishing
            + self.three
            + self.mid
            + self.playmaking
            + self.per_def
            + self.int_def
            + 0.5 * self.rebounding
    }
}

/// Map `val` from the `lo..hi` range onto 0..99, clamped.
///
/// A degenerate range yields the midpoint 50.
#[inline]
pub fn scale_to_99(val: f32, lo: f32, hi: f32) -> f32 {
    if hi == lo {
        return 50.0;
    }
    let t = (val - lo) / (hi - lo);
    (RATING_MAX * t).max(0.0).min(RATING_MAX)
}

pub fn build_player_ratings(p: &PlayerProfile) -> PlayerRatings {
    let height = p.height_in as f32;

    // Scoring
    let finishing = scale_to_99(p.ts, 0.50, 0.65) * 0.7 + scale_to_99(p.ppg, 12.0, 32.0) * 0.3;
    let three =
        scale_to_99(p.three_pct, 0.28, 0.44) * 0.8 + scale_to_99(p.three_rate, 0.02, 0.55) * 0.2;
    let mid = (scale_to_99(p.ts, 0.52, 0.60) + scale_to_99(p.ppg, 12.0, 30.0)) / 2.0;
    let ft = scale_to_99(p.ft_pct, 0.60, 0.92);

    let playmaking = scale_to_99(p.apg, 2.0, 11.5) * 0.7 + scale_to_99(p.obpm, 0.0, 10.5) * 0.3;

    // Defense
    let per_def = scale_to_99(p.dbpm, 0.0, 4.8) * 0.7 + scale_to_99(p.ws48, 0.10, 0.26) * 0.3;
    let int_def = scale_to_99(p.dbpm, 0.0, 4.8) * 0.6 + scale_to_99(p.rpg, 3.5, 13.0) * 0.4;

    let rebounding = scale_to_99(p.rpg, 3.5, 13.0) * 0.7 + scale_to_99(height, 72.0, 86.0) * 0.3;

    // rough proxy
    let athletic = scale_to_99(p.ws48, 0.10, 0.26) * 0.5 + scale_to_99(p.ts, 0.50, 0.65) * 0.5;

    let usage = (0.25 + (p.ppg - 15.0) * 0.015).max(0.10).min(0.40);
    let three_tendency = p.three_rate.max(0.0).min(0.60);

    PlayerRatings {
        finishing,
        three,
        mid,
        ft,
        playmaking,
        per_def,
        int_def,
        rebounding,
        athletic,
        usage,
        three_tendency,
    }
}
