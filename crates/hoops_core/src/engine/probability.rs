//! Probability calculation utilities for possession simulation
//!
//! All functions are pure - they take ratings, synergies and a config section
//! and return a probability. This keeps every formula testable without
//! running a game.

use super::config::{
    AssistParams, FoulParams, FreeThrowParams, PutbackParams, ReboundParams, ShootingParams,
    ShotSelectionParams, TurnoverParams,
};
use super::synergy::TeamSynergy;
use crate::player::PlayerRatings;

/// Ratings sit on a 0..99 scale; formulas measure distance from this midpoint.
pub const AVERAGE_RATING: f32 = 50.0;

// ============================================================================
// Ball security
// ============================================================================

/// Ball movement protects the ball; perimeter defense takes it away.
#[inline]
pub fn turnover(off: &TeamSynergy, def: &TeamSynergy, p: &TurnoverParams) -> f32 {
    p.bounds.apply(
        p.base - (off.ball_move - AVERAGE_RATING) * p.ball_move_weight
            + (def.per_def - AVERAGE_RATING) * p.per_def_weight,
    )
}

#[inline]
pub fn assist(off: &TeamSynergy, shooter: &PlayerRatings, p: &AssistParams) -> f32 {
    p.bounds.apply(
        p.base
            + (off.ball_move - AVERAGE_RATING) * p.ball_move_weight
            + (off.spacing - AVERAGE_RATING) * p.spacing_weight
            + (shooter.playmaking - AVERAGE_RATING) * p.playmaking_weight,
    )
}

// ============================================================================
// Shot selection
// ============================================================================

/// Chance the shooter takes a three.
#[inline]
pub fn three_point_attempt(
    off: &TeamSynergy,
    def: &TeamSynergy,
    shooter: &PlayerRatings,
    p: &ShotSelectionParams,
) -> f32 {
    p.three_bounds.apply(
        p.three_base + shooter.three_tendency + (off.spacing - AVERAGE_RATING) * p.spacing_weight
            - (def.per_def - AVERAGE_RATING) * p.per_def_weight,
    )
}

/// Share of a two-point attempt that plays as a rim attempt rather than a
/// mid-range shot.
#[inline]
pub fn inside_bias(off: &TeamSynergy, def: &TeamSynergy, p: &ShotSelectionParams) -> f32 {
    p.inside_bias_bounds
        .apply((off.rim_pressure - def.int_def) * p.inside_bias_weight + p.inside_bias_base)
}

/// `(shot_skill, defense_faced)` for the chosen shot type.
pub fn shot_matchup(
    is_three: bool,
    off: &TeamSynergy,
    def: &TeamSynergy,
    shooter: &PlayerRatings,
    selection: &ShotSelectionParams,
    shooting: &ShootingParams,
) -> (f32, f32) {
    if is_three {
        (shooter.three, def.per_def)
    } else {
        let bias = inside_bias(off, def, selection);
        let skill = bias * shooter.finishing + (1.0 - bias) * shooter.mid;
        let defense =
            shooting.interior_share * def.int_def + (1.0 - shooting.interior_share) * def.per_def;
        (skill, defense)
    }
}

// ============================================================================
// Shooting
// ============================================================================

#[inline]
pub fn make(shot_skill: f32, defense: f32, is_three: bool, p: &ShootingParams) -> f32 {
    let mut base = (shot_skill - defense) * p.skill_weight + p.base;
    if is_three {
        base -= p.three_penalty;
        p.three_bounds.apply(base)
    } else {
        p.two_bounds.apply(base)
    }
}

/// Shooting-foul chance on a two-point attempt.
#[inline]
pub fn shooting_foul(shooter: &PlayerRatings, def: &TeamSynergy, p: &FoulParams) -> f32 {
    p.bounds.apply(
        p.base + (shooter.finishing - AVERAGE_RATING) * p.finishing_weight
            - (def.int_def - AVERAGE_RATING) * p.int_def_weight,
    )
}

#[inline]
pub fn free_throw(shooter: &PlayerRatings, def: &TeamSynergy, p: &FreeThrowParams) -> f32 {
    p.bounds.apply(
        p.base + (shooter.ft - AVERAGE_RATING) * p.ft_weight
            - (def.int_def - AVERAGE_RATING) * p.int_def_weight,
    )
}

// ============================================================================
// Rebounding
// ============================================================================

#[inline]
pub fn offensive_rebound(off: &TeamSynergy, def: &TeamSynergy, p: &ReboundParams) -> f32 {
    p.bounds.apply((off.rebounding - def.rebounding) * p.edge_weight + p.base)
}

#[inline]
pub fn putback(shooter: &PlayerRatings, def: &TeamSynergy, p: &PutbackParams) -> f32 {
    p.bounds.apply(
        p.base + (shooter.finishing - AVERAGE_RATING) * p.finishing_weight
            - (def.int_def - AVERAGE_RATING) * p.int_def_weight,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::SimConfig;

    fn avg() -> TeamSynergy {
        TeamSynergy {
            spacing: 50.0,
            rim_pressure: 50.0,
            ball_move: 50.0,
            int_def: 50.0,
            per_def: 50.0,
            rebounding: 50.0,
            pace: 96.0,
        }
    }

    fn avg_player() -> PlayerRatings {
        PlayerRatings {
            finishing: 50.0,
            three: 50.0,
            mid: 50.0,
            ft: 50.0,
            playmaking: 50.0,
            per_def: 50.0,
            int_def: 50.0,
            rebounding: 50.0,
            athletic: 50.0,
            usage: 0.25,
            three_tendency: 0.2,
        }
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_average_matchup_hits_base_rates() {
        let cfg = SimConfig::default();
        let (o, d, s) = (avg(), avg(), avg_player());
        assert!(close(turnover(&o, &d, &cfg.turnover), 0.125));
        assert!(close(assist(&o, &s, &cfg.assist), 0.45));
        assert!(close(three_point_attempt(&o, &d, &s, &cfg.shot_selection), 0.25));
        assert!(close(inside_bias(&o, &d, &cfg.shot_selection), 0.5));
        assert!(close(make(50.0, 50.0, false, &cfg.shooting), 0.48));
        assert!(close(make(50.0, 50.0, true, &cfg.shooting), 0.41));
        assert!(close(shooting_foul(&s, &d, &cfg.foul), 0.05));
        assert!(close(free_throw(&s, &d, &cfg.free_throw), 0.50));
        assert!(close(offensive_rebound(&o, &d, &cfg.rebound), 0.24));
        assert!(close(putback(&s, &d, &cfg.putback), 0.54));
    }

    #[test]
    fn test_turnover_clamps() {
        let cfg = SimConfig::default();
        let sloppy = TeamSynergy { ball_move: 0.0, ..avg() };
        let hawks = TeamSynergy { per_def: 99.0, ..avg() };
        assert!(close(turnover(&sloppy, &hawks, &cfg.turnover), 0.18));

        let wizards = TeamSynergy { ball_move: 99.0, ..avg() };
        let matadors = TeamSynergy { per_def: 0.0, ..avg() };
        assert!(close(turnover(&wizards, &matadors, &cfg.turnover), 0.06));
    }

    #[test]
    fn test_make_bounds_by_shot_type() {
        let p = SimConfig::default().shooting;
        assert!(close(make(99.0, 0.0, false, &p), 0.73));
        assert!(close(make(0.0, 99.0, false, &p), 0.30));
        assert!(close(make(99.0, 0.0, true, &p), 0.52));
        assert!(close(make(0.0, 99.0, true, &p), 0.24));
    }

    #[test]
    fn test_two_point_matchup_blends_finishing_and_mid() {
        let cfg = SimConfig::default();
        let shooter = PlayerRatings { finishing: 90.0, mid: 30.0, ..avg_player() };
        let (skill, defense) =
            shot_matchup(false, &avg(), &avg(), &shooter, &cfg.shot_selection, &cfg.shooting);
        assert!(close(skill, 60.0));
        assert!(close(defense, 50.0));

        let (skill, defense) =
            shot_matchup(true, &avg(), &avg(), &shooter, &cfg.shot_selection, &cfg.shooting);
        assert!(close(skill, 50.0));
        assert!(close(defense, 50.0));
    }

    #[test]
    fn test_great_free_throw_shooter_caps() {
        let cfg = SimConfig::default();
        let nash = PlayerRatings { ft: 99.0, ..avg_player() };
        let weak_interior = TeamSynergy { int_def: 0.0, ..avg() };
        assert!(close(free_throw(&nash, &weak_interior, &cfg.free_throw), 0.784));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every probability stays inside its configured bounds
            #[test]
            fn prop_probabilities_respect_bounds(
                ball_move in 0.0f32..99.0,
                spacing in 0.0f32..99.0,
                per_def in 0.0f32..99.0,
                int_def in 0.0f32..99.0,
                rebounding in 0.0f32..99.0,
                finishing in 0.0f32..99.0,
                tendency in 0.0f32..0.6,
            ) {
                let cfg = SimConfig::default();
                let off = TeamSynergy { ball_move, spacing, rebounding, ..avg() };
                let def = TeamSynergy { per_def, int_def, ..avg() };
                let shooter = PlayerRatings { finishing, three_tendency: tendency, ..avg_player() };

                prop_assert!(cfg.turnover.bounds.contains(turnover(&off, &def, &cfg.turnover)));
                prop_assert!(cfg.assist.bounds.contains(assist(&off, &shooter, &cfg.assist)));
                prop_assert!(cfg.shot_selection.three_bounds.contains(
                    three_point_attempt(&off, &def, &shooter, &cfg.shot_selection)));
                prop_assert!(cfg.foul.bounds.contains(shooting_foul(&shooter, &def, &cfg.foul)));
                prop_assert!(cfg.rebound.bounds.contains(offensive_rebound(&off, &def, &cfg.rebound)));
                prop_assert!(cfg.putback.bounds.contains(putback(&shooter, &def, &cfg.putback)));
            }
        }
    }
}
