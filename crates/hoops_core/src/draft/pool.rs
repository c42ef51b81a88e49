//! Queries over a draftable player pool

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Player, Position};

/// Options shown per pick unless a caller asks for a different count.
pub const DEFAULT_OPTIONS: usize = 5;

/// Players eligible at `pos` (primary or secondary), in pool order.
pub fn list_by_position(pos: Position, pool: &[Player]) -> Vec<&Player> {
    pool.iter().filter(|p| p.plays(pos)).collect()
}

/// Case-insensitive exact match on the trimmed name.
pub fn find_player<'a>(name: &str, pool: &'a [Player]) -> Option<&'a Player> {
    position_in_pool(name, pool).map(|i| &pool[i])
}

/// Index form of [`find_player`].
pub fn position_in_pool(name: &str, pool: &[Player]) -> Option<usize> {
    let wanted = name.trim().to_lowercase();
    pool.iter().position(|p| p.name().to_lowercase() == wanted)
}

/// Up to `k` distinct random candidates for `pos`.
pub fn sample_options<R: Rng + ?Sized>(
    pos: Position,
    pool: &[Player],
    k: usize,
    rng: &mut R,
) -> Vec<Player> {
    list_by_position(pos, pool).choose_multiple(rng, k).map(|p| (*p).clone()).collect()
}

/// Candidates for `pos`, best overall first. Ties keep pool order.
pub fn ranked_by_position(pos: Position, pool: &[Player]) -> Vec<&Player> {
    let mut ranked = list_by_position(pos, pool);
    ranked.sort_by(|a, b| b.overall().total_cmp(&a.overall()));
    ranked
}

/// Highest overall among `candidates`; the first one wins a tie.
pub fn best_of<'a, I>(candidates: I) -> Option<&'a Player>
where
    I: IntoIterator<Item = &'a Player>,
{
    candidates.into_iter().fold(None, |best: Option<&Player>, p| match best {
        Some(b) if b.overall() >= p.overall() => Some(b),
        _ => Some(p),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::player_pool;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_list_includes_secondary_positions() {
        let pool = player_pool();
        let forwards = list_by_position(Position::PF, &pool);
        assert!(forwards.iter().all(|p| p.plays(Position::PF)));
        assert!(forwards.iter().any(|p| p.position() != Position::PF));
    }

    #[test]
    fn test_find_player_trims_and_ignores_case() {
        let pool = player_pool();
        assert_eq!(find_player("  tim duncan ", &pool).map(Player::name), Some("Tim Duncan"));
        assert!(find_player("Tim", &pool).is_none());
    }

    #[test]
    fn test_sample_options_distinct_and_eligible() {
        let pool = player_pool();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for pos in Position::ALL {
            let opts = sample_options(pos, &pool, DEFAULT_OPTIONS, &mut rng);
            assert_eq!(opts.len(), DEFAULT_OPTIONS);
            assert!(opts.iter().all(|p| p.plays(pos)));
            let names: HashSet<&str> = opts.iter().map(Player::name).collect();
            assert_eq!(names.len(), opts.len());
        }
    }

    #[test]
    fn test_sample_options_short_pool() {
        let pool: Vec<Player> = player_pool()
            .into_iter()
            .filter(|p| p.plays(Position::C))
            .take(2)
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(sample_options(Position::C, &pool, DEFAULT_OPTIONS, &mut rng).len(), 2);
        assert!(sample_options(Position::PG, &pool, DEFAULT_OPTIONS, &mut rng).len() <= 2);
    }

    #[test]
    fn test_ranked_is_descending() {
        let pool = player_pool();
        let ranked = ranked_by_position(Position::SF, &pool);
        assert!(ranked.windows(2).all(|w| w[0].overall() >= w[1].overall()));
        assert_eq!(best_of(ranked.iter().copied()).map(Player::name), ranked.first().map(|p| p.name()));
    }
}
