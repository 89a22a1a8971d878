//! Random round layout.
//!
//! Every placement is rejection-sampled against the cells already taken. The
//! draws are bounded by [`GameConfig::max_placement_attempts`]; once they run
//! out, the cell is picked uniformly among the remaining free cells, so a
//! valid configuration always yields a layout.

use rand::{Rng, RngExt};
use wumpus_core::{Point, Range};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::state::GameState;

/// A uniformly random cell of `bounds`. `bounds` must not be empty.
pub fn random_cell(rng: &mut impl Rng, bounds: Range) -> Point {
    Point::new(
        rng.random_range(bounds.min.x..bounds.max.x),
        rng.random_range(bounds.min.y..bounds.max.y),
    )
}

/// A random cell of `bounds` not listed in `taken`, or `None` if every cell
/// is taken.
pub fn free_cell(
    rng: &mut impl Rng,
    bounds: Range,
    taken: &[Point],
    max_attempts: u32,
) -> Option<Point> {
    if bounds.is_empty() {
        return None;
    }
    for _ in 0..max_attempts {
        let p = random_cell(rng, bounds);
        if !taken.contains(&p) {
            return Some(p);
        }
    }

    let free: Vec<Point> = bounds.iter().filter(|p| !taken.contains(p)).collect();
    if free.is_empty() {
        return None;
    }
    log::debug!(
        "placement fell back to {} free cells after {} draws",
        free.len(),
        max_attempts
    );
    Some(free[rng.random_range(0..free.len())])
}

/// Lay out a fresh round: the player, then the treasure, then the monster,
/// then the obstacles, each on a cell nothing else occupies.
pub fn place_round(rng: &mut impl Rng, config: &GameConfig) -> Result<GameState, ConfigError> {
    config.validate()?;
    let bounds = config.bounds();
    let attempts = config.max_placement_attempts;
    let crowded = ConfigError::TooCrowded {
        cells: bounds.len(),
        needed: config.occupied_cells(),
    };

    let mut taken = Vec::with_capacity(config.occupied_cells());
    for _ in 0..config.occupied_cells() {
        let p = free_cell(rng, bounds, &taken, attempts).ok_or_else(|| crowded.clone())?;
        taken.push(p);
    }

    let obstacles = taken.split_off(3);
    let (player, treasure, monster) = (taken[0], taken[1], taken[2]);
    let board = Board::new(bounds, obstacles);
    // Cells were drawn distinct and in bounds above.
    GameState::new(board, player, monster, treasure).map_err(|_| crowded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_cell_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Range::new(2, 3, 5, 4);
        for _ in 0..200 {
            assert!(bounds.contains(random_cell(&mut rng, bounds)));
        }
    }

    #[test]
    fn free_cell_avoids_taken() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = Range::square(2);
        let taken = [Point::new(0, 0), Point::new(1, 0), Point::new(0, 1)];
        for _ in 0..20 {
            assert_eq!(free_cell(&mut rng, bounds, &taken, 50), Some(Point::new(1, 1)));
        }
    }

    #[test]
    fn free_cell_falls_back_without_draws() {
        let mut rng = StdRng::seed_from_u64(2);
        let bounds = Range::square(3);
        let taken: Vec<Point> = bounds.iter().filter(|p| *p != Point::new(2, 1)).collect();
        assert_eq!(free_cell(&mut rng, bounds, &taken, 0), Some(Point::new(2, 1)));
    }

    #[test]
    fn free_cell_on_full_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = Range::square(2);
        let taken: Vec<Point> = bounds.iter().collect();
        assert_eq!(free_cell(&mut rng, bounds, &taken, 10), None);
        assert_eq!(free_cell(&mut rng, Range::square(0), &[], 10), None);
    }

    #[test]
    fn rounds_use_distinct_cells() {
        let mut rng = StdRng::seed_from_u64(42);
        let cfg = GameConfig::default();
        for _ in 0..500 {
            let s = place_round(&mut rng, &cfg).unwrap();
            let mut cells = vec![s.player(), s.monster(), s.treasure()];
            cells.extend_from_slice(s.obstacles());
            assert_eq!(cells.len(), 8);
            for (i, a) in cells.iter().enumerate() {
                assert!(cfg.bounds().contains(*a));
                assert!(!cells[i + 1..].contains(a), "{a} placed twice");
            }
            assert!(s.is_active());
            assert!(s.has_arrow());
        }
    }

    #[test]
    fn fills_an_exactly_sized_board() {
        let mut rng = StdRng::seed_from_u64(9);
        let cfg = GameConfig {
            board_size: 3,
            obstacle_count: 6,
            max_placement_attempts: 4,
            ..GameConfig::default()
        };
        let s = place_round(&mut rng, &cfg).unwrap();
        assert_eq!(s.obstacles().len(), 6);
        // Only the hidden treasure shows as empty.
        assert_eq!(s.tiles().filter(|(_, t)| *t == crate::Tile::Empty).count(), 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let cfg = GameConfig {
            board_size: 2,
            ..GameConfig::default()
        };
        assert!(place_round(&mut rng, &cfg).is_err());
    }
}
