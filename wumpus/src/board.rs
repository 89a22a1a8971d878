//! Board geometry and obstacles.

use wumpus_core::{Point, Range};
use wumpus_paths::{Pather, cardinal};

/// The grid and its obstacles. Obstacles are fixed for the whole round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    bounds: Range,
    obstacles: Vec<Point>,
}

impl Board {
    /// Create a board covering `bounds` with the given obstacle cells.
    pub fn new(bounds: Range, obstacles: Vec<Point>) -> Self {
        Self { bounds, obstacles }
    }

    /// The board rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Obstacle cells, in placement order.
    #[inline]
    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    /// Whether `p` lies on the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` holds an obstacle.
    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.obstacles.contains(&p)
    }

    /// Whether `p` is on the board and free of obstacles.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.contains(p) && !self.is_blocked(p)
    }
}

impl Pather for Board {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        cardinal(p, buf, |n| self.passable(n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(
            Range::square(10),
            vec![Point::new(1, 1), Point::new(5, 5)],
        )
    }

    #[test]
    fn blocked_cells() {
        let b = board();
        assert!(b.is_blocked(Point::new(1, 1)));
        assert!(!b.is_blocked(Point::new(1, 2)));
        assert!(!b.passable(Point::new(5, 5)));
        assert!(!b.passable(Point::new(10, 0)));
        assert!(b.passable(Point::new(9, 9)));
    }

    #[test]
    fn neighbors_skip_obstacles_and_edges() {
        let b = board();
        let mut buf = Vec::new();
        b.neighbors(Point::new(1, 0), &mut buf);
        // Down (1,1) is an obstacle.
        assert_eq!(buf, vec![Point::new(0, 0), Point::new(2, 0)]);
    }
}
