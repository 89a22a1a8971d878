//! Monster move selection.
//!
//! The selector runs a fixed-depth alternating search from the monster's
//! cell with alpha-beta style cutoffs. Both the comparison metric and the
//! cutoff bounds are Manhattan distances to the player, and every level
//! returns one of its *own* candidate cells rather than a propagated score.
//! Deeper levels therefore only cost work: the chosen move is always the
//! first neighbor that is strictly closer to the player than anything
//! before it (starting from the monster's current cell), or the current
//! cell when no neighbor improves on it.

use std::mem;

use wumpus_core::Point;

use crate::distance::manhattan;
use crate::traits::Pather;

/// Default lookahead used by the game.
pub const DEFAULT_DEPTH: u32 = 3;

/// Which way a search level wants the distance to the player to go.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    /// Monster's turn: prefer candidates closer to the player.
    Reducing,
    /// Opponent's turn: prefer candidates farther from the player.
    Increasing,
}

impl Mode {
    #[inline]
    fn flip(self) -> Self {
        match self {
            Mode::Reducing => Mode::Increasing,
            Mode::Increasing => Mode::Reducing,
        }
    }
}

/// Picks the monster's next cell.
///
/// Owns one neighbor buffer per search level so that repeated calls do not
/// allocate after the first one.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    depth: u32,
    bufs: Vec<Vec<Point>>,
    visited: usize,
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl MoveSelector {
    /// Create a selector searching `depth` levels deep.
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            bufs: (0..depth).map(|_| Vec::with_capacity(4)).collect(),
            visited: 0,
        }
    }

    /// The configured search depth.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of search nodes expanded by the last [`select`](Self::select).
    #[inline]
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Choose the next position for a monster standing on `from`, chasing
    /// `player`.
    ///
    /// The result is either `from` itself or one of the cells `pather`
    /// reports as a neighbor of `from`.
    pub fn select<P: Pather>(&mut self, pather: &P, from: Point, player: Point) -> Point {
        self.visited = 0;
        let next = self.search(
            pather,
            from,
            player,
            self.depth,
            i32::MIN,
            i32::MAX,
            Mode::Reducing,
        );
        log::trace!(
            "move search from {} toward {}: {} nodes, chose {}",
            from,
            player,
            self.visited,
            next
        );
        next
    }

    #[allow(clippy::too_many_arguments)]
    fn search<P: Pather>(
        &mut self,
        pather: &P,
        pos: Point,
        player: Point,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        mode: Mode,
    ) -> Point {
        self.visited += 1;
        if depth == 0 {
            return pos;
        }

        let level = (depth - 1) as usize;
        let mut moves = mem::take(&mut self.bufs[level]);
        moves.clear();
        pather.neighbors(pos, &mut moves);

        let mut best = pos;
        for &mv in moves.iter() {
            // Explored for its cutoffs only; the level result is one of
            // this level's candidates.
            self.search(pather, mv, player, depth - 1, alpha, beta, mode.flip());

            let dist = manhattan(mv, player);
            let best_dist = manhattan(best, player);
            match mode {
                Mode::Reducing => {
                    if dist < best_dist {
                        best = mv;
                    }
                    alpha = alpha.max(dist);
                }
                Mode::Increasing => {
                    if dist > best_dist {
                        best = mv;
                    }
                    beta = beta.min(dist);
                }
            }
            if beta <= alpha {
                break;
            }
        }

        self.bufs[level] = moves;
        best
    }
}
