//! Round state and the rules that act on it.

use std::fmt;

use wumpus_core::{Direction, Point, Range};
use wumpus_paths::MoveSelector;

use crate::board::Board;
use crate::status::Outcome;

/// What a presentation layer should show in a cell.
///
/// The treasure stays hidden until the player stands on it; the monster is
/// always visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Empty,
    Obstacle,
    Player,
    Treasure,
    Monster,
}

/// Full state of one round.
///
/// Positions only change through [`attempt_move`](Self::attempt_move) (the
/// player and then the monster) and nothing changes once the round is over.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    board: Board,
    player: Point,
    monster: Point,
    treasure: Point,
    active: bool,
    has_arrow: bool,
}

impl GameState {
    /// Start a round with the given layout. The player, the monster, the
    /// treasure and every obstacle must sit on distinct cells of the board.
    pub fn new(
        board: Board,
        player: Point,
        monster: Point,
        treasure: Point,
    ) -> Result<Self, StateError> {
        let mut seen: Vec<Point> = Vec::with_capacity(3 + board.obstacles().len());
        for p in [player, monster, treasure]
            .into_iter()
            .chain(board.obstacles().iter().copied())
        {
            if !board.contains(p) {
                return Err(StateError::OutOfBounds {
                    pos: p,
                    bounds: board.bounds(),
                });
            }
            if seen.contains(&p) {
                return Err(StateError::Overlap(p));
            }
            seen.push(p);
        }
        Ok(Self {
            board,
            player,
            monster,
            treasure,
            active: true,
            has_arrow: true,
        })
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> Point {
        self.player
    }

    pub fn monster(&self) -> Point {
        self.monster
    }

    pub fn treasure(&self) -> Point {
        self.treasure
    }

    pub fn obstacles(&self) -> &[Point] {
        self.board.obstacles()
    }

    /// Whether the round is still being played.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the arrow is still available.
    pub fn has_arrow(&self) -> bool {
        self.has_arrow
    }

    /// Whether `p` holds an obstacle.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.board.is_blocked(p)
    }

    /// What to show at `p`, or `None` off the board.
    pub fn tile_at(&self, p: Point) -> Option<Tile> {
        if !self.board.contains(p) {
            return None;
        }
        let tile = if p == self.monster {
            Tile::Monster
        } else if p == self.treasure && p == self.player {
            Tile::Treasure
        } else if p == self.player {
            Tile::Player
        } else if self.board.is_blocked(p) {
            Tile::Obstacle
        } else {
            Tile::Empty
        };
        Some(tile)
    }

    /// Every cell of the board with its tile, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.board
            .bounds()
            .iter()
            .filter_map(|p| self.tile_at(p).map(|t| (p, t)))
    }

    // -------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------

    /// Move the player to `target`, then let the monster answer.
    ///
    /// The monster only moves if the player's move did not end the round,
    /// and the round is evaluated again afterwards since the monster may
    /// step onto the player.
    pub fn attempt_move(&mut self, target: Point, selector: &mut MoveSelector) -> Outcome {
        if !self.active {
            return Outcome::Inactive;
        }
        if !self.board.passable(target) {
            return Outcome::Blocked;
        }

        self.player = target;
        let outcome = self.evaluate();
        if !self.active {
            return outcome;
        }

        self.monster = selector.select(&self.board, self.monster, self.player);
        self.evaluate()
    }

    /// Loose the arrow at the cell next to the player in direction `dir`.
    ///
    /// The target is not clamped to the board: shooting off the edge is
    /// allowed and always misses.
    pub fn shoot(&mut self, dir: Direction) -> Outcome {
        if !self.active {
            return Outcome::Inactive;
        }
        if !self.has_arrow {
            return Outcome::NoArrows;
        }

        if self.player.step(dir) == self.monster {
            self.active = false;
            Outcome::HitMonster
        } else {
            self.has_arrow = false;
            Outcome::MissedMonster
        }
    }

    fn evaluate(&mut self) -> Outcome {
        if self.player == self.monster {
            self.active = false;
            Outcome::Lost
        } else if self.player == self.treasure {
            self.active = false;
            Outcome::FoundTreasure
        } else {
            Outcome::Continue {
                has_arrow: self.has_arrow,
            }
        }
    }
}

/// Errors for a round layout that breaks the placement rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A position lies outside the board.
    OutOfBounds { pos: Point, bounds: Range },
    /// Two things were placed on the same cell.
    Overlap(Point),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "position {pos} is outside the board {bounds}")
            }
            Self::Overlap(pos) => write!(f, "cell {pos} is occupied twice"),
        }
    }
}

impl std::error::Error for StateError {}
