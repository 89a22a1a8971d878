//! Round configuration.

use std::fmt;

use wumpus_core::Range;

/// Side length of the classic board.
pub const BOARD_SIZE: i32 = 10;
/// Number of obstacles placed each round.
pub const OBSTACLE_COUNT: usize = 5;
/// Cells taken by the player, the monster and the treasure.
pub const ENTITY_COUNT: usize = 3;
/// Deepest monster search accepted. Search cost roughly triples per level.
pub const MAX_SEARCH_DEPTH: u32 = 8;

/// Tunables for a game. `Default` is the classic 10×10 board with five
/// obstacles and a three-level monster search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Width and height of the square board.
    pub board_size: i32,
    /// Obstacles placed at the start of every round.
    pub obstacle_count: usize,
    /// Lookahead of the monster's move search.
    pub search_depth: u32,
    /// Random draws tried for each placement before falling back to picking
    /// among the remaining free cells.
    pub max_placement_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            obstacle_count: OBSTACLE_COUNT,
            search_depth: wumpus_paths::DEFAULT_DEPTH,
            max_placement_attempts: 1000,
        }
    }
}

impl GameConfig {
    /// The board rectangle.
    pub fn bounds(&self) -> Range {
        Range::square(self.board_size)
    }

    /// Number of distinct cells a round occupies.
    pub fn occupied_cells(&self) -> usize {
        ENTITY_COUNT + self.obstacle_count
    }

    /// Check that a round can be laid out on this board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size <= 0 {
            return Err(ConfigError::NonPositiveBoard(self.board_size));
        }
        let cells = self.bounds().len();
        let needed = self.occupied_cells();
        if cells < needed {
            return Err(ConfigError::TooCrowded { cells, needed });
        }
        if self.search_depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::SearchTooDeep {
                depth: self.search_depth,
                max: MAX_SEARCH_DEPTH,
            });
        }
        Ok(())
    }
}

/// Errors reported for an unusable [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The board size is zero or negative.
    NonPositiveBoard(i32),
    /// The board has fewer cells than the round needs.
    TooCrowded { cells: usize, needed: usize },
    /// The monster search depth exceeds [`MAX_SEARCH_DEPTH`].
    SearchTooDeep { depth: u32, max: u32 },
    /// A prepared round does not match the configured board.
    BoardMismatch { config: Range, state: Range },
    /// A prepared round has a different number of obstacles than configured.
    ObstacleMismatch { config: usize, state: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveBoard(size) => write!(f, "board size must be positive, got {size}"),
            Self::TooCrowded { cells, needed } => write!(
                f,
                "board has {cells} cells but a round needs {needed} distinct cells"
            ),
            Self::SearchTooDeep { depth, max } => {
                write!(f, "search depth {depth} exceeds the maximum of {max}")
            }
            Self::BoardMismatch { config, state } => {
                write!(f, "round is laid out on {state} but the board is {config}")
            }
            Self::ObstacleMismatch { config, state } => write!(
                f,
                "round has {state} obstacles but {config} are configured"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
