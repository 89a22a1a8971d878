//! Hunt the Wumpus — game state and rules for a 10×10 board.
//!
//! The player walks the board looking for hidden gold while the Wumpus
//! closes in after every move. A single arrow can kill the Wumpus if it is
//! standing right next to the player. Rendering and input handling are left
//! to the caller; this crate only owns the round state.

pub mod board;
pub mod config;
pub mod game;
pub mod placement;
pub mod state;
pub mod status;

pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use state::{GameState, StateError, Tile};
pub use status::{Outcome, StatusEntry, StatusLog};
pub use wumpus_core::{Direction, Point, Range};
