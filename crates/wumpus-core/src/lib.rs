//! **wumpus-core** — geometry shared by the Hunt the Wumpus crates.
//!
//! Cells are addressed by [`Point`], the board is a half-open [`Range`], and
//! arrows travel in one of the four [`Direction`]s.

pub mod geom;

pub use geom::{Direction, ParseDirectionError, Point, Range};
