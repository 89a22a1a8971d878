//! Grid search for the wumpus board.
//!
//! - [`Pather`] describes which cells can be entered from a given cell.
//! - [`cardinal`] enumerates 4-way neighbors in the fixed order the monster
//!   considers them.
//! - [`MoveSelector`] picks the monster's next step with a bounded
//!   alternating search biased toward the player.

mod distance;
mod neighbors;
mod selector;
mod traits;

pub use distance::manhattan;
pub use neighbors::cardinal;
pub use selector::{DEFAULT_DEPTH, MoveSelector};
pub use traits::Pather;
