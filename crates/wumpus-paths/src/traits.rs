use wumpus_core::Point;

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the cells reachable in one step from `p` into `buf`, in the
    /// order they should be considered. The caller clears `buf` before
    /// calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
