use wumpus_core::{Direction, Point};

/// Append the 4-directional neighbors of `p` to `buf`, keeping only those for
/// which `keep` returns `true`.
///
/// Neighbors are produced in [`Direction::ALL`] order: left, right, up, down.
pub fn cardinal(p: Point, buf: &mut Vec<Point>, keep: impl Fn(Point) -> bool) {
    for dir in Direction::ALL {
        let n = p.step(dir);
        if keep(n) {
            buf.push(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wumpus_core::Range;

    #[test]
    fn order_is_left_right_up_down() {
        let mut buf = Vec::new();
        cardinal(Point::new(5, 5), &mut buf, |_| true);
        assert_eq!(
            buf,
            vec![
                Point::new(4, 5),
                Point::new(6, 5),
                Point::new(5, 4),
                Point::new(5, 6),
            ]
        );
    }

    #[test]
    fn corner_keeps_in_bounds_only() {
        let bounds = Range::square(10);
        let mut buf = Vec::new();
        cardinal(Point::new(9, 9), &mut buf, |n| bounds.contains(n));
        assert_eq!(buf, vec![Point::new(8, 9), Point::new(9, 8)]);
    }

    #[test]
    fn appends_without_clearing() {
        let mut buf = vec![Point::new(0, 0)];
        cardinal(Point::new(1, 1), &mut buf, |n| n.x == 1);
        assert_eq!(buf.len(), 3);
    }
}
