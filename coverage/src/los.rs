//! Line of sight across the obstacle grid.

use rfgrid::{Grid, Point};

/// Iterator over every cell a straight line from `start` to `end`
/// passes through, both endpoints included.
///
/// This is an integer, error-accumulating (Bresenham style) walk that
/// moves along exactly one axis per step, so a line visits
/// `1 + |dx| + |dy|` cells and never slips diagonally between two
/// blocked cells.
#[derive(Debug, Clone)]
pub struct GridLine {
    x: i32,
    y: i32,
    x_inc: i32,
    y_inc: i32,
    /// Twice the absolute x span.
    dx2: i64,
    /// Twice the absolute y span.
    dy2: i64,
    error: i64,
    remaining: usize,
}

impl GridLine {
    /// Returns a line walked from `start` to `end`.
    pub fn new(start: Point, end: Point) -> Self {
        let dx = (i64::from(end.x) - i64::from(start.x)).abs();
        let dy = (i64::from(end.y) - i64::from(start.y)).abs();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let remaining = (1 + dx + dy) as usize;
        Self {
            x: start.x,
            y: start.y,
            x_inc: if end.x > start.x { 1 } else { -1 },
            y_inc: if end.y > start.y { 1 } else { -1 },
            dx2: dx * 2,
            dy2: dy * 2,
            error: dx - dy,
            remaining,
        }
    }

    /// Returns the line between `a` and `b`, always walked from the
    /// lesser endpoint, so that `between(a, b)` and `between(b, a)`
    /// visit identical cells.
    pub fn between(a: Point, b: Point) -> Self {
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }
}

impl Iterator for GridLine {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let point = Point::new(self.x, self.y);
        if self.remaining > 0 {
            if self.error > 0 {
                self.x += self.x_inc;
                self.error -= self.dy2;
            } else {
                self.y += self.y_inc;
                self.error += self.dx2;
            }
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for GridLine {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// Returns true if any cell on the line between `a` and `b`,
/// endpoints included, is an obstacle.
pub fn has_obstacle_between(obstacles: &Grid<bool>, a: Point, b: Point) -> bool {
    GridLine::between(a, b).any(|point| obstacles.get(point).copied().unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::{has_obstacle_between, GridLine};
    use rfgrid::{Grid, Point};
    use std::collections::BTreeSet;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_horizontal_line() {
        let cells: Vec<Point> = GridLine::new(p(0, 0), p(3, 0)).collect();
        assert_eq!(cells, vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
    }

    #[test]
    fn test_vertical_line_reversed() {
        let cells: Vec<Point> = GridLine::new(p(2, 3), p(2, 0)).collect();
        assert_eq!(cells, vec![p(2, 3), p(2, 2), p(2, 1), p(2, 0)]);
    }

    #[test]
    fn test_single_cell_line() {
        let mut line = GridLine::new(p(5, 5), p(5, 5));
        assert_eq!(line.len(), 1);
        assert_eq!(line.next(), Some(p(5, 5)));
        assert_eq!(line.next(), None);
    }

    #[test]
    fn test_line_shape() {
        for (a, b) in [
            (p(0, 0), p(7, 3)),
            (p(7, 3), p(0, 0)),
            (p(-2, 4), p(3, -6)),
            (p(1, 1), p(4, 4)),
            (p(9, 0), p(0, 2)),
        ] {
            let line = GridLine::new(a, b);
            let expected_len = 1 + (b.x - a.x).unsigned_abs() + (b.y - a.y).unsigned_abs();
            assert_eq!(line.len(), expected_len as usize);
            let cells: Vec<Point> = line.collect();
            assert_eq!(cells.len(), expected_len as usize);
            assert_eq!(cells.first(), Some(&a));
            assert_eq!(cells.last(), Some(&b));
            for pair in cells.windows(2) {
                let step = (pair[1].x - pair[0].x).abs() + (pair[1].y - pair[0].y).abs();
                assert_eq!(step, 1, "{:?} -> {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_between_is_symmetric() {
        for ax in 0..6 {
            for ay in 0..6 {
                for bx in 0..6 {
                    for by in 0..6 {
                        let forward: BTreeSet<Point> =
                            GridLine::between(p(ax, ay), p(bx, by)).collect();
                        let backward: BTreeSet<Point> =
                            GridLine::between(p(bx, by), p(ax, ay)).collect();
                        assert_eq!(forward, backward);
                    }
                }
            }
        }
    }

    #[test]
    fn test_obstruction_is_symmetric() {
        let mut obstacles = Grid::new(8, 8, false).unwrap();
        for (x, y) in [(3, 3), (4, 3), (1, 5), (6, 1), (2, 2)] {
            *obstacles.get_mut(p(x, y)).unwrap() = true;
        }
        for ax in 0..8 {
            for ay in 0..8 {
                for bx in 0..8 {
                    for by in 0..8 {
                        assert_eq!(
                            has_obstacle_between(&obstacles, p(ax, ay), p(bx, by)),
                            has_obstacle_between(&obstacles, p(bx, by), p(ax, ay)),
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_obstruction() {
        let mut obstacles = Grid::new(10, 10, false).unwrap();
        *obstacles.get_mut(p(1, 0)).unwrap() = true;
        assert!(has_obstacle_between(&obstacles, p(0, 0), p(3, 0)));
        assert!(has_obstacle_between(&obstacles, p(1, 0), p(1, 0)));
        assert!(!has_obstacle_between(&obstacles, p(0, 1), p(3, 1)));
        assert!(!has_obstacle_between(&obstacles, p(0, 0), p(0, 9)));
    }
}
