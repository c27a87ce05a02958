use crate::{Grid, GridError, Point, Transmitter, C};
use log::debug;

/// Value held by a non-obstacle cell that receives no power at all
/// (e.g. when no transmitters are configured).
pub const NO_SIGNAL_DBM: C = 0.0;

/// Value held by obstacle cells; coverage inside obstacles is not
/// modeled.
pub const OBSTACLE_SENTINEL: C = C::NAN;

/// The area being planned: its obstacle mask, its transmitters, and
/// the per-cell signal strength computed from them.
///
/// Coordinate arguments are permissive: adding an obstacle or
/// transmitter off the grid is a silent no-op. Use the `try_` variants
/// to get an error instead.
#[derive(Debug, Clone)]
pub struct Environment {
    /// `true` where a cell blocks signal.
    obstacles: Grid<bool>,

    /// Aggregate received power (dBm) for each cell.
    signal: Grid<C>,

    /// Transmitters, in insertion order.
    transmitters: Vec<Transmitter>,
}

/// Disjoint borrows of an [`Environment`]'s inputs and its signal
/// grid, used to fill in the signal grid while reading the rest.
pub struct EnvironmentMut<'a> {
    pub obstacles: &'a Grid<bool>,
    pub transmitters: &'a [Transmitter],
    pub signal: &'a mut Grid<C>,
}

impl Environment {
    /// Returns an empty `width` by `height` environment.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let obstacles = Grid::new(width, height, false)?;
        let signal = Grid::new(width, height, NO_SIGNAL_DBM)?;
        Ok(Self {
            obstacles,
            signal,
            transmitters: Vec::new(),
        })
    }

    pub fn width(&self) -> usize {
        self.obstacles.width()
    }

    pub fn height(&self) -> usize {
        self.obstacles.height()
    }

    /// Returns true if `(x, y)` lies on the grid.
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        self.obstacles.contains(Point::new(x, y))
    }

    /// Marks `(x, y)` as an obstacle; does nothing if `(x, y)` is off
    /// the grid.
    pub fn add_obstacle(&mut self, x: i32, y: i32) {
        if self.try_add_obstacle(x, y).is_err() {
            debug!("ignoring out of bounds obstacle ({x}, {y})");
        }
    }

    /// Marks `(x, y)` as an obstacle.
    pub fn try_add_obstacle(&mut self, x: i32, y: i32) -> Result<(), GridError> {
        let point = Point::new(x, y);
        if !self.obstacles.contains(point) {
            return Err(self.out_of_bounds(x, y));
        }
        if let Some(blocked) = self.obstacles.get_mut(point) {
            *blocked = true;
        }
        if let Some(signal) = self.signal.get_mut(point) {
            *signal = OBSTACLE_SENTINEL;
        }
        Ok(())
    }

    /// Marks every cell of the half-open rectangle `[x0, x1) × [y0, y1)`
    /// as an obstacle. Parts of the rectangle off the grid are ignored.
    pub fn add_obstacle_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let clamp_x = |v: i32| v.clamp(0, self.width() as i32);
        let clamp_y = |v: i32| v.clamp(0, self.height() as i32);
        let (x0, x1) = (clamp_x(x0), clamp_x(x1));
        let (y0, y1) = (clamp_y(y0), clamp_y(y1));
        for y in y0..y1 {
            for x in x0..x1 {
                self.add_obstacle(x, y);
            }
        }
    }

    /// Adds a transmitter at `(x, y)`; does nothing if `(x, y)` is off
    /// the grid.
    pub fn add_transmitter(&mut self, x: i32, y: i32, power_dbm: C) {
        if self.try_add_transmitter(x, y, power_dbm).is_err() {
            debug!("ignoring out of bounds transmitter ({x}, {y})");
        }
    }

    /// Adds a transmitter at `(x, y)`.
    pub fn try_add_transmitter(&mut self, x: i32, y: i32, power_dbm: C) -> Result<(), GridError> {
        if !self.is_valid(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        self.transmitters.push(Transmitter {
            location: Point::new(x, y),
            power_dbm,
        });
        Ok(())
    }

    /// Returns true if `point` is an obstacle. Points off the grid are
    /// never obstacles.
    pub fn is_obstacle(&self, point: Point) -> bool {
        self.obstacles.get(point).copied().unwrap_or(false)
    }

    /// Returns the number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.as_slice().iter().filter(|&&b| b).count()
    }

    pub fn transmitters(&self) -> &[Transmitter] {
        &self.transmitters
    }

    pub fn obstacles(&self) -> &Grid<bool> {
        &self.obstacles
    }

    pub fn signal(&self) -> &Grid<C> {
        &self.signal
    }

    /// Returns the signal strength (dBm) at `point`, or `None` if
    /// `point` is off the grid. Obstacle cells hold
    /// [`OBSTACLE_SENTINEL`].
    pub fn signal_at(&self, point: Point) -> Option<C> {
        self.signal.get(point).copied()
    }

    /// Splits `self` into read-only inputs and the writable signal
    /// grid.
    pub fn split_mut(&mut self) -> EnvironmentMut<'_> {
        EnvironmentMut {
            obstacles: &self.obstacles,
            transmitters: &self.transmitters,
            signal: &mut self.signal,
        }
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width(),
            height: self.height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Environment, GridError, Point, NO_SIGNAL_DBM};

    #[test]
    fn test_out_of_bounds_setup_is_ignored() {
        let mut env = Environment::new(10, 10).unwrap();
        env.add_obstacle(-1, 0);
        env.add_obstacle(10, 0);
        env.add_obstacle(0, 10);
        env.add_transmitter(-5, 3, 95.0);
        env.add_transmitter(3, 100, 95.0);
        assert_eq!(env.obstacle_count(), 0);
        assert!(env.transmitters().is_empty());
    }

    #[test]
    fn test_strict_setup_reports_out_of_bounds() {
        let mut env = Environment::new(4, 2).unwrap();
        assert!(matches!(
            env.try_add_obstacle(4, 0),
            Err(GridError::OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 2
            })
        ));
        assert!(env.try_add_transmitter(0, -1, 10.0).is_err());
        assert!(env.try_add_transmitter(3, 1, 10.0).is_ok());
        assert_eq!(env.transmitters().len(), 1);
        assert_eq!(env.transmitters()[0].location, Point::new(3, 1));
    }

    #[test]
    fn test_obstacle_holds_sentinel() {
        let mut env = Environment::new(3, 3).unwrap();
        env.add_obstacle(1, 1);
        assert!(env.is_obstacle(Point::new(1, 1)));
        assert!(!env.is_obstacle(Point::new(0, 0)));
        assert!(!env.is_obstacle(Point::new(9, 9)));
        assert!(env.signal_at(Point::new(1, 1)).unwrap().is_nan());
        assert_eq!(env.signal_at(Point::new(0, 1)), Some(NO_SIGNAL_DBM));
        assert_eq!(env.signal_at(Point::new(3, 0)), None);
    }

    #[test]
    fn test_obstacle_rect_is_clipped() {
        let mut env = Environment::new(5, 5).unwrap();
        env.add_obstacle_rect(3, -2, 8, 2);
        assert_eq!(env.obstacle_count(), 4);
        for (x, y) in [(3, 0), (4, 0), (3, 1), (4, 1)] {
            assert!(env.is_obstacle(Point::new(x, y)));
        }
        env.add_obstacle_rect(2, 2, 2, 5);
        assert_eq!(env.obstacle_count(), 4);
    }

    #[test]
    fn test_zero_sized_environment() {
        assert!(Environment::new(0, 10).is_err());
        assert!(Environment::new(10, 0).is_err());
    }
}
