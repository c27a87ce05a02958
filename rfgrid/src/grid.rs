use crate::{GridError, Point};

/// Dense row-major storage for one value per grid cell.
///
/// Cell `(x, y)` lives at linear index `y * width + x`, so row `y` is
/// the contiguous slice `[y * width, (y + 1) * width)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    /// Number of (columns, rows) in this grid.
    dimensions: (usize, usize),

    /// Cell values.
    cells: Box<[T]>,
}

impl<T: Clone> Grid<T> {
    /// Returns a `width` by `height` grid with every cell set to
    /// `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Result<Self, GridError> {
        let len = check_dimensions(width, height)?;
        Ok(Self {
            dimensions: (width, height),
            cells: vec![fill; len].into_boxed_slice(),
        })
    }
}

impl<T> Grid<T> {
    /// Returns a grid backed by `cells`, which must be laid out
    /// row-major and hold exactly `width * height` values.
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        let len = check_dimensions(width, height)?;
        if cells.len() != len {
            return Err(GridError::Shape {
                what: "cells",
                line: 0,
                expected: len,
                found: cells.len(),
            });
        }
        Ok(Self {
            dimensions: (width, height),
            cells: cells.into_boxed_slice(),
        })
    }

    pub fn width(&self) -> usize {
        self.dimensions.0
    }

    pub fn height(&self) -> usize {
        self.dimensions.1
    }

    /// Returns the number of cells in this grid.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if `point` lies on this grid.
    pub fn contains(&self, point: Point) -> bool {
        self.checked_xy(point).is_some()
    }

    /// Returns the value at `point`, or `None` if `point` is off the
    /// grid.
    pub fn get(&self, point: Point) -> Option<&T> {
        self.checked_xy(point)
            .map(|xy| &self.cells[self.xy_to_linear_index(xy)])
    }

    /// Returns a mutable reference to the value at `point`, or `None`
    /// if `point` is off the grid.
    pub fn get_mut(&mut self, point: Point) -> Option<&mut T> {
        let idx = self
            .checked_xy(point)
            .map(|xy| self.xy_to_linear_index(xy))?;
        Some(&mut self.cells[idx])
    }

    /// Returns the value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is off the grid.
    pub fn get_xy(&self, (x, y): (usize, usize)) -> &T {
        assert!(x < self.width() && y < self.height());
        &self.cells[self.xy_to_linear_index((x, y))]
    }

    pub fn xy_to_linear_index(&self, (x, y): (usize, usize)) -> usize {
        self.dimensions.0 * y + x
    }

    pub fn linear_index_to_xy(&self, idx: usize) -> (usize, usize) {
        (idx % self.dimensions.0, idx / self.dimensions.0)
    }

    /// Returns an iterator over rows, top (`y = 0`) first.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks_exact(self.dimensions.0)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    fn checked_xy(&self, Point { x, y }: Point) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.dimensions.0 && y < self.dimensions.1).then_some((x, y))
    }
}

/// Returns the number of cells in a `width` by `height` grid.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<usize, GridError> {
    // Every cell must be addressable by an `i32` point.
    let max = i32::MAX as usize;
    match width.checked_mul(height) {
        Some(len) if width > 0 && height > 0 && width <= max && height <= max => Ok(len),
        _ => Err(GridError::Dimensions { width, height }),
    }
}
