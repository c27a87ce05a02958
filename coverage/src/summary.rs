use rfgrid::{Grid, Point, C};
use serde::Serialize;

/// Coverage statistics of a signal grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub width: usize,
    pub height: usize,

    /// Number of obstacle (`NaN`) cells.
    pub obstacles: usize,

    /// Number of cells at or above `threshold_dbm`.
    pub covered: usize,

    /// Coverage threshold used to count `covered` (dBm).
    pub threshold_dbm: C,

    /// Weakest non-obstacle value (dBm), if any.
    pub min_dbm: Option<C>,

    /// Strongest non-obstacle value (dBm), if any.
    pub max_dbm: Option<C>,

    /// Mean of non-obstacle values (dBm), if any.
    pub mean_dbm: Option<C>,

    /// Location of the first cell holding `max_dbm`.
    pub max_at: Option<Point>,
}

impl Summary {
    pub fn new(signal: &Grid<C>, threshold_dbm: C) -> Self {
        let mut obstacles = 0;
        let mut covered = 0;
        let mut n = 0_usize;
        let mut sum = 0.0;
        let mut min = C::INFINITY;
        let mut max: Option<(C, usize)> = None;

        for (idx, &value) in signal.as_slice().iter().enumerate() {
            if value.is_nan() {
                obstacles += 1;
                continue;
            }
            if value >= threshold_dbm {
                covered += 1;
            }
            n += 1;
            sum += value;
            min = min.min(value);
            if max.map_or(true, |(m, _)| value > m) {
                max = Some((value, idx));
            }
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let max_at = max.map(|(_, idx)| {
            let (x, y) = signal.linear_index_to_xy(idx);
            Point::new(x as i32, y as i32)
        });

        #[allow(clippy::cast_precision_loss)]
        let mean_dbm = (n > 0).then(|| sum / n as C);

        Self {
            width: signal.width(),
            height: signal.height(),
            obstacles,
            covered,
            threshold_dbm,
            min_dbm: (n > 0).then_some(min),
            max_dbm: max.map(|(m, _)| m),
            mean_dbm,
            max_at,
        }
    }
}
