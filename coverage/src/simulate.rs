use crate::{
    model::PathLoss,
    power::PowerSum,
};
use log::debug;
use rayon::prelude::*;
use rfgrid::{
    Environment, EnvironmentMut, Grid, Point, Transmitter, C, NO_SIGNAL_DBM, OBSTACLE_SENTINEL,
};

/// Fills an [`Environment`]'s signal grid from its obstacles and
/// transmitters.
///
/// Every cell is independent of every other, so rows are computed in
/// parallel with no shared mutable state.
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    model: PathLoss,
}

impl Simulation {
    pub fn new(model: PathLoss) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &PathLoss {
        &self.model
    }

    /// Returns the aggregate signal (dBm) at `point` without touching
    /// `env`'s signal grid.
    ///
    /// Returns `None` if `point` is off the grid.
    pub fn cell(&self, env: &Environment, point: Point) -> Option<C> {
        env.obstacles()
            .contains(point)
            .then(|| aggregate(&self.model, env.obstacles(), env.transmitters(), point))
    }

    /// Recomputes every cell of `env`'s signal grid.
    pub fn simulate(&self, env: &mut Environment) {
        self.simulate_with_progress(env, |_row| {});
    }

    /// Like [`Simulation::simulate`], calling `on_row` with each row's
    /// `y` as soon as that row is done. Rows finish in no particular
    /// order.
    pub fn simulate_with_progress<F>(&self, env: &mut Environment, on_row: F)
    where
        F: Fn(usize) + Sync,
    {
        let now = std::time::Instant::now();
        let EnvironmentMut {
            obstacles,
            transmitters,
            signal,
        } = env.split_mut();
        let width = signal.width();
        let height = signal.height();

        signal
            .as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let y_i32 = y as i32;
                for (x, cell) in row.iter_mut().enumerate() {
                    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                    let receiver = Point::new(x as i32, y_i32);
                    *cell = aggregate(&self.model, obstacles, transmitters, receiver);
                }
                on_row(y);
            });

        debug!(
            "simulate; grid: {width}x{height}, transmitters: {}, exec: {:?}",
            transmitters.len(),
            now.elapsed()
        );
    }
}

/// Returns the combined power (dBm) from all `transmitters` at
/// `receiver`.
///
/// Obstacle cells yield [`OBSTACLE_SENTINEL`] and cells receiving no
/// power at all yield [`NO_SIGNAL_DBM`].
fn aggregate(
    model: &PathLoss,
    obstacles: &Grid<bool>,
    transmitters: &[Transmitter],
    receiver: Point,
) -> C {
    if obstacles.get(receiver).copied().unwrap_or(false) {
        return OBSTACLE_SENTINEL;
    }
    transmitters
        .iter()
        .map(|tx| model.received_power(obstacles, tx, receiver))
        .collect::<PowerSum>()
        .total_dbm()
        .unwrap_or(NO_SIGNAL_DBM)
}
