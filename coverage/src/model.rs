use crate::{error::CoverageError, los::has_obstacle_between};
use rfgrid::{Grid, Point, Transmitter, C};

/// Path loss exponent of an unobstructed, free-space path.
pub const FREE_SPACE_EXPONENT: C = 2.0;

/// Default path loss exponent; models a lossy, cluttered environment.
pub const DEFAULT_EXPONENT: C = 4.0;

/// Default penalty (dB) applied to a path crossing any obstacle.
pub const DEFAULT_OBSTACLE_ATTENUATION_DB: C = 25.0;

/// Log-distance path loss with a flat obstacle penalty.
///
/// Received power at distance `d` (cells) from a transmitter is
///
/// ```text
/// P_rx = P_tx - 10 * n * log10(d) - (obstructed ? A : 0)
/// ```
///
/// where `n` is the path loss exponent and `A` the obstacle
/// attenuation. The penalty is applied once per transmitter, however
/// many obstacle cells the path crosses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathLoss {
    exponent: C,
    obstacle_attenuation_db: C,
}

impl Default for PathLoss {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_EXPONENT,
            obstacle_attenuation_db: DEFAULT_OBSTACLE_ATTENUATION_DB,
        }
    }
}

impl PathLoss {
    pub fn builder() -> PathLossBuilder {
        PathLossBuilder {
            exponent: DEFAULT_EXPONENT,
            obstacle_attenuation_db: DEFAULT_OBSTACLE_ATTENUATION_DB,
        }
    }

    pub fn exponent(&self) -> C {
        self.exponent
    }

    pub fn obstacle_attenuation_db(&self) -> C {
        self.obstacle_attenuation_db
    }

    /// Returns the distance-only loss (dB) over `distance` cells.
    ///
    /// `distance` must be positive.
    #[inline]
    pub fn distance_loss_db(&self, distance: C) -> C {
        10.0 * self.exponent * distance.log10()
    }

    /// Returns the power (dBm) received at `receiver` from `tx`.
    ///
    /// A receiver sitting on the transmitter gets the full transmit
    /// power.
    pub fn received_power(&self, obstacles: &Grid<bool>, tx: &Transmitter, receiver: Point) -> C {
        let distance = tx.location.distance(receiver);
        if distance == 0.0 {
            return tx.power_dbm;
        }
        let signal = tx.power_dbm - self.distance_loss_db(distance);
        if has_obstacle_between(obstacles, tx.location, receiver) {
            signal - self.obstacle_attenuation_db
        } else {
            signal
        }
    }
}

pub struct PathLossBuilder {
    /// Path loss exponent (defaults to [`DEFAULT_EXPONENT`]).
    exponent: C,

    /// Obstacle penalty in dB (defaults to
    /// [`DEFAULT_OBSTACLE_ATTENUATION_DB`]).
    obstacle_attenuation_db: C,
}

impl PathLossBuilder {
    /// Path loss exponent (unitless, >= 0).
    #[must_use]
    pub fn exponent(mut self, exponent: C) -> Self {
        self.exponent = exponent;
        self
    }

    /// Penalty applied to obstructed paths (dB, >= 0).
    #[must_use]
    pub fn obstacle_attenuation(mut self, db: C) -> Self {
        self.obstacle_attenuation_db = db;
        self
    }

    pub fn build(&self) -> Result<PathLoss, CoverageError> {
        let check = |name: &'static str, value: C| {
            if value.is_finite() && value >= 0.0 {
                Ok(value)
            } else {
                Err(CoverageError::Param { name, value })
            }
        };
        Ok(PathLoss {
            exponent: check("exponent", self.exponent)?,
            obstacle_attenuation_db: check("obstacle_attenuation", self.obstacle_attenuation_db)?,
        })
    }
}
