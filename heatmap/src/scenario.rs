//! Scenario files.
//!
//! ```json
//! {
//!   "width": 100,
//!   "height": 100,
//!   "path_loss_exponent": 4.0,
//!   "obstacle_attenuation_db": 25.0,
//!   "obstacles": [
//!     { "rect": { "x0": 20, "y0": 20, "x1": 60, "y1": 60 } },
//!     { "cell": { "x": 70, "y": 5 } }
//!   ],
//!   "transmitters": [
//!     { "x": 10, "y": 10, "power_dbm": 107.0 },
//!     { "x": 90, "y": 90 }
//!   ]
//! }
//! ```

use crate::options::ModelArgs;
use anyhow::{bail, Result};
use coverage::{PathLoss, DEFAULT_EXPONENT, DEFAULT_OBSTACLE_ATTENUATION_DB};
use rfgrid::{Environment, Point};
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::Path};

/// Transmit power (dBm) used when a transmitter doesn't list one.
pub const DEFAULT_TX_POWER_DBM: f64 = 95.0;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub width: usize,

    pub height: usize,

    #[serde(default = "default_exponent")]
    pub path_loss_exponent: f64,

    #[serde(default = "default_obstacle_attenuation")]
    pub obstacle_attenuation_db: f64,

    #[serde(default)]
    pub obstacles: Vec<Obstacle>,

    #[serde(default)]
    pub transmitters: Vec<TransmitterConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Obstacle {
    /// A single blocked cell.
    Cell(Point),

    /// Every cell of `[x0, x1) × [y0, y1)`.
    Rect { x0: i32, y0: i32, x1: i32, y1: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransmitterConfig {
    pub x: i32,

    pub y: i32,

    #[serde(default = "default_tx_power")]
    pub power_dbm: f64,
}

fn default_exponent() -> f64 {
    DEFAULT_EXPONENT
}

fn default_obstacle_attenuation() -> f64 {
    DEFAULT_OBSTACLE_ATTENUATION_DB
}

fn default_tx_power() -> f64 {
    DEFAULT_TX_POWER_DBM
}

impl Scenario {
    /// Returns a scenario parsed from the JSON file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let rdr = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(rdr)?)
    }

    /// A building in the middle of a campus with two access points,
    /// one stronger than the other.
    pub fn demo(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            path_loss_exponent: DEFAULT_EXPONENT,
            obstacle_attenuation_db: DEFAULT_OBSTACLE_ATTENUATION_DB,
            obstacles: vec![Obstacle::Rect {
                x0: 20,
                y0: 20,
                x1: 60,
                y1: 60,
            }],
            transmitters: vec![
                TransmitterConfig {
                    x: 10,
                    y: 10,
                    power_dbm: DEFAULT_TX_POWER_DBM + 12.0,
                },
                TransmitterConfig {
                    x: 90,
                    y: 90,
                    power_dbm: DEFAULT_TX_POWER_DBM,
                },
            ],
        }
    }

    /// Replaces path loss parameters with any given on the command
    /// line.
    pub fn override_model(&mut self, args: &ModelArgs) {
        if let Some(exponent) = args.exponent {
            self.path_loss_exponent = exponent;
        }
        if let Some(db) = args.obstacle_attenuation {
            self.obstacle_attenuation_db = db;
        }
    }

    pub fn model(&self) -> Result<PathLoss> {
        Ok(PathLoss::builder()
            .exponent(self.path_loss_exponent)
            .obstacle_attenuation(self.obstacle_attenuation_db)
            .build()?)
    }

    /// Returns a populated environment.
    ///
    /// With `strict`, any obstacle or transmitter falling off the grid
    /// is an error; otherwise it is skipped.
    pub fn environment(&self, strict: bool) -> Result<Environment> {
        let mut env = Environment::new(self.width, self.height)?;
        for obstacle in &self.obstacles {
            match *obstacle {
                Obstacle::Cell(Point { x, y }) if strict => env.try_add_obstacle(x, y)?,
                Obstacle::Cell(Point { x, y }) => env.add_obstacle(x, y),
                Obstacle::Rect { x0, y0, x1, y1 } => {
                    let non_empty = x0 < x1 && y0 < y1;
                    if strict
                        && non_empty
                        && !(env.is_valid(x0, y0) && env.is_valid(x1 - 1, y1 - 1))
                    {
                        bail!(
                            "obstacle [{x0}, {x1}) x [{y0}, {y1}) exceeds {}x{} grid",
                            self.width,
                            self.height
                        );
                    }
                    env.add_obstacle_rect(x0, y0, x1, y1);
                }
            }
        }
        for &TransmitterConfig { x, y, power_dbm } in &self.transmitters {
            if strict {
                env.try_add_transmitter(x, y, power_dbm)?;
            } else {
                env.add_transmitter(x, y, power_dbm);
            }
        }
        Ok(env)
    }
}
