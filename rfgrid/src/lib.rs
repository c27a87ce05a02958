//! Grids for RF coverage planning.
//!
//! An [`Environment`] is a fixed-size 2-D area holding an obstacle
//! mask, a set of fixed-power [`Transmitter`]s, and one aggregate
//! signal-strength value (dBm) per cell. The [`ascii`] module exports
//! and re-reads the signal grid as a plain text matrix.

pub mod ascii;
mod environment;
mod error;
mod grid;
mod point;

pub use crate::{
    environment::{Environment, EnvironmentMut, NO_SIGNAL_DBM, OBSTACLE_SENTINEL},
    error::GridError,
    grid::Grid,
    point::{Point, Transmitter},
};

/// Base floating point type used for all power and distance values.
pub type C = f64;
