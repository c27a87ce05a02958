//! # Grid RF coverage
//!
//! `coverage` predicts received signal strength over every cell of an
//! [`rfgrid::Environment`]:
//!
//! - [`los`]: which cells a straight path crosses, and whether any of
//!   them block it.
//! - [`PathLoss`]: log-distance path loss plus a flat obstacle penalty
//!   for one transmitter.
//! - [`Simulation`]: combines every transmitter's contribution in the
//!   linear (mW) domain, in parallel across rows.

mod error;
pub mod los;
mod model;
pub mod power;
mod simulate;
mod summary;

pub use {
    crate::{
        error::CoverageError,
        model::{
            PathLoss, PathLossBuilder, DEFAULT_EXPONENT, DEFAULT_OBSTACLE_ATTENUATION_DB,
            FREE_SPACE_EXPONENT,
        },
        simulate::Simulation,
        summary::Summary,
    },
    rfgrid,
};
