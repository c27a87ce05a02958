use rfgrid::GridError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("invalid value {value} for parameter '{name}'")]
    Param { name: &'static str, value: f64 },

    #[error("{0}")]
    Grid(#[from] GridError),
}
