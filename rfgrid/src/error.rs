use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid grid dimensions {width}x{height}")]
    Dimensions { width: usize, height: usize },

    #[error("({x}, {y}) is outside of {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("expected {expected} {what}, found {found} on line {line}")]
    Shape {
        what: &'static str,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid token '{token}' on line {line}")]
    Token { token: String, line: usize },
}
