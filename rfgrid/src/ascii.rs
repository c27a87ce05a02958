//! Whitespace-delimited text matrix of signal strengths.
//!
//! One line per grid row, `width` space-separated tokens per line.
//! Each token is either a decimal dBm value or the literal `NaN` for
//! obstacle cells. There is no header; readers must already know the
//! grid's dimensions.

use crate::{grid::check_dimensions, Environment, Grid, GridError, Point, C};
use log::debug;
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

const NAN_TOKEN: &str = "NaN";

/// Writes `env`'s signal grid to `wtr`.
pub fn write_signal<W: Write>(env: &Environment, mut wtr: W) -> Result<(), GridError> {
    for (y, row) in env.signal().rows().enumerate() {
        for (x, value) in row.iter().enumerate() {
            if x > 0 {
                wtr.write_all(b" ")?;
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let blocked = env.is_obstacle(Point::new(x as i32, y as i32));
            if blocked || value.is_nan() {
                wtr.write_all(NAN_TOKEN.as_bytes())?;
            } else {
                write!(wtr, "{value}")?;
            }
        }
        wtr.write_all(b"\n")?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes `env`'s signal grid to a new file at `path`.
pub fn save_signal<P: AsRef<Path>>(env: &Environment, path: P) -> Result<(), GridError> {
    let now = std::time::Instant::now();
    let file = File::create(path.as_ref())?;
    write_signal(env, BufWriter::new(file))?;
    debug!("saved {:?} in {:?}", path.as_ref(), now.elapsed());
    Ok(())
}

/// Parses a `width` by `height` signal grid from `rdr`.
pub fn read_signal<R: BufRead>(rdr: R, width: usize, height: usize) -> Result<Grid<C>, GridError> {
    check_dimensions(width, height)?;
    // Dimensions are caller supplied; grow with the data.
    let mut cells = Vec::new();
    let mut rows = 0;
    for (line_idx, line) in rdr.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = line_idx + 1;
        rows += 1;
        if rows > height {
            return Err(GridError::Shape {
                what: "rows",
                line: line_no,
                expected: height,
                found: rows,
            });
        }
        let row_start = cells.len();
        for token in line.split_whitespace() {
            cells.push(parse_token(token, line_no)?);
        }
        let found = cells.len() - row_start;
        if found != width {
            return Err(GridError::Shape {
                what: "columns",
                line: line_no,
                expected: width,
                found,
            });
        }
    }
    if rows != height {
        return Err(GridError::Shape {
            what: "rows",
            line: rows,
            expected: height,
            found: rows,
        });
    }
    Grid::from_vec(width, height, cells)
}

/// Parses a `width` by `height` signal grid from the file at `path`.
pub fn load_signal<P: AsRef<Path>>(
    path: P,
    width: usize,
    height: usize,
) -> Result<Grid<C>, GridError> {
    let file = File::open(path)?;
    read_signal(BufReader::new(file), width, height)
}

fn parse_token(token: &str, line: usize) -> Result<C, GridError> {
    if token == NAN_TOKEN {
        return Ok(C::NAN);
    }
    match token.parse::<C>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(GridError::Token {
            token: token.to_owned(),
            line,
        }),
    }
}
