use crate::options::Probe;
use anyhow::{anyhow, Result};
use rfgrid::{ascii, Point};

impl Probe {
    pub fn run(&self) -> Result<()> {
        let grid = ascii::load_signal(&self.input, self.dims.width, self.dims.height)?;
        let point = Point::new(self.x, self.y);
        let value = grid.get(point).ok_or_else(|| {
            anyhow!(
                "({}, {}) is outside of {}x{} grid",
                self.x,
                self.y,
                grid.width(),
                grid.height()
            )
        })?;
        if value.is_nan() {
            println!("({}, {}): obstacle", self.x, self.y);
        } else {
            println!("({}, {}): {value:.2} dBm", self.x, self.y);
        }
        Ok(())
    }
}
