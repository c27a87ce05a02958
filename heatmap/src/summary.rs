use crate::options::Summary as SummaryCmd;
use anyhow::Result;
use coverage::Summary;
use rfgrid::ascii;
use std::io::Write;

impl SummaryCmd {
    pub fn run(&self) -> Result<()> {
        let grid = ascii::load_signal(&self.input, self.dims.width, self.dims.height)?;
        let summary = Summary::new(&grid, self.threshold);
        let mut out = std::io::stdout().lock();
        if self.json {
            serde_json::to_writer(&mut out, &summary)?;
            writeln!(out)?;
        } else {
            Self::display(&summary, out)?;
        }
        Ok(())
    }

    fn display(summary: &Summary, mut out: impl Write) -> Result<()> {
        let cells = summary.width * summary.height;
        let open = cells - summary.obstacles;
        let fmt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{v:.2} dBm"));
        writeln!(out, "grid:      {}x{}", summary.width, summary.height)?;
        writeln!(out, "obstacles: {}", summary.obstacles)?;
        #[allow(clippy::cast_precision_loss)]
        let pct = if open == 0 {
            0.0
        } else {
            100.0 * summary.covered as f64 / open as f64
        };
        writeln!(
            out,
            "covered:   {} of {open} ({pct:.1}% >= {} dBm)",
            summary.covered, summary.threshold_dbm
        )?;
        writeln!(out, "min:       {}", fmt(summary.min_dbm))?;
        writeln!(out, "mean:      {}", fmt(summary.mean_dbm))?;
        writeln!(out, "max:       {}", fmt(summary.max_dbm))?;
        if let Some(point) = summary.max_at {
            writeln!(out, "max at:    ({}, {})", point.x, point.y)?;
        }
        Ok(())
    }
}
