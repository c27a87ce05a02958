use indicatif::{ProgressBar, ProgressStyle};

/// Returns a progress bar of `length` steps, labeled with `prefix`.
pub fn bar(prefix: String, length: u64) -> ProgressBar {
    let pb = ProgressBar::new(length);
    pb.set_prefix(prefix);
    pb.set_style(
        ProgressStyle::with_template("{prefix}...\n[{wide_bar:.cyan/blue}] {pos}/{len} rows")
            .expect("incorrect progress bar format string")
            .progress_chars("#>-"),
    );
    pb
}
