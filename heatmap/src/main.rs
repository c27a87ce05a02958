mod options;
mod probe;
mod progress;
mod scenario;
mod simulate;
mod summary;

use anyhow::Result;
use clap::Parser;
use options::Cli;
#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli {
        Cli::Simulate(simulate) => simulate.run(),
        Cli::Demo(demo) => demo.run(),
        Cli::Probe(probe) => probe.run(),
        Cli::Summary(summary) => summary.run(),
    }
}
