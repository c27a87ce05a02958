use crate::{
    options::{Demo, Simulate},
    progress,
    scenario::Scenario,
};
use anyhow::Result;
use coverage::Simulation;
use log::info;
use rfgrid::ascii;
use std::path::Path;

impl Simulate {
    pub fn run(&self) -> Result<()> {
        let mut scenario = Scenario::open(&self.scenario)?;
        scenario.override_model(&self.model);
        run_scenario(&scenario, self.strict, &self.out)
    }
}

impl Demo {
    pub fn run(&self) -> Result<()> {
        let mut scenario = Scenario::demo(self.width, self.height);
        scenario.override_model(&self.model);
        run_scenario(&scenario, false, &self.out)
    }
}

fn run_scenario(scenario: &Scenario, strict: bool, out: &Path) -> Result<()> {
    let mut env = scenario.environment(strict)?;
    let sim = Simulation::new(scenario.model()?);
    info!(
        "{}x{} grid, {} obstacle cells, {} transmitters, exponent {}, obstacle attenuation {} dB",
        env.width(),
        env.height(),
        env.obstacle_count(),
        env.transmitters().len(),
        sim.model().exponent(),
        sim.model().obstacle_attenuation_db(),
    );

    let pb = progress::bar(
        format!("Simulate {}x{}", env.width(), env.height()),
        env.height() as u64,
    );
    sim.simulate_with_progress(&mut env, |_row| pb.inc(1));
    pb.finish_and_clear();

    ascii::save_signal(&env, out)?;
    println!("Simulation complete. Data saved to {}", out.display());
    Ok(())
}
