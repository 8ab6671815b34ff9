use anyhow::Context;
use clap::Parser;
use cpu_sched_sim::{
    config::{Cli, Config},
    load_schedule,
    scheduler::{
        ConsoleSink, FcfsScheduler, Policy, ProcessTable, RoundRobinScheduler, Scheduler,
        SimulationRunner, SjfScheduler,
    },
    Simulation,
};
use env_logger::Builder;
use log::{info, LevelFilter};
use std::io;

fn main() -> anyhow::Result<()> {
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let config = Config::from(Cli::parse());

    let specs = load_schedule(&config.schedule)?;
    info!(
        "loaded {} processes from {}, policy: {}",
        specs.len(),
        config.schedule.display(),
        config.policy
    );
    let table = ProcessTable::from_specs(&specs);

    match config.policy {
        Policy::Fcfs => simulate(&config, table, FcfsScheduler::new()),
        Policy::Sjf => simulate(&config, table, SjfScheduler::new()),
        Policy::RoundRobin { quantum } => {
            simulate(&config, table, RoundRobinScheduler::new(quantum))
        }
    }
}

fn simulate<S: Scheduler>(config: &Config, table: ProcessTable, scheduler: S) -> anyhow::Result<()> {
    let sim = Simulation::new(table, scheduler);

    if config.tui {
        let title = sim.scheduler().title();
        let mut runner = SimulationRunner::new(sim, config.tick_rate)?;
        while runner.run()? {}

        let (ticks, report) = runner.finish();
        let mut console = ConsoleSink::new(io::stdout().lock());
        console.title(&title)?;
        for tick in &ticks {
            console.tick(tick)?;
        }
        if let Some(report) = report {
            console.report(&report)?;
        }
        return Ok(());
    }

    let mut console = ConsoleSink::new(io::stdout().lock());
    console.title(&sim.scheduler().title())?;
    let mut write_error = None;
    let report = sim
        .run(|tick| {
            if write_error.is_none() {
                write_error = console.tick(tick).err();
            }
        })
        .context("simulation failed")?;
    if let Some(err) = write_error {
        return Err(err.into());
    }
    console.report(&report)?;
    Ok(())
}
