use crate::scheduler::{Policy, DEFAULT_TICK_RATE};
use clap::{ArgGroup, Parser};
use std::{num::NonZeroU32, path::PathBuf, time::Duration};

/// Simulate CPU scheduling policies over a schedule file.
///
/// Each line of the schedule is `P<number>,<burst>`, listed in arrival order.
#[derive(Debug, Clone, Parser)]
#[command(name = "cpu-sched-sim", version)]
#[command(group(
    ArgGroup::new("policy")
        .required(true)
        .args(["fcfs", "sjf", "quantum"])
))]
pub struct Cli {
    /// First Come First Served
    #[arg(short = 'f')]
    pub fcfs: bool,

    /// Shortest Job First (preemptive)
    #[arg(short = 's')]
    pub sjf: bool,

    /// Round Robin with the given time quantum
    #[arg(short = 'r', value_name = "QUANTUM")]
    pub quantum: Option<NonZeroU32>,

    /// Watch the simulation in a terminal UI
    #[arg(long)]
    pub tui: bool,

    /// Terminal UI tick rate in milliseconds
    #[arg(
        long = "tick-ms",
        value_name = "MS",
        default_value_t = DEFAULT_TICK_RATE.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// Schedule file
    pub schedule: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub policy: Policy,
    pub schedule: PathBuf,
    pub tui: bool,
    pub tick_rate: Duration,
}

impl From<&Cli> for Policy {
    // The `policy` group guarantees exactly one of the three is set.
    fn from(cli: &Cli) -> Self {
        match (cli.fcfs, cli.sjf, cli.quantum) {
            (_, _, Some(quantum)) => Policy::RoundRobin { quantum },
            (_, true, None) => Policy::Sjf,
            _ => Policy::Fcfs,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            policy: Policy::from(&cli),
            tui: cli.tui,
            tick_rate: Duration::from_millis(cli.tick_ms),
            schedule: cli.schedule,
        }
    }
}
