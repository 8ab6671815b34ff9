mod console;
mod display;
mod driver;
mod fcfs;
mod observer;
mod process;
mod report;
mod round_robin;
mod runner;
mod sjf;
mod table;

use std::{fmt, num::NonZeroU32, time::Duration};

pub use console::{format_report, format_tick, ConsoleSink};
pub use driver::{SimState, Simulation};
pub use fcfs::FcfsScheduler;
pub use observer::Observer;
pub use process::ProcessRecord;
pub use report::{ProcessStats, Report};
pub use round_robin::RoundRobinScheduler;
pub use runner::SimulationRunner;
pub use sjf::SjfScheduler;
pub use table::{ProcessTable, TickObservation};

pub type Ticks = u64;

pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(200);

/// Picks the process that runs during the next tick.
pub trait Scheduler {
    const NAME: &'static str;

    /// Heading shown above a simulation run.
    fn title(&self) -> String {
        Self::NAME.to_owned()
    }

    /// Index into `table` of the process to run for the tick starting at
    /// `now`, or `None` if nothing has arrived and is unfinished.
    fn select(&mut self, table: &ProcessTable, now: Ticks) -> Option<usize>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    Sjf,
    RoundRobin { quantum: NonZeroU32 },
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fcfs => f.write_str(FcfsScheduler::NAME),
            Self::Sjf => f.write_str(SjfScheduler::NAME),
            Self::RoundRobin { quantum } => {
                write!(f, "{} with Quantum {quantum}", RoundRobinScheduler::NAME)
            }
        }
    }
}
