//! A tick-by-tick simulator of classic CPU scheduling policies.
//!
//! A schedule is a list of processes with burst times, each arriving at the
//! tick equal to its position in the list. [`scheduler::Simulation`] drives a
//! [`scheduler::Scheduler`] over a [`scheduler::ProcessTable`], producing one
//! [`scheduler::TickObservation`] per tick and a [`scheduler::Report`] at the end.

pub mod config;
pub mod error;
pub mod input;
pub mod scheduler;

pub use config::{Cli, Config};
pub use error::{InputError, SimError};
pub use input::{load_schedule, parse_schedule, ProcessSpec};
pub use scheduler::{Policy, ProcessTable, Report, Scheduler, Simulation, TickObservation};
