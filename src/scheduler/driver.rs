use super::{observer::Observer, ProcessTable, Report, Scheduler, TickObservation, Ticks};
use crate::error::SimError;
use log::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Running,
    Completed,
}

/// Drives a scheduler over a process table one tick at a time.
pub struct Simulation<S: Scheduler> {
    table: ProcessTable,
    scheduler: S,
    observer: Observer,
    now: Ticks,
    state: SimState,
    last_active: Option<usize>,
}

impl<S: Scheduler> Simulation<S> {
    pub fn new(table: ProcessTable, scheduler: S) -> Self {
        let state = if table.all_finished() {
            SimState::Completed
        } else {
            SimState::Running
        };
        info!(
            "{}: simulating {} processes, {} ticks of work",
            scheduler.title(),
            table.len(),
            table.total_burst()
        );

        Self {
            table,
            scheduler,
            observer: Observer::new(),
            now: 0,
            state,
            last_active: None,
        }
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn table(&self) -> &ProcessTable {
        &self.table
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn last_active(&self) -> Option<usize> {
        self.last_active
    }

    /// Runs a single tick. Returns `None` once every process has finished.
    pub fn step(&mut self) -> Result<Option<TickObservation>, SimError> {
        if self.state == SimState::Completed {
            return Ok(None);
        }

        let active = self
            .scheduler
            .select(&self.table, self.now)
            .ok_or(SimError::NoEligibleProcess { time: self.now })?;
        trace!("T{}: selected index {active}", self.now);

        if self.last_active.is_some_and(|last| last != active) {
            debug!(
                "T{}: context switch to P{}",
                self.now, self.table.records()[active].number()
            );
        }

        let observation = self.table.advance(active, self.now)?;
        self.observer.observe(&self.table);
        self.last_active = Some(active);
        self.now += 1;

        if observation.finished {
            debug!("T{}: P{} finished", self.now, observation.number);
        }
        if self.table.all_finished() {
            info!("{} completed after {} ticks", self.scheduler.title(), self.now);
            self.state = SimState::Completed;
        }

        Ok(Some(observation))
    }

    /// Runs to completion, handing every tick to `on_tick`.
    pub fn run<F>(mut self, mut on_tick: F) -> Result<Report, SimError>
    where
        F: FnMut(&TickObservation),
    {
        while let Some(observation) = self.step()? {
            on_tick(&observation);
        }
        Ok(self.report())
    }

    pub fn report(&self) -> Report {
        Report::from_table(&self.table, self.now)
    }
}
