use super::{display::DisplayTerminal, Report, Scheduler, SimState, Simulation, TickObservation};
use std::time::Duration;

pub enum RunnerEvent {
    Quit,
    Pause,
    Resume,
    Step,
    Tick,
    None,
}

/// Plays a simulation in the terminal UI, one tick per display tick.
pub struct SimulationRunner<S: Scheduler> {
    terminal: DisplayTerminal,
    sim: Simulation<S>,
    ticks: Vec<TickObservation>,
    paused: bool,
}

impl<S: Scheduler> SimulationRunner<S> {
    pub fn new(sim: Simulation<S>, tick_rate: Duration) -> anyhow::Result<Self> {
        let terminal = DisplayTerminal::new(tick_rate)?;

        Ok(Self {
            terminal,
            sim,
            ticks: Vec::new(),
            paused: false,
        })
    }

    fn run_tick(&mut self) -> anyhow::Result<()> {
        if let Some(tick) = self.sim.step()? {
            self.ticks.push(tick);
        }
        Ok(())
    }

    // Returns false if the program should quit
    pub fn run(&mut self) -> anyhow::Result<bool> {
        self.terminal
            .draw(&self.sim, self.ticks.last(), self.paused)?;

        match self.terminal.get_input() {
            RunnerEvent::Quit => return Ok(false),
            RunnerEvent::Pause if !self.paused => self.paused = true,
            RunnerEvent::Resume if self.paused => self.paused = false,
            RunnerEvent::Step if self.paused => self.run_tick()?,
            RunnerEvent::Tick if !self.paused => self.run_tick()?,
            _ => {}
        }
        Ok(true)
    }

    /// Closes the terminal UI and hands back everything the run produced.
    ///
    /// The report is `None` if the user quit before the simulation completed.
    pub fn finish(self) -> (Vec<TickObservation>, Option<Report>) {
        let report = (self.sim.state() == SimState::Completed).then(|| self.sim.report());
        drop(self.terminal);
        (self.ticks, report)
    }
}
