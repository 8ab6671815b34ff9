use super::{ProcessTable, Scheduler, Ticks};
use std::num::NonZeroU32;

/// Sweeps the table in arrival order, giving each ready process up to one
/// quantum of consecutive ticks before moving on.
#[derive(Debug)]
pub struct RoundRobinScheduler {
    time_quantum: NonZeroU32,
    current_process: Option<usize>,
    slice_left: Ticks,
}

impl RoundRobinScheduler {
    pub fn new(time_quantum: NonZeroU32) -> Self {
        Self {
            time_quantum,
            current_process: None,
            slice_left: 0,
        }
    }

    // Next ready process after the current one, wrapping to the start of the table.
    fn poll_process(&self, table: &ProcessTable, now: Ticks) -> Option<usize> {
        let len = table.len();
        let start = self.current_process.map_or(0, |current| current + 1);

        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&index| table.records()[index].is_ready(now))
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round Robin";

    fn title(&self) -> String {
        format!("{} with Quantum {}", Self::NAME, self.time_quantum)
    }

    fn select(&mut self, table: &ProcessTable, now: Ticks) -> Option<usize> {
        if let Some(current) = self.current_process {
            let still_running = table.get(current).is_some_and(|p| p.is_ready(now));
            if self.slice_left > 0 && still_running {
                self.slice_left -= 1;
                return Some(current);
            }
        }

        let next = self.poll_process(table, now)?;
        let remaining = table.records()[next].remaining_burst();
        self.current_process = Some(next);
        self.slice_left = remaining.min(Ticks::from(self.time_quantum.get())) - 1;
        Some(next)
    }
}
