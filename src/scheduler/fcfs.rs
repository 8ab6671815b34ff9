use super::{ProcessTable, Scheduler, Ticks};

/// Runs every process to completion, in arrival order.
#[derive(Debug, Default)]
pub struct FcfsScheduler {
    current_process: usize,
}

impl FcfsScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for FcfsScheduler {
    const NAME: &'static str = "First Come First Served";

    fn select(&mut self, table: &ProcessTable, now: Ticks) -> Option<usize> {
        while table
            .get(self.current_process)
            .is_some_and(|process| process.is_finished())
        {
            self.current_process += 1;
        }

        table
            .get(self.current_process)
            .filter(|process| process.has_arrived(now))
            .map(|_| self.current_process)
    }
}
