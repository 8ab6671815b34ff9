use super::{ProcessTable, Ticks};

/// Re-checks the table's bookkeeping after every tick.
#[derive(Debug, Default)]
pub struct Observer {
    step: Ticks,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, table: &ProcessTable) {
        self.step += 1;

        for process in table.records() {
            let number = process.number();
            debug_assert!(
                process.remaining_burst() <= process.total_burst(),
                "P{number} has more burst left than it started with"
            );
            debug_assert_eq!(
                process.turnaround_time(),
                process.wait_time() + process.executed(),
                "P{number} turnaround drifted from wait + executed"
            );
            debug_assert!(
                process.turnaround_time() <= self.step,
                "P{number} turnaround exceeds elapsed ticks"
            );
        }
    }
}
