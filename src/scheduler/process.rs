use super::Ticks;

/// One process of the simulated schedule, with its live counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    number: u32,
    arrival_index: Ticks,
    total_burst: Ticks,
    remaining_burst: Ticks,
    wait_time: Ticks,
    turnaround_time: Ticks,
}

impl ProcessRecord {
    pub fn new(number: u32, arrival_index: Ticks, total_burst: Ticks) -> Self {
        Self {
            number,
            arrival_index,
            total_burst,
            remaining_burst: total_burst,
            wait_time: 0,
            turnaround_time: 0,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn arrival_index(&self) -> Ticks {
        self.arrival_index
    }

    pub fn total_burst(&self) -> Ticks {
        self.total_burst
    }

    pub fn remaining_burst(&self) -> Ticks {
        self.remaining_burst
    }

    pub fn wait_time(&self) -> Ticks {
        self.wait_time
    }

    pub fn turnaround_time(&self) -> Ticks {
        self.turnaround_time
    }

    /// Ticks this process has spent on the CPU so far.
    pub fn executed(&self) -> Ticks {
        self.total_burst - self.remaining_burst
    }

    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival_index <= now
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_burst == 0
    }

    /// Arrived and not yet finished at `now`.
    pub fn is_ready(&self, now: Ticks) -> bool {
        self.has_arrived(now) && !self.is_finished()
    }

    pub(super) fn account_waiting(&mut self) {
        self.wait_time += 1;
        self.turnaround_time += 1;
    }

    pub(super) fn account_running(&mut self) {
        self.turnaround_time += 1;
        self.remaining_burst -= 1;
    }
}
