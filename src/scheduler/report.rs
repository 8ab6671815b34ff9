use super::{ProcessTable, Ticks};
use average::{Estimate, Mean};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStats {
    pub number: u32,
    pub wait_time: Ticks,
    pub turnaround_time: Ticks,
}

/// Final per-process counters of a finished run, with their averages.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub processes: Vec<ProcessStats>,
    pub total_ticks: Ticks,
    pub total_wait: Ticks,
    pub total_turnaround: Ticks,
}

impl Report {
    pub fn from_table(table: &ProcessTable, total_ticks: Ticks) -> Self {
        let processes: Vec<ProcessStats> = table
            .records()
            .iter()
            .map(|process| ProcessStats {
                number: process.number(),
                wait_time: process.wait_time(),
                turnaround_time: process.turnaround_time(),
            })
            .collect();

        Self {
            total_wait: processes.iter().map(|p| p.wait_time).sum(),
            total_turnaround: processes.iter().map(|p| p.turnaround_time).sum(),
            processes,
            total_ticks,
        }
    }

    pub fn average_wait(&self) -> f64 {
        self.mean_of(|p| p.wait_time)
    }

    pub fn average_turnaround(&self) -> f64 {
        self.mean_of(|p| p.turnaround_time)
    }

    fn mean_of(&self, field: impl Fn(&ProcessStats) -> Ticks) -> f64 {
        if self.processes.is_empty() {
            return 0.0;
        }
        self.processes
            .iter()
            .map(|p| field(p) as f64)
            .collect::<Mean>()
            .estimate()
    }
}
