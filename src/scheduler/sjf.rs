use super::{ProcessTable, Scheduler, Ticks};

/// Preemptive shortest-remaining-burst selection, re-evaluated every tick.
///
/// Ties go to the process that arrived last.
#[derive(Debug, Default)]
pub struct SjfScheduler;

impl SjfScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for SjfScheduler {
    const NAME: &'static str = "Shortest Job First";

    fn select(&mut self, table: &ProcessTable, now: Ticks) -> Option<usize> {
        let mut selected: Option<(usize, Ticks)> = None;

        for (index, process) in table.records().iter().enumerate() {
            if !process.is_ready(now) {
                continue;
            }
            let remaining = process.remaining_burst();
            if selected.map_or(true, |(_, shortest)| remaining <= shortest) {
                selected = Some((index, remaining));
            }
        }

        selected.map(|(index, _)| index)
    }
}
