use super::{process::ProcessRecord, Ticks};
use crate::{error::SimError, input::ProcessSpec};

/// What the active process looked like when a tick began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickObservation {
    pub time: Ticks,
    pub index: usize,
    pub number: u32,
    pub remaining_burst: Ticks,
    pub wait_time: Ticks,
    pub turnaround_time: Ticks,
    /// The tick brought the process to zero remaining burst.
    pub finished: bool,
}

/// The processes of one simulation run, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTable {
    records: Vec<ProcessRecord>,
}

impl ProcessTable {
    pub fn new(records: Vec<ProcessRecord>) -> Self {
        Self { records }
    }

    /// Builds a table where each process arrives at its position in `specs`.
    pub fn from_specs(specs: &[ProcessSpec]) -> Self {
        let records = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| ProcessRecord::new(spec.number, index as Ticks, spec.burst))
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ProcessRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn all_finished(&self) -> bool {
        self.records.iter().all(ProcessRecord::is_finished)
    }

    /// Sum of every burst; the number of ticks a full run takes under any policy.
    pub fn total_burst(&self) -> Ticks {
        self.records.iter().map(ProcessRecord::total_burst).sum()
    }

    /// Runs the process at `active` for one unit of time starting at `now`.
    ///
    /// Every other arrived, unfinished process waits through the tick.
    pub fn advance(&mut self, active: usize, now: Ticks) -> Result<TickObservation, SimError> {
        let len = self.records.len();
        let record = self
            .records
            .get(active)
            .ok_or(SimError::IndexOutOfRange { index: active, len })?;

        if record.is_finished() {
            return Err(SimError::FinishedProcess {
                number: record.number(),
                time: now,
            });
        }
        if !record.has_arrived(now) {
            return Err(SimError::NotArrived {
                number: record.number(),
                time: now,
            });
        }

        let mut observation = TickObservation {
            time: now,
            index: active,
            number: record.number(),
            remaining_burst: record.remaining_burst(),
            wait_time: record.wait_time(),
            turnaround_time: record.turnaround_time(),
            finished: false,
        };

        for (index, record) in self.records.iter_mut().enumerate() {
            if !record.is_ready(now) {
                continue;
            }
            if index == active {
                record.account_running();
            } else {
                record.account_waiting();
            }
        }

        observation.finished = self.records[active].is_finished();
        Ok(observation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(bursts: &[Ticks]) -> ProcessTable {
        let specs: Vec<ProcessSpec> = bursts
            .iter()
            .enumerate()
            .map(|(index, &burst)| ProcessSpec {
                number: index as u32 + 1,
                burst,
            })
            .collect();
        ProcessTable::from_specs(&specs)
    }

    #[test]
    fn arrival_follows_list_position() {
        let table = table(&[5, 3, 8]);
        let arrivals: Vec<Ticks> = table.records().iter().map(|r| r.arrival_index()).collect();
        assert_eq!(arrivals, vec![0, 1, 2]);
        assert_eq!(table.total_burst(), 16);
    }

    #[test]
    fn only_arrived_processes_wait() {
        let mut table = table(&[5, 3, 8]);
        table.advance(0, 0).unwrap();
        table.advance(0, 1).unwrap();

        let p1 = &table.records()[0];
        let p2 = &table.records()[1];
        let p3 = &table.records()[2];
        assert_eq!((p1.remaining_burst(), p1.wait_time(), p1.turnaround_time()), (3, 0, 2));
        assert_eq!((p2.remaining_burst(), p2.wait_time(), p2.turnaround_time()), (3, 1, 1));
        assert_eq!((p3.wait_time(), p3.turnaround_time()), (0, 0));
    }

    #[test]
    fn observation_reports_state_before_the_tick() {
        let mut table = table(&[1, 2]);
        let first = table.advance(0, 0).unwrap();
        assert_eq!(first.number, 1);
        assert_eq!(first.remaining_burst, 1);
        assert_eq!(first.turnaround_time, 0);
        assert!(first.finished);

        let second = table.advance(1, 1).unwrap();
        assert_eq!(second.remaining_burst, 2);
        assert!(!second.finished);
    }

    #[test]
    fn finished_processes_stop_accumulating() {
        let mut table = table(&[1, 3]);
        table.advance(0, 0).unwrap();
        table.advance(1, 1).unwrap();
        table.advance(1, 2).unwrap();

        let p1 = &table.records()[0];
        assert_eq!((p1.wait_time(), p1.turnaround_time()), (0, 1));
    }

    #[test]
    fn rejects_finished_selection() {
        let mut table = table(&[1, 3]);
        table.advance(0, 0).unwrap();
        let before = table.clone();

        assert_eq!(
            table.advance(0, 1),
            Err(SimError::FinishedProcess { number: 1, time: 1 })
        );
        assert_eq!(table, before);
    }

    #[test]
    fn rejects_process_that_has_not_arrived() {
        let mut table = table(&[2, 2, 2]);
        assert_eq!(
            table.advance(2, 0),
            Err(SimError::NotArrived { number: 3, time: 0 })
        );
    }

    #[test]
    fn rejects_out_of_range_index() {
        let mut table = table(&[2]);
        assert_eq!(
            table.advance(3, 0),
            Err(SimError::IndexOutOfRange { index: 3, len: 1 })
        );
    }
}
