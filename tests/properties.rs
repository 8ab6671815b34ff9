use cpu_sched_sim::{
    scheduler::{FcfsScheduler, RoundRobinScheduler, SjfScheduler},
    ProcessSpec, ProcessTable, Report, Scheduler, Simulation, TickObservation,
};
use rand::prelude::*;
use std::num::NonZeroU32;

fn random_schedule(rng: &mut StdRng) -> Vec<ProcessSpec> {
    let len = rng.random_range(1..=12);
    (0..len)
        .map(|index| ProcessSpec {
            number: index + 1,
            burst: rng.random_range(1..=9),
        })
        .collect()
}

fn schedules() -> impl Iterator<Item = Vec<ProcessSpec>> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..200).map(move |_| random_schedule(&mut rng))
}

/// Runs a simulation, checking per-tick invariants against the live table.
fn checked_run<S: Scheduler>(specs: &[ProcessSpec], scheduler: S) -> (Vec<TickObservation>, Report) {
    let mut sim = Simulation::new(ProcessTable::from_specs(specs), scheduler);
    let mut ticks = Vec::new();

    while let Some(tick) = sim.step().unwrap() {
        for process in sim.table().records() {
            assert_eq!(
                process.turnaround_time(),
                process.wait_time() + process.executed()
            );
        }
        ticks.push(tick);
    }
    (ticks, sim.report())
}

fn assert_conserved(specs: &[ProcessSpec], ticks: &[TickObservation], report: &Report) {
    let total_burst: u64 = specs.iter().map(|s| s.burst).sum();
    assert_eq!(ticks.len() as u64, total_burst);
    assert_eq!(report.total_ticks, total_burst);
    assert_eq!(report.total_wait + total_burst, report.total_turnaround);
    for (time, tick) in ticks.iter().enumerate() {
        assert_eq!(tick.time, time as u64);
    }
}

#[test]
fn fcfs_completes_in_arrival_order() {
    for specs in schedules() {
        let (ticks, report) = checked_run(&specs, FcfsScheduler::new());
        assert_conserved(&specs, &ticks, &report);

        let finished: Vec<u32> = ticks.iter().filter(|t| t.finished).map(|t| t.number).collect();
        let expected: Vec<u32> = specs.iter().map(|s| s.number).collect();
        assert_eq!(finished, expected);
    }
}

#[test]
fn sjf_always_runs_the_shortest_ready_process() {
    for specs in schedules() {
        let mut sim = Simulation::new(ProcessTable::from_specs(&specs), SjfScheduler::new());
        loop {
            let now = sim.now();
            let ready: Vec<(usize, u64)> = sim
                .table()
                .records()
                .iter()
                .enumerate()
                .filter(|(_, p)| p.is_ready(now))
                .map(|(index, p)| (index, p.remaining_burst()))
                .collect();

            let Some(tick) = sim.step().unwrap() else {
                break;
            };

            let shortest = ready.iter().map(|&(_, left)| left).min().unwrap();
            let last_shortest = ready
                .iter()
                .rev()
                .find(|&&(_, left)| left == shortest)
                .map(|&(index, _)| index)
                .unwrap();
            assert_eq!(tick.remaining_burst, shortest);
            assert_eq!(tick.index, last_shortest);
        }

        let (ticks, report) = checked_run(&specs, SjfScheduler::new());
        assert_conserved(&specs, &ticks, &report);
    }
}

#[test]
fn round_robin_never_exceeds_the_quantum() {
    for (round, specs) in schedules().enumerate() {
        let q = (round % 4) as u64 + 1;
        let quantum = NonZeroU32::new(q as u32).unwrap();
        let mut sim = Simulation::new(ProcessTable::from_specs(&specs), RoundRobinScheduler::new(quantum));
        let mut last = None;
        let mut streak = 0;

        loop {
            let now = sim.now();
            let others_ready = sim
                .table()
                .records()
                .iter()
                .enumerate()
                .any(|(index, p)| p.is_ready(now) && Some(index) != last);

            let Some(tick) = sim.step().unwrap() else {
                break;
            };

            streak = if Some(tick.index) == last { streak + 1 } else { 1 };
            // Running on past a full quantum means starting a fresh turn,
            // which only happens when nobody else is waiting.
            if streak > q && (streak - 1) % q == 0 {
                assert!(!others_ready, "P{} kept the CPU past its quantum", tick.number);
            }
            last = Some(tick.index);
        }

        let (ticks, report) = checked_run(&specs, RoundRobinScheduler::new(quantum));
        assert_conserved(&specs, &ticks, &report);
    }
}

#[test]
fn simulations_are_deterministic() {
    for specs in schedules().take(20) {
        let q = NonZeroU32::new(3).unwrap();
        assert_eq!(
            checked_run(&specs, RoundRobinScheduler::new(q)),
            checked_run(&specs, RoundRobinScheduler::new(q))
        );
        assert_eq!(
            checked_run(&specs, SjfScheduler::new()),
            checked_run(&specs, SjfScheduler::new())
        );
    }
}
