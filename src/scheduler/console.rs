use super::{Report, TickObservation};
use std::io::{self, Write};

/// One line of the tick listing, e.g. `T0   : P1   - Burst left   5, ...`.
///
/// Numbers are padded to three columns.
pub fn format_tick(tick: &TickObservation) -> String {
    format!(
        "T{:<3} : P{:<3} - Burst left {:>3}, Wait time {:>3}, Turnaround time {:>3}",
        tick.time, tick.number, tick.remaining_burst, tick.wait_time, tick.turnaround_time
    )
}

pub fn format_report(report: &Report) -> String {
    let mut out = String::new();
    for process in &report.processes {
        out.push_str(&format!("\nP{}\n", process.number));
        out.push_str(&format!(
            "        Waiting time:         {:>3}\n",
            process.wait_time
        ));
        out.push_str(&format!(
            "        Turnaround time:      {:>3}\n",
            process.turnaround_time
        ));
    }
    out.push_str(&format!(
        "\nTotal average waiting time:     {:.1}\n",
        report.average_wait()
    ));
    out.push_str(&format!(
        "Total average turnaround time:  {:.1}\n",
        report.average_turnaround()
    ));
    out
}

/// Streams a simulation run as plain text.
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn title(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{title}")
    }

    pub fn tick(&mut self, tick: &TickObservation) -> io::Result<()> {
        writeln!(self.out, "{}", format_tick(tick))
    }

    pub fn report(&mut self, report: &Report) -> io::Result<()> {
        write!(self.out, "{}", format_report(report))?;
        self.out.flush()
    }
}
