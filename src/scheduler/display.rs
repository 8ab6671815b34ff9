use super::{runner::RunnerEvent, Scheduler, SimState, Simulation, TickObservation};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{
    io::{self, Stdout},
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{self, Receiver, Sender},
        Arc,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};
use tui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Terminal,
};

pub enum DisplayEvent {
    Input(KeyEvent),
    Tick,
}

/// Feeds key presses and tick events to the display until stopped.
pub struct InputThread {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputThread {
    /// `poll` waits up to the given timeout for a key press.
    pub fn spawn<P>(tick_rate: Duration, input_tx: Sender<DisplayEvent>, mut poll: P) -> Self
    where
        P: FnMut(Duration) -> io::Result<Option<KeyEvent>> + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let stopped = Arc::clone(&stop);

        let handle = thread::spawn(move || {
            let mut last_tick = Instant::now();
            while !stopped.load(Ordering::Acquire) {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                match poll(timeout) {
                    Ok(Some(key)) => {
                        if input_tx.send(DisplayEvent::Input(key)).is_err() {
                            return;
                        }
                    }
                    Ok(None) => {}
                    Err(_) => return,
                }

                if last_tick.elapsed() >= tick_rate {
                    if input_tx.send(DisplayEvent::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Blocks until the thread has finished its current poll.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for InputThread {
    fn drop(&mut self) {
        self.stop();
    }
}

fn poll_terminal(timeout: Duration) -> io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            return Ok(Some(key));
        }
    }
    Ok(None)
}

pub struct DisplayTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input_rx: Receiver<DisplayEvent>,
    input: InputThread,
}

impl DisplayTerminal {
    pub fn new(tick_rate: Duration) -> Result<Self, io::Error> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;

        // Set up the input handling thread
        let (input_tx, input_rx) = mpsc::channel();
        let input = InputThread::spawn(tick_rate, input_tx, poll_terminal);

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            input_rx,
            input,
        })
    }

    pub fn draw<S>(
        &mut self,
        sim: &Simulation<S>,
        last_tick: Option<&TickObservation>,
        paused: bool,
    ) -> Result<(), io::Error>
    where
        S: Scheduler,
    {
        let title = sim.scheduler().title();
        let completed = sim.state() == SimState::Completed;
        let status = match (last_tick, completed) {
            (_, true) => {
                let report = sim.report();
                format!(
                    "Done after {} ticks | Average wait {:.1} | Average turnaround {:.1} | q: quit",
                    report.total_ticks,
                    report.average_wait(),
                    report.average_turnaround()
                )
            }
            (Some(tick), false) => format!(
                "T{} | P{} | Burst left {} | Wait {} | Turnaround {}{}",
                tick.time,
                tick.number,
                tick.remaining_burst,
                tick.wait_time,
                tick.turnaround_time,
                if paused { " | paused" } else { "" }
            ),
            (None, false) => "Waiting for the first tick.".to_owned(),
        };

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(1)
                .constraints([Constraint::Length(3), Constraint::Min(5)])
                .split(f.size());

            let current = Paragraph::new(status)
                .style(
                    Style::default()
                        .add_modifier(Modifier::BOLD)
                        .fg(Color::LightBlue),
                )
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Current Tick")
                        .border_type(BorderType::Rounded),
                );

            f.render_widget(current, chunks[0]);

            let now = sim.now();
            let active = sim.last_active();
            let items = sim.table().records().iter().enumerate().map(|(index, process)| {
                let state = if process.is_finished() {
                    "done"
                } else if Some(index) == active && !completed {
                    "running"
                } else if process.has_arrived(now) {
                    "ready"
                } else {
                    "pending"
                };
                let style = if state == "running" {
                    Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow)
                } else {
                    Style::default()
                };

                Row::new(vec![
                    Cell::from(format!("P{}", process.number()))
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                    Cell::from(process.total_burst().to_string()),
                    Cell::from(process.remaining_burst().to_string()),
                    Cell::from(process.wait_time().to_string()),
                    Cell::from(process.turnaround_time().to_string()),
                    Cell::from(state),
                ])
                .style(style)
            });

            let table = Table::new(items)
                .header(
                    Row::new(vec!["PID", "Burst", "Left", "Wait", "Turnaround", "State"])
                        .style(Style::default().add_modifier(Modifier::BOLD)),
                )
                .widths(&[
                    Constraint::Length(5),
                    Constraint::Length(6),
                    Constraint::Length(5),
                    Constraint::Length(5),
                    Constraint::Length(10),
                    Constraint::Length(7),
                ])
                .block(Block::default().title(title.as_str()).borders(Borders::ALL))
                .style(Style::default().fg(Color::LightGreen))
                .column_spacing(1);

            f.render_widget(table, chunks[1]);
        })?;
        Ok(())
    }

    pub fn get_input(&self) -> RunnerEvent {
        // Get the user's input and return a matching event
        match self.input_rx.recv() {
            Ok(DisplayEvent::Input(key)) => {
                if key.modifiers.is_empty() {
                    match key.code {
                        KeyCode::Char('q') => return RunnerEvent::Quit,
                        KeyCode::Char('p') => return RunnerEvent::Pause,
                        KeyCode::Char('r') => return RunnerEvent::Resume,
                        KeyCode::Char('s') => return RunnerEvent::Step,
                        _ => {}
                    };
                }
                RunnerEvent::None
            }
            Ok(DisplayEvent::Tick) => RunnerEvent::Tick,
            Err(_) => RunnerEvent::Quit,
        }
    }
}

impl Drop for DisplayTerminal {
    fn drop(&mut self) {
        self.input.stop();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = self.terminal.show_cursor();
    }
}
