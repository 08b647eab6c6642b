//! Live terminal dashboard.
//!
//! Feature-gated behind `tui`. Launch with `--tui` on the CLI.

mod controls;
mod layout;
/// Application state and timers.
pub mod runtime;
mod style;

use std::io;
use std::time::Instant;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::DashboardConfig;
use runtime::{App, CLOCK_INTERVAL};

/// Launches the TUI event loop for the given configuration.
///
/// Sets up the terminal (raw mode, alternate screen), runs the event loop,
/// and restores the terminal on exit.
pub fn run(config: DashboardConfig) {
    enable_raw_mode().unwrap_or_else(|e| {
        eprintln!("error: failed to enable raw mode: {e}");
        std::process::exit(1);
    });

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).unwrap_or_else(|e| {
        let _ = disable_raw_mode();
        eprintln!("error: failed to enter alternate screen: {e}");
        std::process::exit(1);
    });

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).unwrap_or_else(|e| {
        let _ = disable_raw_mode();
        eprintln!("error: failed to create terminal: {e}");
        std::process::exit(1);
    });

    let mut app = App::new(config);
    let result = event_loop(&mut terminal, &mut app);

    // Teardown: always restore terminal state
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if let Err(e) = result {
        eprintln!("error: TUI crashed: {e}");
        std::process::exit(1);
    }
}

/// Core event loop: poll input, fire whichever timer is due, draw.
///
/// The simulation tick and the clock tick are independent timers; each
/// fires at its own cadence and never overlaps itself (everything runs to
/// completion on this thread).
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| layout::render(frame, app))?;

        if app.quit {
            return Ok(());
        }

        let now = Instant::now();
        let tick_deadline = app.last_tick + app.tick_interval;
        let clock_deadline = app.last_clock + CLOCK_INTERVAL;
        let next_deadline = tick_deadline.min(clock_deadline);
        let poll_timeout = next_deadline.saturating_duration_since(now);

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                controls::handle_key(app, key);
            }
        }

        if app.last_clock.elapsed() >= CLOCK_INTERVAL {
            app.clock_tick();
        }
        if app.last_tick.elapsed() >= app.tick_interval && !app.paused {
            app.tick();
        }
    }
}
