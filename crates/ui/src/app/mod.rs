// App module for UI state and main TUI entry point
mod state;

use crate::views::render_ui;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use repository::IssueRepository;
use std::io::{self, stdout};
use std::time::Duration;

pub use state::App;

pub const WINDOW_TITLE: &str = "Community Engagement Portal";

// Main entry point for the TUI interface
pub fn run_portal_tui(repository: Box<dyn IssueRepository>) -> io::Result<()> {
    // Log lines would scribble over the alternate screen
    logging::set_console_echo(false);

    if let Err(e) = enable_raw_mode() {
        logging::set_console_echo(true);
        return Err(e);
    }

    let session = open_terminal().and_then(|mut terminal| {
        let mut app = App::new(repository);
        logging::info("Portal started");

        let result = run_tui_event_loop(&mut terminal, &mut app);
        first_error([result, terminal.show_cursor()])
    });

    // Every restore step runs, even when an earlier one failed
    let result = first_error([session, disable_raw_mode(), leave_alternate_screen()]);
    logging::set_console_echo(true);

    if let Err(e) = &result {
        logging::error(&format!("Portal UI failed: {}", e));
    }
    result
}

type PortalTerminal = Terminal<CrosstermBackend<io::Stdout>>;

fn open_terminal() -> io::Result<PortalTerminal> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(WINDOW_TITLE))?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn leave_alternate_screen() -> io::Result<()> {
    execute!(stdout(), LeaveAlternateScreen)
}

// The first failure among steps that have all already run
fn first_error<I>(results: I) -> io::Result<()>
where
    I: IntoIterator<Item = io::Result<()>>,
{
    results.into_iter().fold(Ok(()), |acc, next| acc.and(next))
}

// Helper function to run the main event loop
fn run_tui_event_loop(terminal: &mut PortalTerminal, app: &mut App) -> io::Result<()> {
    // Keep the poll short so status messages expire on time
    let event_poll_timeout = Duration::from_millis(50);

    loop {
        terminal.draw(|f| {
            render_ui(f, app);
        })?;

        app.tick();

        if !event::poll(event_poll_timeout)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        // Windows reports releases too
        if key.kind == KeyEventKind::Release {
            continue;
        }

        // The modal form gets every key while it is open
        if app.is_form_open() {
            app.handle_form_key(key);
            continue;
        }

        match key.code {
            KeyCode::Char('q') => break Ok(()),
            KeyCode::Esc => {
                if app.show_help {
                    app.show_help = false;
                } else {
                    break Ok(());
                }
            }
            KeyCode::Char('?') => app.toggle_help(),
            KeyCode::Up | KeyCode::Char('k') => app.previous_entry(),
            KeyCode::Down | KeyCode::Char('j') => app.next_entry(),
            KeyCode::Enter => {
                if !app.show_help {
                    app.activate_selected();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(kind: io::ErrorKind) -> io::Result<()> {
        Err(io::Error::new(kind, "restore step failed"))
    }

    #[test]
    fn test_first_error_is_kept_over_later_ones() {
        let result = first_error([
            Ok(()),
            failure(io::ErrorKind::BrokenPipe),
            failure(io::ErrorKind::PermissionDenied),
        ]);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_loop_error_wins_over_cleanup_error() {
        let session = failure(io::ErrorKind::Interrupted);
        let result = first_error([session, Ok(()), failure(io::ErrorKind::Other)]);
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::Interrupted);
    }

    #[test]
    fn test_all_steps_ok() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());
    }
}
