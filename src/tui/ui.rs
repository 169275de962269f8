use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::panel::ControlId;

use super::app::{App, Focus};
use super::render::render_ui;

/// Run the terminal UI
pub fn run_ui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the UI loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Global shortcuts first
            if key.modifiers == KeyModifiers::CONTROL {
                match key.code {
                    KeyCode::Char('c') => {
                        app.quit();
                    }
                    KeyCode::Char('d') => {
                        app.toggle_debug();
                        continue;
                    }
                    KeyCode::Char('r') => {
                        app.clear_results();
                        continue;
                    }
                    _ => {}
                }
            }

            match key.code {
                KeyCode::Tab => {
                    app.focus_next();
                    continue;
                }
                KeyCode::BackTab => {
                    app.focus_previous();
                    continue;
                }
                _ => {}
            }

            match app.focus {
                Focus::AskLine => match key.code {
                    KeyCode::Enter => app.submit_query(),
                    KeyCode::Char(c) if key.modifiers != KeyModifiers::CONTROL => {
                        app.input.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input.pop();
                    }
                    _ => {}
                },
                Focus::Panel(_) => match app.focused_control() {
                    Some(ControlId::Site | ControlId::Mode | ControlId::Database) => {
                        match key.code {
                            KeyCode::Up | KeyCode::Left => app.cycle_focused_selection(false),
                            KeyCode::Down | KeyCode::Right => app.cycle_focused_selection(true),
                            _ => {}
                        }
                    }
                    Some(ControlId::Clear | ControlId::Debug) => match key.code {
                        KeyCode::Enter | KeyCode::Char(' ') => app.activate_focused(),
                        _ => {}
                    },
                    Some(ControlId::ContextUrl) => {
                        // Uncontrolled input: keys go straight to the raw
                        // widget, nothing is tracked per keystroke
                        if key.code != KeyCode::Enter {
                            app.panel
                                .context_url_mut()
                                .widget_mut()
                                .input(Event::Key(key));
                        }
                    }
                    None => {}
                },
            }
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
