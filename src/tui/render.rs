use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::panel::{control_label, ControlId};

use super::app::{control_name, App, Focus};

/// Render the whole UI. The selector panel is the first child of the
/// surface: it always sits above the conversation content.
pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Selector panel
            Constraint::Min(5),    // Conversation / debug region
            Constraint::Length(3), // Ask line
            Constraint::Length(1), // Status / hints
        ])
        .split(f.area());

    render_panel(f, chunks[0], app);
    render_conversation(f, chunks[1], app);
    render_ask_line(f, chunks[2], app);
    render_status(f, chunks[3], app);
}

/// Render the selector panel controls in their fixed order
fn render_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" coral ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let constraints: Vec<Constraint> = app
        .panel
        .controls()
        .iter()
        .map(|id| match id {
            ControlId::Site | ControlId::Mode | ControlId::Database => Constraint::Length(24),
            ControlId::Clear | ControlId::Debug => Constraint::Length(11),
            ControlId::ContextUrl => Constraint::Min(16),
        })
        .collect();

    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (idx, id) in app.panel.controls().iter().enumerate() {
        let focused = app.focus == Focus::Panel(idx);
        match id {
            ControlId::ContextUrl => {
                // The raw input widget renders itself
                f.render_widget(app.panel.context_url().widget(), cells[idx]);
            }
            _ => {
                let line = control_line(app, *id, focused);
                f.render_widget(Paragraph::new(line), cells[idx]);
            }
        }
    }
}

/// One control as a label + current-value line
fn control_line(app: &App, id: ControlId, focused: bool) -> Line<'static> {
    let value_style = if focused {
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let value: String = match id {
        ControlId::Site => app.panel.site().selected_label().to_string(),
        ControlId::Mode => app.panel.mode().selected_label().to_string(),
        ControlId::Database => app
            .panel
            .database()
            .map(|d| d.selected_label().to_string())
            .unwrap_or_default(),
        ControlId::Clear => app.panel.clear_button().glyph().to_string(),
        ControlId::Debug => {
            let state = if app.ctx.debug_mode { "on" } else { "off" };
            format!("{} {}", app.panel.debug_button().glyph(), state)
        }
        ControlId::ContextUrl => String::new(),
    };

    Line::from(vec![
        control_label(control_name(id)),
        Span::raw(": "),
        Span::styled(value, value_style),
        Span::raw("  "),
    ])
}

/// Render the conversation content, or the diagnostic region while the
/// debug view is active
fn render_conversation(f: &mut Frame, area: Rect, app: &App) {
    if let Some(pane) = app.surface.debug_pane() {
        let debug = Paragraph::new(pane.to_string())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Debug: last exchange ")
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(debug, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for exchange in app.surface.exchanges() {
        lines.push(Line::from(vec![
            Span::styled("[You] ", Style::default().fg(Color::Green)),
            Span::raw(exchange.question.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("[Coral] ", Style::default().fg(Color::Cyan)),
            Span::raw(exchange.answer.clone()),
        ]));
        lines.push(Line::from(""));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Ask a question below. Tab moves between the ask line and the panel.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let conversation = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Results ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(conversation, area);
}

/// Render the ask line
fn render_ask_line(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::AskLine;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let ask = Paragraph::new(app.input.clone()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Ask ")
            .border_style(border_style),
    );
    f.render_widget(ask, area);
}

/// Render the status message or the hint bar
fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let text = if let Some(status) = &app.status_message {
        status.clone()
    } else if app.show_hints {
        "Tab: focus  Up/Down: change selection  Enter: ask/activate  Ctrl+D: debug  Ctrl+R: clear  Ctrl+C: quit"
            .to_string()
    } else {
        String::new()
    };

    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
