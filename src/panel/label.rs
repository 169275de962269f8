use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::utils::escape;

/// Build a sanitized, styled label span for a panel control.
///
/// Pure helper: text goes through the same escaping transform as option
/// values before it becomes visible anywhere.
pub fn control_label(text: &str) -> Span<'static> {
    Span::styled(
        escape(text),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_text_is_sanitized() {
        let span = control_label("<Site>");
        assert_eq!(span.content, "&lt;Site&gt;");
    }
}
