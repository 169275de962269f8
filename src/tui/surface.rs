use chrono::{DateTime, Local};

use crate::session::{ConversationHost, SessionContext};

/// One completed question/answer pair, with the selections it ran under
#[derive(Debug, Clone)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
    pub site: String,
    pub mode: String,
    pub database: Option<String>,
    pub context_url: String,
    pub timestamp: DateTime<Local>,
}

/// The conversation surface the panel signals into.
///
/// Holds the accumulated exchanges and the designated diagnostic region.
/// This is the host side of the panel contract: resets discard results,
/// the debug hooks switch what the result area shows.
#[derive(Debug, Default)]
pub struct ConversationSurface {
    exchanges: Vec<Exchange>,
    debug_pane: Option<String>,
}

impl ConversationSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn last_exchange(&self) -> Option<&Exchange> {
        self.exchanges.last()
    }

    /// Diagnostic region content, present only while in debug view
    pub fn debug_pane(&self) -> Option<&str> {
        self.debug_pane.as_deref()
    }

    /// Record a completed exchange. Answers are assembled locally from the
    /// current selections; retrieval itself lives outside this crate.
    pub fn push_exchange(&mut self, ctx: &SessionContext, question: String, context_url: String) {
        let database = ctx.database.clone();
        let answer = format!(
            "Would {} results for \"{}\" from site '{}'{}{}",
            ctx.generate_mode.as_str(),
            question,
            ctx.site,
            database
                .as_deref()
                .map(|d| format!(" via {}", d))
                .unwrap_or_default(),
            if context_url.is_empty() {
                String::new()
            } else {
                format!(" (context: {})", context_url)
            },
        );

        self.exchanges.push(Exchange {
            question,
            answer,
            site: ctx.site.clone(),
            mode: ctx.generate_mode.as_str().to_string(),
            database,
            context_url,
            timestamp: Local::now(),
        });

        // Keep the debug pane in step with the exchange it mirrors
        if self.debug_pane.is_some() {
            self.debug_pane = Some(self.render_debug_text());
        }
    }

    /// Raw dump of the most recent exchange for the diagnostic region
    fn render_debug_text(&self) -> String {
        match self.last_exchange() {
            Some(ex) => format!(
                "time: {}\nquestion: {}\nsite: {}\nmode: {}\ndatabase: {}\ncontext_url: {}\nanswer: {}",
                ex.timestamp.format("%Y-%m-%d %H:%M:%S"),
                ex.question,
                ex.site,
                ex.mode,
                ex.database.as_deref().unwrap_or("-"),
                if ex.context_url.is_empty() {
                    "-"
                } else {
                    ex.context_url.as_str()
                },
                ex.answer,
            ),
            None => "No exchanges yet".to_string(),
        }
    }
}

impl ConversationHost for ConversationSurface {
    fn reset_state(&mut self) {
        self.exchanges.clear();
        if self.debug_pane.is_some() {
            self.debug_pane = Some(self.render_debug_text());
        }
    }

    fn show_debug_view(&mut self) {
        self.debug_pane = Some(self.render_debug_text());
    }

    fn show_normal_view(&mut self) {
        self.debug_pane = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GenerateMode;

    fn sample_ctx() -> SessionContext {
        let mut ctx = SessionContext::new("seriouseats", GenerateMode::Summarize);
        ctx.database = Some("qdrant_local".to_string());
        ctx
    }

    #[test]
    fn test_reset_discards_exchanges() {
        let mut surface = ConversationSurface::new();
        let ctx = sample_ctx();
        surface.push_exchange(&ctx, "carbonara?".to_string(), String::new());
        assert_eq!(surface.exchanges().len(), 1);

        surface.reset_state();
        assert!(surface.exchanges().is_empty());
    }

    #[test]
    fn test_debug_view_dumps_last_exchange() {
        let mut surface = ConversationSurface::new();
        let ctx = sample_ctx();
        surface.push_exchange(
            &ctx,
            "carbonara?".to_string(),
            "https://example.com/pasta".to_string(),
        );

        surface.show_debug_view();
        let pane = surface.debug_pane().unwrap();
        assert!(pane.contains("question: carbonara?"));
        assert!(pane.contains("site: seriouseats"));
        assert!(pane.contains("database: qdrant_local"));
        assert!(pane.contains("context_url: https://example.com/pasta"));

        surface.show_normal_view();
        assert!(surface.debug_pane().is_none());
    }

    #[test]
    fn test_debug_view_without_exchanges() {
        let mut surface = ConversationSurface::new();
        surface.show_debug_view();
        assert_eq!(surface.debug_pane(), Some("No exchanges yet"));
    }

    #[test]
    fn test_answer_reads_context_url_at_query_time() {
        let mut surface = ConversationSurface::new();
        let ctx = sample_ctx();
        surface.push_exchange(
            &ctx,
            "pizza?".to_string(),
            "https://example.com/doughs".to_string(),
        );

        let last = surface.last_exchange().unwrap();
        assert!(last.answer.contains("context: https://example.com/doughs"));
        assert!(last.answer.contains("site 'seriouseats'"));
    }
}
