use tracing::info;

use crate::app::Config;
use crate::catalog::OptionCatalog;
use crate::panel::{ControlId, SelectorPanel};
use crate::session::SessionContext;

use super::surface::ConversationSurface;

/// What currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The ask line at the bottom
    AskLine,
    /// A panel control, by position in the panel's fixed order
    Panel(usize),
}

/// Application state
pub struct App {
    /// Static option sets, fixed for the life of the process
    pub catalog: OptionCatalog,
    /// The shared selection state the panel mutates
    pub ctx: SessionContext,
    /// The selector panel, attached above the conversation content
    pub panel: SelectorPanel,
    /// The conversation surface the panel signals into
    pub surface: ConversationSurface,
    /// Ask-line input buffer
    pub input: String,
    /// Current focus target
    pub focus: Focus,
    /// Is the app running?
    pub running: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Show the hint bar
    pub show_hints: bool,
}

impl App {
    /// Create a new app instance. The panel is built once here and never
    /// reconstructed; selection changes mutate state in place.
    pub fn new(config: &Config) -> Self {
        let catalog = config.catalog();
        let mut ctx = SessionContext::new(config.sites.default_site.clone(), config.default_mode);
        let panel = SelectorPanel::build(
            &catalog,
            &mut ctx,
            config.retrieval.enable_database_selector,
        );
        info!(site = %ctx.site, "session started");

        Self {
            catalog,
            ctx,
            panel,
            surface: ConversationSurface::new(),
            input: String::new(),
            focus: Focus::AskLine,
            running: true,
            status_message: None,
            show_hints: config.ui.show_hints,
        }
    }

    /// The control under focus, if the panel is focused
    pub fn focused_control(&self) -> Option<ControlId> {
        match self.focus {
            Focus::AskLine => None,
            Focus::Panel(idx) => self.panel.controls().get(idx).copied(),
        }
    }

    /// Cycle focus forward: ask line, then each panel control in order
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::AskLine => Focus::Panel(0),
            Focus::Panel(idx) if idx + 1 < self.panel.controls().len() => Focus::Panel(idx + 1),
            Focus::Panel(_) => Focus::AskLine,
        };
    }

    /// Cycle focus backward
    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            Focus::AskLine => Focus::Panel(self.panel.controls().len() - 1),
            Focus::Panel(0) => Focus::AskLine,
            Focus::Panel(idx) => Focus::Panel(idx - 1),
        };
    }

    /// Change the focused selector one entry in the given direction; each
    /// step is one committed selection event.
    pub fn cycle_focused_selection(&mut self, forward: bool) {
        if let Some(id) = self.focused_control() {
            if matches!(id, ControlId::Site | ControlId::Mode | ControlId::Database) {
                self.panel
                    .cycle_selection(id, forward, &mut self.ctx, &mut self.surface);
                self.set_status(format!(
                    "{} -> {}",
                    control_name(id),
                    self.selected_label(id)
                ));
            }
        }
    }

    /// Activate the focused action control
    pub fn activate_focused(&mut self) {
        if let Some(id) = self.focused_control() {
            match id {
                ControlId::Clear => {
                    self.panel.activate(id, &mut self.ctx, &mut self.surface);
                    self.set_status("Results cleared");
                }
                ControlId::Debug => {
                    self.panel.activate(id, &mut self.ctx, &mut self.surface);
                    self.set_status(if self.ctx.debug_mode {
                        "Debug view on"
                    } else {
                        "Debug view off"
                    });
                }
                _ => {}
            }
        }
    }

    /// Toggle the debug view regardless of focus
    pub fn toggle_debug(&mut self) {
        self.panel
            .activate(ControlId::Debug, &mut self.ctx, &mut self.surface);
    }

    /// Clear results regardless of focus
    pub fn clear_results(&mut self) {
        self.panel
            .activate(ControlId::Clear, &mut self.ctx, &mut self.surface);
        self.set_status("Results cleared");
    }

    /// Submit the ask line. The context URL is read from the raw widget at
    /// this moment, not tracked through change events.
    pub fn submit_query(&mut self) {
        if self.input.is_empty() {
            return;
        }
        let question = std::mem::take(&mut self.input);
        let context_url = self.panel.context_url().text();
        self.surface.push_exchange(&self.ctx, question, context_url);
    }

    fn selected_label(&self, id: ControlId) -> String {
        match id {
            ControlId::Site => self.panel.site().selected_label().to_string(),
            ControlId::Mode => self.panel.mode().selected_label().to_string(),
            ControlId::Database => self
                .panel
                .database()
                .map(|d| d.selected_label().to_string())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}

/// Display name for a control, used in status messages
pub fn control_name(id: ControlId) -> &'static str {
    match id {
        ControlId::Site => "Site",
        ControlId::Mode => "Mode",
        ControlId::Database => "Source",
        ControlId::Clear => "Clear",
        ControlId::Debug => "Debug",
        ControlId::ContextUrl => "Context URL",
    }
}
