use tui_textarea::TextArea;

use crate::utils::escape;

/// Identifies one control in the panel. The variant order is the fixed
/// layout order of the panel itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    Site,
    Mode,
    Database,
    Clear,
    Debug,
    ContextUrl,
}

/// One entry in a selection control.
///
/// Value and label are stored already sanitized; construction is the single
/// point where option text crosses into the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: escape(value),
            label: escape(label),
        }
    }

    /// Option whose value and label are the same source text
    pub fn literal(text: &str) -> Self {
        Self::new(text, text)
    }
}

/// A populated selection control
#[derive(Debug, Clone)]
pub struct Select {
    id: ControlId,
    title: String,
    options: Vec<SelectOption>,
    selected: usize,
}

impl Select {
    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.options.get(self.selected)
    }

    /// Currently displayed value (sanitized form)
    pub fn selected_value(&self) -> &str {
        self.selected_option().map(|o| o.value.as_str()).unwrap_or("")
    }

    /// Currently displayed label (sanitized form)
    pub fn selected_label(&self) -> &str {
        self.selected_option().map(|o| o.label.as_str()).unwrap_or("")
    }

    /// Select the entry with the given (sanitized) value. Returns false and
    /// leaves the selection untouched when no entry matches.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    /// Move to the next entry, wrapping at the end
    pub fn select_next(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + 1) % self.options.len();
        }
    }

    /// Move to the previous entry, wrapping at the start
    pub fn select_previous(&mut self) {
        if !self.options.is_empty() {
            self.selected = (self.selected + self.options.len() - 1) % self.options.len();
        }
    }
}

/// Builder for a selection control.
///
/// Keeps assembly pure: nothing is written anywhere until the finished
/// control is handed to the panel.
pub struct SelectBuilder {
    id: ControlId,
    title: String,
    options: Vec<SelectOption>,
    initial: Option<String>,
}

impl SelectBuilder {
    pub fn new(id: ControlId, title: &str) -> Self {
        Self {
            id,
            title: escape(title),
            options: Vec::new(),
            initial: None,
        }
    }

    /// Add one entry with distinct value and display label
    pub fn option(mut self, value: &str, label: &str) -> Self {
        self.options.push(SelectOption::new(value, label));
        self
    }

    /// Add entries whose value and label are the option text itself
    pub fn literal_options<'a>(mut self, texts: impl IntoIterator<Item = &'a str>) -> Self {
        self.options.extend(texts.into_iter().map(SelectOption::literal));
        self
    }

    /// Seed the displayed value from pre-existing state (raw, unsanitized
    /// text as the context holds it). If it matches no entry the control
    /// falls back to its natural first entry, with no write-back.
    pub fn initial(mut self, value: &str) -> Self {
        self.initial = Some(escape(value));
        self
    }

    pub fn build(self) -> Select {
        let mut select = Select {
            id: self.id,
            title: self.title,
            options: self.options,
            selected: 0,
        };
        if let Some(initial) = self.initial {
            select.select_value(&initial);
        }
        select
    }
}

/// A stateless action control: a glyph plus a sanitized label
#[derive(Debug, Clone)]
pub struct IconButton {
    id: ControlId,
    glyph: String,
    title: String,
}

impl IconButton {
    pub fn new(id: ControlId, glyph: &str, title: &str) -> Self {
        Self {
            id,
            glyph: glyph.to_string(),
            title: escape(title),
        }
    }

    pub fn id(&self) -> ControlId {
        self.id
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Uncontrolled free-text input for the context URL.
///
/// No change listener is wired here; the host reads the current text on
/// demand at query time through the raw widget.
pub struct UrlField {
    textarea: TextArea<'static>,
}

impl UrlField {
    pub fn new(initial: &str) -> Self {
        let mut textarea = if initial.is_empty() {
            TextArea::default()
        } else {
            TextArea::new(vec![initial.to_string()])
        };
        textarea.set_cursor_line_style(ratatui::style::Style::default());
        Self { textarea }
    }

    /// Current text, read on demand
    pub fn text(&self) -> String {
        self.textarea.lines().join("")
    }

    /// The raw input widget, exposed so the host can render it and feed it
    /// key events directly
    pub fn widget(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn widget_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }
}
