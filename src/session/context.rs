use crate::catalog::GenerateMode;

/// Host side of the panel contract.
///
/// The conversation surface implements this so the panel can signal it
/// without knowing anything about rendering. All methods are synchronous
/// and must be safe to call repeatedly.
pub trait ConversationHost {
    /// Discard accumulated conversation/result state. Called exactly once
    /// per committed selection change, after the corresponding
    /// SessionContext write.
    fn reset_state(&mut self);

    /// Render a diagnostic view of the most recent exchange into the
    /// designated display region. Called only when the debug toggle turns on.
    fn show_debug_view(&mut self);

    /// Clear the diagnostic region and re-render the normal view of
    /// existing results. Called only when the debug toggle turns off.
    fn show_normal_view(&mut self);
}

/// The active selection values for one conversation.
///
/// Externally owned and long-lived: the panel is handed a mutable reference
/// at construction, seeds its controls from whatever is already here, and
/// writes back on every committed selection. All mutation goes through the
/// panel's commit paths, so a reactive store could replace this struct
/// without changing the panel's contract.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    /// Currently selected content collection, or the `all` wildcard
    pub site: String,
    /// Controls downstream response shape
    pub generate_mode: GenerateMode,
    /// Active data-source endpoint id; present only when the data-source
    /// control is enabled
    pub database: Option<String>,
    /// Verbose rendering of the last exchange
    pub debug_mode: bool,
}

impl SessionContext {
    pub fn new(site: impl Into<String>, generate_mode: GenerateMode) -> Self {
        Self {
            site: site.into(),
            generate_mode,
            database: None,
            debug_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_starts_clean() {
        let ctx = SessionContext::new("nytimes", GenerateMode::List);
        assert_eq!(ctx.site, "nytimes");
        assert_eq!(ctx.generate_mode, GenerateMode::List);
        assert_eq!(ctx.database, None);
        assert!(!ctx.debug_mode);
    }
}
