use crate::session::{ConversationHost, SessionContext};

/// The two view states behind the debug toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Normal,
    Debug,
}

/// State machine for the debug toggle.
///
/// Each transition pairs a SessionContext flag write with exactly one render
/// hook call, so the two effects cannot drift apart. Toggling is a view-mode
/// change, not a data change: neither transition calls `reset_state()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugView {
    state: ViewState,
}

impl DebugView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Flip the view state and fire the paired side effect
    pub fn toggle(
        &mut self,
        ctx: &mut SessionContext,
        host: &mut dyn ConversationHost,
    ) -> ViewState {
        self.state = match self.state {
            ViewState::Normal => {
                ctx.debug_mode = true;
                host.show_debug_view();
                ViewState::Debug
            }
            ViewState::Debug => {
                ctx.debug_mode = false;
                host.show_normal_view();
                ViewState::Normal
            }
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GenerateMode;

    #[derive(Default)]
    struct RecordingHost {
        resets: usize,
        debug_views: usize,
        normal_views: usize,
    }

    impl ConversationHost for RecordingHost {
        fn reset_state(&mut self) {
            self.resets += 1;
        }
        fn show_debug_view(&mut self) {
            self.debug_views += 1;
        }
        fn show_normal_view(&mut self) {
            self.normal_views += 1;
        }
    }

    #[test]
    fn test_toggle_on_sets_flag_and_renders_diagnostics_once() {
        let mut view = DebugView::new();
        let mut ctx = SessionContext::new("all", GenerateMode::List);
        let mut host = RecordingHost::default();

        assert_eq!(view.toggle(&mut ctx, &mut host), ViewState::Debug);
        assert!(ctx.debug_mode);
        assert_eq!(host.debug_views, 1);
        assert_eq!(host.normal_views, 0);
        assert_eq!(host.resets, 0);
    }

    #[test]
    fn test_toggle_off_clears_flag_and_restores_normal_view() {
        let mut view = DebugView::new();
        let mut ctx = SessionContext::new("all", GenerateMode::List);
        let mut host = RecordingHost::default();

        view.toggle(&mut ctx, &mut host);
        assert_eq!(view.toggle(&mut ctx, &mut host), ViewState::Normal);
        assert!(!ctx.debug_mode);
        assert_eq!(host.debug_views, 1);
        assert_eq!(host.normal_views, 1);
        // A view-mode change never discards results
        assert_eq!(host.resets, 0);
    }

    #[test]
    fn test_no_automatic_reversion() {
        let mut view = DebugView::new();
        let mut ctx = SessionContext::new("all", GenerateMode::List);
        let mut host = RecordingHost::default();

        view.toggle(&mut ctx, &mut host);
        assert_eq!(view.state(), ViewState::Debug);
        assert_eq!(view.state(), ViewState::Debug);
    }
}
