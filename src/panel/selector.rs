use tracing::debug;

use crate::catalog::{GenerateMode, OptionCatalog};
use crate::session::{ConversationHost, SessionContext};

use super::controls::{ControlId, IconButton, Select, SelectBuilder, UrlField};
use super::debug::{DebugView, ViewState};

/// The selector panel: site, mode, optional data source, clear, debug
/// toggle and context-URL field, wired to one SessionContext.
///
/// Assembly is pure apart from one documented exception (the data-source
/// default override); all other writes happen in the commit paths, which
/// always write the new value before signalling the host to reset.
pub struct SelectorPanel {
    site: Select,
    mode: Select,
    database: Option<Select>,
    clear: IconButton,
    debug: IconButton,
    debug_view: DebugView,
    context_url: UrlField,
    order: Vec<ControlId>,
}

impl SelectorPanel {
    /// Assemble the panel and seed it from the catalog and any pre-existing
    /// context values.
    ///
    /// The data-source sub-builder runs only when the capability flag is
    /// enabled, and it is the one place construction writes back: the fixed
    /// default descriptor id is forced into `ctx.database`, overriding any
    /// prior value. Site and mode honor prior state instead.
    pub fn build(
        catalog: &OptionCatalog,
        ctx: &mut SessionContext,
        enable_database_selector: bool,
    ) -> Self {
        let site = SelectBuilder::new(ControlId::Site, "Site")
            .literal_options(catalog.sites().iter().map(String::as_str))
            .initial(&ctx.site)
            .build();

        // Site and mode entries use the option text as value and label;
        // only the data-source control carries a separate display name.
        let mode = SelectBuilder::new(ControlId::Mode, "Mode")
            .literal_options(catalog.modes().iter().map(|m| m.as_str()))
            .initial(ctx.generate_mode.as_str())
            .build();

        let database = if enable_database_selector {
            let mut select = catalog
                .sources()
                .iter()
                .fold(SelectBuilder::new(ControlId::Database, "Source"), |b, s| {
                    b.option(&s.id, &s.name)
                })
                .build();
            select.select_value(catalog.default_source_id());
            ctx.database = Some(catalog.default_source_id().to_string());
            debug!(source = %catalog.default_source_id(), "data-source selector enabled");
            Some(select)
        } else {
            None
        };

        let mut order = vec![ControlId::Site, ControlId::Mode];
        if database.is_some() {
            order.push(ControlId::Database);
        }
        order.extend([ControlId::Clear, ControlId::Debug, ControlId::ContextUrl]);

        Self {
            site,
            mode,
            database,
            clear: IconButton::new(ControlId::Clear, "⟳", "Clear"),
            debug: IconButton::new(ControlId::Debug, "◉", "Debug"),
            debug_view: DebugView::new(),
            context_url: UrlField::new(""),
            order,
        }
    }

    /// Constructed controls in their fixed layout order
    pub fn controls(&self) -> &[ControlId] {
        &self.order
    }

    pub fn site(&self) -> &Select {
        &self.site
    }

    pub fn mode(&self) -> &Select {
        &self.mode
    }

    pub fn database(&self) -> Option<&Select> {
        self.database.as_ref()
    }

    pub fn clear_button(&self) -> &IconButton {
        &self.clear
    }

    pub fn debug_button(&self) -> &IconButton {
        &self.debug
    }

    pub fn debug_state(&self) -> ViewState {
        self.debug_view.state()
    }

    /// The raw context-URL widget, read on demand at query time
    pub fn context_url(&self) -> &UrlField {
        &self.context_url
    }

    pub fn context_url_mut(&mut self) -> &mut UrlField {
        &mut self.context_url
    }

    /// Move the given selector one entry forward or backward and commit the
    /// newly displayed value. One call is one discrete selection event.
    pub fn cycle_selection(
        &mut self,
        id: ControlId,
        forward: bool,
        ctx: &mut SessionContext,
        host: &mut dyn ConversationHost,
    ) {
        let Some(select) = self.selector_mut(id) else {
            return;
        };
        if forward {
            select.select_next();
        } else {
            select.select_previous();
        }
        self.commit(id, ctx, host);
    }

    /// Select a specific value on the given selector and commit it. Returns
    /// false (and commits nothing) when the value matches no entry.
    pub fn select_and_commit(
        &mut self,
        id: ControlId,
        value: &str,
        ctx: &mut SessionContext,
        host: &mut dyn ConversationHost,
    ) -> bool {
        let Some(select) = self.selector_mut(id) else {
            return false;
        };
        if !select.select_value(value) {
            return false;
        }
        self.commit(id, ctx, host);
        true
    }

    /// Activate an action control. Clear signals a reset and touches no
    /// context field; Debug runs the view-state machine.
    pub fn activate(
        &mut self,
        id: ControlId,
        ctx: &mut SessionContext,
        host: &mut dyn ConversationHost,
    ) {
        match id {
            ControlId::Clear => host.reset_state(),
            ControlId::Debug => {
                self.debug_view.toggle(ctx, host);
            }
            _ => {}
        }
    }

    fn selector_mut(&mut self, id: ControlId) -> Option<&mut Select> {
        match id {
            ControlId::Site => Some(&mut self.site),
            ControlId::Mode => Some(&mut self.mode),
            ControlId::Database => self.database.as_mut(),
            _ => None,
        }
    }

    /// Commit the displayed value of one selector: write it into the
    /// context, then signal exactly one reset. No dedup against the old
    /// value; every discrete selection event goes through here once.
    fn commit(&mut self, id: ControlId, ctx: &mut SessionContext, host: &mut dyn ConversationHost) {
        match id {
            ControlId::Site => {
                ctx.site = self.site.selected_value().to_string();
            }
            ControlId::Mode => {
                if let Some(mode) = GenerateMode::parse(self.mode.selected_value()) {
                    ctx.generate_mode = mode;
                }
            }
            ControlId::Database => {
                if let Some(db) = &self.database {
                    ctx.database = Some(db.selected_value().to_string());
                }
            }
            _ => return,
        }
        debug!(control = ?id, "selection committed");
        host.reset_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

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

    fn build_panel(enable_db: bool) -> (SelectorPanel, SessionContext) {
        let mut ctx = SessionContext::new("nytimes", GenerateMode::List);
        let panel = SelectorPanel::build(OptionCatalog::default_catalog(), &mut ctx, enable_db);
        (panel, ctx)
    }

    #[test]
    fn test_control_order_is_fixed() {
        let (panel, _) = build_panel(true);
        assert_eq!(
            panel.controls(),
            &[
                ControlId::Site,
                ControlId::Mode,
                ControlId::Database,
                ControlId::Clear,
                ControlId::Debug,
                ControlId::ContextUrl,
            ]
        );

        let (panel, _) = build_panel(false);
        assert!(!panel.controls().contains(&ControlId::Database));
        assert!(panel.database().is_none());
    }

    #[test]
    fn test_seeding_honors_existing_site_and_mode() {
        let mut ctx = SessionContext::new("seriouseats", GenerateMode::Summarize);
        let panel = SelectorPanel::build(OptionCatalog::default_catalog(), &mut ctx, false);

        assert_eq!(panel.site().selected_value(), "seriouseats");
        assert_eq!(panel.mode().selected_value(), "summarize");
        // Seeding reads existing state but writes nothing back
        assert_eq!(ctx.site, "seriouseats");
        assert_eq!(ctx.generate_mode, GenerateMode::Summarize);
    }

    #[test]
    fn test_database_default_overrides_prior_value() {
        let catalog = OptionCatalog::default_catalog();
        let mut ctx = SessionContext::new("all", GenerateMode::List);
        ctx.database = Some("milvus".to_string());

        let panel = SelectorPanel::build(catalog, &mut ctx, true);

        assert_eq!(ctx.database.as_deref(), Some(catalog.default_source_id()));
        assert_eq!(
            panel.database().unwrap().selected_value(),
            catalog.default_source_id()
        );
    }

    #[test]
    fn test_database_untouched_when_selector_disabled() {
        let mut ctx = SessionContext::new("all", GenerateMode::List);
        ctx.database = Some("milvus".to_string());

        SelectorPanel::build(OptionCatalog::default_catalog(), &mut ctx, false);

        assert_eq!(ctx.database.as_deref(), Some("milvus"));
    }

    #[test]
    fn test_site_selection_writes_value_and_resets_once() {
        let (mut panel, mut ctx) = build_panel(false);
        let mut host = RecordingHost::default();

        assert!(panel.select_and_commit(ControlId::Site, "seriouseats", &mut ctx, &mut host));
        assert_eq!(ctx.site, "seriouseats");
        assert_eq!(host.resets, 1);
    }

    #[test]
    fn test_reselecting_same_value_still_resets() {
        let (mut panel, mut ctx) = build_panel(false);
        let mut host = RecordingHost::default();

        assert!(panel.select_and_commit(ControlId::Site, "nytimes", &mut ctx, &mut host));
        assert!(panel.select_and_commit(ControlId::Site, "nytimes", &mut ctx, &mut host));
        assert_eq!(ctx.site, "nytimes");
        assert_eq!(host.resets, 2);
    }

    #[test]
    fn test_unknown_value_commits_nothing() {
        let (mut panel, mut ctx) = build_panel(false);
        let mut host = RecordingHost::default();

        assert!(!panel.select_and_commit(ControlId::Site, "nosuchsite", &mut ctx, &mut host));
        assert_eq!(ctx.site, "nytimes");
        assert_eq!(host.resets, 0);
    }

    #[test]
    fn test_cycle_commits_each_step() {
        let (mut panel, mut ctx) = build_panel(false);
        let mut host = RecordingHost::default();

        panel.cycle_selection(ControlId::Mode, true, &mut ctx, &mut host);
        assert_eq!(ctx.generate_mode, GenerateMode::Summarize);
        panel.cycle_selection(ControlId::Mode, true, &mut ctx, &mut host);
        assert_eq!(ctx.generate_mode, GenerateMode::Generate);
        assert_eq!(host.resets, 2);
    }

    #[test]
    fn test_database_selection_writes_endpoint_id() {
        let (mut panel, mut ctx) = build_panel(true);
        let mut host = RecordingHost::default();

        assert!(panel.select_and_commit(ControlId::Database, "milvus", &mut ctx, &mut host));
        assert_eq!(ctx.database.as_deref(), Some("milvus"));
        assert_eq!(host.resets, 1);
    }

    #[test]
    fn test_clear_resets_without_touching_context() {
        let (mut panel, mut ctx) = build_panel(true);
        let before = ctx.clone();
        let mut host = RecordingHost::default();

        panel.activate(ControlId::Clear, &mut ctx, &mut host);

        assert_eq!(host.resets, 1);
        assert_eq!(ctx, before);
    }

    #[test]
    fn test_debug_activation_pairs_flag_and_render() {
        let (mut panel, mut ctx) = build_panel(false);
        let mut host = RecordingHost::default();

        panel.activate(ControlId::Debug, &mut ctx, &mut host);
        assert!(ctx.debug_mode);
        assert_eq!(panel.debug_state(), ViewState::Debug);
        assert_eq!(host.debug_views, 1);

        panel.activate(ControlId::Debug, &mut ctx, &mut host);
        assert!(!ctx.debug_mode);
        assert_eq!(panel.debug_state(), ViewState::Normal);
        assert_eq!(host.normal_views, 1);
        assert_eq!(host.resets, 0);
    }

    #[test]
    fn test_rebuild_with_same_context_repeats_initial_values() {
        let catalog = OptionCatalog::default_catalog();
        let mut ctx = SessionContext::new("nytimes", GenerateMode::Generate);

        let first = SelectorPanel::build(catalog, &mut ctx, true);
        let second = SelectorPanel::build(catalog, &mut ctx, true);

        assert_eq!(first.site().selected_value(), second.site().selected_value());
        assert_eq!(first.mode().selected_value(), second.mode().selected_value());
        assert_eq!(
            first.database().unwrap().selected_value(),
            second.database().unwrap().selected_value()
        );
    }

    #[test]
    fn test_end_to_end_construction_and_mode_change() {
        let catalog = OptionCatalog::default_catalog();
        let mut ctx = SessionContext::new("nytimes", GenerateMode::List);
        let mut panel = SelectorPanel::build(catalog, &mut ctx, true);
        let mut host = RecordingHost::default();

        assert_eq!(panel.site().selected_value(), "nytimes");
        assert_eq!(panel.mode().selected_value(), "list");
        assert_eq!(
            panel.database().unwrap().selected_label(),
            catalog.default_source().unwrap().name
        );
        assert_eq!(ctx.database.as_deref(), Some(catalog.default_source_id()));

        assert!(panel.select_and_commit(ControlId::Mode, "summarize", &mut ctx, &mut host));
        assert_eq!(ctx.generate_mode, GenerateMode::Summarize);
        assert_eq!(host.resets, 1);
    }
}
