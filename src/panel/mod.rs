// Gateway module for the selector panel - all external access goes
// through these re-exports.

mod controls;
mod debug;
mod label;
mod selector;

pub use controls::{ControlId, IconButton, Select, SelectBuilder, SelectOption, UrlField};
pub use debug::{DebugView, ViewState};
pub use label::control_label;
pub use selector::SelectorPanel;
