pub mod app;
pub mod catalog;
pub mod cli;
pub mod panel;
pub mod session;
pub mod tui;
pub mod utils;

pub use app::{load_config, Config};
pub use catalog::{DataSource, GenerateMode, OptionCatalog};
pub use panel::{ControlId, SelectorPanel};
pub use session::{ConversationHost, SessionContext};
pub use tui::run_ui;
pub use utils::{escape, CoralError};
