// Gateway module for the TUI host shell

mod app;
mod render;
mod surface;
mod ui;

pub use app::{App, Focus};
pub use surface::{ConversationSurface, Exchange};
pub use ui::run_ui;
