mod context;

pub use context::{ConversationHost, SessionContext};
