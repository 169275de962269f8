mod errors;
mod escape;
mod logger;

pub use errors::CoralError;
pub use escape::escape;
pub use logger::init_logger;
