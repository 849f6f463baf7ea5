pub mod manager;
pub mod session;

pub use manager::{MoveOutcome, SessionManager};
pub use session::Session;
