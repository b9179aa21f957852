pub mod api;
pub mod context;
pub mod storage;

pub use context::Session;
pub use storage::{BrowserSessionStore, SessionStore};
