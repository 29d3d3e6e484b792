//! Discord release announcements
//!
//! One transient authenticated session per run: open, send exactly one
//! message, close on every exit path.

pub mod announcer;
pub mod error;
pub mod session;
pub mod traits;

pub use announcer::DiscordAnnouncer;
pub use error::{ChatError, Result};
pub use session::ChatSession;
pub use traits::Announcer;
