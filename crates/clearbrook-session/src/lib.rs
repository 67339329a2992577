//! clearbrook-session
//!
//! Tab-scoped form progress cache. A thin snapshot layer over an injected
//! key/value store: the page backs [`store::SessionStore`] with its session
//! storage, tests back it with [`store::MemoryStore`].

pub mod error;
pub mod progress;
pub mod store;

pub use error::SessionError;
pub use progress::{RestoreOutcome, load_progress, save_progress};
pub use store::{MemoryStore, SessionStore};
