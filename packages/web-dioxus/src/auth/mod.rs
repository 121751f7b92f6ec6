//! In-memory session state

mod context;

pub use context::{use_session, SessionContext, SessionProvider};
