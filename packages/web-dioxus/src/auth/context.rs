//! Session context provider
//!
//! Holds the session token issued by OTP verification. The token lives only in
//! memory for the lifetime of the page view; nothing here writes to storage.

use dioxus::prelude::*;

/// Session context available to the entire app
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Token from a successful verification, if any
    pub token: Signal<Option<String>>,
}

impl SessionContext {
    /// Check if a session token is held
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Record a freshly issued session token
    pub fn sign_in(&mut self, token: String) {
        self.token.set(Some(token));
    }
}

/// Session provider component that wraps the app
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let token = use_signal(|| None::<String>);

    use_context_provider(|| SessionContext { token });

    children
}

/// Hook to access the session context
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}
