use dioxus::prelude::*;
use shared_types::AuthUser;

/// Global authentication state.
///
/// Holds the signed-in user for the lifetime of the page — the portal
/// issues no sessions or tokens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}
