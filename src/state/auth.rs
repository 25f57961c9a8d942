//! Reactive projection of the current user for route guards and views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Storage only exists in the browser, so the app starts `loading` and the
//! first client-side effect fills `user` from `AuthSession::current_user`.
//! Every entry or sign-out operation refreshes it from the store again.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::profile::Profile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Profile>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// State after the store has been read.
    #[must_use]
    pub fn loaded(user: Option<Profile>) -> Self {
        Self { user, loading: false }
    }
}
