//! Current-user session over the profile store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits between the auth modal and `ProfileStore`. The entry operations are
//! `async` so a real backend call can replace the local commit without
//! touching call sites; today none of them suspend. There is no credential
//! store, so sign-in and sign-up accept any password.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::ValidationError;
use crate::state::auth_flow::FormField;
use crate::state::profile::{Age, Gender, Profile};
use crate::state::submission::{GuestPayload, SigninPayload, SignupPayload, Submission};
use crate::util::profile_store::{BrowserStorage, ProfileStore, StorageBackend};

/// Session over `window.localStorage`, shared through Leptos context.
pub type BrowserSession = AuthSession<BrowserStorage>;

#[derive(Clone, Debug)]
pub struct AuthSession<B> {
    store: ProfileStore<B>,
}

impl<B: StorageBackend> AuthSession<B> {
    pub fn new(store: ProfileStore<B>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &ProfileStore<B> {
        &self.store
    }

    /// The stored profile, re-read on every call.
    pub fn current_user(&self) -> Option<Profile> {
        self.store.read()
    }

    pub async fn sign_in(&self, input: SigninPayload) -> Result<Profile, ValidationError> {
        let profile = build_profile(&input.name, &input.age, input.gender, Some(&input.email))?;
        leptos::logging::log!("[MediBuddy] Sign In: {}", profile.name);
        self.store.write(&profile);
        Ok(profile)
    }

    /// Same commit as `sign_in`; `confirm_password` is dropped unchecked.
    pub async fn sign_up(&self, input: SignupPayload) -> Result<Profile, ValidationError> {
        let profile = build_profile(&input.name, &input.age, input.gender, Some(&input.email))?;
        leptos::logging::log!("[MediBuddy] Sign Up: {}", profile.name);
        self.store.write(&profile);
        Ok(profile)
    }

    pub async fn continue_as_guest(&self, input: GuestPayload) -> Result<Profile, ValidationError> {
        let profile = build_profile(&input.name, &input.age, input.gender, None)?;
        leptos::logging::log!("[MediBuddy] Guest: {}", profile.name);
        self.store.write(&profile);
        Ok(profile)
    }

    /// Route a modal submission to the matching entry operation.
    pub async fn submit(&self, submission: Submission) -> Result<Profile, ValidationError> {
        match submission {
            Submission::Signin(input) => self.sign_in(input).await,
            Submission::Signup(input) => self.sign_up(input).await,
            Submission::Guest(input) => self.continue_as_guest(input).await,
        }
    }

    pub fn sign_out(&self) {
        leptos::logging::log!("[MediBuddy] Sign Out");
        self.store.clear();
    }
}

/// Validate and normalize raw form values into a profile.
///
/// `email` is `None` for guest entry, where it is neither collected nor
/// stored; when `Some`, it is required.
fn build_profile(
    name: &str,
    age: &str,
    gender: Option<Gender>,
    email: Option<&str>,
) -> Result<Profile, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::Missing(FormField::Name));
    }
    let age = Age::parse(age)?;
    let email = match email.map(str::trim) {
        Some("") => return Err(ValidationError::Missing(FormField::Email)),
        Some(email) => Some(email.to_owned()),
        None => None,
    };
    Ok(Profile { name: name.to_owned(), age, gender, email })
}
