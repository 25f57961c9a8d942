//! Typed payloads handed from the auth modal to the session.
//!
//! Each entry mode has its own payload with its own field set, so a guest
//! submission cannot carry an email or password at all. Values are the raw
//! form text; the session validates and normalizes them.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use serde::Serialize;

use crate::state::profile::Gender;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninPayload {
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub email: String,
    /// Accepted to mirror a real sign-in form; never checked or stored.
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub email: String,
    pub password: String,
    /// Not compared against `password`.
    pub confirm_password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestPayload {
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
}

/// A completed modal submission, tagged by entry mode.
///
/// Serializes as `{ "type": "signin" | "signup" | "guest", ...fields }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Submission {
    Signin(SigninPayload),
    Signup(SignupPayload),
    Guest(GuestPayload),
}
