//! Auth modal state machine.
//!
//! DESIGN
//! ======
//! `AuthFlow` is plain data so the landing page can hold it in one
//! `RwSignal` and tests can drive it without a reactive runtime.
//!
//! ```text
//! Closed --open(mode)--> {Signin,Signup,Guest}Form --begin_submit--> Submitting
//!   ^                         |                                         |
//!   +--------dismiss----------+                 complete_submit(Ok) ----+
//!                             ^-------------- complete_submit(Err) -----+
//! ```
//!
//! `Closed` is also the mode-selection state: the landing page shows its
//! three entry buttons and no modal. Opening always starts from empty
//! fields, and the payload is built only from fields the mode shows.
//! Each successful commit bumps a counter; the landing page navigates when
//! `should_navigate` sees it move, so one commit is one navigation.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use serde::{Deserialize, Serialize};

use crate::error::{FlowError, ValidationError};
use crate::state::profile::{Gender, Profile};
use crate::state::submission::{GuestPayload, SigninPayload, SignupPayload, Submission};

/// Entry mode chosen on the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    Signin,
    Signup,
    Guest,
}

impl AuthMode {
    pub const ALL: [Self; 3] = [Self::Signin, Self::Signup, Self::Guest];

    /// Modal heading and landing-page button text.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Signin => "Sign In",
            Self::Signup => "Sign Up",
            Self::Guest => "Continue as Guest",
        }
    }

    /// Fields rendered by the modal in this mode, in display order.
    #[must_use]
    pub fn fields(self) -> &'static [FormField] {
        const SIGNIN: &[FormField] =
            &[FormField::Name, FormField::Age, FormField::Gender, FormField::Email, FormField::Password];
        const SIGNUP: &[FormField] = &[
            FormField::Name,
            FormField::Age,
            FormField::Gender,
            FormField::Email,
            FormField::Password,
            FormField::ConfirmPassword,
        ];
        const GUEST: &[FormField] = &[FormField::Name, FormField::Age, FormField::Gender];
        match self {
            Self::Signin => SIGNIN,
            Self::Signup => SIGNUP,
            Self::Guest => GUEST,
        }
    }

    #[must_use]
    pub fn shows(self, field: FormField) -> bool {
        self.fields().contains(&field)
    }
}

/// Inputs the modal can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Age,
    Gender,
    Email,
    Password,
    ConfirmPassword,
}

impl FormField {
    /// Every shown field is required except the gender selector.
    #[must_use]
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Gender)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Age => "Age",
            Self::Gender => "Gender",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// DOM id of the input, also its form key.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

/// In-progress modal input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormFields {
    /// Text value of `field`; gender renders as its selector value.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Age => &self.age,
            FormField::Gender => self.gender.map_or("", Gender::value),
            FormField::Email => &self.email,
            FormField::Password => &self.password,
            FormField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Age => self.age = value,
            FormField::Gender => self.gender = Gender::from_value(&value),
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
            FormField::ConfirmPassword => self.confirm_password = value,
        }
    }

    fn payload(&self, mode: AuthMode) -> Submission {
        match mode {
            AuthMode::Signin => Submission::Signin(SigninPayload {
                name: self.name.clone(),
                age: self.age.clone(),
                gender: self.gender,
                email: self.email.clone(),
                password: self.password.clone(),
            }),
            AuthMode::Signup => Submission::Signup(SignupPayload {
                name: self.name.clone(),
                age: self.age.clone(),
                gender: self.gender,
                email: self.email.clone(),
                password: self.password.clone(),
                confirm_password: self.confirm_password.clone(),
            }),
            AuthMode::Guest => Submission::Guest(GuestPayload {
                name: self.name.clone(),
                age: self.age.clone(),
                gender: self.gender,
            }),
        }
    }
}

/// Where the modal is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowState {
    /// No modal; the three entry buttons are shown.
    #[default]
    Closed,
    SigninForm,
    SignupForm,
    GuestForm,
    /// A submission is in flight; the submit control is disabled.
    Submitting(AuthMode),
}

impl FlowState {
    #[must_use]
    pub fn form(mode: AuthMode) -> Self {
        match mode {
            AuthMode::Signin => Self::SigninForm,
            AuthMode::Signup => Self::SignupForm,
            AuthMode::Guest => Self::GuestForm,
        }
    }

    /// Mode of the open modal, if any.
    #[must_use]
    pub fn mode(self) -> Option<AuthMode> {
        match self {
            Self::Closed => None,
            Self::SigninForm => Some(AuthMode::Signin),
            Self::SignupForm => Some(AuthMode::Signup),
            Self::GuestForm => Some(AuthMode::Guest),
            Self::Submitting(mode) => Some(mode),
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self != Self::Closed
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFlow {
    state: FlowState,
    fields: FormFields,
    errors: Vec<ValidationError>,
    commits: u64,
}

/// Whether the commit count moved since the last observation.
///
/// `prev` is `None` on the first observation, which never navigates.
#[must_use]
pub fn should_navigate(prev: Option<u64>, commits: u64) -> bool {
    prev.is_some_and(|p| p != commits)
}

impl AuthFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> FlowState {
        self.state
    }

    #[must_use]
    pub fn mode(&self) -> Option<AuthMode> {
        self.state.mode()
    }

    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Successful commits so far. Survives `open`/`dismiss` resets.
    #[must_use]
    pub fn commits(&self) -> u64 {
        self.commits
    }

    /// Inline message for `field`, if the last submit attempt flagged it.
    #[must_use]
    pub fn error_for(&self, field: FormField) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Submit control is enabled only while a form is open and idle.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.state, FlowState::SigninForm | FlowState::SignupForm | FlowState::GuestForm)
    }

    /// Open the modal in `mode` with every field empty.
    ///
    /// Switching modes while a form is open also resets. Ignored while a
    /// submission is in flight.
    pub fn open(&mut self, mode: AuthMode) {
        if matches!(self.state, FlowState::Submitting(_)) {
            return;
        }
        self.reset();
        self.state = FlowState::form(mode);
    }

    /// Close the modal and discard input. Ignored while submitting.
    pub fn dismiss(&mut self) {
        if matches!(self.state, FlowState::Submitting(_)) {
            return;
        }
        self.reset();
        self.state = FlowState::Closed;
    }

    /// Update a text input. Fields the current mode hides are ignored.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        let Some(mode) = self.editable_mode() else {
            return;
        };
        if !mode.shows(field) {
            return;
        }
        self.fields.set(field, value.into());
        self.errors.retain(|e| e.field() != field);
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        if self.editable_mode().is_none() {
            return;
        }
        self.fields.gender = gender;
    }

    /// Check required fields and hand back the mode's payload.
    ///
    /// On success the flow enters `Submitting` until `complete_submit`.
    pub fn begin_submit(&mut self) -> Result<Submission, FlowError> {
        let mode = match self.state {
            FlowState::Closed => return Err(FlowError::NotOpen),
            FlowState::Submitting(_) => return Err(FlowError::AlreadySubmitting),
            FlowState::SigninForm => AuthMode::Signin,
            FlowState::SignupForm => AuthMode::Signup,
            FlowState::GuestForm => AuthMode::Guest,
        };

        let missing: Vec<ValidationError> = mode
            .fields()
            .iter()
            .copied()
            .filter(|field| field.is_required() && self.fields.value(*field).trim().is_empty())
            .map(ValidationError::Missing)
            .collect();
        if !missing.is_empty() {
            self.errors.clone_from(&missing);
            return Err(FlowError::Invalid(missing));
        }

        self.errors.clear();
        self.state = FlowState::Submitting(mode);
        Ok(self.fields.payload(mode))
    }

    /// Settle the in-flight submission.
    ///
    /// `Ok` closes and resets the modal, bumps `commits` and returns the
    /// committed profile. `Err` reopens the same form with the message
    /// attached to its field.
    pub fn complete_submit(&mut self, outcome: Result<Profile, ValidationError>) -> Option<Profile> {
        let FlowState::Submitting(mode) = self.state else {
            return None;
        };
        match outcome {
            Ok(profile) => {
                self.reset();
                self.state = FlowState::Closed;
                self.commits += 1;
                Some(profile)
            }
            Err(e) => {
                self.state = FlowState::form(mode);
                self.errors = vec![e];
                None
            }
        }
    }

    fn editable_mode(&self) -> Option<AuthMode> {
        if self.can_submit() { self.state.mode() } else { None }
    }

    fn reset(&mut self) {
        self.fields = FormFields::default();
        self.errors.clear();
    }
}
