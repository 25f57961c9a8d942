use futures::executor::block_on;

use super::*;
use crate::state::profile::Age;
use crate::state::session::AuthSession;
use crate::util::profile_store::{MemoryStorage, ProfileStore};

fn fill_signup(flow: &mut AuthFlow) {
    flow.set_field(FormField::Name, "Bo");
    flow.set_field(FormField::Age, "25");
    flow.set_gender(Some(Gender::Other));
    flow.set_field(FormField::Email, "b@x.com");
    flow.set_field(FormField::Password, "p1");
    flow.set_field(FormField::ConfirmPassword, "p1");
}

// =============================================================
// Field visibility
// =============================================================

#[test]
fn field_table_per_mode() {
    let all = [
        FormField::Name,
        FormField::Age,
        FormField::Gender,
        FormField::Email,
        FormField::Password,
        FormField::ConfirmPassword,
    ];
    let expect = |mode: AuthMode| all.map(|f| mode.shows(f));
    assert_eq!(expect(AuthMode::Signin), [true, true, true, true, true, false]);
    assert_eq!(expect(AuthMode::Signup), [true, true, true, true, true, true]);
    assert_eq!(expect(AuthMode::Guest), [true, true, true, false, false, false]);
}

#[test]
fn only_gender_is_optional() {
    for field in AuthMode::Signup.fields() {
        assert_eq!(field.is_required(), *field != FormField::Gender);
    }
}

#[test]
fn mode_titles() {
    assert_eq!(AuthMode::Signin.title(), "Sign In");
    assert_eq!(AuthMode::Signup.title(), "Sign Up");
    assert_eq!(AuthMode::Guest.title(), "Continue as Guest");
}

// =============================================================
// Open / dismiss
// =============================================================

#[test]
fn initial_state_is_closed() {
    let flow = AuthFlow::new();
    assert_eq!(flow.state(), FlowState::Closed);
    assert!(!flow.state().is_open());
    assert!(!flow.can_submit());
}

#[test]
fn open_enters_mode_form() {
    for mode in AuthMode::ALL {
        let mut flow = AuthFlow::new();
        flow.open(mode);
        assert_eq!(flow.state(), FlowState::form(mode));
        assert_eq!(flow.mode(), Some(mode));
        assert!(flow.can_submit());
    }
}

#[test]
fn dismiss_discards_input() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Signup);
    fill_signup(&mut flow);
    flow.dismiss();
    assert_eq!(flow.state(), FlowState::Closed);
    assert_eq!(flow.fields(), &FormFields::default());
}

#[test]
fn reopen_starts_empty() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Signup);
    fill_signup(&mut flow);
    flow.open(AuthMode::Signin);
    assert_eq!(flow.fields(), &FormFields::default());
}

#[test]
fn edits_ignored_while_closed() {
    let mut flow = AuthFlow::new();
    flow.set_field(FormField::Name, "Ann");
    flow.set_gender(Some(Gender::Female));
    assert_eq!(flow.fields(), &FormFields::default());
}

#[test]
fn hidden_fields_ignored_in_guest_mode() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Guest);
    flow.set_field(FormField::Email, "x@y.com");
    flow.set_field(FormField::Password, "pw");
    assert_eq!(flow.fields().email, "");
    assert_eq!(flow.fields().password, "");
}

#[test]
fn gender_field_text_goes_through_selector_values() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Guest);
    flow.set_field(FormField::Gender, "na");
    assert_eq!(flow.fields().gender, Some(Gender::PreferNotToSay));
    assert_eq!(flow.fields().value(FormField::Gender), "prefer-not-to-say");
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn submit_while_closed_is_refused() {
    let mut flow = AuthFlow::new();
    assert_eq!(flow.begin_submit(), Err(FlowError::NotOpen));
}

#[test]
fn submit_reports_missing_required_fields() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Signin);
    flow.set_field(FormField::Name, "Ann");
    let Err(FlowError::Invalid(errors)) = flow.begin_submit() else {
        panic!("expected invalid form");
    };
    assert_eq!(
        errors,
        vec![
            ValidationError::Missing(FormField::Age),
            ValidationError::Missing(FormField::Email),
            ValidationError::Missing(FormField::Password),
        ]
    );
    assert_eq!(flow.state(), FlowState::SigninForm);
    assert!(flow.error_for(FormField::Email).is_some());
    assert!(flow.error_for(FormField::Gender).is_none());
}

#[test]
fn editing_a_field_clears_its_error() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Guest);
    assert!(flow.begin_submit().is_err());
    flow.set_field(FormField::Name, "Cy");
    assert!(flow.error_for(FormField::Name).is_none());
    assert!(flow.error_for(FormField::Age).is_some());
}

#[test]
fn guest_submit_without_gender_is_allowed() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Guest);
    flow.set_field(FormField::Name, "Cy");
    flow.set_field(FormField::Age, "70");
    let submission = flow.begin_submit().unwrap();
    assert_eq!(
        submission,
        Submission::Guest(GuestPayload { name: "Cy".to_owned(), age: "70".to_owned(), gender: None })
    );
    assert_eq!(flow.state(), FlowState::Submitting(AuthMode::Guest));
}

#[test]
fn double_submit_is_refused() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Signup);
    fill_signup(&mut flow);
    assert!(flow.begin_submit().is_ok());
    assert!(!flow.can_submit());
    assert_eq!(flow.begin_submit(), Err(FlowError::AlreadySubmitting));
}

#[test]
fn no_dismiss_or_edit_while_submitting() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Signup);
    fill_signup(&mut flow);
    flow.begin_submit().unwrap();
    flow.dismiss();
    flow.open(AuthMode::Guest);
    flow.set_field(FormField::Name, "Changed");
    assert_eq!(flow.state(), FlowState::Submitting(AuthMode::Signup));
    assert_eq!(flow.fields().name, "Bo");
}

// =============================================================
// complete_submit
// =============================================================

#[test]
fn complete_without_submission_is_ignored() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Guest);
    let profile = Profile { name: "Cy".to_owned(), age: Age(70), gender: None, email: None };
    assert_eq!(flow.complete_submit(Ok(profile)), None);
    assert_eq!(flow.state(), FlowState::GuestForm);
}

#[test]
fn failed_commit_reopens_form_with_field_error() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Guest);
    flow.set_field(FormField::Name, "Cy");
    flow.set_field(FormField::Age, "old");
    flow.begin_submit().unwrap();
    let out = flow.complete_submit(Err(ValidationError::InvalidAge("old".to_owned())));
    assert_eq!(out, None);
    assert_eq!(flow.state(), FlowState::GuestForm);
    assert_eq!(flow.fields().age, "old");
    assert_eq!(flow.error_for(FormField::Age), Some(&ValidationError::InvalidAge("old".to_owned())));
}

// =============================================================
// Navigation after commit
// =============================================================

fn bo() -> Profile {
    Profile { name: "Bo".to_owned(), age: Age(25), gender: None, email: Some("b@x.com".to_owned()) }
}

#[test]
fn first_observation_never_navigates() {
    assert!(!should_navigate(None, 0));
    assert!(!should_navigate(None, 3));
}

#[test]
fn navigates_only_when_commits_move() {
    assert!(!should_navigate(Some(2), 2));
    assert!(should_navigate(Some(2), 3));
}

#[test]
fn successful_commit_bumps_commits_once() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Signup);
    fill_signup(&mut flow);
    flow.begin_submit().unwrap();
    assert!(flow.complete_submit(Ok(bo())).is_some());
    assert_eq!(flow.commits(), 1);

    // A second settle for the same submission is ignored.
    assert_eq!(flow.complete_submit(Ok(bo())), None);
    assert_eq!(flow.commits(), 1);
    assert!(!should_navigate(Some(1), flow.commits()));
}

#[test]
fn failed_commit_does_not_navigate() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Guest);
    flow.set_field(FormField::Name, "Cy");
    flow.set_field(FormField::Age, "old");
    flow.begin_submit().unwrap();
    flow.complete_submit(Err(ValidationError::InvalidAge("old".to_owned())));
    assert_eq!(flow.commits(), 0);
    assert!(!should_navigate(Some(0), flow.commits()));
}

#[test]
fn commits_survive_reopen_and_dismiss() {
    let mut flow = AuthFlow::new();
    flow.open(AuthMode::Signup);
    fill_signup(&mut flow);
    flow.begin_submit().unwrap();
    flow.complete_submit(Ok(bo()));
    flow.open(AuthMode::Guest);
    flow.dismiss();
    assert_eq!(flow.commits(), 1);
}

// =============================================================
// End-to-end with the session
// =============================================================

#[test]
fn signup_scenario_commits_closes_and_navigates_once() {
    let session = AuthSession::new(ProfileStore::new(MemoryStorage::new(), "medibuddy:user"));
    let mut flow = AuthFlow::new();
    let mut seen = None;
    let mut navigations = 0;
    let mut observe = |flow: &AuthFlow| {
        if should_navigate(seen, flow.commits()) {
            navigations += 1;
        }
        seen = Some(flow.commits());
    };

    observe(&flow);
    flow.open(AuthMode::Signup);
    fill_signup(&mut flow);
    observe(&flow);
    let submission = flow.begin_submit().unwrap();
    assert_eq!(flow.begin_submit(), Err(FlowError::AlreadySubmitting));
    let outcome = block_on(session.submit(submission));
    flow.complete_submit(outcome);
    observe(&flow);
    observe(&flow);

    assert_eq!(navigations, 1);
    assert_eq!(flow.state(), FlowState::Closed);
    assert_eq!(flow.fields(), &FormFields::default());
    assert_eq!(
        session.current_user(),
        Some(Profile {
            name: "Bo".to_owned(),
            age: Age(25),
            gender: Some(Gender::Other),
            email: Some("b@x.com".to_owned()),
        })
    );
}

#[test]
fn guest_after_signin_session_never_carries_credentials() {
    let session = AuthSession::new(ProfileStore::new(MemoryStorage::new(), "medibuddy:user"));
    let mut flow = AuthFlow::new();

    // Populate signin fields, then abandon without submitting.
    flow.open(AuthMode::Signin);
    flow.set_field(FormField::Name, "Ann");
    flow.set_field(FormField::Email, "a@x.com");
    flow.set_field(FormField::Password, "pw");
    flow.dismiss();

    flow.open(AuthMode::Guest);
    flow.set_field(FormField::Name, "Cy");
    flow.set_field(FormField::Age, "70");
    let submission = flow.begin_submit().unwrap();
    let wire = serde_json::to_value(&submission).unwrap();
    assert!(wire.get("email").is_none());
    assert!(wire.get("password").is_none());
    assert!(wire.get("confirmPassword").is_none());

    let profile = flow.complete_submit(block_on(session.submit(submission))).unwrap();
    assert_eq!(profile.email, None);
    assert_eq!(session.current_user().unwrap().email, None);
}
