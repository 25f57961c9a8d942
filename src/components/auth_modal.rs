//! Modal collecting profile fields for the chosen entry mode.
//!
//! The modal renders straight from `AuthFlow`: which inputs exist, their
//! values, inline errors, and whether "Continue" is enabled. A valid submit
//! moves the flow to `Submitting` and hands the typed payload to `on_submit`.

use leptos::prelude::*;

use crate::state::auth_flow::{AuthFlow, AuthMode, FormField};
use crate::state::profile::Gender;
use crate::state::submission::Submission;

#[component]
pub fn AuthModal(flow: RwSignal<AuthFlow>, on_submit: Callback<Submission>) -> impl IntoView {
    let shows = move |field: FormField| flow.with(|f| f.mode().is_some_and(|m| m.shows(field)));
    let title = move || flow.with(|f| f.mode().map_or("", AuthMode::title));

    let on_backdrop = move |_| flow.update(AuthFlow::dismiss);
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            flow.update(AuthFlow::dismiss);
        }
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(result) = flow.try_update(AuthFlow::begin_submit) else {
            return;
        };
        match result {
            Ok(submission) => on_submit.run(submission),
            Err(e) => leptos::logging::log!("auth modal submit refused: {e}"),
        }
    };

    view! {
        <Show when=move || flow.with(|f| f.state().is_open())>
            <div class="dialog-backdrop" on:click=on_backdrop>
                <div
                    class="dialog dialog--auth"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <h2 class="dialog__title">{title}</h2>

                    <form class="auth-form" on:submit=on_form_submit novalidate=true>
                        <div class="auth-form__row">
                            <TextField flow=flow field=FormField::Name input_type="text" placeholder="Your full name"/>
                            <TextField flow=flow field=FormField::Age input_type="number" placeholder="e.g. 29"/>
                        </div>

                        <GenderSelect flow=flow/>

                        <Show when=move || shows(FormField::Email)>
                            <div class="auth-form__row">
                                <TextField flow=flow field=FormField::Email input_type="email" placeholder="you@example.com"/>
                                <TextField flow=flow field=FormField::Password input_type="password" placeholder="••••••••"/>
                            </div>
                        </Show>

                        <Show when=move || shows(FormField::ConfirmPassword)>
                            <TextField
                                flow=flow
                                field=FormField::ConfirmPassword
                                input_type="password"
                                placeholder="••••••••"
                            />
                        </Show>

                        <button
                            class="btn btn--primary auth-form__submit"
                            type="submit"
                            disabled=move || !flow.with(AuthFlow::can_submit)
                        >
                            "Continue"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// Labelled text input bound to one form field.
#[component]
fn TextField(
    flow: RwSignal<AuthFlow>,
    field: FormField,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let numeric = field == FormField::Age;
    view! {
        <div class="auth-form__field">
            <label for=field.id()>{field.label()}</label>
            <input
                id=field.id()
                class="auth-form__input"
                type=input_type
                placeholder=placeholder
                required=field.is_required()
                min=numeric.then_some("0")
                inputmode=numeric.then_some("numeric")
                prop:value=move || flow.with(|f| f.fields().value(field).to_owned())
                on:input=move |ev| flow.update(|f| f.set_field(field, event_target_value(&ev)))
            />
            <FieldError flow=flow field=field/>
        </div>
    }
}

/// Closed-choice gender selector with no default selection.
#[component]
fn GenderSelect(flow: RwSignal<AuthFlow>) -> impl IntoView {
    let selected = move || flow.with(|f| f.fields().gender);
    view! {
        <div class="auth-form__field">
            <label for=FormField::Gender.id()>{FormField::Gender.label()}</label>
            <select
                id=FormField::Gender.id()
                class="auth-form__input"
                on:change=move |ev| flow.update(|f| f.set_gender(Gender::from_value(&event_target_value(&ev))))
            >
                <option value="" disabled=true selected=move || selected().is_none()>
                    "Select gender"
                </option>
                {Gender::ALL
                    .iter()
                    .map(|&gender| {
                        view! {
                            <option value=gender.value() selected=move || selected() == Some(gender)>
                                {gender.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldError flow=flow field=FormField::Gender/>
        </div>
    }
}

#[component]
fn FieldError(flow: RwSignal<AuthFlow>, field: FormField) -> impl IntoView {
    let message = move || flow.with(|f| f.error_for(field).map(ToString::to_string));
    view! {
        <Show when=move || message().is_some()>
            <p class="auth-form__error">{message}</p>
        </Show>
    }
}
