//! Landing page offering Sign In, Sign Up, and Continue as Guest.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_modal::AuthModal;
use crate::config::HOME_PATH;
use crate::state::auth::AuthState;
use crate::state::auth_flow::{AuthFlow, AuthMode, should_navigate};
use crate::state::session::BrowserSession;
use crate::state::submission::Submission;

/// Landing page: three entry buttons and the auth modal.
///
/// A committed submission refreshes `AuthState` and routes to the home view.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<BrowserSession>();
    let navigate = use_navigate();

    let flow = RwSignal::new(AuthFlow::new());

    Effect::new(move |prev: Option<u64>| {
        let commits = flow.with(AuthFlow::commits);
        if should_navigate(prev, commits) {
            navigate(HOME_PATH, NavigateOptions::default());
        }
        commits
    });

    let on_submit = Callback::new(move |submission: Submission| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let outcome = session.submit(submission).await;
            let committed = flow.try_update(|f| f.complete_submit(outcome)).flatten();
            if committed.is_some() {
                auth.set(AuthState::loaded(session.current_user()));
            }
        });
    });

    let entry_button = move |mode: AuthMode, class: &'static str| {
        view! {
            <button class=class on:click=move |_| flow.update(|f| f.open(mode))>
                {mode.title()}
            </button>
        }
    };

    view! {
        <div class="login-page">
            <main class="login-page__main">
                <div class="login-card">
                    <div class="login-card__logo">"MB"</div>
                    <h1>"Hello, Welcome to MediBuddy"</h1>
                    <p class="login-card__subtitle">"Your personal medicine reminder companion"</p>
                    <div class="login-card__actions">
                        {entry_button(AuthMode::Signin, "btn btn--primary login-button")}
                        {entry_button(AuthMode::Signup, "btn btn--secondary login-button")}
                        {entry_button(AuthMode::Guest, "btn btn--outline login-button")}
                    </div>
                </div>
            </main>
            <footer class="login-page__footer">"Your health, on time"</footer>
            <AuthModal flow=flow on_submit=on_submit/>
        </div>
    }
}
