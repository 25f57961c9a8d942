//! Post-auth landing view.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::LOGIN_PATH;
use crate::state::auth::AuthState;
use crate::state::session::BrowserSession;
use crate::util::auth::install_unauth_redirect;

/// Post-auth home page. Greets the stored user and offers sign-out.
///
/// Redirects to the login page when no profile is stored.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<BrowserSession>();
    install_unauth_redirect(auth, LOGIN_PATH.to_owned(), use_navigate());

    let name = move || auth.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let age = move || auth.with(|s| s.user.as_ref().map(|u| u.age.to_string()).unwrap_or_default());
    let email = move || auth.with(|s| s.user.as_ref().and_then(|u| u.email.clone()));

    let on_sign_out = move |_| {
        session.sign_out();
        auth.set(AuthState::loaded(session.current_user()));
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Hello, " {name}</h1>
                <button class="btn" on:click=on_sign_out>"Sign out"</button>
            </header>
            <dl class="home-page__profile">
                <dt>"Age"</dt>
                <dd>{age}</dd>
                <dt>"Email"</dt>
                <dd>{move || email().unwrap_or_else(|| "Guest".to_owned())}</dd>
            </dl>
        </div>
    }
}
