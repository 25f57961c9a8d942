//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::{AppConfig, LOGIN_PATH};
use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::AuthState;
use crate::state::session::{AuthSession, BrowserSession};
use crate::util::profile_store::{BrowserStorage, ProfileStore};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides config, the browser-backed session, and the reactive auth
/// state, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let session: BrowserSession = AuthSession::new(ProfileStore::new(BrowserStorage, config.storage_key.clone()));
    let auth = RwSignal::new(AuthState::default());

    // Storage only exists client-side; effects never run during SSR.
    {
        let session = session.clone();
        Effect::new(move || auth.set(AuthState::loaded(session.current_user())));
    }

    provide_context(config);
    provide_context(session);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/medibuddy.css"/>
        <Title text="MediBuddy"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("home") view=HomePage/>
            </Routes>
        </Router>
    }
}
