//! SSR host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `app::shell` for every app route and serves the hydrate bundle
//! from `/pkg`. The browser build then hydrates that markup through
//! `medibuddy::hydrate`. Storage does not exist here, so the first render
//! always shows the signed-out, still-loading state.

#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), String> {
    use std::path::PathBuf;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use medibuddy::app::{App, shell};
    use tower_http::services::ServeDir;

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind {addr}: {e}"))?;
    tracing::info!(%addr, "medibuddy listening");
    axum::serve(listener, app).await.map_err(|e| format!("server: {e}"))
}

/// The browser build enters through `medibuddy::hydrate` instead.
#[cfg(not(feature = "ssr"))]
fn main() {}
