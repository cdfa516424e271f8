use anyhow::Context;
use leptos::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use leptos_axum::{generate_route_list, LeptosRoutes};

    env_logger::init();

    app::content::validate().context("Invalid portfolio content")?;
    app::content::warn_placeholder_links();

    let conf = get_configuration(None).context("Could not load the Leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(app::App);
    let app_fn = {
        let leptos_options = leptos_options.clone();
        move || app::shell(leptos_options.clone())
    };

    let app = axum::Router::new()
        .leptos_routes(&leptos_options, routes, app_fn)
        .fallback(leptos_axum::file_and_error_handler(app::shell))
        .with_state(leptos_options.clone());

    log::info!("listening in {:?} on http://{}", &leptos_options.env, &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Could not bind {}", addr))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("Server error")?;

    Ok(())
}
