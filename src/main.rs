#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{
        app::*,
        config::SiteConfig,
        contact::{contact_router, ContactRelay},
        logging::init_server_logging,
    };
    use tower_http::trace::TraceLayer;

    init_server_logging();

    let site = SiteConfig::from_env()?;
    let relay = ContactRelay::new(site.contact_endpoint.clone(), site.contact_timeout)?;
    tracing::info!(endpoint = relay.endpoint(), "contact relay configured");

    let conf = get_configuration(None)?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .merge(contact_router(relay.clone()))
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(relay.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
