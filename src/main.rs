#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::{app::*, contact::EmailConfig, logging, mailer::Mailer, portfolio};

    logging::init_logger();

    if let Err(e) = portfolio::check_invariants() {
        tracing::error!(error = %e, "portfolio data is inconsistent");
    }

    let mailer = Arc::new(Mailer::from_config(EmailConfig::from_env()));
    if mailer.is_demo() {
        tracing::warn!("EmailJS credentials missing or malformed, contact form runs in demo mode");
    } else {
        tracing::info!("contact form delivers through EmailJS");
    }

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let mailer = mailer.clone();
                move || provide_context(mailer.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    tracing::info!("listening on http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
