use dioxus::prelude::*;

mod auth;
mod i18n;
mod routes;

use auth::AuthState;
use i18n::LanguageState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }

        tracing::info!("Starting password reset portal");

        let router = dioxus::server::router(App)
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);
    use_context_provider(LanguageState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "app-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
