use dioxus::prelude::*;
use dioxus::document;

use crate::app::components::{EmptyState, ErrorMessage, SnackbarProvider};
use crate::app::layouts::Header;
use crate::app::pages::search_results::SearchParam;
use crate::app::pages::{Home, SearchResults, SermonView};
use crate::config::AppConfig;
use crate::shared::services::AppServices;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    // Targets of full-document navigation from the search box
    #[route("/search?:q")]
    SearchResults { q: SearchParam },
    #[route("/view?:id")]
    SermonView { id: String },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| AppConfig::load().map_err(|e| e.to_string()));

    use_effect(|| {
        tracing::info!("Sermon archive app initialized");
    });

    match config {
        Ok(config) => rsx! { AppShell { config } },
        Err(message) => {
            tracing::error!(error = %message, "Invalid configuration");
            rsx! { ErrorMessage { message } }
        }
    }
}

/// Wires services and the snackbar queue around the router
#[component]
fn AppShell(config: AppConfig) -> Element {
    let notifications = config.notifications.clone();
    use_context_provider(move || AppServices::from_config(config));

    rsx! {
        SnackbarProvider { config: notifications,
            Router::<Route> {}
        }
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        div { class: "c-layout",
            Header {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(path = %path, "Unknown route");

    rsx! {
        EmptyState {
            title: "Page not found",
            description: "Nothing lives at {path}.",
            action_text: "Browse All Sermons",
            action_href: "/",
        }
    }
}
