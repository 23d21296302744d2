use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant};

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String, #[props(default)] on_retry: Option<EventHandler>) -> Element {
    rsx! {
        div { class: "c-error",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
            if let Some(handler) = on_retry {
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| handler.call(()),
                    "Try Again"
                }
            }
        }
    }
}

// Reusable Empty State Component
#[component]
pub fn EmptyState(
    title: String,
    description: Option<String>,
    action_text: Option<String>,
    action_href: Option<String>,
) -> Element {
    rsx! {
        div { class: "c-empty-state",
            p { class: "c-empty-state__title", "{title}" }
            if let Some(description) = description {
                p { class: "c-empty-state__description", "{description}" }
            }
            if let (Some(text), Some(href)) = (action_text, action_href) {
                Button { variant: ButtonVariant::Ghost, href: href, "{text}" }
            }
        }
    }
}
