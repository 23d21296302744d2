//! Snackbar host rendering the notification queue

use dioxus::prelude::*;

use crate::config::NotificationConfig;
use crate::domain::services::{ActiveNotification, NotificationQueue};
use crate::shared::hooks::use_snackbar_provider;

/// Provides the notification queue to `children` and renders the active
/// notification in the bottom-right corner
#[component]
pub fn SnackbarProvider(config: NotificationConfig, children: Element) -> Element {
    let (queue, view) = use_snackbar_provider(config);
    let active = view.read().active.clone();

    rsx! {
        {children}
        if let Some(active) = active {
            Snackbar { queue: queue.clone(), active }
        }
    }
}

#[component]
fn Snackbar(queue: NotificationQueue, active: ActiveNotification) -> Element {
    let notification = &active.notification;
    let kind = notification.kind;
    let visibility = if active.visible { "c-snackbar--visible" } else { "c-snackbar--hidden" };
    let progress_style = format!(
        "width: {}%; transition-duration: {}ms;",
        active.progress_percent, active.progress_transition_ms
    );

    let on_action = queue.clone();
    let on_close = queue;

    rsx! {
        div { class: "c-snackbar-host",
            div {
                class: "c-snackbar {kind.css_modifier()} {visibility}",
                role: "status",
                div { class: "c-snackbar__body",
                    span { class: "c-snackbar__icon", "{kind.icon()}" }
                    div { class: "c-snackbar__content",
                        p { class: "c-snackbar__title", "{notification.title}" }
                        if let Some(message) = &notification.message {
                            p { class: "c-snackbar__message", "{message}" }
                        }
                        if let Some(action) = &notification.action {
                            button {
                                r#type: "button",
                                class: "c-snackbar__action",
                                onclick: move |_| on_action.invoke_action(),
                                "{action.label}"
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "c-snackbar__close",
                        aria_label: "Close",
                        onclick: move |_| on_close.manual_dismiss(),
                        "✕"
                    }
                }
                div { class: "c-snackbar__progress",
                    div { class: "c-snackbar__progress-bar", style: "{progress_style}" }
                }
            }
        }
    }
}
