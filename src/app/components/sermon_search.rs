//! Header search box with a debounced results popover

use dioxus::prelude::*;

use crate::domain::models::{format_short_date, SermonSummary};
use crate::domain::services::SubmitSource;
use crate::shared::hooks::{use_outside_press, use_sermon_search, widget_dom_id};

#[component]
pub fn SermonSearch() -> Element {
    let (controller, view) = use_sermon_search();

    let on_input = controller.clone();
    let on_key = controller.clone();
    let on_focus = controller.clone();
    let on_outside = controller.clone();
    let on_select = controller.clone();
    let on_view_all = controller;

    let dom_id = use_hook(|| widget_dom_id("sermon-search"));
    use_outside_press(dom_id.clone(), move || on_outside.on_blur_outside());

    let snapshot = view.read().clone();

    rsx! {
        div { class: "c-search", id: "{dom_id}",
            div { class: "c-search__field",
                input {
                    r#type: "text",
                    class: "c-search__input",
                    placeholder: "Search sermons...",
                    value: "{snapshot.query}",
                    oninput: move |evt| on_input.on_query_change(&evt.value()),
                    onkeydown: move |evt: KeyboardEvent| match evt.key() {
                        Key::Enter => {
                            evt.prevent_default();
                            on_key.on_submit(SubmitSource::EnterKey);
                        }
                        Key::Escape => on_key.on_escape(),
                        _ => {}
                    },
                    onfocus: move |_| on_focus.on_focus(),
                }
                if snapshot.loading {
                    div { class: "c-search__spinner" }
                }
            }

            if snapshot.shows_popover() {
                div { class: "c-search__popover",
                    if snapshot.results.is_empty() {
                        p { class: "c-search__empty", "No sermons match yet" }
                    }
                    for summary in snapshot.results.iter() {
                        SearchResultRow {
                            key: "{summary.id}",
                            summary: summary.clone(),
                            on_select: {
                                let controller = on_select.clone();
                                move |id: String| controller.on_result_select(&id)
                            },
                        }
                    }
                    if snapshot.shows_view_all() {
                        button {
                            class: "c-search__view-all",
                            onclick: move |_| on_view_all.on_submit(SubmitSource::ViewAll),
                            "View all results for \"{snapshot.query}\""
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SearchResultRow(summary: SermonSummary, on_select: EventHandler<String>) -> Element {
    let id = summary.id.clone();
    let date = summary.date.map(format_short_date);

    rsx! {
        button {
            class: "c-search__result",
            onclick: move |_| on_select.call(id.clone()),
            div { class: "c-search__result-title", "{summary.title}" }
            if let Some(date) = date {
                div { class: "c-search__result-date", "{date}" }
            }
            if !summary.snippet.is_empty() {
                div { class: "c-search__result-snippet", "{summary.snippet}" }
            }
        }
    }
}
