use dioxus::prelude::*;

use crate::domain::models::{format_long_date, Sermon};
use crate::shared::navigation::NavTarget;
use crate::shared::utils::truncate_text;

const SUMMARY_PREVIEW_CHARS: usize = 150;

// Card linking to the sermon page (full-document navigation)
#[component]
pub fn SermonCard(sermon: Sermon) -> Element {
    let href = NavTarget::SermonView { id: sermon.id.clone() }.to_path();
    let date = format_long_date(sermon.date());
    let title = sermon.display_title().to_string();
    let summary = truncate_text(&sermon.summary, SUMMARY_PREVIEW_CHARS);

    rsx! {
        a { class: "c-sermon-card", href: "{href}",
            div { class: "c-sermon-card__header",
                h3 { class: "c-sermon-card__title", "{title}" }
                span { class: "c-sermon-card__date", "{date}" }
            }
            div { class: "c-sermon-card__meta",
                span { class: "c-sermon-card__speaker", "{sermon.speaker}" }
            }
            if !summary.is_empty() {
                p { class: "c-sermon-card__summary", "{summary}" }
            }
        }
    }
}
