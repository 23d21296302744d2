use dioxus::prelude::*;

use crate::app::components::{EmptyState, ErrorMessage, LoadingText, SermonCard};
use crate::domain::models::{ListQuery, SortSpec};
use crate::shared::errors::AppError;
use crate::shared::services::AppServices;

const RECENT_SERMONS: u32 = 50;

/// Most recent sermons, newest first
#[component]
pub fn Home() -> Element {
    let services = use_context::<AppServices>();

    let mut sermons = use_resource(move || {
        let services = services.clone();
        async move {
            let query = ListQuery::new(services.config.search.collection.as_str())
                .per_page(RECENT_SERMONS)
                .sort(SortSpec::newest_first());
            services.records.list(&query).await.map_err(AppError::from)
        }
    });

    let content = match &*sermons.read() {
        None => rsx! { LoadingText { message: "Loading sermons..." } },
        Some(Err(e)) => {
            tracing::error!(error = %e, "Failed to fetch sermons");
            rsx! {
                ErrorMessage {
                    message: e.user_message(),
                    on_retry: move |_| sermons.restart(),
                }
            }
        }
        Some(Ok(page)) if page.items.is_empty() => rsx! {
            EmptyState { title: "No sermons found." }
        },
        Some(Ok(page)) => rsx! {
            div { class: "c-sermon-grid",
                for sermon in page.items.iter() {
                    SermonCard { key: "{sermon.id}", sermon: sermon.clone() }
                }
            }
        },
    };

    rsx! {
        section { class: "c-page",
            div { class: "c-page__header",
                h1 { class: "c-page__title", "Sermon Archive" }
            }
            {content}
        }
    }
}
