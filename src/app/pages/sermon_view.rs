use dioxus::prelude::*;

use crate::app::components::{ErrorMessage, LoadingText};
use crate::domain::models::{format_long_date, NotificationRequest, Sermon};
use crate::infrastructure::record_service::RecordService;
use crate::shared::errors::{AppError, Result};
use crate::shared::hooks::use_snackbar;
use crate::shared::services::AppServices;

/// Fetch one sermon by id; a blank id never reaches the backend
pub async fn load_sermon(records: &dyn RecordService, collection: &str, id: &str) -> Result<Sermon> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::SermonNotFound(id.to_string()));
    }
    Ok(records.get_sermon(collection, id).await?)
}

/// Read-only view of a single sermon (`/view?id=`)
#[component]
pub fn SermonView(id: String) -> Element {
    let services = use_context::<AppServices>();
    let snackbar = use_snackbar();

    let sermon = use_resource(use_reactive!(|(id,)| {
        let services = services.clone();
        let snackbar = snackbar.clone();
        async move {
            let result =
                load_sermon(services.records.as_ref(), &services.config.search.collection, &id).await;
            if let Err(e) = &result {
                tracing::error!(error = %e, sermon_id = %id, "Failed to load sermon");
                snackbar.enqueue(NotificationRequest::error("Failed to load sermon").with_message(e.user_message()));
            }
            result
        }
    }));

    let content = match &*sermon.read() {
        None => rsx! { LoadingText { message: "Loading sermon..." } },
        Some(Err(e)) => rsx! { ErrorMessage { message: e.user_message() } },
        Some(Ok(sermon)) => {
            let date = format_long_date(sermon.date());
            rsx! {
                article { class: "c-sermon",
                    header { class: "c-sermon__header",
                        h1 { class: "c-sermon__title", "{sermon.display_title()}" }
                        p { class: "c-sermon__meta", "{date}" }
                        if !sermon.speaker.is_empty() {
                            p { class: "c-sermon__speaker", "{sermon.speaker}" }
                        }
                    }
                    if sermon.summary.is_empty() {
                        p { class: "c-sermon__summary c-sermon__summary--empty", "No summary available yet." }
                    } else {
                        p { class: "c-sermon__summary", "{sermon.summary}" }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "c-page",
            a { class: "c-page__back", href: "/", "← All sermons" }
            {content}
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::infrastructure::record_service::testing::{sermon, FakeRecordService};
    use crate::infrastructure::record_service::RecordServiceError;

    #[tokio::test]
    async fn test_load_sermon_by_id() {
        let records = FakeRecordService::new();
        records.insert(sermon("s1", "Grace"));
        records.insert(sermon("s2", "Hope"));

        let found = load_sermon(&records, "sermons", " s2 ").await.unwrap();
        assert_eq!(found.title, "Hope");
        assert_eq!(records.lookups(), vec!["s2".to_string()]);
    }

    #[tokio::test]
    async fn test_load_sermon_missing_or_blank() {
        let records = FakeRecordService::new();
        records.insert(sermon("s1", "Grace"));

        let missing = load_sermon(&records, "sermons", "nope").await.unwrap_err();
        assert!(matches!(
            missing,
            AppError::RecordService(RecordServiceError::Api { status: 404, .. })
        ));
        assert_eq!(missing.user_message(), "This sermon could not be found.");

        let blank = load_sermon(&records, "sermons", "   ").await.unwrap_err();
        assert!(matches!(blank, AppError::SermonNotFound(_)));
        assert_eq!(records.lookups(), vec!["nope".to_string()]);
    }
}
