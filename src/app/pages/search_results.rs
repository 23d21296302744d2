use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, EmptyState, ErrorMessage, LoadingText, SermonCard};
use crate::domain::models::{ListQuery, Sermon};
use crate::domain::models::NotificationRequest;
use crate::shared::errors::AppError;
use crate::shared::hooks::use_snackbar;
use crate::shared::services::AppServices;

const ITEMS_PER_PAGE: u32 = 9;

/// The `q` query parameter; `Missing` when the URL has no `q` at all
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchParam {
    #[default]
    Missing,
    Given(String),
}

impl SearchParam {
    pub fn term(&self) -> &str {
        match self {
            SearchParam::Missing => "",
            SearchParam::Given(q) => q.trim(),
        }
    }

    /// Message shown instead of results when there is nothing to search for
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            SearchParam::Missing => Some("No search query provided. Please use the search box above."),
            SearchParam::Given(q) if q.trim().is_empty() => Some("Please enter a search term."),
            SearchParam::Given(_) => None,
        }
    }
}

impl FromStr for SearchParam {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SearchParam::Given(s.to_string()))
    }
}

impl fmt::Display for SearchParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchParam::Missing => Ok(()),
            SearchParam::Given(q) => f.write_str(q),
        }
    }
}

/// Full, paginated results for `/search?q=`
#[component]
pub fn SearchResults(q: SearchParam) -> Element {
    let services = use_context::<AppServices>();
    let snackbar = use_snackbar();
    let query = q.term().to_string();
    let prompt = q.prompt();

    let mut sermons = use_signal(Vec::<Sermon>::new);
    let mut current_page = use_signal(|| 0u32);
    let mut has_more = use_signal(|| false);
    let mut total_items = use_signal(|| 0i64);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let search_text = query.clone();
    let load_page = use_callback(move |page: u32| {
        let services = services.clone();
        let snackbar = snackbar.clone();
        let text = search_text.clone();
        loading.set(true);
        spawn(async move {
            let request = ListQuery::sermon_search(services.config.search.collection.as_str(), &text)
                .page(page)
                .per_page(ITEMS_PER_PAGE);

            match services.records.list(&request).await.map_err(AppError::from) {
                Ok(result) => {
                    let more = result.has_more();
                    if page == 1 {
                        sermons.set(result.items);
                    } else {
                        sermons.write().extend(result.items);
                    }
                    current_page.set(result.page);
                    has_more.set(more);
                    total_items.set(result.total_items);
                    error.set(None);
                }
                Err(e) => {
                    tracing::error!(error = %e, query = %text, page = page, "Failed to fetch search results");
                    if page == 1 {
                        error.set(Some("Failed to load search results. Please try again later.".to_string()));
                    } else {
                        snackbar.enqueue(
                            NotificationRequest::error("Could not load more results")
                                .with_message(e.user_message()),
                        );
                    }
                }
            }
            loading.set(false);
        });
    });

    let has_query = prompt.is_none();
    use_hook(move || {
        if has_query {
            load_page.call(1);
        }
    });

    let count = total_items();
    let headline = if count > 0 {
        let plural = if count == 1 { "" } else { "s" };
        format!("Found {count} result{plural} for \"{query}\"")
    } else {
        format!("Searching for \"{query}\"")
    };

    let content = if let Some(message) = prompt {
        rsx! { ErrorMessage { message: message.to_string() } }
    } else if let Some(message) = error() {
        rsx! { ErrorMessage { message, on_retry: move |_| load_page.call(1) } }
    } else if loading() && current_page() == 0 {
        rsx! { LoadingText { message: "Searching..." } }
    } else if sermons.read().is_empty() {
        rsx! {
            EmptyState {
                title: "No sermons found for \"{query}\".",
                description: "Try adjusting your search terms or browse all sermons.",
                action_text: "Browse All Sermons",
                action_href: "/",
            }
        }
    } else {
        rsx! {
            div { class: "c-sermon-grid",
                for sermon in sermons.read().iter() {
                    SermonCard { key: "{sermon.id}", sermon: sermon.clone() }
                }
            }
            if has_more() {
                div { class: "c-page__more",
                    Button {
                        variant: ButtonVariant::Ghost,
                        disabled: loading(),
                        onclick: move |_| {
                            if !loading() {
                                load_page.call(current_page() + 1);
                            }
                        },
                        if loading() { "Loading..." } else { "Load More" }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "c-page",
            div { class: "c-page__header",
                h1 { class: "c-page__title", "Search Results" }
                if has_query {
                    p { class: "c-page__subtitle", "{headline}" }
                }
            }
            {content}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_param_prompts() {
        assert_eq!(
            SearchParam::default().prompt(),
            Some("No search query provided. Please use the search box above.")
        );
        assert_eq!(
            "   ".parse::<SearchParam>().unwrap().prompt(),
            Some("Please enter a search term.")
        );
        assert_eq!("".parse::<SearchParam>().unwrap().prompt(), Some("Please enter a search term."));

        let given = " grace ".parse::<SearchParam>().unwrap();
        assert_eq!(given.prompt(), None);
        assert_eq!(given.term(), "grace");
    }

    #[test]
    fn test_search_param_display() {
        assert_eq!(SearchParam::Missing.to_string(), "");
        assert_eq!(SearchParam::Given("grace".into()).to_string(), "grace");
    }
}
