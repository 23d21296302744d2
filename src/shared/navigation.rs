//! Full-document navigation between views

/// Destinations the search box and pages can send the browser to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    SearchResults { query: String },
    SermonView { id: String },
}

impl NavTarget {
    pub fn to_path(&self) -> String {
        match self {
            NavTarget::Home => "/".to_string(),
            NavTarget::SearchResults { query } => {
                format!("/search?q={}", urlencoding::encode(query))
            }
            NavTarget::SermonView { id } => format!("/view?id={}", urlencoding::encode(id)),
        }
    }
}

pub trait Navigator {
    fn navigate(&self, target: &NavTarget);
}

/// Sets `window.location.href`, reloading the document at the new path
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentNavigator;

impl Navigator for DocumentNavigator {
    #[cfg(target_arch = "wasm32")]
    fn navigate(&self, target: &NavTarget) {
        let path = target.to_path();
        crate::shared::logging::log_navigation(&path);

        let Some(window) = web_sys::window() else {
            tracing::error!(path = %path, "No window available for navigation");
            return;
        };
        if let Err(e) = window.location().set_href(&path) {
            tracing::error!(path = %path, error = ?e, "Navigation failed");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn navigate(&self, target: &NavTarget) {
        // Server-side: there is no document to navigate
        tracing::warn!(path = %target.to_path(), "Navigation requested outside the browser");
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records every navigation instead of performing it
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        visited: RefCell<Vec<NavTarget>>,
    }

    impl RecordingNavigator {
        pub fn visited(&self) -> Vec<NavTarget> {
            self.visited.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, target: &NavTarget) {
            self.visited.borrow_mut().push(target.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(NavTarget::Home.to_path(), "/");
        assert_eq!(
            NavTarget::SearchResults { query: "love & grace".to_string() }.to_path(),
            "/search?q=love%20%26%20grace"
        );
        assert_eq!(
            NavTarget::SermonView { id: "r8x2k".to_string() }.to_path(),
            "/view?id=r8x2k"
        );
    }

    #[test]
    fn test_empty_query_path() {
        assert_eq!(NavTarget::SearchResults { query: String::new() }.to_path(), "/search?q=");
    }
}
