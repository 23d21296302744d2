//! Structured logging helpers
//!
//! Keeps field names consistent between the search box, the snackbar queue
//! and navigation so logs can be filtered by `operation`.

/// Operation tag attached to every log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SearchDebounce,
    SearchFetch,
    Navigation,
    Notification,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SearchDebounce => "search_debounce",
            LogOperation::SearchFetch => "search_fetch",
            LogOperation::Navigation => "navigation",
            LogOperation::Notification => "notification",
        }
    }
}

/// Log a fetch being scheduled behind the debounce window
pub fn log_search_scheduled(query: &str, delay_ms: u128) {
    tracing::trace!(
        operation = LogOperation::SearchDebounce.as_str(),
        query = query,
        delay_ms = delay_ms as u64,
        "Search scheduled"
    );
}

pub fn log_search_fetch_start(generation: u64, query: &str) {
    tracing::debug!(
        operation = LogOperation::SearchFetch.as_str(),
        generation = generation,
        query = query,
        "Search request sent"
    );
}

pub fn log_search_fetch_result(generation: u64, result_count: usize) {
    tracing::debug!(
        operation = LogOperation::SearchFetch.as_str(),
        generation = generation,
        result_count = result_count,
        "Search results received"
    );
}

pub fn log_search_fetch_error(generation: u64, query: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::SearchFetch.as_str(),
        generation = generation,
        query = query,
        error = error,
        "Search failed"
    );
}

/// Log a response dropped because the session moved on
pub fn log_search_response_ignored(generation: u64, latest: u64, reason: &str) {
    tracing::debug!(
        operation = LogOperation::SearchFetch.as_str(),
        generation = generation,
        latest_generation = latest,
        reason = reason,
        "Search response ignored"
    );
}

pub fn log_navigation(path: &str) {
    tracing::info!(
        operation = LogOperation::Navigation.as_str(),
        path = path,
        "Navigating"
    );
}

pub fn log_notification_enqueued(id: &str, kind: &str, pending: usize) {
    tracing::debug!(
        operation = LogOperation::Notification.as_str(),
        notification_id = id,
        kind = kind,
        pending = pending,
        "Notification enqueued"
    );
}

pub fn log_notification_phase(id: &str, phase: &str) {
    tracing::trace!(
        operation = LogOperation::Notification.as_str(),
        notification_id = id,
        phase = phase,
        "Notification phase changed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::SearchDebounce.as_str(), "search_debounce");
        assert_eq!(LogOperation::SearchFetch.as_str(), "search_fetch");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
        assert_eq!(LogOperation::Notification.as_str(), "notification");
    }
}
