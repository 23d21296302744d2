//! Record backend client
//!
//! The backend owns all persisted state; this crate only reads sermons
//! through the `RecordService` seam so components can be tested with a fake.

pub mod pocketbase;

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::domain::models::{ListQuery, RecordPage, Sermon};

pub use pocketbase::PocketBaseClient;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub code: u16,
    pub message: String,
    pub data: BTreeMap<String, FieldError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FieldError {
    pub code: String,
    pub message: String,
}

impl ApiErrorBody {
    /// Decode an error response body. Bodies that are not the backend's JSON
    /// shape (proxy pages, plain text) become the message as-is.
    pub fn from_text(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_else(|_| ApiErrorBody {
            message: text.trim().chars().take(200).collect(),
            ..Default::default()
        })
    }

    /// Human readable per-field messages, e.g. `Title cannot be blank.`
    pub fn field_messages(&self) -> Vec<String> {
        self.data
            .iter()
            .filter(|(_, err)| !err.message.is_empty())
            .map(|(field, err)| format!("{} {}", capitalize(field), err.message.to_lowercase()))
            .collect()
    }

    pub fn into_error(self, status: u16) -> RecordServiceError {
        let mut message = if self.message.is_empty() {
            "Request failed".to_string()
        } else {
            self.message.clone()
        };
        let fields = self.field_messages();
        if !fields.is_empty() {
            message = format!("{} ({})", message, fields.join("; "));
        }
        RecordServiceError::Api { status, message }
    }
}

fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Read access to the sermon collections of the record backend
#[async_trait(?Send)]
pub trait RecordService {
    async fn list(&self, query: &ListQuery) -> Result<RecordPage<Sermon>, RecordServiceError>;

    async fn get_sermon(&self, collection: &str, id: &str) -> Result<Sermon, RecordServiceError>;
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::time::Duration;

    type Reply = (Duration, Result<RecordPage<Sermon>, RecordServiceError>);

    /// Scripted backend: replies are consumed in call order, each after its
    /// own latency. Without a scripted reply an empty page is returned.
    #[derive(Default)]
    pub struct FakeRecordService {
        calls: RefCell<Vec<ListQuery>>,
        replies: RefCell<VecDeque<Reply>>,
        sermons: RefCell<Vec<Sermon>>,
        lookups: RefCell<Vec<String>>,
    }

    impl FakeRecordService {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(&self, latency: Duration, result: Result<Vec<Sermon>, RecordServiceError>) {
            let result = result.map(|items| RecordPage {
                page: 1,
                per_page: items.len() as u32,
                total_items: items.len() as i64,
                total_pages: 1,
                items,
            });
            self.replies.borrow_mut().push_back((latency, result));
        }

        pub fn insert(&self, sermon: Sermon) {
            self.sermons.borrow_mut().push(sermon);
        }

        pub fn calls(&self) -> Vec<ListQuery> {
            self.calls.borrow().clone()
        }

        /// Ids requested through `get_sermon`
        pub fn lookups(&self) -> Vec<String> {
            self.lookups.borrow().clone()
        }
    }

    pub fn sermon(id: &str, title: &str) -> Sermon {
        Sermon {
            id: id.to_string(),
            title: title.to_string(),
            summary: format!("About {}", title.to_lowercase()),
            date_given: "2025-03-02 00:00:00.000Z".to_string(),
            ..Default::default()
        }
    }

    #[async_trait(?Send)]
    impl RecordService for FakeRecordService {
        async fn list(&self, query: &ListQuery) -> Result<RecordPage<Sermon>, RecordServiceError> {
            self.calls.borrow_mut().push(query.clone());
            let next = self.replies.borrow_mut().pop_front();
            match next {
                Some((latency, result)) => {
                    crate::shared::timer::sleep(latency).await;
                    result
                }
                None => Ok(RecordPage {
                    page: query.page,
                    per_page: query.per_page,
                    total_items: 0,
                    total_pages: 0,
                    items: Vec::new(),
                }),
            }
        }

        async fn get_sermon(&self, _collection: &str, id: &str) -> Result<Sermon, RecordServiceError> {
            self.lookups.borrow_mut().push(id.to_string());
            self.sermons
                .borrow()
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .ok_or(RecordServiceError::Api {
                    status: 404,
                    message: "The requested resource wasn't found.".to_string(),
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_messages() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"code":400,"message":"Failed to create record.","data":{"title":{"code":"validation_required","message":"Cannot be blank."},"speaker":{"code":"x","message":""}}}"#,
        )
        .unwrap();

        assert_eq!(body.field_messages(), vec!["Title cannot be blank.".to_string()]);
    }

    #[test]
    fn test_into_error_includes_fields() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"code":400,"message":"Failed to create record.","data":{"date_given":{"code":"x","message":"Invalid date."}}}"#,
        )
        .unwrap();

        assert_eq!(
            body.into_error(400),
            RecordServiceError::Api {
                status: 400,
                message: "Failed to create record. (Date_given invalid date.)".to_string(),
            }
        );
    }

    #[test]
    fn test_from_text_accepts_non_json_bodies() {
        let body = ApiErrorBody::from_text(r#"{"code":404,"message":"The requested resource wasn't found.","data":{}}"#);
        assert_eq!(body.message, "The requested resource wasn't found.");
        assert_eq!(body.code, 404);

        let body = ApiErrorBody::from_text("  502 Bad Gateway\n");
        assert_eq!(body.into_error(502).to_string(), "HTTP 502: 502 Bad Gateway");

        assert_eq!(ApiErrorBody::from_text("").into_error(500).to_string(), "HTTP 500: Request failed");
    }

    #[test]
    fn test_into_error_without_message() {
        assert_eq!(
            ApiErrorBody::default().into_error(502).to_string(),
            "HTTP 502: Request failed"
        );
    }
}
