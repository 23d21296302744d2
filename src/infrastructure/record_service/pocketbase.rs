//! HTTP client for a PocketBase-style record backend
//!
//! wasm32 goes through `gloo-net` (browser fetch); native builds use `reqwest`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{ApiErrorBody, RecordService, RecordServiceError};
use crate::domain::models::{ListQuery, RecordPage, Sermon};

#[derive(Debug, Clone)]
pub struct PocketBaseClient {
    base_url: String,
}

impl PocketBaseClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/collections/{collection}/records` with query parameters
    pub fn list_url(&self, query: &ListQuery) -> String {
        let mut url = format!(
            "{}/api/collections/{}/records?page={}&perPage={}",
            self.base_url,
            urlencoding::encode(&query.collection),
            query.page,
            query.per_page
        );
        if !query.sort.is_empty() {
            url.push_str("&sort=");
            url.push_str(&urlencoding::encode(&query.sort.render()));
        }
        if let Some(filter) = &query.filter {
            url.push_str("&filter=");
            url.push_str(&urlencoding::encode(&filter.render()));
        }
        url
    }

    pub fn record_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/api/collections/{}/records/{}",
            self.base_url,
            urlencoding::encode(collection),
            urlencoding::encode(id)
        )
    }

    #[cfg(target_arch = "wasm32")]
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RecordServiceError> {
        use gloo_net::http::Request;

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| RecordServiceError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ApiErrorBody::from_text(&text).into_error(status));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RecordServiceError::Decode(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RecordServiceError> {
        let response = reqwest::get(url)
            .await
            .map_err(|e| RecordServiceError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiErrorBody::from_text(&text).into_error(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RecordServiceError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl RecordService for PocketBaseClient {
    async fn list(&self, query: &ListQuery) -> Result<RecordPage<Sermon>, RecordServiceError> {
        let url = self.list_url(query);
        tracing::debug!(collection = %query.collection, page = query.page, "Listing records");
        self.get_json(&url).await
    }

    async fn get_sermon(&self, collection: &str, id: &str) -> Result<Sermon, RecordServiceError> {
        let url = self.record_url(collection, id);
        tracing::debug!(collection = collection, id = id, "Fetching record");
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_url_for_search() {
        let client = PocketBaseClient::new("http://127.0.0.1:8090/");
        let query = ListQuery::sermon_search("sermons", "grace").per_page(3);

        assert_eq!(
            client.list_url(&query),
            "http://127.0.0.1:8090/api/collections/sermons/records?page=1&perPage=3\
             &sort=-date_given%2C-created\
             &filter=title%20~%20%22grace%22%20%7C%7C%20summary%20~%20%22grace%22"
        );
    }

    #[test]
    fn test_list_url_without_filter_or_sort() {
        let client = PocketBaseClient::new("http://localhost:8090");
        let query = ListQuery::new("sermons").page(2).per_page(50);

        assert_eq!(
            client.list_url(&query),
            "http://localhost:8090/api/collections/sermons/records?page=2&perPage=50"
        );
    }

    #[test]
    fn test_record_url() {
        let client = PocketBaseClient::new("http://localhost:8090");
        assert_eq!(
            client.record_url("sermons", "abc 1"),
            "http://localhost:8090/api/collections/sermons/records/abc%201"
        );
        assert_eq!(client.base_url(), "http://localhost:8090");
    }
}
