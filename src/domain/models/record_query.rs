//! Query model for the record backend
//!
//! Mirrors the backend's list endpoint: a filter expression, a multi-key sort
//! and 1-based pagination.

use serde::{Deserialize, Serialize};

/// Filter expression understood by the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Case-insensitive substring match (`field ~ "value"`)
    Contains { field: String, value: String },
    Or(Vec<Filter>),
}

impl Filter {
    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Contains {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Same value matched against several fields, joined with OR
    pub fn any_contains(fields: &[&str], value: &str) -> Self {
        Filter::Or(fields.iter().map(|field| Filter::contains(*field, value)).collect())
    }

    pub fn render(&self) -> String {
        match self {
            Filter::Contains { field, value } => format!("{} ~ \"{}\"", field, escape_literal(value)),
            Filter::Or(filters) => filters
                .iter()
                .map(|filter| match filter {
                    Filter::Or(inner) if inner.len() > 1 => format!("({})", filter.render()),
                    _ => filter.render(),
                })
                .collect::<Vec<_>>()
                .join(" || "),
        }
    }
}

fn escape_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SortKey {
    field: String,
    direction: SortDirection,
}

/// Ordered list of sort keys, rendered as `-date_given,-created`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn asc(mut self, field: impl Into<String>) -> Self {
        self.keys.push(SortKey {
            field: field.into(),
            direction: SortDirection::Asc,
        });
        self
    }

    pub fn desc(mut self, field: impl Into<String>) -> Self {
        self.keys.push(SortKey {
            field: field.into(),
            direction: SortDirection::Desc,
        });
        self
    }

    /// Newest sermons first, ties broken by creation time
    pub fn newest_first() -> Self {
        Self::new().desc("date_given").desc("created")
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn render(&self) -> String {
        self.keys
            .iter()
            .map(|key| match key.direction {
                SortDirection::Asc => key.field.clone(),
                SortDirection::Desc => format!("-{}", key.field),
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// One page request against a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub collection: String,
    pub page: u32,
    pub per_page: u32,
    pub filter: Option<Filter>,
    pub sort: SortSpec,
}

impl ListQuery {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            page: 1,
            per_page: 30,
            filter: None,
            sort: SortSpec::default(),
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    /// Title or summary containing `text`, newest first
    pub fn sermon_search(collection: impl Into<String>, text: &str) -> Self {
        Self::new(collection)
            .filter(Filter::any_contains(&["title", "summary"], text))
            .sort(SortSpec::newest_first())
    }
}

/// One page of records as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPage<T> {
    pub page: u32,
    pub per_page: u32,
    pub total_items: i64,
    pub total_pages: i64,
    pub items: Vec<T>,
}

impl<T> RecordPage<T> {
    pub fn has_more(&self) -> bool {
        i64::from(self.page) < self.total_pages
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_search_filter() {
        let filter = Filter::any_contains(&["title", "summary"], "grace");
        assert_eq!(filter.render(), r#"title ~ "grace" || summary ~ "grace""#);
    }

    #[test]
    fn test_render_escapes_quotes() {
        let filter = Filter::contains("title", r#"the "good" \ news"#);
        assert_eq!(filter.render(), r#"title ~ "the \"good\" \\ news""#);
    }

    #[test]
    fn test_render_nested_or() {
        let filter = Filter::Or(vec![
            Filter::contains("speaker", "Ann"),
            Filter::any_contains(&["title", "summary"], "hope"),
        ]);
        assert_eq!(
            filter.render(),
            r#"speaker ~ "Ann" || (title ~ "hope" || summary ~ "hope")"#
        );
    }

    #[test]
    fn test_render_sort() {
        assert_eq!(SortSpec::newest_first().render(), "-date_given,-created");
        assert_eq!(SortSpec::new().asc("title").desc("created").render(), "title,-created");
        assert!(SortSpec::new().is_empty());
    }

    #[test]
    fn test_list_query_clamps_pagination() {
        let query = ListQuery::new("sermons").page(0).per_page(0);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 1);
    }

    #[test]
    fn test_record_page_decodes_backend_shape() {
        let page: RecordPage<serde_json::Value> = serde_json::from_str(
            r#"{"page":1,"perPage":9,"totalItems":20,"totalPages":3,"items":[{"id":"a"}]}"#,
        )
        .unwrap();

        assert_eq!(page.per_page, 9);
        assert_eq!(page.total_items, 20);
        assert!(page.has_more());
        assert_eq!(page.items.len(), 1);
    }
}
