use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

const UNTITLED: &str = "Untitled Sermon";

/// Processing status of a sermon on the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SermonStatus {
    #[default]
    Created,
    Pending,
    Complete,
    Error,
}

/// A record of the `sermons` collection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sermon {
    pub id: String,
    pub title: String,
    pub speaker: String,
    pub status: SermonStatus,
    pub date_given: String,
    pub summary: String,
    pub created: String,
    pub updated: String,
}

impl Sermon {
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        parse_record_date(&self.date_given)
    }
}

/// Lightweight projection shown in the search popover
#[derive(Debug, Clone, PartialEq)]
pub struct SermonSummary {
    pub id: String,
    pub title: String,
    pub date: Option<NaiveDate>,
    pub snippet: String,
}

impl From<&Sermon> for SermonSummary {
    fn from(sermon: &Sermon) -> Self {
        Self {
            id: sermon.id.clone(),
            title: sermon.display_title().to_string(),
            date: sermon.date(),
            snippet: sermon.summary.clone(),
        }
    }
}

impl From<Sermon> for SermonSummary {
    fn from(sermon: Sermon) -> Self {
        SermonSummary::from(&sermon)
    }
}

/// Parse the calendar date out of a backend timestamp.
///
/// The backend writes `2025-05-04 00:00:00.000Z`; RFC 3339 is accepted too.
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

/// `May 4, 2025`
pub fn format_long_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => "No date".to_string(),
    }
}

/// `5/4/2025`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_record() {
        let sermon: Sermon = serde_json::from_str(
            r#"{"id":"abc123","title":"Grace","status":"complete","date_given":"2025-05-04 00:00:00.000Z","collectionName":"sermons"}"#,
        )
        .unwrap();

        assert_eq!(sermon.id, "abc123");
        assert_eq!(sermon.status, SermonStatus::Complete);
        assert_eq!(sermon.summary, "");
        assert_eq!(sermon.date(), NaiveDate::from_ymd_opt(2025, 5, 4));
    }

    #[test]
    fn test_parse_record_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 12, 25);
        assert_eq!(parse_record_date("2024-12-25 10:00:00.000Z"), expected);
        assert_eq!(parse_record_date("2024-12-25T10:00:00Z"), expected);
        assert_eq!(parse_record_date("2024-12-25"), expected);
        assert_eq!(parse_record_date(""), None);
        assert_eq!(parse_record_date("not a date"), None);
    }

    #[test]
    fn test_summary_projection() {
        let sermon = Sermon {
            id: "s1".to_string(),
            title: "  ".to_string(),
            summary: "On patience".to_string(),
            date_given: "2023-01-08 00:00:00.000Z".to_string(),
            ..Default::default()
        };

        let summary = SermonSummary::from(&sermon);
        assert_eq!(summary.title, "Untitled Sermon");
        assert_eq!(summary.snippet, "On patience");
        assert_eq!(summary.date.map(format_short_date), Some("1/8/2023".to_string()));
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(NaiveDate::from_ymd_opt(2025, 5, 4)), "May 4, 2025");
        assert_eq!(format_long_date(None), "No date");
    }
}
