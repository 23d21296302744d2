// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod notification;
pub mod record_query;
pub mod sermon;

pub use notification::{Notification, NotificationAction, NotificationKind, NotificationRequest};
pub use record_query::{Filter, ListQuery, RecordPage, SortSpec};
pub use sermon::{
    format_long_date, format_short_date, parse_record_date, Sermon, SermonStatus, SermonSummary,
};
