// Business logic services
// Framework-agnostic, driven by the hooks in shared::hooks

pub mod notification_queue;
pub mod search_controller;

pub use notification_queue::{ActiveNotification, NotificationQueue, QueueState, SlotPhase, SnackbarView};
pub use search_controller::{SearchController, SearchError, SearchSession, SearchView, SubmitSource};
