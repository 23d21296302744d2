pub mod button;
pub mod common;
pub mod sermon_card;
pub mod sermon_search;
pub mod snackbar;

pub use button::{Button, ButtonVariant};
pub use common::{EmptyState, ErrorMessage, LoadingText};
pub use sermon_card::SermonCard;
pub use sermon_search::SermonSearch;
pub use snackbar::SnackbarProvider;
