pub mod home;
pub mod routes;
pub mod search_results;
pub mod sermon_view;

pub use home::Home;
pub use search_results::SearchResults;
pub use sermon_view::SermonView;
