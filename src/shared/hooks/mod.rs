// Custom Dioxus hooks
pub mod use_outside_press;
pub mod use_sermon_search;
pub mod use_snackbar;

pub use use_outside_press::{use_outside_press, widget_dom_id};
pub use use_sermon_search::use_sermon_search;
pub use use_snackbar::{use_snackbar, use_snackbar_provider};
