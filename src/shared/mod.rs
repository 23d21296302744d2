pub mod errors;
pub mod logging;
pub mod navigation;
pub mod services;
pub mod timer;
pub mod utils;

// Dioxus glue over domain services
pub mod hooks;
