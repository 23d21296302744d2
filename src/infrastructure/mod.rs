// Backend access (record REST API)
pub mod record_service;
