// Shared services injected through the Dioxus context
use std::rc::Rc;

use crate::config::AppConfig;
use crate::infrastructure::record_service::{PocketBaseClient, RecordService};
use crate::shared::navigation::{DocumentNavigator, Navigator};

/// Everything components need from the outside world
#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub records: Rc<dyn RecordService>,
    pub navigator: Rc<dyn Navigator>,
}

impl AppServices {
    pub fn new(
        config: AppConfig,
        records: Rc<dyn RecordService>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            config,
            records,
            navigator,
        }
    }

    /// Browser wiring: HTTP backend client and full-document navigation
    pub fn from_config(config: AppConfig) -> Self {
        let records = Rc::new(PocketBaseClient::new(config.api_url.clone()));
        Self::new(config, records, Rc::new(DocumentNavigator))
    }
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && Rc::ptr_eq(&self.records, &other.records)
            && Rc::ptr_eq(&self.navigator, &other.navigator)
    }
}
