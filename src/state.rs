use crate::config::Config;
use crate::store::ItemStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ItemStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: ItemStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
