use std::sync::Arc;

use crate::core::AppConfig;
use crate::store::Repository;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn Repository>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn Repository>, config: AppConfig) -> Self {
        Self { store, config }
    }
}
