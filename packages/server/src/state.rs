use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::BlogStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlogStore>,
    pub config: AppConfig,
}
