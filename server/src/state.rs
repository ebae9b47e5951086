// storefront_app/src/state.rs
use crate::config::AppConfig;
use crate::store::OrderStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn OrderStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}
