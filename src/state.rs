use std::sync::Arc;

use crate::clock::Clock;
use crate::db::DeadlineStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DeadlineStore>,
    pub clock: Arc<dyn Clock>,
}
