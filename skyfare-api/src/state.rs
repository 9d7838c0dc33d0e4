use std::sync::Arc;

use skyfare_engine::SearchEngine;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
}
