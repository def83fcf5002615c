use crate::alphabet::AlphabetResolver;
use std::sync::Arc;

pub struct AppState {
    pub resolver: Arc<AlphabetResolver>,
    pub default_language: String,
}
