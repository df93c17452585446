//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use crate::config::FavoriteConfig;

/// App-wide values provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Same config the delegated controller was installed with
    pub config: Arc<FavoriteConfig>,
}

impl AppContext {
    pub fn new(config: FavoriteConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
