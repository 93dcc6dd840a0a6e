use std::rc::Rc;

use crate::api::{BackendClient, ChatBackend};
use crate::config::AppConfig;
use crate::theme::{self, ThemeStore};

/// What the pages need from the outside world, shared through context.
#[derive(Clone)]
pub struct AppServices {
    pub config: AppConfig,
    pub backend: Rc<dyn ChatBackend>,
    pub theme_store: Rc<dyn ThemeStore>,
}

impl AppServices {
    pub fn from_config(config: AppConfig) -> Self {
        let backend = BackendClient::new(config.api_base.clone(), config.csrf_token.clone());
        tracing::info!(api_base = %config.api_base, "chat backend configured");
        Self {
            config,
            backend: Rc::new(backend),
            theme_store: Rc::from(theme::default_store()),
        }
    }

    pub fn load() -> Self {
        Self::from_config(AppConfig::load())
    }
}
