use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    services::{
        chat_service::ChatService,
        generator_service::GeneratorService,
        model_service::{GeminiClient, GenerativeModel},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
    pub generator_service: Arc<GeneratorService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let model: Arc<dyn GenerativeModel> = Arc::new(GeminiClient::new(&config)?);
        Ok(Self::with_model(config, model))
    }

    /// Build the state around an explicit model client. This is the seam
    /// tests use to substitute a scripted model for the hosted service.
    pub fn with_model(config: Config, model: Arc<dyn GenerativeModel>) -> Self {
        let chat_service = Arc::new(ChatService::new(
            Arc::clone(&model),
            config.chat_model.as_str(),
        ));
        let generator_service = Arc::new(GeneratorService::new(model, &config));

        Self {
            chat_service,
            generator_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_without_credential() {
        let mut config = Config::test_config();
        config.gemini_api_key = None;

        // Startup must succeed; the missing key only fails per-request.
        assert!(AppState::new(config).is_ok());
    }
}
