
#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::model_service::{GenerativeModel, ModelContent, ModelError};

    #[tokio::test]
    async fn canned_model_echoes_configured_reply() {
        let model = CannedModel("Hi there".to_string());
        let reply = model
            .generate("gemini-2.5-flash", &[ModelContent::user("hello")])
            .await
            .unwrap();
        assert_eq!(reply, "Hi there");
    }

    #[tokio::test]
    async fn failing_model_propagates_configured_error() {
        let model = FailingModel(ModelError::EmptyResponse);
        let result = model.generate("gemini-2.5-flash", &[]).await;
        assert!(matches!(result, Err(ModelError::EmptyResponse)));
    }

    #[test]
    fn state_fixtures_build() {
        let state = state_replying("ok");
        assert!(state.config.gemini_api_key.is_some());

        let failing = state_failing(ModelError::Network("down".to_string()));
        assert!(failing.config.gemini_api_key.is_some());
    }
}
