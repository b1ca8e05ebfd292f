use std::sync::Arc;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::domain::{ChatRole, ConversationTurn},
    services::model_service::{GenerativeModel, ModelContent},
};

/// Stateless chat proxy. The caller resupplies the whole transcript on
/// every call; the fixed system instruction/acknowledgment pair is
/// prepended each time.
pub struct ChatService {
    model: Arc<dyn GenerativeModel>,
    model_name: String,
}

impl ChatService {
    pub fn new(model: Arc<dyn GenerativeModel>, model_name: impl Into<String>) -> Self {
        Self {
            model,
            model_name: model_name.into(),
        }
    }

    pub async fn reply(&self, message: &str, history: &[ConversationTurn]) -> AppResult<String> {
        if message.is_empty() {
            return Err(AppError::InvalidInput("Message is required".to_string()));
        }

        let mut contents = Vec::with_capacity(history.len() + 3);
        contents.push(ModelContent::user(prompts::CHAT_SYSTEM_PROMPT));
        contents.push(ModelContent::model(prompts::CHAT_SYSTEM_ACK));
        for turn in history {
            contents.push(match turn.role {
                ChatRole::User => ModelContent::user(turn.content.as_str()),
                ChatRole::Assistant => ModelContent::model(turn.content.as_str()),
            });
        }
        contents.push(ModelContent::user(message));

        let response = self.model.generate(&self.model_name, &contents).await?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockGenerativeModel;

    #[tokio::test]
    async fn reply_prepends_system_pair_and_appends_message() {
        let mut model = MockGenerativeModel::new();
        model
            .expect_generate()
            .withf(|name, contents| {
                name == "gemini-1.5-pro"
                    && contents.len() == 5
                    && contents[0].role == "user"
                    && contents[0].parts[0].text == prompts::CHAT_SYSTEM_PROMPT
                    && contents[1].role == "model"
                    && contents[2].parts[0].text == "what is phishing?"
                    && contents[3].role == "model"
                    && contents[4].parts[0].text == "and smishing?"
            })
            .times(1)
            .returning(|_, _| Ok("Hi there".to_string()));

        let service = ChatService::new(Arc::new(model), "gemini-1.5-pro");
        let history = vec![
            ConversationTurn::user("what is phishing?"),
            ConversationTurn::assistant("Phishing is..."),
        ];

        let reply = service.reply("and smishing?", &history).await.unwrap();
        assert_eq!(reply, "Hi there");
    }

    #[tokio::test]
    async fn empty_message_is_rejected_before_any_model_call() {
        // No expectation set: a model call would panic the mock.
        let model = MockGenerativeModel::new();
        let service = ChatService::new(Arc::new(model), "gemini-1.5-pro");

        let err = service.reply("", &[]).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn upstream_failures_map_to_canned_messages() {
        use crate::services::model_service::ModelError;

        let mut model = MockGenerativeModel::new();
        model
            .expect_generate()
            .returning(|_, _| Err(ModelError::Network("connection refused".to_string())));

        let service = ChatService::new(Arc::new(model), "gemini-1.5-pro");
        let err = service.reply("hello", &[]).await.unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
        assert!(err.to_string().contains("connect to AI service"));
    }
}
