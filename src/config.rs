use std::env;

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: Option<SecretString>,
    pub gemini_base_url: String,
    pub chat_model: String,
    pub generation_model: String,
    pub scenario_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty())
                .map(SecretString::from),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            chat_model: env::var("CHAT_MODEL").unwrap_or_else(|_| "gemini-1.5-pro".to_string()),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            scenario_model: env::var("SCENARIO_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash-lite".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: Some(SecretString::from("test_api_key".to_string())),
            gemini_base_url: "http://localhost:9999".to_string(),
            chat_model: "gemini-1.5-pro".to_string(),
            generation_model: "gemini-2.5-flash".to_string(),
            scenario_model: "gemini-2.5-flash-lite".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
