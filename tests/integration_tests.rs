use std::sync::Arc;

use actix_web::{test, web, App};
use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::json;

use phishguard_server::{
    app_state::AppState,
    config::Config,
    handlers,
    services::model_service::{GenerativeModel, ModelContent, ModelError},
};

/// Stand-in for the hosted model: replies with a fixed text blob.
struct ScriptedModel {
    reply: String,
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn generate(
        &self,
        _model: &str,
        _contents: &[ModelContent],
    ) -> Result<String, ModelError> {
        Ok(self.reply.clone())
    }
}

fn test_config() -> Config {
    Config {
        gemini_api_key: Some(SecretString::from("test_api_key".to_string())),
        gemini_base_url: "http://127.0.0.1:9".to_string(),
        chat_model: "gemini-1.5-pro".to_string(),
        generation_model: "gemini-2.5-flash".to_string(),
        scenario_model: "gemini-2.5-flash-lite".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
    }
}

fn scripted_state(reply: &str) -> AppState {
    AppState::with_model(
        test_config(),
        Arc::new(ScriptedModel {
            reply: reply.to_string(),
        }),
    )
}

fn ten_question_payload() -> serde_json::Value {
    let questions: Vec<_> = (0..10)
        .map(|i| {
            json!({
                "id": i + 1,
                "question": format!("Question {}?", i + 1),
                "options": ["Option 0", "Option 1", "Option 2", "Option 3"],
                "correctAnswer": i % 4,
                "explanation": "Because that is the safe choice."
            })
        })
        .collect();
    json!({ "questions": questions })
}

#[actix_web::test]
async fn generate_password_quiz_returns_ten_questions_from_prose_wrapped_json() {
    let reply = format!(
        "Sure, here is your quiz!\n```json\n{}\n```\nGood luck!",
        ten_question_payload()
    );
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(scripted_state(&reply)))
            .service(handlers::generate_password_quiz),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate-password-quiz")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let questions = body["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 10);
    assert_eq!(questions[0]["options"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn generate_quiz_with_nine_questions_is_a_500() {
    let mut payload = ten_question_payload();
    payload["questions"].as_array_mut().unwrap().pop();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(scripted_state(&payload.to_string())))
            .service(handlers::generate_phishing_quiz),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate-phishing-quiz")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Failed to generate quiz"));
}

#[actix_web::test]
async fn chat_round_trips_the_model_reply() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(scripted_state("Hi there")))
            .service(handlers::chat),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "message": "hello", "history": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["response"], json!("Hi there"));
}

#[actix_web::test]
async fn chat_rejects_empty_message_with_400() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(scripted_state("unused")))
            .service(handlers::chat),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "message": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn detect_phishing_without_credential_is_a_configuration_500() {
    // Real client, no key: the request must fail before any network call.
    let mut config = test_config();
    config.gemini_api_key = None;
    let state = AppState::new(config).expect("startup succeeds without credential");

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(handlers::detect_phishing),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/detect-phishing")
        .set_json(json!({ "content": "http://g00gle.com", "type": "url" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("configuration"), "got: {message}");
}

#[actix_web::test]
async fn detect_phishing_returns_full_analysis() {
    let reply = json!({
        "isPhishing": true,
        "confidence": "high",
        "riskLevel": "critical",
        "redFlags": ["zeros instead of o's"],
        "analysis": "The domain is typosquatted.",
        "recommendation": "Do not enter credentials."
    });
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(scripted_state(&reply.to_string())))
            .service(handlers::detect_phishing),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/detect-phishing")
        .set_json(json!({ "content": "http://g00gle.com/signin", "type": "url" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["analysis"]["isPhishing"], json!(true));
    assert_eq!(body["analysis"]["riskLevel"], json!("critical"));
}

#[actix_web::test]
async fn model_reply_without_json_yields_500_not_a_crash() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(scripted_state("I cannot answer that.")))
            .service(handlers::generate_url_scenario),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate-url-scenario")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], json!("Failed to generate URL scenario"));
}

#[actix_web::test]
async fn generate_scenario_accepts_missing_body_and_normalizes_ground_truth() {
    let reply = json!({
        "from": "billing@netf1ix-support.com",
        "subject": "Payment declined",
        "type": "Phishing",
        "body": "Update your card within 24 hours or lose access.",
        "redFlags": ["lookalike domain", "false urgency"],
        "explanation": "Netflix does not use this domain."
    });
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(scripted_state(&reply.to_string())))
            .service(handlers::generate_scenario),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate-scenario")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["scenario"]["isPhishing"], json!(true));
    assert_eq!(body["scenario"]["from"], json!("billing@netf1ix-support.com"));
}

#[actix_web::test]
async fn ai_tutor_reports_correctness_with_feedback() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(scripted_state(
                "Great catch! The sender domain gives it away.",
            )))
            .service(handlers::ai_tutor),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/ai-tutor")
        .set_json(json!({
            "scenario": { "from": "security@paypa1.com", "subject": "Urgent", "type": "Phishing" },
            "userAnswer": "phishing",
            "correctAnswer": "Phishing"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["isCorrect"], json!(true));
    assert_eq!(
        body["feedback"],
        json!("Great catch! The sender domain gives it away.")
    );
}

#[actix_web::test]
async fn score_endpoint_grades_a_complete_attempt() {
    let questions: Vec<serde_json::Value> = (0..4)
        .map(|i| {
            json!({
                "id": i + 1,
                "question": format!("Q{}?", i + 1),
                "options": ["a", "b", "c", "d"],
                "correctAnswer": 1,
                "explanation": "b is right"
            })
        })
        .collect();

    let app = test::init_service(App::new().service(handlers::score_quiz)).await;

    let req = test::TestRequest::post()
        .uri("/api/training/score")
        .set_json(json!({ "quiz": questions, "answers": [1, 1, 0, 1] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["correctCount"], json!(3));
    assert_eq!(body["total"], json!(4));
    assert_eq!(body["percentage"], json!(75));
    assert_eq!(body["perQuestion"], json!([true, true, false, true]));
}

#[actix_web::test]
async fn score_endpoint_rejects_incomplete_attempt() {
    let questions = vec![json!({
        "id": 1,
        "question": "Q?",
        "options": ["a", "b", "c", "d"],
        "correctAnswer": 0,
        "explanation": "a"
    })];

    let app = test::init_service(App::new().service(handlers::score_quiz)).await;

    let req = test::TestRequest::post()
        .uri("/api/training/score")
        .set_json(json!({ "quiz": questions, "answers": [null] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn password_strength_endpoint_reports_placeholder_for_empty_input() {
    let app = test::init_service(App::new().service(handlers::password_strength)).await;

    let req = test::TestRequest::post()
        .uri("/api/password-strength")
        .set_json(json!({ "password": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["label"], json!("Enter a password"));
    assert_eq!(body["score"], json!(0));
}

#[actix_web::test]
async fn password_strength_endpoint_grades_a_passphrase() {
    let app = test::init_service(App::new().service(handlers::password_strength)).await;

    let req = test::TestRequest::post()
        .uri("/api/password-strength")
        .set_json(json!({ "password": "correct-horse-battery-staple-9-quartz" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["label"], json!("Very Strong"));
    assert!(body["crackTimeDisplay"].as_str().is_some());
}
