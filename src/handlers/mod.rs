pub mod chat_handler;
pub mod detection_handler;
pub mod generator_handler;
pub mod training_handler;
pub mod tutor_handler;

pub use chat_handler::chat;
pub use detection_handler::detect_phishing;
pub use generator_handler::{
    generate_login_scenario, generate_password_quiz, generate_phishing_quiz, generate_scenario,
    generate_simulation_batch, generate_url_scenario,
};
pub use training_handler::{
    health_check, password_questions, password_strength, phishing_questions, scenario_banks,
    score_quiz,
};
pub use tutor_handler::ai_tutor;
