use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use phishguard_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.gemini_api_key.is_none() {
        log::warn!("GEMINI_API_KEY is not set; generative endpoints will return errors until it is configured");
    }
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    log::info!("starting HTTP server on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::chat)
            .service(handlers::detect_phishing)
            .service(handlers::generate_scenario)
            .service(handlers::generate_url_scenario)
            .service(handlers::generate_login_scenario)
            .service(handlers::generate_simulation_batch)
            .service(handlers::generate_password_quiz)
            .service(handlers::generate_phishing_quiz)
            .service(handlers::ai_tutor)
            .service(handlers::password_questions)
            .service(handlers::phishing_questions)
            .service(handlers::scenario_banks)
            .service(handlers::score_quiz)
            .service(handlers::password_strength)
            .service(handlers::health_check)
    })
    .bind((host, port))?
    .run()
    .await
}
