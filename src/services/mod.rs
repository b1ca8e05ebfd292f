pub mod chat_service;
pub mod extraction;
pub mod generator_service;
pub mod model_service;
pub mod quiz_service;
pub mod scenario_service;
pub mod strength_service;
