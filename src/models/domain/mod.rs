pub mod conversation;
pub mod detection;
pub mod question;
pub mod scenario;

pub use conversation::{ChatRole, ConversationTurn};
pub use detection::{Confidence, DetectionResult, RiskLevel};
pub use question::QuizQuestion;
pub use scenario::{EmailScenario, LoginPageScenario, UrlScenario};
