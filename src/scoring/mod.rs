pub mod engine;
pub mod tier;
pub mod validation;

pub use engine::{calculate_score, normalize, QuestionContribution, ScoreBreakdown, ScoreResult};
pub use tier::Tier;
pub use validation::validate_questionnaire;
