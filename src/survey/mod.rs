pub mod answers;
pub mod catalog;
pub mod question;
pub mod session;
pub mod terminal;

pub use answers::AnswerSet;
pub use catalog::default_questionnaire;
pub use question::{ChoiceOption, Question, Questionnaire};
pub use session::SurveySession;
pub use terminal::{run_survey, RESTART_COMMAND};
