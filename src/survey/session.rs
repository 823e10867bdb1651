use super::answers::AnswerSet;
use super::question::{Question, Questionnaire};

/// Progress through one survey run.
///
/// Transitions consume the session and return the next one; an input that
/// cannot be accepted returns the session unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveySession {
    index: usize,
    answers: AnswerSet,
}

impl SurveySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current<'q>(&self, questionnaire: &'q Questionnaire) -> Option<&'q Question> {
        questionnaire.get(self.index)
    }

    pub fn is_complete(&self, questionnaire: &Questionnaire) -> bool {
        self.index >= questionnaire.len()
    }

    /// (answered, total)
    pub fn progress(&self, questionnaire: &Questionnaire) -> (usize, usize) {
        (self.index.min(questionnaire.len()), questionnaire.len())
    }

    /// Apply one answer to the current question.
    ///
    /// Free text is trimmed and must be non-empty. Choice input must equal
    /// one of the option labels exactly.
    pub fn answer(mut self, questionnaire: &Questionnaire, input: &str) -> Self {
        let Some(question) = self.current(questionnaire) else {
            return self;
        };

        let value = if question.is_free_text() {
            let trimmed = input.trim();
            if trimmed.is_empty() {
                return self;
            }
            trimmed.to_string()
        } else {
            match question.option(input) {
                Some(option) => option.label.clone(),
                None => return self,
            }
        };

        self.answers.insert(question.key.clone(), value);
        self.index += 1;
        self
    }

    /// Start over with no answers
    pub fn restart(self) -> Self {
        Self::new()
    }

    /// Submit the session, yielding its answers
    pub fn into_answers(self) -> AnswerSet {
        self.answers
    }
}
