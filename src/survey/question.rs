use serde::{Deserialize, Serialize};

/// A single selectable answer to a choice question.
///
/// Options without a `score` can be chosen but never contribute to the
/// wellness score (e.g. demographic questions).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChoiceOption {
    pub label: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl ChoiceOption {
    pub fn scored(emoji: &str, label: &str, score: u32) -> Self {
        Self {
            label: label.to_string(),
            emoji: Some(emoji.to_string()),
            score: Some(score),
        }
    }

    pub fn unscored(emoji: &str, label: &str) -> Self {
        Self {
            label: label.to_string(),
            emoji: Some(emoji.to_string()),
            score: None,
        }
    }
}

/// A questionnaire entry.
///
/// A question with no options is free text. Example YAML:
/// ```yaml
/// - key: q1
///   prompt: "How often do you feel Overwhelmed?"
///   options:
///     - { label: "Rarely", score: 4 }
///     - { label: "Always", score: 1 }
/// - key: age
///   prompt: "What is your age?"
///   placeholder: "Enter your age"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub key: String,
    pub prompt: String,

    /// Hint shown for free-text questions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
}

impl Question {
    pub fn free_text(key: &str, prompt: &str, placeholder: &str) -> Self {
        Self {
            key: key.to_string(),
            prompt: prompt.to_string(),
            placeholder: Some(placeholder.to_string()),
            options: Vec::new(),
        }
    }

    pub fn choice(key: &str, prompt: &str, options: Vec<ChoiceOption>) -> Self {
        Self {
            key: key.to_string(),
            prompt: prompt.to_string(),
            placeholder: None,
            options,
        }
    }

    pub fn is_free_text(&self) -> bool {
        self.options.is_empty()
    }

    /// True when at least one option carries a score
    pub fn is_scorable(&self) -> bool {
        self.options.iter().any(|o| o.score.is_some())
    }

    /// Find the option whose label matches exactly
    pub fn option(&self, label: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.label == label)
    }

    /// Option chosen by terminal input: an exact label first, then a
    /// 1-based option number
    pub fn option_for_input(&self, input: &str) -> Option<&ChoiceOption> {
        self.option(input).or_else(|| {
            input
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| self.options.get(i))
        })
    }
}

/// Ordered, immutable question list.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn find(&self, key: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.key == key)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn scorable_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_scorable()).count()
    }

    /// Highest score carried by any option, the normalization ceiling.
    /// None when no option is scored.
    pub fn max_option_score(&self) -> Option<u32> {
        self.questions
            .iter()
            .flat_map(|q| q.options.iter())
            .filter_map(|o| o.score)
            .max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_question_is_not_scorable() {
        let q = Question::free_text("age", "What is your age?", "Enter your age");
        assert!(q.is_free_text());
        assert!(!q.is_scorable());
    }

    #[test]
    fn test_unscored_choice_question_is_not_scorable() {
        let q = Question::choice(
            "gender",
            "What is your Gender?",
            vec![ChoiceOption::unscored("⚪", "Other")],
        );
        assert!(!q.is_free_text());
        assert!(!q.is_scorable());
    }

    #[test]
    fn test_option_lookup_is_exact() {
        let q = Question::choice(
            "q7",
            "Do you feel energetic throughout the day?",
            vec![
                ChoiceOption::scored("⚡", "Yes", 4),
                ChoiceOption::scored("😩", "No", 1),
            ],
        );
        assert_eq!(q.option("Yes").and_then(|o| o.score), Some(4));
        assert!(q.option("yes").is_none());
        assert!(q.option("Yes ").is_none());
    }

    #[test]
    fn test_option_for_input_by_number() {
        let q = Question::choice(
            "q7",
            "Energetic?",
            vec![
                ChoiceOption::scored("", "Yes", 4),
                ChoiceOption::scored("", "No", 1),
            ],
        );
        assert_eq!(q.option_for_input("2").map(|o| o.label.as_str()), Some("No"));
        assert_eq!(q.option_for_input("Yes").map(|o| o.label.as_str()), Some("Yes"));
        assert!(q.option_for_input("0").is_none());
        assert!(q.option_for_input("3").is_none());
    }

    #[test]
    fn test_option_for_input_prefers_numeric_label() {
        let q = Question::choice(
            "sleep",
            "Hours of sleep, roughly?",
            vec![
                ChoiceOption::scored("", "3", 1),
                ChoiceOption::scored("", "2", 2),
                ChoiceOption::scored("", "1", 3),
            ],
        );
        assert_eq!(q.option_for_input("3").and_then(|o| o.score), Some(1));
        assert_eq!(q.option_for_input("1").and_then(|o| o.score), Some(3));
    }

    #[test]
    fn test_max_option_score_derived_from_options() {
        let questionnaire = Questionnaire::new(vec![
            Question::choice("a", "A?", vec![ChoiceOption::scored("", "x", 2)]),
            Question::choice("b", "B?", vec![ChoiceOption::scored("", "y", 7)]),
            Question::free_text("c", "C?", ""),
        ]);
        assert_eq!(questionnaire.max_option_score(), Some(7));
        assert_eq!(questionnaire.scorable_count(), 2);
    }

    #[test]
    fn test_max_option_score_none_without_scores() {
        let questionnaire = Questionnaire::new(vec![Question::free_text("c", "C?", "")]);
        assert_eq!(questionnaire.max_option_score(), None);
    }

    #[test]
    fn test_questionnaire_yaml_parse() {
        let yaml = r#"
- key: mood
  prompt: "How are you?"
  options:
    - { label: "Great", emoji: "😊", score: 4 }
    - { label: "Bad", score: 1 }
- key: notes
  prompt: "Anything else?"
  placeholder: "Type here"
"#;
        let questionnaire: Questionnaire = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(questionnaire.len(), 2);
        let mood = questionnaire.find("mood").unwrap();
        assert_eq!(mood.options[0].emoji.as_deref(), Some("😊"));
        assert_eq!(mood.options[1].emoji, None);
        assert!(questionnaire.find("notes").unwrap().is_free_text());
    }

    #[test]
    fn test_question_rejects_unknown_fields() {
        let yaml = r#"
- key: mood
  prompt: "How are you?"
  weight: 3
"#;
        let result: Result<Questionnaire, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
