use crate::survey::Questionnaire;
use std::collections::HashSet;

/// Validate a questionnaire at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_questionnaire(questionnaire: &Questionnaire) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if questionnaire.is_empty() {
        errors.push("questions: must contain at least one question".to_string());
        return Err(errors);
    }

    let mut seen_keys = HashSet::new();
    for (i, question) in questionnaire.questions().iter().enumerate() {
        let key = question.key.trim();
        if key.is_empty() {
            errors.push(format!("questions[{}].key: must not be empty", i));
        } else if !seen_keys.insert(key) {
            errors.push(format!("questions[{}].key: duplicate key '{}'", i, key));
        }

        if question.prompt.trim().is_empty() {
            errors.push(format!("questions[{}].prompt: must not be empty", i));
        }

        if question.is_free_text() {
            continue;
        }

        let mut seen_labels = HashSet::new();
        for (j, option) in question.options.iter().enumerate() {
            if option.label.trim().is_empty() {
                errors.push(format!("questions[{}].options[{}].label: must not be empty", i, j));
            } else if !seen_labels.insert(option.label.as_str()) {
                errors.push(format!(
                    "questions[{}].options[{}].label: duplicate label '{}'",
                    i, j, option.label
                ));
            }
        }
    }

    if questionnaire.scorable_count() == 0 {
        errors.push("questions: no option carries a score, nothing can be scored".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::{default_questionnaire, ChoiceOption, Question};

    #[test]
    fn test_default_questionnaire_valid() {
        assert!(validate_questionnaire(&default_questionnaire()).is_ok());
    }

    #[test]
    fn test_empty_questionnaire() {
        let errors = validate_questionnaire(&Questionnaire::new(vec![])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("at least one"));
    }

    #[test]
    fn test_duplicate_key() {
        let questionnaire = Questionnaire::new(vec![
            Question::choice("q1", "A?", vec![ChoiceOption::scored("", "x", 1)]),
            Question::free_text("q1", "B?", ""),
        ]);
        let errors = validate_questionnaire(&questionnaire).unwrap_err();
        assert!(errors[0].contains("questions[1].key"));
    }

    #[test]
    fn test_duplicate_option_label() {
        let questionnaire = Questionnaire::new(vec![Question::choice(
            "q1",
            "A?",
            vec![ChoiceOption::scored("", "Yes", 4), ChoiceOption::scored("", "Yes", 1)],
        )]);
        let errors = validate_questionnaire(&questionnaire).unwrap_err();
        assert!(errors[0].contains("questions[0].options[1].label"));
    }

    #[test]
    fn test_unscorable_questionnaire() {
        let questionnaire = Questionnaire::new(vec![Question::free_text("age", "Age?", "")]);
        let errors = validate_questionnaire(&questionnaire).unwrap_err();
        assert!(errors[0].contains("nothing can be scored"));
    }

    #[test]
    fn test_collects_all_errors() {
        let questionnaire = Questionnaire::new(vec![
            Question::free_text("", "Age?", ""),                   // Error 1
            Question::choice("q1", " ", vec![ChoiceOption::scored("", "", 1)]), // Errors 2, 3
        ]);
        let errors = validate_questionnaire(&questionnaire).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
