use crate::survey::AnswerSet;

pub const SYSTEM_PROMPT: &str = "You are a compassionate mental health advisor. \
Based on the user's survey responses below, provide a short, supportive message and a list \
of 2-3 specific, helpful recommendations. The recommendations can be books, YouTube \
videos/channels, or self-care activities. Format the response clearly. For example: \
'Book: The Midnight Library by Matt Haig' or \
'Activity: Try a 5-minute guided breathing exercise on YouTube.'";

/// One "- key: value" line per answer, in answer order
pub fn build_summary(answers: &AnswerSet) -> String {
    answers
        .iter()
        .map(|(key, value)| format!("- {}: {}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_user_prompt(answers: &AnswerSet) -> String {
    format!("Here are the user's survey responses:\n{}", build_summary(answers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lines_in_answer_order() {
        let answers: AnswerSet = [("age", "29"), ("q2", "Poorly"), ("q1", "Often")]
            .into_iter()
            .collect();
        assert_eq!(build_summary(&answers), "- age: 29\n- q2: Poorly\n- q1: Often");
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(build_summary(&AnswerSet::new()), "");
    }

    #[test]
    fn test_user_prompt_has_preamble() {
        let answers: AnswerSet = [("q5", "Frequently")].into_iter().collect();
        assert_eq!(
            build_user_prompt(&answers),
            "Here are the user's survey responses:\n- q5: Frequently"
        );
    }

    #[test]
    fn test_system_prompt_names_categories() {
        assert!(SYSTEM_PROMPT.contains("Book:"));
        assert!(SYSTEM_PROMPT.contains("Activity:"));
        assert!(SYSTEM_PROMPT.contains("YouTube"));
    }
}
