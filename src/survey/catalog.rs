use super::question::{ChoiceOption, Question, Questionnaire};

/// Build a four-option question scored 4 (best) down to 1 (worst).
fn graded(key: &str, prompt: &str, options: [(&str, &str); 4]) -> Question {
    let options = options
        .iter()
        .zip((1..=4).rev())
        .map(|((emoji, label), score)| ChoiceOption::scored(emoji, label, score))
        .collect();
    Question::choice(key, prompt, options)
}

/// The built-in check-in questionnaire: three demographic questions
/// followed by thirteen graded wellness questions.
pub fn default_questionnaire() -> Questionnaire {
    Questionnaire::new(vec![
        Question::free_text("age", "What is your age?", "Enter your age"),
        Question::choice(
            "gender",
            "What is your Gender?",
            vec![
                ChoiceOption::unscored("♂️", "Male"),
                ChoiceOption::unscored("♀️", "Female"),
                ChoiceOption::unscored("⚪", "Other"),
            ],
        ),
        Question::free_text(
            "income",
            "What is your family's monthly income (INR)?",
            "E.g., 30000",
        ),
        graded(
            "q1",
            "How often do you feel Overwhelmed?",
            [("😄", "Rarely"), ("😐", "Sometimes"), ("😟", "Often"), ("😫", "Always")],
        ),
        graded(
            "q2",
            "How well do you sleep at night?",
            [("😴", "Very well"), ("🙂", "Okay"), ("😕", "Poorly"), ("😵", "I struggle")],
        ),
        graded(
            "q3",
            "How is your appetite lately?",
            [("🍽️", "Good"), ("😐", "Average"), ("😒", "Low"), ("😞", "Very low")],
        ),
        graded(
            "q4",
            "Do you feel interested in daily activities?",
            [("😊", "Always"), ("🙂", "Mostly"), ("😐", "Sometimes"), ("😔", "Rarely")],
        ),
        graded(
            "q5",
            "Do you feel anxious or nervous?",
            [("😌", "Never"), ("😟", "Sometimes"), ("😰", "Frequently"), ("😱", "Constantly")],
        ),
        graded(
            "q6",
            "How often do you feel sad?",
            [("😊", "Rarely"), ("😐", "Sometimes"), ("😢", "Often"), ("😭", "All the time")],
        ),
        graded(
            "q7",
            "Do you feel energetic throughout the day?",
            [("⚡", "Yes"), ("🙂", "Mostly"), ("😴", "Rarely"), ("😩", "No")],
        ),
        graded(
            "q8",
            "Do you feel socially connected?",
            [("👥", "Yes"), ("🙂", "Somewhat"), ("😐", "Not much"), ("😞", "Very isolated")],
        ),
        graded(
            "q9",
            "Do you have support from family/friends?",
            [("🤗", "Always"), ("🙂", "Mostly"), ("😐", "Sometimes"), ("😔", "Not at all")],
        ),
        graded(
            "q10",
            "Are you able to concentrate well?",
            [("🎯", "Yes"), ("🙂", "Sometimes"), ("😕", "Rarely"), ("😵", "Not at all")],
        ),
        graded(
            "q11",
            "How do you feel about your future?",
            [("🌟", "Hopeful"), ("😐", "Neutral"), ("😟", "Worried"), ("😞", "Hopeless")],
        ),
        graded(
            "q12",
            "How often do you feel angry or frustrated?",
            [("😌", "Rarely"), ("😠", "Sometimes"), ("😡", "Often"), ("🤬", "Very often")],
        ),
        graded(
            "q13",
            "Do you enjoy your own company?",
            [("😊", "Yes"), ("🙂", "Sometimes"), ("😐", "Not much"), ("😞", "No")],
        ),
    ])
}
