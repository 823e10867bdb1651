use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::{AnswerSet, Questionnaire, SurveySession};
use crate::output::format_question;

/// Typed during a survey to start over
pub const RESTART_COMMAND: &str = ":restart";

/// Print a prompt and read one trimmed line. None on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    write!(out, "{}", message).context("Failed to write prompt")?;
    out.flush().context("Failed to flush output")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Walk the respondent through every question on a line-based terminal.
///
/// Choice questions take an exact label or a 1-based option number.
/// Returns `Ok(None)` when input ends before the last answer.
pub fn run_survey<R: BufRead, W: Write>(
    questionnaire: &Questionnaire,
    input: &mut R,
    out: &mut W,
    use_colors: bool,
) -> Result<Option<AnswerSet>> {
    writeln!(
        out,
        "Answer with an option number or its label. Type {} to start over.",
        RESTART_COMMAND
    )
    .context("Failed to write prompt")?;
    let mut session = SurveySession::new();

    while let Some(question) = session.current(questionnaire) {
        let (answered, total) = session.progress(questionnaire);
        writeln!(
            out,
            "\n{}",
            format_question(question, answered + 1, total, use_colors)
        )
        .context("Failed to write question")?;

        let hint = match &question.placeholder {
            Some(placeholder) if question.is_free_text() => format!("{} > ", placeholder),
            _ => "> ".to_string(),
        };
        let Some(line) = prompt(input, out, &hint)? else {
            return Ok(None);
        };

        if line == RESTART_COMMAND {
            session = session.restart();
            continue;
        }

        // The session only takes labels
        let line = match question.option_for_input(&line) {
            Some(option) => option.label.clone(),
            None => line,
        };

        let before = session.index();
        session = session.answer(questionnaire, &line);
        if session.index() == before {
            let retry = if question.is_free_text() {
                "  Please enter a value.".to_string()
            } else {
                format!("  Please choose one of the {} options.", question.options.len())
            };
            writeln!(out, "{}", retry).context("Failed to write prompt")?;
        }
    }

    Ok(Some(session.into_answers()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::{ChoiceOption, Question};
    use std::io::Cursor;

    fn small_questionnaire() -> Questionnaire {
        Questionnaire::new(vec![
            Question::free_text("name", "Your name?", "Type a name"),
            Question::choice(
                "hours",
                "Hours of sleep?",
                vec![
                    ChoiceOption::scored("", "3", 1),
                    ChoiceOption::scored("", "2", 2),
                    ChoiceOption::scored("", "1", 3),
                ],
            ),
            Question::choice(
                "mood",
                "Mood?",
                vec![ChoiceOption::scored("", "Good", 2), ChoiceOption::scored("", "Bad", 1)],
            ),
        ])
    }

    fn run(script: &str) -> (Option<AnswerSet>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let answers = run_survey(&small_questionnaire(), &mut input, &mut out, false).unwrap();
        (answers, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_completes_with_labels_and_numbers() {
        let (answers, output) = run("Ada\n3\n2\n");
        let answers = answers.unwrap();
        assert_eq!(answers.get("name"), Some("Ada"));
        // "3" is a label here, not the third option
        assert_eq!(answers.get("hours"), Some("3"));
        assert_eq!(answers.get("mood"), Some("Bad"));
        assert!(output.contains("Type a name > "));
        assert!(output.contains("(3/3) Mood?"));
    }

    #[test]
    fn test_end_of_input_cancels() {
        let (answers, _) = run("Ada\n");
        assert_eq!(answers, None);

        let (answers, _) = run("");
        assert_eq!(answers, None);
    }

    #[test]
    fn test_invalid_choice_asks_again() {
        let (answers, output) = run("Ada\n7\n1\nGood\n");
        assert!(output.contains("Please choose one of the 3 options."));
        let answers = answers.unwrap();
        assert_eq!(answers.get("hours"), Some("1"));
        assert_eq!(answers.get("mood"), Some("Good"));
    }

    #[test]
    fn test_restart_clears_answers() {
        let (answers, _) = run("Ada\n:restart\nBea\n2\nGood\n");
        let answers = answers.unwrap();
        assert_eq!(answers.get("name"), Some("Bea"));
        assert_eq!(answers.get("hours"), Some("2"));
        assert_eq!(answers.len(), 3);
    }
}
