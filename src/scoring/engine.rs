use super::tier::Tier;
use crate::survey::{AnswerSet, Questionnaire};

/// Top of the normalized scale
pub const SCORE_SCALE: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionContribution {
    pub key: String,   // e.g. "q1"
    pub label: String, // the matched option label
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Sum of matched option scores, wide enough for any configured scale
    pub total: u64,
    pub scored: usize,
    /// Highest option score in the questionnaire; each scored question
    /// can contribute at most this much
    pub max_per_question: u32,
    pub contributions: Vec<QuestionContribution>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u8,
    pub tier: Tier,
    pub breakdown: ScoreBreakdown,
}

/// Score an answer set against a questionnaire.
///
/// Unanswered questions, labels that match no option and options without a
/// score are skipped. With nothing scored the result is 0 / Low.
pub fn calculate_score(questionnaire: &Questionnaire, answers: &AnswerSet) -> ScoreResult {
    let max_per_question = questionnaire.max_option_score().unwrap_or(0);
    let mut total: u64 = 0;
    let mut contributions = Vec::new();

    for question in questionnaire.questions() {
        if question.options.is_empty() {
            continue;
        }
        let Some(value) = answers.get(&question.key) else {
            continue;
        };
        let Some(option) = question.option(value) else {
            continue;
        };
        let Some(points) = option.score else {
            continue;
        };

        total += u64::from(points);
        contributions.push(QuestionContribution {
            key: question.key.clone(),
            label: option.label.clone(),
            points,
        });
    }

    let scored = contributions.len();
    let score = normalize(total, scored, max_per_question);

    ScoreResult {
        score,
        tier: Tier::from_score(score),
        breakdown: ScoreBreakdown {
            total,
            scored,
            max_per_question,
            contributions,
        },
    }
}

/// round(total / (scored * max) * 10), rounding halves up.
///
/// Integer arithmetic keeps x.5 boundaries exact.
pub fn normalize(total: u64, scored: usize, max_per_question: u32) -> u8 {
    let denominator = scored as u128 * u128::from(max_per_question);
    if denominator == 0 {
        return 0;
    }

    let numerator = u128::from(total) * u128::from(SCORE_SCALE);
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    rounded.min(u128::from(SCORE_SCALE)) as u8
}
