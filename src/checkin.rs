use crate::gemini::{GeminiError, TextGenerator};
use crate::recommend::{build_user_prompt, classify_recommendations, Recommendation, SYSTEM_PROMPT};
use crate::scoring::{calculate_score, ScoreResult};
use crate::survey::{AnswerSet, Questionnaire};

/// Shown when the service answers without any text
pub const RECOMMENDATION_FALLBACK: &str = "No recommendations could be generated at this time.";

/// Reply from the text-generation service, split into classified lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationReply {
    pub raw: String,
    pub items: Vec<Recommendation>,
}

impl RecommendationReply {
    fn from_text(raw: String) -> Self {
        let items = classify_recommendations(&raw);
        Self { raw, items }
    }

    /// Classified lines that carry a search link
    pub fn links(&self) -> impl Iterator<Item = &Recommendation> {
        self.items.iter().filter(|r| r.is_link())
    }
}

#[derive(Debug)]
pub enum Recommendations {
    /// The tier does not call for recommendations
    NotRequested,
    /// Requested by the tier but no service was available
    Unavailable,
    Ready(RecommendationReply),
    Failed(GeminiError),
}

impl Recommendations {
    pub fn reply(&self) -> Option<&RecommendationReply> {
        match self {
            Recommendations::Ready(reply) => Some(reply),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct CheckInOutcome {
    pub result: ScoreResult,
    pub recommendations: Recommendations,
}

/// Ask the service for resources tailored to `answers`
pub async fn fetch_recommendations<G: TextGenerator>(
    generator: &G,
    answers: &AnswerSet,
) -> Result<RecommendationReply, GeminiError> {
    let user_prompt = build_user_prompt(answers);
    let text = generator
        .generate(SYSTEM_PROMPT, &user_prompt)
        .await?
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| RECOMMENDATION_FALLBACK.to_string());

    Ok(RecommendationReply::from_text(text))
}

/// Score the answers and, when the tier calls for it, fetch recommendations.
///
/// A failed request is reported in the outcome; the score is never affected.
pub async fn run_checkin<G: TextGenerator>(
    questionnaire: &Questionnaire,
    answers: &AnswerSet,
    generator: Option<&G>,
) -> CheckInOutcome {
    let result = calculate_score(questionnaire, answers);
    log::debug!(
        "Scored {} of {} questions: total {} -> {}/10 ({})",
        result.breakdown.scored,
        questionnaire.scorable_count(),
        result.breakdown.total,
        result.score,
        result.tier
    );

    let recommendations = if !result.tier.requests_recommendations() {
        Recommendations::NotRequested
    } else if let Some(generator) = generator {
        match fetch_recommendations(generator, answers).await {
            Ok(reply) => Recommendations::Ready(reply),
            Err(e) => {
                log::error!("Recommendation request failed: {}", e);
                Recommendations::Failed(e)
            }
        }
    } else {
        Recommendations::Unavailable
    };

    CheckInOutcome {
        result,
        recommendations,
    }
}
