pub mod formatter;

pub use formatter::{
    format_age, format_breakdown, format_history, format_json, format_mood_week,
    format_question, format_questionnaire, format_recommendations, format_result, format_tsv,
    should_use_colors, wrap_text,
};
