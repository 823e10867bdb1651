use std::io::IsTerminal;

use chrono::{DateTime, Duration, Local, Utc};
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::journal::{CheckIn, WeekDay};
use crate::recommend::Recommendation;
use crate::scoring::{ScoreResult, Tier};
use crate::survey::{Question, Questionnaire};

/// Wrap width used when stdout is not a terminal
const DEFAULT_WIDTH: usize = 80;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn get_terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Greedy word wrap; words longer than the width get their own line
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(10);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn tier_badge(tier: Tier, use_colors: bool) -> String {
    let label = tier.as_str().to_uppercase();
    if !use_colors {
        return label;
    }
    match tier {
        Tier::Low => label.red().bold().to_string(),
        Tier::Medium => label.yellow().bold().to_string(),
        Tier::High => label.green().bold().to_string(),
    }
}

/// Score headline, tier and the tier's message
pub fn format_result(result: &ScoreResult, use_colors: bool) -> String {
    let headline = format!("Your Check-In Score: {}/10", result.score);
    let headline = if use_colors {
        headline.bold().to_string()
    } else {
        headline
    };

    let message = wrap_text(result.tier.message(), get_terminal_width().saturating_sub(2))
        .join("\n  ");

    format!(
        "{}  [{}]\n  {}",
        headline,
        tier_badge(result.tier, use_colors),
        message
    )
}

/// Per-question contributions (for verbose mode)
pub fn format_breakdown(result: &ScoreResult) -> String {
    let b = &result.breakdown;
    let mut lines = vec![format!(
        "  {} points from {} questions (max {} each)",
        b.total, b.scored, b.max_per_question
    )];
    for c in &b.contributions {
        lines.push(format!("    {:<5} {:<14} +{}", c.key, c.label, c.points));
    }
    lines.join("\n")
}

/// Tab-separated: score, tier, total, scored (no headers, no colors)
pub fn format_tsv(result: &ScoreResult) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        result.score, result.tier, result.breakdown.total, result.breakdown.scored
    )
}

pub fn format_json(result: &ScoreResult) -> String {
    let value = serde_json::json!({
        "score": result.score,
        "tier": result.tier,
        "total": result.breakdown.total,
        "scored": result.breakdown.scored,
        "max_per_question": result.breakdown.max_per_question,
    });
    value.to_string()
}

/// Recommendation lines. Linked lines are numbered (1-based) so they can be
/// opened by index; plain lines are printed as they came.
pub fn format_recommendations(items: &[Recommendation], use_colors: bool) -> String {
    if items.is_empty() {
        return "No recommendations.".to_string();
    }

    let mut index = 0;
    items
        .iter()
        .map(|item| match (&item.category, &item.url) {
            (Some(category), Some(url)) => {
                index += 1;
                let tag = format!("[{}]", category);
                if use_colors {
                    format!(
                        "{:>2}. {} {}\n    {}",
                        index,
                        tag.cyan(),
                        item.text,
                        url.underline().dimmed()
                    )
                } else {
                    format!("{:>2}. {} {}\n    {}", index, tag, item.text, url)
                }
            }
            _ => item.text.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Question prompt with numbered options, as shown during a survey
pub fn format_question(question: &Question, position: usize, total: usize, use_colors: bool) -> String {
    let counter = format!("({}/{})", position, total);
    let mut lines = vec![if use_colors {
        format!("{} {}", counter.dimmed(), question.prompt.bold())
    } else {
        format!("{} {}", counter, question.prompt)
    }];

    for (i, option) in question.options.iter().enumerate() {
        match &option.emoji {
            Some(emoji) => lines.push(format!("  {}. {} {}", i + 1, emoji, option.label)),
            None => lines.push(format!("  {}. {}", i + 1, option.label)),
        }
    }
    lines.join("\n")
}

/// Full questionnaire listing with option scores
pub fn format_questionnaire(questionnaire: &Questionnaire, use_colors: bool) -> String {
    questionnaire
        .questions()
        .iter()
        .map(|q| {
            let key = if use_colors {
                q.key.cyan().to_string()
            } else {
                q.key.clone()
            };
            let mut lines = vec![format!("{}: {}", key, q.prompt)];
            if q.is_free_text() {
                lines.push("    (free text)".to_string());
            }
            for option in &q.options {
                match option.score {
                    Some(score) => lines.push(format!("    - {} ({})", option.label, score)),
                    None => lines.push(format!("    - {}", option.label)),
                }
            }
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Largest-unit age of a check-in: "3w", "2d", "5h", "40m" or "now".
/// Timestamps from the future (clock changes) also read as "now".
pub fn format_age(elapsed: Duration) -> String {
    const UNITS: [(i64, &str); 4] = [(7 * 86_400, "w"), (86_400, "d"), (3_600, "h"), (60, "m")];

    let seconds = elapsed.num_seconds();
    UNITS
        .iter()
        .find(|(size, _)| seconds >= *size)
        .map(|(size, suffix)| format!("{}{}", seconds / size, suffix))
        .unwrap_or_else(|| "now".to_string())
}

fn format_local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// One line per check-in: time, age, score, tier
pub fn format_history(checkins: &[&CheckIn], use_colors: bool) -> String {
    if checkins.is_empty() {
        return "No check-ins recorded yet.".to_string();
    }

    let now = Utc::now();
    checkins
        .iter()
        .map(|c| {
            let score = format!("{:>2}/10", c.score);
            let age = format!("{:>4}", format_age(now - c.completed_at));
            if use_colors {
                format!(
                    "{}  {}  {}  {}",
                    format_local_time(c.completed_at).dimmed(),
                    age,
                    score.bold(),
                    tier_badge(c.tier, true)
                )
            } else {
                format!(
                    "{}  {}  {}  {}",
                    format_local_time(c.completed_at),
                    age,
                    score,
                    tier_badge(c.tier, false)
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Seven-day mood series, oldest first; empty days show a gap
pub fn format_mood_week(week: &[WeekDay], use_colors: bool) -> String {
    week.iter()
        .map(|day| {
            let label = day.date.format("%a %d").to_string();
            let label = if use_colors {
                label.dimmed().to_string()
            } else {
                label
            };
            match day.mood {
                Some(mood) => format!(
                    "{}  {} {}",
                    label,
                    mood.emoji(),
                    "#".repeat(mood.value() as usize)
                ),
                None => format!("{}  -", label),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
