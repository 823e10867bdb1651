use anyhow::{bail, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{ScoreResult, Tier};
use crate::survey::AnswerSet;

pub const JOURNAL_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Journal {
    pub version: u32,
    #[serde(default)]
    pub checkins: Vec<CheckIn>,
    #[serde(default)]
    pub moods: Vec<MoodEntry>,
}

/// A completed questionnaire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckIn {
    pub completed_at: DateTime<Utc>,
    pub answers: AnswerSet,
    pub score: u8,
    pub tier: Tier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodEntry {
    pub logged_at: DateTime<Utc>,
    pub mood: MoodLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Mood on a 1 (worst) to 5 (best) scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&level) {
            bail!("Mood must be between {} and {}, got {}", Self::MIN, Self::MAX, level);
        }
        Ok(Self(level))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn emoji(self) -> &'static str {
        match self.0 {
            1 => "😩",
            2 => "😟",
            3 => "😐",
            4 => "😊",
            _ => "🥰",
        }
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = anyhow::Error;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> u8 {
        level.0
    }
}

/// One slot of the seven-day mood series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub date: NaiveDate,
    pub mood: Option<MoodLevel>,
}

impl Default for Journal {
    fn default() -> Self {
        Self::new()
    }
}

impl Journal {
    pub fn new() -> Self {
        Self {
            version: JOURNAL_VERSION,
            checkins: Vec::new(),
            moods: Vec::new(),
        }
    }

    pub fn record_checkin(
        &mut self,
        answers: AnswerSet,
        result: &ScoreResult,
        recommendations: Option<String>,
    ) -> &CheckIn {
        self.checkins.push(CheckIn {
            completed_at: Utc::now(),
            answers,
            score: result.score,
            tier: result.tier,
            recommendations,
        });
        &self.checkins[self.checkins.len() - 1]
    }

    pub fn log_mood(&mut self, mood: MoodLevel, note: Option<String>) -> &MoodEntry {
        let note = note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self.moods.push(MoodEntry {
            logged_at: Utc::now(),
            mood,
            note,
        });
        &self.moods[self.moods.len() - 1]
    }

    /// Check-ins newest first, at most `limit` of them
    pub fn recent_checkins(&self, limit: Option<usize>) -> Vec<&CheckIn> {
        let mut checkins: Vec<&CheckIn> = self.checkins.iter().collect();
        checkins.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        if let Some(limit) = limit {
            checkins.truncate(limit);
        }
        checkins
    }

    /// Mood for each of the seven days ending at `today` (oldest first).
    /// Days are local calendar days; the latest entry of a day wins.
    pub fn mood_week(&self, today: NaiveDate) -> Vec<WeekDay> {
        let mut week: Vec<WeekDay> = (0..7)
            .rev()
            .map(|back| WeekDay {
                date: today - Duration::days(back),
                mood: None,
            })
            .collect();

        let mut entries: Vec<&MoodEntry> = self.moods.iter().collect();
        entries.sort_by_key(|e| e.logged_at);

        for entry in entries {
            let day = entry.logged_at.with_timezone(&Local).date_naive();
            let days_back = (today - day).num_days();
            if (0..7).contains(&days_back) {
                week[6 - days_back as usize].mood = Some(entry.mood);
            }
        }

        week
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::calculate_score;
    use crate::survey::default_questionnaire;

    fn mood_at(when: DateTime<Utc>, level: u8) -> MoodEntry {
        MoodEntry {
            logged_at: when,
            mood: MoodLevel::new(level).unwrap(),
            note: None,
        }
    }

    #[test]
    fn test_new_journal_empty() {
        let journal = Journal::new();
        assert_eq!(journal.version, 1);
        assert!(journal.checkins.is_empty());
        assert!(journal.moods.is_empty());
    }

    #[test]
    fn test_mood_level_bounds() {
        assert!(MoodLevel::new(0).is_err());
        assert!(MoodLevel::new(6).is_err());
        assert_eq!(MoodLevel::new(1).unwrap().emoji(), "😩");
        assert_eq!(MoodLevel::new(5).unwrap().emoji(), "🥰");
    }

    #[test]
    fn test_mood_level_serde_rejects_out_of_range() {
        let level: MoodLevel = serde_json::from_str("3").unwrap();
        assert_eq!(level.value(), 3);
        assert!(serde_json::from_str::<MoodLevel>("9").is_err());
    }

    #[test]
    fn test_log_mood_drops_blank_note() {
        let mut journal = Journal::new();
        let entry = journal.log_mood(MoodLevel::new(4).unwrap(), Some("   ".to_string()));
        assert_eq!(entry.note, None);
        let entry = journal.log_mood(MoodLevel::new(2).unwrap(), Some(" long day ".to_string()));
        assert_eq!(entry.note.as_deref(), Some("long day"));
        assert_eq!(journal.moods.len(), 2);
    }

    #[test]
    fn test_record_checkin_copies_score() {
        let questionnaire = default_questionnaire();
        let answers: AnswerSet = [("q1", "Often"), ("q2", "Okay")].into_iter().collect();
        let result = calculate_score(&questionnaire, &answers);

        let mut journal = Journal::new();
        let checkin = journal.record_checkin(answers.clone(), &result, None);
        assert_eq!(checkin.score, result.score);
        assert_eq!(checkin.tier, result.tier);
        assert_eq!(checkin.answers, answers);
    }

    #[test]
    fn test_recent_checkins_newest_first() {
        let mut journal = Journal::new();
        let now = Utc::now();
        for (hours_ago, score) in [(5, 3u8), (1, 9), (3, 6)] {
            journal.checkins.push(CheckIn {
                completed_at: now - Duration::hours(hours_ago),
                answers: AnswerSet::new(),
                score,
                tier: Tier::from_score(score),
                recommendations: None,
            });
        }

        let scores: Vec<u8> = journal.recent_checkins(None).iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![9, 6, 3]);
        assert_eq!(journal.recent_checkins(Some(1)).len(), 1);
    }

    #[test]
    fn test_mood_week_slots() {
        let now = Local::now();
        let today = now.date_naive();
        let mut journal = Journal::new();
        journal.moods.push(mood_at((now - Duration::days(2)).with_timezone(&Utc), 2));
        journal.moods.push(mood_at(now.with_timezone(&Utc), 4));
        journal.moods.push(mood_at((now - Duration::days(10)).with_timezone(&Utc), 1));

        let week = journal.mood_week(today);
        assert_eq!(week.len(), 7);
        assert_eq!(week[6].date, today);
        assert_eq!(week[0].date, today - Duration::days(6));
        assert_eq!(week[6].mood.map(MoodLevel::value), Some(4));
        assert_eq!(week[4].mood.map(MoodLevel::value), Some(2));
        assert_eq!(week.iter().filter(|d| d.mood.is_some()).count(), 2);
    }

    #[test]
    fn test_mood_week_latest_entry_of_day_wins() {
        let now = Local::now();
        let mut journal = Journal::new();
        // Pushed out of order on purpose
        journal.moods.push(mood_at(now.with_timezone(&Utc), 5));
        journal.moods.push(mood_at(now.with_timezone(&Utc) - Duration::seconds(1), 1));

        let week = journal.mood_week(now.date_naive());
        assert_eq!(week[6].mood.map(MoodLevel::value), Some(5));
    }
}
