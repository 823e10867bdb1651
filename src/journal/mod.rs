pub mod storage;
pub mod types;

pub use storage::{get_journal_path, load_journal, save_journal};
pub use types::{CheckIn, Journal, MoodEntry, MoodLevel, WeekDay};
