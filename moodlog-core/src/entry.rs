use chrono::NaiveDate;
use strum_macros::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// Where a stored mood came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Source {
    Manual,
    AiClassified,
    CrisisFlagged,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// One journaled moment, as stored in a row of the log file.
///
/// `date` and `source` are optional only because rows written by older versions may
/// lack those columns; everything this crate writes has both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodEntry {
    pub date: Option<NaiveDate>,
    pub mood: String,
    pub note: String,
    pub score: u8,
    pub source: Option<Source>,
}
