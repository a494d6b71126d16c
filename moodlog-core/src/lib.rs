pub mod classifier;
pub mod config;
pub mod crisis;
pub mod dates;
pub mod entry;
pub mod journal;
pub mod moods;
pub mod stats;
pub mod store;

pub use classifier::{Classification, Classifier, ClassifyError};
pub use config::Config;
pub use crisis::{CRISIS_RESOURCES, CrisisResource, CrisisScreener};
pub use dates::DateRange;
pub use entry::{MoodEntry, Source};
pub use journal::{Journal, JournalError, Outcome};
pub use moods::Moods;
pub use stats::{DailyScore, EntryPoint, Summary, TodaySummary};
