use chrono::NaiveDate;
use clap::{ArgGroup, Parser};
use moodlog_core::{DateRange, Source};

use crate::render::ColorMode;

/// moodlog — private mood journal for the terminal
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("read_mode").args(["history", "stats", "chart", "today"]).multiple(true)),
    group(ArgGroup::new("solo").args(["path", "resources", "clear"]).conflicts_with_all(["read_mode", "mood", "text"])),
)]
pub struct Cli {
    /// Prints the path of the mood log file
    #[arg(long, short)]
    pub path: bool,
    /// Prints crisis support lines
    #[arg(long)]
    pub resources: bool,
    /// Deletes every entry. Needs `--yes`.
    #[arg(long)]
    pub clear: bool,
    /// Confirms `--clear`
    #[arg(long, requires = "clear")]
    pub yes: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Verbose logging on stderr (same as `RUST_LOG=debug`)
    #[arg(long)]
    pub debug: bool,

    /// Lists entries (e.g., `moodlog --history --range week --source manual`)
    #[arg(long, short = 'H')]
    pub history: bool,
    /// Shows entry count, average score and most frequent mood
    #[arg(long)]
    pub stats: bool,
    /// Draws the average score per day
    #[arg(long)]
    pub chart: bool,
    /// Shows how many entries were written today and the latest mood
    #[arg(long)]
    pub today: bool,
    /// Time window for read views: last-7-days (week), last-30-days (month), this-month, all-time
    #[arg(long, short, env = "MOODLOG_RANGE", default_value = "all-time")]
    pub range: DateRange,
    /// Only list entries from this source: manual, ai-classified, crisis-flagged
    #[arg(long, requires = "history")]
    pub source: Option<Source>,

    /// Save with this mood instead of asking the classifier (e.g., `moodlog --mood Calm Long walk`)
    #[arg(long, short, conflicts_with = "read_mode")]
    pub mood: Option<String>,
    /// Backdate a manual entry (YYYY-MM-DD)
    #[arg(long, requires = "mood")]
    pub date: Option<NaiveDate>,

    /// Journal text (e.g., `moodlog Had a rough meeting but the evening was nice`).
    /// Opens your $EDITOR when empty.
    #[arg(conflicts_with = "read_mode")]
    pub text: Vec<String>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_history_with_range_and_source() {
        let cli = Cli::try_parse_from(["moodlog", "--history", "--range", "week", "--source", "manual"])
            .unwrap();
        assert!(cli.history);
        assert_eq!(cli.range, DateRange::Last7Days);
        assert_eq!(cli.source, Some(Source::Manual));
    }

    #[test]
    fn text_words_are_collected() {
        let cli = Cli::try_parse_from(["moodlog", "Rainy", "but", "calm"]).unwrap();
        assert_eq!(cli.text.join(" "), "Rainy but calm");
        assert_eq!(cli.range, DateRange::AllTime);
    }

    #[test]
    fn manual_mood_with_backdate() {
        let cli = Cli::try_parse_from(["moodlog", "--mood", "Calm", "--date", "2025-08-15", "tea"])
            .unwrap();
        assert_eq!(cli.mood.as_deref(), Some("Calm"));
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2025, 8, 15));
    }

    #[test]
    fn date_requires_mood() {
        assert!(Cli::try_parse_from(["moodlog", "--date", "2025-08-15", "tea"]).is_err());
    }

    #[test]
    fn clear_conflicts_with_text() {
        assert!(Cli::try_parse_from(["moodlog", "--clear", "hello"]).is_err());
        assert!(Cli::try_parse_from(["moodlog", "--yes"]).is_err());
    }

    #[test]
    fn read_mode_conflicts_with_text() {
        assert!(Cli::try_parse_from(["moodlog", "--stats", "hello"]).is_err());
    }
}
