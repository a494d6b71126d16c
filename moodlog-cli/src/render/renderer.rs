use super::theme::OneDark;
use moodlog_core::{
    CrisisResource, DailyScore, DateRange, MoodEntry, Moods, Outcome, Summary, TodaySummary,
};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

const NOTE_PREVIEW_CHARS: usize = 60;
const BAR_WIDTH_PER_POINT: usize = 4;

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: config.unwrap_or_else(|| RenderOptions {
                date_format: "%a, %d %b %Y".to_string(),
                use_color: true,
            }),
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn print_warning(&self, message: &str) {
        let line = format!("⚠ {message}");
        if self.opts.use_color {
            eprintln!("{}", line.with(OneDark::ORANGE));
        } else {
            eprintln!("{line}");
        }
    }

    fn paint(&self, text: String, color: Color) -> String {
        if self.opts.use_color {
            text.with(color).to_string()
        } else {
            text
        }
    }

    fn format_date(&self, entry: &MoodEntry) -> String {
        entry
            .date
            .map(|d| d.format(&self.opts.date_format).to_string())
            .unwrap_or_else(|| "undated".to_string())
    }

    pub fn print_entry_line(&self, entry: &MoodEntry) {
        let date = self.paint(self.format_date(entry), OneDark::BLUE);
        let mood = self.paint(
            format!("{} {} ({})", Moods::emoji(&entry.mood), entry.mood, entry.score),
            OneDark::score_color(entry.score),
        );
        let source = entry
            .source
            .map(|s| self.paint(format!("[{}]", s.as_str()), OneDark::COMMENT))
            .unwrap_or_default();
        let note = note_preview(&entry.note);
        if note.is_empty() {
            println!("{date} {mood} {source}");
        } else {
            println!("{date} {mood} {source} - {note}");
        }
    }

    pub fn print_entries(&self, entries: &[MoodEntry]) {
        if entries.is_empty() {
            self.print_info("No entries found.");
            return;
        }
        for entry in entries {
            self.print_entry_line(entry);
        }
    }

    pub fn print_outcome(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Crisis { resources, .. } => {
                self.print_md(
                    "# You don't have to go through this alone\n\
                     What you wrote sounds really painful. Please reach out to someone now:",
                );
                self.print_resources(resources);
                self.print_info("Your entry was saved privately.");
            }
            Outcome::Saved { entry } => {
                self.print_info("Entry saved.");
                self.print_entry_line(entry);
            }
            Outcome::Classified {
                entry,
                explanation,
                degraded,
            } => {
                if *degraded {
                    self.print_warning("Mood analysis is unavailable; saved as Neutral.");
                }
                self.print_entry_line(entry);
                if !explanation.is_empty() {
                    self.print_md(&format!("> {explanation}"));
                }
            }
        }
    }

    pub fn print_resources(&self, resources: &[CrisisResource]) {
        let mut md = String::new();
        for r in resources {
            md.push_str(&format!("* **{}**: `{}`. {}\n", r.name, r.contact, r.note));
        }
        self.print_md(&md);
    }

    pub fn print_summary(&self, summary: &Summary, range: DateRange) {
        if summary.count == 0 {
            self.print_info(&format!("No entries for {}.", range.label()));
            return;
        }
        let mean = summary
            .mean_score
            .map(|m| format!("{m:.1} / 5"))
            .unwrap_or_else(|| "-".to_string());
        let top = summary
            .top_mood
            .as_deref()
            .map(|m| format!("{} {m}", Moods::emoji(m)))
            .unwrap_or_else(|| "-".to_string());

        let mut md = format!(
            "# Mood stats ({})\n|-|-|\n|Entries|{}|\n|Average score|{}|\n|Most frequent|{}|\n|-|-|\n",
            range.label(),
            summary.count,
            mean,
            top
        );
        md.push_str("\n## By mood\n|-|-|\n");
        for (mood, count) in &summary.distribution {
            md.push_str(&format!("|{} {mood}|{count}|\n", Moods::emoji(mood)));
        }
        md.push_str("|-|-|\n");
        self.print_md(&md);
    }

    pub fn print_chart(&self, series: &[DailyScore]) {
        if series.is_empty() {
            self.print_info("Nothing to chart yet.");
            return;
        }
        for point in series {
            let date = self.paint(point.date.format(&self.opts.date_format).to_string(), OneDark::BLUE);
            match point.mean {
                Some(mean) => {
                    let bar = "█".repeat((mean * BAR_WIDTH_PER_POINT as f64).round() as usize);
                    let color = OneDark::score_color(mean.round() as u8);
                    println!("{date} │ {} {mean:.1} ({})", self.paint(bar, color), point.count);
                }
                None => println!("{date} │ ·"),
            }
        }
    }

    pub fn print_today(&self, today: &TodaySummary) {
        match &today.latest_mood {
            Some(mood) => self.print_info(&format!(
                "Today's entries: {}. Latest: {} {mood}",
                today.count,
                Moods::emoji(mood)
            )),
            None => self.print_info("No entries today yet. Start your first one ✨"),
        }
    }
}

/// First line of a note, cut to a readable length.
fn note_preview(note: &str) -> String {
    let first = note.lines().next().unwrap_or("").trim();
    if first.chars().count() > NOTE_PREVIEW_CHARS {
        let cut: String = first.chars().take(NOTE_PREVIEW_CHARS).collect();
        format!("{cut}…")
    } else {
        first.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_first_line() {
        assert_eq!(note_preview("Short note\nsecond line"), "Short note");
        assert_eq!(note_preview(""), "");
    }

    #[test]
    fn preview_cuts_long_lines_on_char_boundaries() {
        let long = "é".repeat(NOTE_PREVIEW_CHARS + 5);
        let p = note_preview(&long);
        assert_eq!(p.chars().count(), NOTE_PREVIEW_CHARS + 1);
        assert!(p.ends_with('…'));
    }
}
