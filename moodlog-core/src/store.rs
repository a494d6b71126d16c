//! The mood log file: a CSV with one row per entry, rewritten whole on every change.
//!
//! ```text
//! date,mood,note,score,source
//! 2025-08-15,Happy,Walked by the sea.,5,manual
//! ```

use crate::entry::{MoodEntry, Source};
use crate::moods::{DEFAULT_SCORE, Moods};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const HEADER: [&str; 5] = ["date", "mood", "note", "score", "source"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Append-only log of [`MoodEntry`] rows backed by a single CSV file.
///
/// The whole log is held in memory and written back in full on each append. This is
/// only safe with a single writer process.
#[derive(Debug)]
pub struct EntryStore {
    path: PathBuf,
    entries: Vec<MoodEntry>,
    /// Cell text as read from disk, one per entry. Written back unchanged so rows
    /// from older versions keep cells this crate can't parse.
    cells: Vec<RawCells>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RawCells {
    date: String,
    score: String,
    source: String,
}

/// Column positions found in a file's header. `None` means the column is absent and
/// gets back-filled.
#[derive(Debug, Default)]
struct Columns {
    date: Option<usize>,
    mood: Option<usize>,
    note: Option<usize>,
    score: Option<usize>,
    source: Option<usize>,
}

impl EntryStore {
    /// Opens the store at `path`, reading whatever the file currently holds.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (entries, cells) = load_rows(&path);
        Self {
            path,
            entries,
            cells,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries in write order.
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Re-reads the backing file and returns its entries.
    pub fn load(&mut self) -> Vec<MoodEntry> {
        (self.entries, self.cells) = load_rows(&self.path);
        self.entries.clone()
    }

    /// Appends a new entry and rewrites the file.
    ///
    /// The score comes from the mood registry at this moment. `date` defaults to today
    /// (local time); pass a date to backdate a manual entry.
    pub fn append(
        &mut self,
        mood: &str,
        note: &str,
        source: Source,
        date: Option<NaiveDate>,
    ) -> Result<MoodEntry> {
        let mood = mood.trim();
        let entry = MoodEntry {
            date: Some(date.unwrap_or_else(|| Local::now().date_naive())),
            mood: mood.to_string(),
            note: note.to_string(),
            score: Moods::score(mood),
            source: Some(source),
        };
        self.entries.push(entry.clone());
        self.cells.push(RawCells::from_entry(&entry));
        if let Err(error) = self.write_all() {
            self.entries.pop();
            self.cells.pop();
            return Err(error);
        }
        tracing::info!(
            mood = %entry.mood,
            score = entry.score,
            source = source.as_str(),
            total = self.entries.len(),
            "appended mood entry"
        );
        Ok(entry)
    }

    /// Deletes the backing file and forgets every entry.
    pub fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("removing {}", self.path.display()));
            }
        }
        tracing::info!(path = %self.path.display(), removed = self.entries.len(), "cleared mood log");
        self.entries.clear();
        self.cells.clear();
        Ok(())
    }

    fn write_all(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating parent directory {}", parent.display()))?;
        }
        let file = File::create(&self.path)
            .with_context(|| format!("opening {}", self.path.display()))?;
        write_rows(&self.entries, &self.cells, file)
            .with_context(|| format!("writing {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), rows = self.entries.len(), "rewrote mood log");
        Ok(())
    }
}

/// Reads every entry from `path`.
///
/// A missing file is an empty log. So is a file that cannot be read or parsed: the
/// log is a convenience record, so it degrades instead of failing.
pub fn load(path: &Path) -> Vec<MoodEntry> {
    load_rows(path).0
}

fn load_rows(path: &Path) -> (Vec<MoodEntry>, Vec<RawCells>) {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Default::default(),
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "could not open mood log, treating it as empty");
            return Default::default();
        }
    };
    match read_rows(file) {
        Ok(rows) => {
            tracing::debug!(path = %path.display(), rows = rows.0.len(), "loaded mood log");
            rows
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "mood log is malformed, treating it as empty");
            Default::default()
        }
    }
}

fn read_rows<R: Read>(reader: R) -> Result<(Vec<MoodEntry>, Vec<RawCells>), csv::Error> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let columns = Columns::from_header(rdr.headers()?);

    let mut entries = Vec::new();
    let mut cells = Vec::new();
    for record in rdr.records() {
        let (entry, raw) = columns.row(&record?);
        entries.push(entry);
        cells.push(raw);
    }
    Ok((entries, cells))
}

fn write_rows<W: io::Write>(
    entries: &[MoodEntry],
    cells: &[RawCells],
    writer: W,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    for (entry, raw) in entries.iter().zip(cells) {
        wtr.write_record([
            raw.date.as_str(),
            entry.mood.as_str(),
            entry.note.as_str(),
            raw.score.as_str(),
            raw.source.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

impl RawCells {
    fn from_entry(entry: &MoodEntry) -> Self {
        Self {
            date: entry
                .date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            score: entry.score.to_string(),
            source: entry.source.map(Source::as_str).unwrap_or_default().to_string(),
        }
    }
}

/// Leading `YYYY-MM-DD` of a cell; a trailing time or anything else after it is ignored.
fn parse_date(cell: &str) -> Option<NaiveDate> {
    NaiveDate::parse_and_remainder(cell.trim(), DATE_FORMAT)
        .ok()
        .map(|(date, _)| date)
}

/// A 1..=5 score written as an integer (`4`) or an integral float (`4.0`).
fn parse_score(cell: &str) -> Option<u8> {
    let value = cell.trim().parse::<f64>().ok()?;
    if value.fract() != 0.0 || !(1.0..=5.0).contains(&value) {
        return None;
    }
    Some(value as u8)
}

impl Columns {
    fn from_header(header: &csv::StringRecord) -> Self {
        let mut columns = Columns::default();
        for (i, name) in header.iter().enumerate() {
            let slot = match name.trim().to_ascii_lowercase().as_str() {
                "date" => &mut columns.date,
                "mood" => &mut columns.mood,
                "note" => &mut columns.note,
                "score" => &mut columns.score,
                "source" => &mut columns.source,
                _ => continue,
            };
            slot.get_or_insert(i);
        }
        columns
    }

    fn row(&self, record: &csv::StringRecord) -> (MoodEntry, RawCells) {
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");
        let entry = MoodEntry {
            date: parse_date(field(self.date)),
            mood: field(self.mood).to_string(),
            note: field(self.note).to_string(),
            score: parse_score(field(self.score)).unwrap_or(DEFAULT_SCORE),
            source: Source::from_str(field(self.source).trim()).ok(),
        };
        // absent columns are written back with their back-filled value
        let raw = RawCells {
            date: field(self.date).to_string(),
            score: match self.score {
                Some(_) => field(self.score).to_string(),
                None => entry.score.to_string(),
            },
            source: field(self.source).to_string(),
        };
        (entry, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::tempdir;

    fn mk_store() -> (EntryStore, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let store = EntryStore::open(tmp.path().join("data").join("mood_log.csv"));
        (store, tmp)
    }

    #[test]
    fn load_missing_file_is_empty() {
        let (mut store, _tmp) = mk_store();
        assert!(store.load().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn append_then_load_returns_entry_dated_today() {
        let (mut store, _tmp) = mk_store();
        store.append("Sad", "rainy day", Source::Manual, None).unwrap();
        let written = store.append("Happy", "Sun came out", Source::AiClassified, None).unwrap();

        let loaded = load(store.path());
        assert_eq!(loaded.len(), 2);
        let last = loaded.last().unwrap();
        assert_eq!(last, &written);
        assert_eq!(last.date, Some(Local::now().date_naive()));
        assert_eq!(last.score, 5);
        assert_eq!(last.source, Some(Source::AiClassified));
    }

    #[test]
    fn append_unknown_mood_scores_default() {
        let (mut store, _tmp) = mk_store();
        let e = store.append("Bewildered", "", Source::Manual, None).unwrap();
        assert_eq!(e.score, DEFAULT_SCORE);
    }

    #[test]
    fn append_keeps_backdate_and_write_order() {
        let (mut store, _tmp) = mk_store();
        let today = Local::now().date_naive();
        let earlier = today - Duration::days(3);
        store.append("Calm", "", Source::Manual, None).unwrap();
        store.append("Tired", "", Source::Manual, Some(earlier)).unwrap();

        let loaded = store.load();
        assert_eq!(loaded[0].date, Some(today));
        assert_eq!(loaded[1].date, Some(earlier));
    }

    #[test]
    fn notes_with_commas_quotes_and_newlines_survive() {
        let (mut store, _tmp) = mk_store();
        let note = "Long day, \"really\" long.\nSecond line.";
        store.append("Okay", note, Source::Manual, None).unwrap();
        assert_eq!(load(store.path())[0].note, note);
    }

    #[test]
    fn file_has_expected_header() {
        let (mut store, _tmp) = mk_store();
        store.append("Calm", "tea", Source::Manual, None).unwrap();
        let s = fs::read_to_string(store.path()).unwrap();
        assert!(s.starts_with("date,mood,note,score,source\n"));
        assert!(s.contains(",Calm,tea,4,manual"));
    }

    #[test]
    fn clear_removes_file() {
        let (mut store, _tmp) = mk_store();
        store.append("Calm", "", Source::Manual, None).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.entries().is_empty());
        assert!(store.load().is_empty());
        // a second clear on the missing file is fine
        store.clear().unwrap();
    }

    #[test]
    fn load_back_fills_missing_columns() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("old.csv");
        fs::write(&path, "date,mood,note\n2025-08-15,Happy,old row\n").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].date, NaiveDate::from_ymd_opt(2025, 8, 15));
        assert_eq!(loaded[0].mood, "Happy");
        assert_eq!(loaded[0].score, DEFAULT_SCORE);
        assert_eq!(loaded[0].source, None);
    }

    #[test]
    fn load_keeps_stored_score() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("log.csv");
        fs::write(&path, "mood,score,date\nHappy,2,2025-08-15\n").unwrap();
        assert_eq!(load(&path)[0].score, 2);
    }

    #[test]
    fn load_without_date_column_leaves_date_empty() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("log.csv");
        fs::write(&path, "mood,note\nCalm,\n").unwrap();
        let loaded = load(&path);
        assert_eq!(loaded[0].date, None);
        assert_eq!(loaded[0].note, "");
    }

    #[test]
    fn load_malformed_file_is_empty() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("broken.csv");
        fs::write(&path, "date,mood,note,score,source\n2025-08-15,Happy\n1,2,3,4,5,6,7\n").unwrap();
        assert!(load(&path).is_empty());

        fs::write(&path, b"date,mood\n\xff\xfe,Happy\n").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn append_keeps_legacy_cells_verbatim() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("log.csv");
        fs::write(&path, "date,mood,note,score,source\n2025-08-15 21:30,Happy,x,5.0,AI\n").unwrap();

        let mut store = EntryStore::open(&path);
        assert_eq!(store.entries()[0].date, NaiveDate::from_ymd_opt(2025, 8, 15));
        assert_eq!(store.entries()[0].score, 5);
        assert_eq!(store.entries()[0].source, None);
        store.append("Calm", "", Source::Manual, None).unwrap();

        let s = fs::read_to_string(&path).unwrap();
        let mut lines = s.lines().skip(1);
        assert_eq!(lines.next(), Some("2025-08-15 21:30,Happy,x,5.0,AI"));
        assert!(lines.next().unwrap().ends_with(",Calm,,4,manual"));
    }

    #[test]
    fn append_writes_back_filled_score_for_missing_column() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("log.csv");
        fs::write(&path, "date,mood,note\n2025-08-15,Happy,old\n").unwrap();
        let mut store = EntryStore::open(&path);
        store.append("Calm", "", Source::Manual, None).unwrap();
        let s = fs::read_to_string(&path).unwrap();
        assert!(s.contains("\n2025-08-15,Happy,old,3,\n"));
    }

    #[test]
    fn integral_float_scores_are_kept() {
        assert_eq!(parse_score("5.0"), Some(5));
        assert_eq!(parse_score(" 2 "), Some(2));
        assert_eq!(parse_score("2.5"), None);
        assert_eq!(parse_score("6.0"), None);
        assert_eq!(parse_score("0"), None);
        assert_eq!(parse_score(""), None);

        let tmp = tempdir().unwrap();
        let path = tmp.path().join("log.csv");
        fs::write(&path, "date,mood,note,score,source\n2025-08-15,Happy,x,5.0,manual\n").unwrap();
        assert_eq!(load(&path)[0].score, 5);
    }

    #[test]
    fn dates_with_trailing_time_parse() {
        assert_eq!(parse_date("2025-08-15 21:30"), NaiveDate::from_ymd_opt(2025, 8, 15));
        assert_eq!(parse_date("2025-08-15"), NaiveDate::from_ymd_opt(2025, 8, 15));
        assert_eq!(parse_date("15/08/2025"), None);
    }

    #[test]
    fn append_over_malformed_file_starts_fresh() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("broken.csv");
        fs::write(&path, "date,mood\n2025-08-15\na,b,c\n").unwrap();
        let mut store = EntryStore::open(&path);
        store.append("Calm", "", Source::Manual, None).unwrap();
        assert_eq!(load(&path).len(), 1);
    }
}
