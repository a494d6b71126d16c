//! Read-side views over the mood log: filters, aggregates and chart series.
//!
//! Everything here is pure and works on entries in write order, the way
//! [`EntryStore::entries`](crate::store::EntryStore::entries) hands them out.

use crate::dates::{DateRange, get_dates_in_range};
use crate::entry::{MoodEntry, Source};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_score: Option<f64>,
    pub top_mood: Option<String>,
    /// `(mood, count)` in the order each mood first appears.
    pub distribution: Vec<(String, usize)>,
}

/// Mean score of one calendar day. Days without entries carry `mean: None`.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyScore {
    pub date: NaiveDate,
    pub mean: Option<f64>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub index: usize,
    pub date: Option<NaiveDate>,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodaySummary {
    pub count: usize,
    pub latest_mood: Option<String>,
}

pub fn filter_by_range(entries: &[MoodEntry], range: DateRange, today: NaiveDate) -> Vec<MoodEntry> {
    entries
        .iter()
        .filter(|e| range.contains(e.date, today))
        .cloned()
        .collect()
}

pub fn filter_by_source(entries: &[MoodEntry], source: Source) -> Vec<MoodEntry> {
    entries
        .iter()
        .filter(|e| e.source == Some(source))
        .cloned()
        .collect()
}

/// Moods with their counts, in first-encountered order.
pub fn mood_distribution(entries: &[MoodEntry]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(mood, _)| *mood == entry.mood) {
            Some((_, n)) => *n += 1,
            None => counts.push((entry.mood.clone(), 1)),
        }
    }
    counts
}

/// The mode of the moods. Ties go to the mood seen first.
pub fn most_frequent_mood(entries: &[MoodEntry]) -> Option<String> {
    let mut best: Option<(String, usize)> = None;
    for (mood, count) in mood_distribution(entries) {
        if best.as_ref().is_none_or(|(_, top)| count > *top) {
            best = Some((mood, count));
        }
    }
    best.map(|(mood, _)| mood)
}

pub fn mean_score(entries: &[MoodEntry]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let total: u32 = entries.iter().map(|e| u32::from(e.score)).sum();
    Some(f64::from(total) / entries.len() as f64)
}

pub fn summarize(entries: &[MoodEntry]) -> Summary {
    Summary {
        count: entries.len(),
        mean_score: mean_score(entries),
        top_mood: most_frequent_mood(entries),
        distribution: mood_distribution(entries),
    }
}

/// Widest span, in days, that [`daily_series`] fills with empty days.
pub const MAX_GAP_FILL_DAYS: i64 = 366;

/// One point per calendar day from the earliest to the latest dated entry.
///
/// When the dated entries span more than [`MAX_GAP_FILL_DAYS`] (a mistyped year, say)
/// only days that have entries are returned.
pub fn daily_series(entries: &[MoodEntry]) -> Vec<DailyScore> {
    let mut by_day: BTreeMap<NaiveDate, (u32, usize)> = BTreeMap::new();
    for entry in entries {
        if let Some(date) = entry.date {
            let slot = by_day.entry(date).or_insert((0, 0));
            slot.0 += u32::from(entry.score);
            slot.1 += 1;
        }
    }
    let (Some(first), Some(last)) = (
        by_day.keys().next().copied(),
        by_day.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };

    let days = if (last - first).num_days() > MAX_GAP_FILL_DAYS {
        tracing::debug!(%first, %last, "date span too wide to gap-fill");
        by_day.keys().copied().collect()
    } else {
        get_dates_in_range(first, last)
    };
    days
        .into_iter()
        .map(|date| match by_day.get(&date) {
            Some(&(total, count)) => DailyScore {
                date,
                mean: Some(f64::from(total) / count as f64),
                count,
            },
            None => DailyScore {
                date,
                mean: None,
                count: 0,
            },
        })
        .collect()
}

/// One point per entry, in write order.
pub fn entry_series(entries: &[MoodEntry]) -> Vec<EntryPoint> {
    entries
        .iter()
        .enumerate()
        .map(|(index, e)| EntryPoint {
            index,
            date: e.date,
            score: e.score,
        })
        .collect()
}

pub fn today_summary(entries: &[MoodEntry], today: NaiveDate) -> TodaySummary {
    let todays: Vec<&MoodEntry> = entries.iter().filter(|e| e.date == Some(today)).collect();
    TodaySummary {
        count: todays.len(),
        latest_mood: todays.last().map(|e| e.mood.clone()),
    }
}
