//! The core `Journal` struct: the save/analyze pipeline and the history reads built on it.

use crate::classifier::{Classification, Classifier, GeminiClassifier, NEUTRAL_LABEL};
use crate::config::Config;
use crate::crisis::{CRISIS_RESOURCES, CrisisResource, CrisisScreener, PhraseScreener};
use crate::dates::DateRange;
use crate::entry::{MoodEntry, Source};
use crate::moods::Mood;
use crate::stats::{self, Summary, TodaySummary};
use crate::store::EntryStore;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

/// Shown instead of an explanation when classification fails.
pub const FALLBACK_EXPLANATION: &str = "Sorry, I couldn't analyze your entry right now. \
     It has been saved with a neutral mood; thank you for writing it down.";

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("nothing to save: the entry is empty")]
    EmptyInput,
}

/// What happened to a piece of user input.
#[derive(Debug)]
pub enum Outcome {
    /// Crisis language was found. The entry was stored as `Crisis` and nothing was
    /// sent to the classifier.
    Crisis {
        entry: MoodEntry,
        resources: &'static [CrisisResource],
    },
    /// A manual entry stored with the mood the user picked.
    Saved { entry: MoodEntry },
    /// The classifier picked the mood. `degraded` is set when it failed and the
    /// neutral fallback was stored instead.
    Classified {
        entry: MoodEntry,
        explanation: String,
        degraded: bool,
    },
}

impl Outcome {
    pub fn entry(&self) -> &MoodEntry {
        match self {
            Outcome::Crisis { entry, .. }
            | Outcome::Saved { entry }
            | Outcome::Classified { entry, .. } => entry,
        }
    }
}

/// The central struct for all journal operations.
///
/// Holds the application state one request needs: configuration, the entry store, the
/// crisis screener and the classifier.
pub struct Journal {
    pub config: Config,
    store: EntryStore,
    screener: Box<dyn CrisisScreener>,
    classifier: Box<dyn Classifier>,
}

impl Journal {
    /// Creates a new `Journal`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Journal` with a specific `Config` and the default screener and
    /// classifier. Ensures the data directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        let classifier = GeminiClassifier::new(config.classifier.clone())
            .context("building classification client")?;
        Self::with_parts(config, Box::new(PhraseScreener), Box::new(classifier))
    }

    pub fn with_parts(
        config: Config,
        screener: Box<dyn CrisisScreener>,
        classifier: Box<dyn Classifier>,
    ) -> Result<Self> {
        let store = EntryStore::open(config.store_path());
        Ok(Self {
            config,
            store,
            screener,
            classifier,
        })
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Screens `text`, classifies it and stores the result.
    ///
    /// - Empty input is rejected with [`JournalError::EmptyInput`] and nothing is stored.
    /// - Crisis language short-circuits: stored as `Crisis`, classifier never called.
    /// - A classifier failure is logged and replaced by [`NEUTRAL_LABEL`] and
    ///   [`FALLBACK_EXPLANATION`]; the entry is still stored.
    pub fn analyze(&mut self, text: &str) -> Result<Outcome> {
        if text.trim().is_empty() {
            return Err(JournalError::EmptyInput.into());
        }
        if let Some(outcome) = self.screen(text, None)? {
            return Ok(outcome);
        }

        let (classification, degraded) = match self.classifier.classify(text) {
            Ok(c) => (c, false),
            Err(error) => {
                tracing::warn!(%error, "classification failed, storing neutral fallback");
                let fallback = Classification {
                    emotion: NEUTRAL_LABEL.to_string(),
                    explanation: FALLBACK_EXPLANATION.to_string(),
                };
                (fallback, true)
            }
        };

        let entry = self
            .store
            .append(&classification.emotion, text, Source::AiClassified, None)?;
        Ok(Outcome::Classified {
            entry,
            explanation: classification.explanation,
            degraded,
        })
    }

    /// Stores a mood the user picked themselves, optionally backdated.
    ///
    /// The note still goes through the crisis screener.
    pub fn save_manual(
        &mut self,
        mood: &str,
        note: &str,
        date: Option<NaiveDate>,
    ) -> Result<Outcome> {
        if mood.trim().is_empty() {
            return Err(JournalError::EmptyInput.into());
        }
        if let Some(outcome) = self.screen(note, date)? {
            return Ok(outcome);
        }
        let entry = self.store.append(mood, note, Source::Manual, date)?;
        Ok(Outcome::Saved { entry })
    }

    fn screen(&mut self, text: &str, date: Option<NaiveDate>) -> Result<Option<Outcome>> {
        if !self.screener.contains_crisis_signal(text) {
            return Ok(None);
        }
        tracing::warn!("crisis language detected, skipping classification");
        let entry = self
            .store
            .append(Mood::Crisis.as_ref(), text, Source::CrisisFlagged, date)?;
        Ok(Some(Outcome::Crisis {
            entry,
            resources: CRISIS_RESOURCES,
        }))
    }

    /// Entries inside `range`, optionally only those from `source`, in write order.
    pub fn history(&self, range: DateRange, source: Option<Source>) -> Vec<MoodEntry> {
        let entries = stats::filter_by_range(self.store.entries(), range, today());
        match source {
            Some(source) => stats::filter_by_source(&entries, source),
            None => entries,
        }
    }

    pub fn stats(&self, range: DateRange) -> Summary {
        stats::summarize(&self.history(range, None))
    }

    pub fn today(&self) -> TodaySummary {
        stats::today_summary(self.store.entries(), today())
    }

    /// Erases the whole log.
    pub fn clear(&mut self) -> Result<()> {
        self.store.clear()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
