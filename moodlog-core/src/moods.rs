//! The mood vocabulary: which labels are recognized, how they score and how they render.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Score given to any mood the registry does not know.
pub const DEFAULT_SCORE: u8 = 3;

/// Emoji shown for moods without one of their own.
pub const DEFAULT_EMOJI: &str = "📝";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Mood {
    Happy,
    Excited,
    Grateful,
    Joyful,
    Calm,
    Content,
    Hopeful,
    Relaxed,
    Okay,
    Neutral,
    Confused,
    Surprised,
    Sad,
    Anxious,
    Stressed,
    Tired,
    Lonely,
    Frustrated,
    Angry,
    Hopeless,
    Crisis,
}

impl Mood {
    pub fn score(self) -> u8 {
        match self {
            Mood::Happy | Mood::Excited | Mood::Grateful | Mood::Joyful => 5,
            Mood::Calm | Mood::Content | Mood::Hopeful | Mood::Relaxed => 4,
            Mood::Okay | Mood::Neutral | Mood::Confused | Mood::Surprised => 3,
            Mood::Sad
            | Mood::Anxious
            | Mood::Stressed
            | Mood::Tired
            | Mood::Lonely
            | Mood::Frustrated => 2,
            Mood::Angry | Mood::Hopeless | Mood::Crisis => 1,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😄",
            Mood::Excited => "🤩",
            Mood::Grateful => "🙏",
            Mood::Joyful => "😊",
            Mood::Calm => "😌",
            Mood::Content => "🙂",
            Mood::Hopeful => "🌤️",
            Mood::Relaxed => "😎",
            Mood::Okay => "😐",
            Mood::Neutral => "😶",
            Mood::Confused => "😕",
            Mood::Surprised => "😮",
            Mood::Sad => "😢",
            Mood::Anxious => "😰",
            Mood::Stressed => "😫",
            Mood::Tired => "😴",
            Mood::Lonely => "🥺",
            Mood::Frustrated => "😤",
            Mood::Angry => "😠",
            Mood::Hopeless => "😞",
            Mood::Crisis => "🆘",
        }
    }
}

pub struct Moods;

impl Moods {
    /// Returns the global mood → score registry.
    ///
    /// Seeded once from [`Mood`] on first access, keys lowercased so lookups are
    /// case-insensitive. [`extend`](Self::extend) adds or overrides labels; everything
    /// else only reads.
    fn registry() -> &'static RwLock<HashMap<String, u8>> {
        static REGISTRY: Lazy<RwLock<HashMap<String, u8>>> = Lazy::new(|| {
            let m = Mood::iter()
                .map(|mood| (mood.as_ref().to_ascii_lowercase(), mood.score()))
                .collect();
            RwLock::new(m)
        });
        &REGISTRY
    }

    /// Adds user-defined `(label, score)` pairs to the registry, e.g. from the
    /// `[moods]` table of `config.toml`. Scores are clamped into `1..=5`.
    pub fn extend(moods: &[(String, i64)]) {
        let mut reg = Self::registry()
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for (label, score) in moods {
            let label = label.trim().to_ascii_lowercase();
            if label.is_empty() {
                continue;
            }
            reg.insert(label, (*score).clamp(1, 5) as u8);
        }
    }

    /// Score for `label`, or [`DEFAULT_SCORE`] when the label is not recognized.
    pub fn score(label: &str) -> u8 {
        let reg = Self::registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        reg.get(&label.trim().to_ascii_lowercase())
            .copied()
            .unwrap_or(DEFAULT_SCORE)
    }

    /// Returns `true` if `label` has an entry in the registry.
    pub fn is_known(label: &str) -> bool {
        let reg = Self::registry()
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        reg.contains_key(&label.trim().to_ascii_lowercase())
    }

    pub fn emoji(label: &str) -> &'static str {
        Mood::from_str(label.trim())
            .map(Mood::emoji)
            .unwrap_or(DEFAULT_EMOJI)
    }
}
