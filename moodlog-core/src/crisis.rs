//! Crisis language screening and the static support resources shown when it triggers.
//!
//! Matching is plain substring containment on the lowercased text: no tokenization,
//! no negation handling, no word boundaries. A false positive only costs the user a
//! list of hotlines; a false negative is not acceptable.

/// Phrases that indicate possible self-harm or harm to others. Lowercase.
pub const CRISIS_PHRASES: &[&str] = &[
    // self-harm
    "suicide",
    "suicidal",
    "kill myself",
    "end my life",
    "end it all",
    "want to die",
    "die",
    "self harm",
    "self-harm",
    "hurt myself",
    "cut myself",
    "overdose",
    "hang myself",
    "jump off",
    // harm to others
    "kill someone",
    "hurt someone",
    "kill them",
    "murder",
    // hopelessness
    "no reason to live",
    "better off dead",
    "can't go on",
    "cannot go on",
    "hopeless",
    "worthless",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrisisResource {
    pub name: &'static str,
    pub contact: &'static str,
    pub note: &'static str,
}

pub const CRISIS_RESOURCES: &[CrisisResource] = &[
    CrisisResource {
        name: "988 Suicide & Crisis Lifeline (US)",
        contact: "Call or text 988",
        note: "Free, confidential, 24/7.",
    },
    CrisisResource {
        name: "Crisis Text Line",
        contact: "Text HOME to 741741",
        note: "24/7 support by text (US, UK, Canada, Ireland).",
    },
    CrisisResource {
        name: "Samaritans (UK & Ireland)",
        contact: "Call 116 123",
        note: "Free, any time, from any phone.",
    },
    CrisisResource {
        name: "International Association for Suicide Prevention",
        contact: "https://www.iasp.info/resources/Crisis_Centres/",
        note: "Directory of crisis centres worldwide.",
    },
    CrisisResource {
        name: "Emergency services",
        contact: "Call 911 / 112 / 999",
        note: "If you or someone else is in immediate danger.",
    },
];

/// A gate run over user text before anything leaves the machine.
pub trait CrisisScreener {
    fn contains_crisis_signal(&self, text: &str) -> bool;
}

/// Default screener: substring search over [`CRISIS_PHRASES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PhraseScreener;

impl CrisisScreener for PhraseScreener {
    fn contains_crisis_signal(&self, text: &str) -> bool {
        contains_crisis_signal(text)
    }
}

pub fn contains_crisis_signal(text: &str) -> bool {
    let lower = text.to_lowercase();
    CRISIS_PHRASES.iter().any(|phrase| lower.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phrase_triggers_in_any_case() {
        for phrase in CRISIS_PHRASES {
            assert!(contains_crisis_signal(phrase), "{phrase}");
            assert!(contains_crisis_signal(&phrase.to_uppercase()), "{phrase}");
            let embedded = format!("lately {phrase} is all I think about");
            assert!(contains_crisis_signal(&embedded), "{phrase}");
        }
    }

    #[test]
    fn ordinary_text_passes() {
        assert!(!contains_crisis_signal("I feel okay today"));
        assert!(!contains_crisis_signal("Had a great walk with the dog."));
        assert!(!contains_crisis_signal(""));
    }

    #[test]
    fn matches_inside_longer_words() {
        assert!(contains_crisis_signal("I studied all night"));
    }

    #[test]
    fn mixed_case_sentence() {
        assert!(contains_crisis_signal("I Want To END MY LIFE"));
        assert!(PhraseScreener.contains_crisis_signal("i want to end my life"));
    }

    #[test]
    fn resources_are_not_empty() {
        assert!(!CRISIS_RESOURCES.is_empty());
        assert!(CRISIS_RESOURCES.iter().all(|r| !r.contact.is_empty()));
    }
}
