use std::fmt;

// ---------------------------------------------------------------------------
// Label – the three-way spam verdict
// ---------------------------------------------------------------------------

/// Classification verdict for a single message.
///
/// Variant order is the display order used by the chart (green → red).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    NotSpam,
    LessSpam,
    Spam,
}

impl Label {
    /// All labels in chart order (NOT SPAM, LESS SPAM, SPAM).
    pub const ALL: [Label; 3] = [Label::NotSpam, Label::LessSpam, Label::Spam];

    /// Position of this label within [`Label::ALL`].
    pub fn index(self) -> usize {
        match self {
            Label::NotSpam => 0,
            Label::LessSpam => 1,
            Label::Spam => 2,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::NotSpam => write!(f, "NOT SPAM"),
            Label::LessSpam => write!(f, "LESS SPAM"),
            Label::Spam => write!(f, "SPAM"),
        }
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// The fixed trigger-word list. Each word is counted at most once per
/// message, present-or-absent.
pub const TRIGGER_WORDS: [&str; 10] = [
    "free", "win", "won", "claim", "click", "offer", "jackpot", "bonus", "vacation", "gift",
];

/// Classify a message text by trigger-word count.
///
/// Matching is case-insensitive and substring-based, not word-boundary
/// aware: "winter" matches "win".
///
/// * 3 or more triggers → [`Label::Spam`]
/// * exactly 2 triggers → [`Label::LessSpam`]
/// * otherwise (including absent text) → [`Label::NotSpam`]
pub fn classify(text: Option<&str>) -> Label {
    let Some(text) = text else {
        return Label::NotSpam;
    };

    let lowered = text.to_lowercase();
    let score = TRIGGER_WORDS
        .iter()
        .filter(|word| lowered.contains(**word))
        .count();

    match score {
        3.. => Label::Spam,
        2 => Label::LessSpam,
        _ => Label::NotSpam,
    }
}
