use std::collections::{BTreeMap, BTreeSet};

use crate::classify::Label;

// ---------------------------------------------------------------------------
// Message – one row of the source table
// ---------------------------------------------------------------------------

/// A single message (one row of the source file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Raw message text. `None` when the source cell was empty/null.
    pub text: Option<String>,
    /// Any other source columns, kept as display strings.
    pub extra: BTreeMap<String, String>,
}

impl Message {
    /// A message with text only, no extra columns.
    pub fn from_text(text: impl Into<String>) -> Self {
        Message {
            text: Some(text.into()),
            extra: BTreeMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// LabeledMessage – a message paired with its derived verdict
// ---------------------------------------------------------------------------

/// A message together with its classification. The label is always
/// derived from the text, never stored independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledMessage {
    pub message: Message,
    pub label: Label,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset, ordered as in the source file.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All messages (rows).
    pub messages: Vec<Message>,
    /// Ordered list of extra column names (excludes `text`).
    pub extra_columns: Vec<String>,
}

impl Dataset {
    /// Build a dataset with an explicit column order (CSV keeps the
    /// header order of the source file).
    pub fn new(messages: Vec<Message>, extra_columns: Vec<String>) -> Self {
        Dataset {
            messages,
            extra_columns,
        }
    }

    /// Build a dataset deriving the extra column names from the rows
    /// themselves (sorted). Used when the source has no header order,
    /// e.g. JSON records.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        let mut columns: BTreeSet<String> = BTreeSet::new();
        for msg in &messages {
            for col in msg.extra.keys() {
                columns.insert(col.clone());
            }
        }
        Dataset {
            messages,
            extra_columns: columns.into_iter().collect(),
        }
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_messages_collects_union_of_extra_columns() {
        let mut a = Message::from_text("hi");
        a.extra.insert("source".into(), "sms".into());
        let mut b = Message::from_text("yo");
        b.extra.insert("id".into(), "2".into());

        let ds = Dataset::from_messages(vec![a, b]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.extra_columns, vec!["id".to_string(), "source".to_string()]);
    }
}
