use std::path::Path;

use crate::classify::{Label, classify};
use crate::data::labeler::label_all;
use crate::data::loader;
use crate::data::model::{Dataset, LabeledMessage};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Dataset>,

    /// Labels for every dataset row (recomputed per load).
    pub labeled: Vec<LabeledMessage>,

    /// Text typed into the message checker.
    pub query: String,

    /// Verdict of the last checker run.
    pub verdict: Option<Label>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            labeled: Vec::new(),
            query: String::new(),
            verdict: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and relabel every row.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.labeled = label_all(&dataset.messages);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Load a dataset file, updating either the dataset or the status
    /// message. Shared by the startup path and the File → Open dialog.
    pub fn load_path(&mut self, path: &Path) {
        self.loading = true;
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} messages with extra columns {:?}",
                    dataset.len(),
                    dataset.extra_columns
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }

    /// Classify the checker input and remember the verdict.
    pub fn run_checker(&mut self) {
        let text = if self.query.is_empty() {
            None
        } else {
            Some(self.query.as_str())
        };
        self.verdict = Some(classify(text));
    }
}

#[cfg(test)]
mod tests {
    use crate::data::model::Message;

    use super::*;

    #[test]
    fn set_dataset_relabels_and_clears_status() {
        let mut state = AppState::default();
        state.status_message = Some("Error: stale".into());
        state.loading = true;

        state.set_dataset(Dataset::from_messages(vec![
            Message::from_text("free win won claim"),
            Message::from_text("hello"),
        ]));

        assert_eq!(state.labeled.len(), 2);
        assert_eq!(state.labeled[0].label, Label::Spam);
        assert_eq!(state.labeled[1].label, Label::NotSpam);
        assert!(state.status_message.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn checker_classifies_the_query() {
        let mut state = AppState::default();

        state.query = "free bonus".into();
        state.run_checker();
        assert_eq!(state.verdict, Some(Label::LessSpam));

        state.query.clear();
        state.run_checker();
        assert_eq!(state.verdict, Some(Label::NotSpam));
    }

    #[test]
    fn load_path_failure_sets_status_message() {
        let mut state = AppState::default();
        state.load_path(Path::new("does-not-exist.csv"));

        assert!(state.dataset.is_none());
        assert!(
            state
                .status_message
                .as_deref()
                .is_some_and(|m| m.starts_with("Error:"))
        );
        assert!(!state.loading);
    }
}
