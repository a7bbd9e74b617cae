use crate::classify::classify;

use super::model::{LabeledMessage, Message};

// ---------------------------------------------------------------------------
// Dataset labeler – classify every row
// ---------------------------------------------------------------------------

/// Apply the classifier to every message, order-preserving.
///
/// Rows are independent; `out[i].label == classify(rows[i].text)` for
/// every i, and the output has the same length as the input.
pub fn label_all(messages: &[Message]) -> Vec<LabeledMessage> {
    messages
        .iter()
        .map(|msg| LabeledMessage {
            message: msg.clone(),
            label: classify(msg.text.as_deref()),
        })
        .collect()
}

/// Count how many messages carry each label, indexed by [`Label::ALL`]
/// order (NOT SPAM, LESS SPAM, SPAM). The chart consumes this directly.
pub fn label_counts(labeled: &[LabeledMessage]) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for row in labeled {
        counts[row.label.index()] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use crate::classify::Label;

    use super::*;

    fn rows() -> Vec<Message> {
        vec![
            Message::from_text("free win won claim"),
            Message::from_text("hello world"),
            Message {
                text: None,
                extra: Default::default(),
            },
            Message::from_text("free bonus"),
        ]
    }

    #[test]
    fn label_all_preserves_order_and_length() {
        let messages = rows();
        let labeled = label_all(&messages);

        assert_eq!(labeled.len(), messages.len());
        for (out, src) in labeled.iter().zip(&messages) {
            assert_eq!(out.message, *src);
            assert_eq!(out.label, classify(src.text.as_deref()));
        }
    }

    #[test]
    fn label_all_expected_verdicts() {
        let labels: Vec<Label> = label_all(&rows()).iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![Label::Spam, Label::NotSpam, Label::NotSpam, Label::LessSpam]
        );
    }

    #[test]
    fn label_counts_sum_to_row_count() {
        let labeled = label_all(&rows());
        let counts = label_counts(&labeled);

        assert_eq!(counts.iter().sum::<usize>(), labeled.len());
        // NOT SPAM, LESS SPAM, SPAM
        assert_eq!(counts, [2, 1, 1]);
    }

    #[test]
    fn label_all_of_empty_input_is_empty() {
        assert!(label_all(&[]).is_empty());
        assert_eq!(label_counts(&[]), [0, 0, 0]);
    }
}
