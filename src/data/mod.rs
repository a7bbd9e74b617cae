/// Data layer: core types, loading, and labeling.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Message>, extra column names
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ labeler   │  classify every row → Vec<LabeledMessage>
///   └──────────┘
/// ```
pub mod labeler;
pub mod loader;
pub mod model;
