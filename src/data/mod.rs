/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Row>, ordered column list
///   └──────────┘
///        │
///        ▼
///   engine::* (classify / stats / outlier / chart / search)
/// ```

pub mod loader;
pub mod model;
