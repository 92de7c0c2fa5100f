/// Data layer: core types, retrieval, reshaping, and filtering.
///
/// Architecture:
/// ```text
///   remote CSV ──► fetch ──► cached file
///                              │
///                              ▼
///                        ┌──────────┐
///                        │  loader   │  melt wide → long, coerce values
///                        └──────────┘
///                              │
///                              ▼
///                        ┌──────────┐
///                        │ GdpTable  │  Vec<Observation>, derived indexes
///                        └──────────┘
///                              │
///                              ▼
///                        ┌──────────┐
///                        │  filter   │  (countries, year range) → indices
///                        └──────────┘
/// ```

pub mod error;
pub mod fetch;
pub mod filter;
pub mod loader;
pub mod model;
