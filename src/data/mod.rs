/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Catalog   │  Vec<Title>, distinct-value index
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply type/country selection → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  views    │  top-N, distribution, trend, histogram
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod views;
