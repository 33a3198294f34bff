/// Data layer: the embedded record table, filtering, statistics, export.
///
/// Architecture:
/// ```text
///   embedded table (table.rs)
///        │
///        ▼
///   ┌───────────────┐
///   │ CountryDataset │  40 immutable records, built once at startup
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  region + score-range predicates → filtered indices
///   └──────────┘
///        │
///        ├──▶ stats   (summary, correlation matrix, trend line)
///        ├──▶ export  (CSV with display headers)
///        └──▶ ui      (ranked per-chart views)
/// ```
pub mod export;
pub mod filter;
pub mod model;
pub mod stats;
pub mod table;
