/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///  pagerank_best.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → Records
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ ConvergenceData │  shared x-axis labels + 4 method series
///   └─────────────────┘
/// ```

pub mod loader;
pub mod model;
