//! Data layer: core types, parsing, loading, and view building.
//!
//! Architecture:
//! ```text
//!  .csv / .txt
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  read file on a worker thread → text
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  parser   │  text → RawTable → ColumnTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ ColumnTable  │  header → Vec<Option<String>>
//!   └─────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │   view    │  table rows / selector options for the UI
//!   └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod parser;
pub mod view;
