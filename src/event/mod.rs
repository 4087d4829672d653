//! Log event model.
//!
//! # Data Flow
//! ```text
//! caller-built LogEvent ─────────────────────────────┐
//! untyped serde_json::Value                           │
//!     → validation.rs (shape check)  → LogEvent ──────┤
//!                                                     ▼
//!                                   metadata.rs (shallow merge of bound metadata)
//!                                                     ▼
//!                                   level.rs (per-transport threshold check)
//! ```
//!
//! # Design Decisions
//! - `message` is always a string and `data` always a mapping; the typed
//!   `LogEvent` makes any other shape unrepresentable
//! - Events are never mutated by the core; merging produces a copy
//! - Merge is shallow: composite values are replaced whole

pub mod level;
pub mod metadata;
pub mod record;
pub mod validation;

pub use level::{passes, Level, ParseLevelError};
pub use metadata::{merge_metadata, Metadata, METADATA_KEY};
pub use record::LogEvent;
pub use validation::{validate, ValidationError};
