//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FanlogConfig (validated, immutable)
//!     → build_transports() → Dispatcher::replace_all
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → new config sent to the owner, which swaps the transport set
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks
//! - A failed reload keeps the current transports

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{ConsoleConfig, FanlogConfig, ObservabilityConfig, RemoteConfig};
pub use validation::{validate_config, ValidationError};
pub use watcher::ConfigWatcher;
