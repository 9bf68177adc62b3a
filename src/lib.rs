#![forbid(unsafe_code)]

//! `hierlog` - hierarchical, leveled logging.
//!
//! - Named loggers that derive dotted children (`app` → `app.db` → `app.db.pool`)
//! - Five severities with a per-logger threshold; children never share level changes
//! - Hooks fired per level before a record is formatted
//! - Pluggable formatters (text, console, JSON) and outputs (terminal, file, any writer)
//! - [`MemLogger`] for asserting on log output in tests, [`NopLogger`] for silence
//! - TOML configuration and redirection of the `log` crate
//!
//! # Example
//!
//! ```
//! use hierlog::{Level, Logger, LoggerBuilder};
//! use hierlog::log_warn;
//!
//! let root = LoggerBuilder::new(&["app"])
//!     .level(Level::Info)
//!     .console_formatter()
//!     .build();
//!
//! let db = root.child(&["db"]);
//! db.set_level(Level::Warn);
//!
//! root.info("started");
//! db.info("dropped: below the db threshold");
//! log_warn!(db, "pool at {}% capacity", 90);
//!
//! assert_eq!(db.name(), "app.db");
//! assert_eq!(root.level(), Level::Info);
//! ```

pub mod bridge;
pub mod config;
pub mod engine;
mod error;
pub mod fmt;
mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod testing;

pub use bridge::redirect_log;
pub use config::Config;
pub use error::Error;
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, LoggerBuilder, MemLogger, NopLogger, StdLogger};
