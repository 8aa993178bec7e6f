//! Infrastructure layer - database and logging adapters.

mod db;
pub mod logger;
pub mod migrations;

pub use db::{Database, MigrationState};
pub use logger::{AppLogger, TracingLogger};
pub use migrations::Migrator;

#[cfg(any(test, feature = "test-utils"))]
pub use logger::MockAppLogger;
