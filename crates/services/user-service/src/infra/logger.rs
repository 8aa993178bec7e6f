//! Application logger - the logging sink handed to services.
//!
//! Services log through `AppLogger` instead of calling `tracing` directly so
//! tests can observe which stages were logged and at what level.

use common::AppError;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fire-and-forget logging sink.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait AppLogger: Send + Sync {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str, cause: &AppError);
}

/// `AppLogger` backed by `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl AppLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: "user_service", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "user_service", "{}", message);
    }

    fn error(&self, message: &str, cause: &AppError) {
        match cause {
            // Domain errors echo user input such as the raw email
            AppError::Domain(_) => {
                tracing::error!(target: "user_service", code = cause.code(), "{}", message);
            }
            _ => {
                tracing::error!(target: "user_service", error = %cause, code = cause.code(), "{}", message);
            }
        }
    }
}
