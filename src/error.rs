//! Error types for the suite.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    /// A required element or page state did not appear within its deadline.
    #[error("timed out after {timeout:?} waiting for {what}")]
    Timeout { what: String, timeout: Duration },

    /// An explicit business check failed.
    #[error("assertion failed: {0}")]
    Assertion(String),
}

impl E2eError {
    pub fn timeout(what: impl Into<String>, timeout: Duration) -> Self {
        Self::Timeout {
            what: what.into(),
            timeout,
        }
    }
}
