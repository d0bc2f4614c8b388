//! Session backend abstraction

use std::fmt;

use crate::session::category::{Category, CategoryOptions};

/// Platform-reported session configuration failure
///
/// Carries the backend's own cause unmodified; the configuration facade never
/// constructs or rewrites one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionError {
    /// Platform error code
    pub code: i32,
    /// Platform error description
    pub message: String,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "audio session error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for SessionError {}

/// Opaque handle to a platform audio session
///
/// One method: apply a category and option set. Implemented by one
/// platform-specific adapter per target; test code supplies scripted
/// implementations. The underlying session is typically a process-wide
/// singleton, so callers serialize configuration calls.
pub trait SessionBackend {
    /// Apply `category` and `options` to the session
    ///
    /// # Errors
    ///
    /// Returns the platform's own `SessionError` when the combination is
    /// rejected (unsupported pairing, conflicting audio focus, invalid
    /// session state)
    fn set_category(
        &mut self,
        category: Category,
        options: CategoryOptions,
    ) -> Result<(), SessionError>;
}
