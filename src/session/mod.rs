//! Audio session configuration
//!
//! A one-call facade over a platform audio backend: apply a category and
//! option set to an existing session handle, report the outcome. The facade
//! performs no validation of its own, never retries, and never swallows the
//! backend's error; callers decide whether to fall back to another category
//! or surface the failure.
//!
//! The platform session behind a [`SessionBackend`] is process-wide state;
//! configuration calls from multiple threads must be serialized by the
//! caller, which `&mut` access makes the default.

pub mod backend;
pub mod category;

#[cfg(target_os = "ios")]
pub mod avf;

pub use backend::{SessionBackend, SessionError};
pub use category::{Category, CategoryOptions};

/// Apply a category and option set to an audio session
///
/// Pure pass-through: the pair is forwarded to the backend and the outcome is
/// mirrored back unchanged. Side effects on global audio-routing state are
/// the platform's.
///
/// # Arguments
///
/// * `session` - Backend handle for the session being configured
/// * `category` - Requested session category
/// * `options` - Behavioral option flags compatible with the category
///
/// # Errors
///
/// Propagates the backend's `SessionError` untouched when the platform
/// rejects the combination
pub fn configure(
    session: &mut dyn SessionBackend,
    category: Category,
    options: CategoryOptions,
) -> Result<(), SessionError> {
    log::debug!(
        "Configuring audio session: category={}, options={}",
        category,
        options
    );
    session.set_category(category, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that records the forwarded pair and returns a scripted outcome
    struct ScriptedBackend {
        outcome: Result<(), SessionError>,
        seen: Vec<(Category, CategoryOptions)>,
    }

    impl ScriptedBackend {
        fn accepting() -> Self {
            Self {
                outcome: Ok(()),
                seen: Vec::new(),
            }
        }

        fn rejecting(code: i32, message: &str) -> Self {
            Self {
                outcome: Err(SessionError {
                    code,
                    message: message.to_string(),
                }),
                seen: Vec::new(),
            }
        }
    }

    impl SessionBackend for ScriptedBackend {
        fn set_category(
            &mut self,
            category: Category,
            options: CategoryOptions,
        ) -> Result<(), SessionError> {
            self.seen.push((category, options));
            self.outcome.clone()
        }
    }

    #[test]
    fn test_accepted_pair_passes_through_as_ok() {
        let mut backend = ScriptedBackend::accepting();

        let result = configure(
            &mut backend,
            Category::Playback,
            CategoryOptions::MIX_WITH_OTHERS,
        );

        assert!(result.is_ok());
    }

    #[test]
    fn test_rejection_propagates_platform_cause_unmodified() {
        let mut backend = ScriptedBackend::rejecting(-50, "category not supported");

        let result = configure(&mut backend, Category::Record, CategoryOptions::NONE);

        let err = result.unwrap_err();
        assert_eq!(err.code, -50);
        assert_eq!(err.message, "category not supported");
    }

    #[test]
    fn test_category_and_options_forwarded_verbatim() {
        let mut backend = ScriptedBackend::accepting();
        let options = CategoryOptions::ALLOW_BLUETOOTH | CategoryOptions::DEFAULT_TO_SPEAKER;

        configure(&mut backend, Category::PlayAndRecord, options).unwrap();

        assert_eq!(backend.seen, vec![(Category::PlayAndRecord, options)]);
    }

    #[test]
    fn test_facade_does_not_retry_on_failure() {
        let mut backend = ScriptedBackend::rejecting(-1, "busy");

        let _ = configure(&mut backend, Category::Playback, CategoryOptions::NONE);

        assert_eq!(backend.seen.len(), 1);
    }
}
