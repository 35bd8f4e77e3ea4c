//! Request handlers, grouped by page widget.
//!
//! HTML handlers follow post/redirect/get: a POST updates the visitor's
//! session state and answers `303 See Other`, and the page render reads
//! that state back. JSON handlers under `/api` answer directly.

/// Room matcher and chat widgets.
pub mod assistant;
/// JSON content catalog endpoints.
pub mod content;
/// Room gallery navigation.
pub mod gallery;
/// Health check.
pub mod health;
/// Full page, language switch and promotion toast.
pub mod pages;
/// Mock reservation form.
pub mod reservation;

use crate::types::{AppError, Result};

/// Disabled features behave as if the route did not exist.
pub(crate) fn ensure_enabled(enabled: bool, feature: &str) -> Result<()> {
    if enabled {
        Ok(())
    } else {
        Err(AppError::NotFound(format!("{} is disabled", feature)))
    }
}
