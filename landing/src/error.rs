//! Errors raised at the DOM boundary.
//!
//! None of these reach the visitor: the view layer drops them. They exist so
//! that the navigation handler stays a plain `Result`-returning function.

use thiserror::Error;

/// Why an anchor navigation did not issue a scroll request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    /// No `window` object (non-browser host).
    #[error("no window available")]
    NoWindow,

    /// The window has no `document`.
    #[error("no document attached to window")]
    NoDocument,

    /// No element in the rendered document carries this id.
    #[error("no element with id `{0}`")]
    TargetNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_id() {
        let err = NavError::TargetNotFound("case-studies".into());
        assert_eq!(err.to_string(), "no element with id `case-studies`");
    }

    #[test]
    fn host_errors_name_the_missing_object() {
        assert_eq!(NavError::NoWindow.to_string(), "no window available");
        assert_eq!(
            NavError::NoDocument.to_string(),
            "no document attached to window"
        );
    }
}
