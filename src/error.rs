//! Error types for element selection and interaction.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use selections::{Result, Selection};
//!
//! async fn example(selection: &Selection) -> Result<()> {
//!     selection.click().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Remote | [`Error::Remote`], [`Error::Protocol`] |
//! | Resolution | [`Error::NoElements`], [`Error::ElementNotFound`], [`Error::AmbiguousMatch`], [`Error::IndexOutOfRange`], [`Error::MultipleElements`], [`Error::EmptySelection`] |
//! | Selection-scoped | [`Error::Resolve`], [`Error::ResolveOne`], [`Error::Action`] |
//! | Semantic mismatch | [`Error::NotAnInput`], [`Error::NotAFileUpload`], [`Error::NotACheckbox`], [`Error::NoSuchOption`] |
//! | External | [`Error::Io`], [`Error::Json`] |
//!
//! Selection-scoped and semantic-mismatch messages are part of the public
//! contract: callers match on the rendered text, so the templates below are
//! load-bearing and must not be reworded.

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Remote Errors
    // ========================================================================
    /// Failure reported by the remote end, surfaced verbatim.
    ///
    /// The message is rendered without any prefix so that wrapping errors can
    /// append it as a cause.
    #[error("{message}")]
    Remote {
        /// Error message from the remote end.
        message: String,
    },

    /// Malformed or unexpected response from the remote end.
    #[error("protocol error: {message}")]
    Protocol {
        /// Description of the protocol violation.
        message: String,
    },

    // ========================================================================
    // Resolution Errors
    // ========================================================================
    /// A selector with no segments was resolved.
    #[error("empty selection")]
    EmptySelection,

    /// At-least-one resolution matched nothing.
    #[error("no elements found")]
    NoElements,

    /// A `[single]` segment matched nothing.
    #[error("element not found")]
    ElementNotFound,

    /// A `[single]` segment matched more than one element.
    #[error("ambiguous find ({count} elements)")]
    AmbiguousMatch {
        /// Number of elements that matched.
        count: usize,
    },

    /// An indexed segment addressed a position past the last match.
    #[error("element index {index} out of range")]
    IndexOutOfRange {
        /// The requested zero-based index.
        index: usize,
    },

    /// Exactly-one resolution matched more than one element.
    #[error("method does not support multiple elements ({count})")]
    MultipleElements {
        /// Number of elements that matched.
        count: usize,
    },

    // ========================================================================
    // Selection-Scoped Errors
    // ========================================================================
    /// Resolving a selection's elements failed.
    #[error("failed to select elements from selection '{selection}': {source}")]
    Resolve {
        /// Description of the selection.
        selection: String,
        /// Underlying cause.
        source: Box<Error>,
    },

    /// Resolving a selection to exactly one element failed.
    #[error("failed to select element from selection '{selection}': {source}")]
    ResolveOne {
        /// Description of the selection.
        selection: String,
        /// Underlying cause.
        source: Box<Error>,
    },

    /// A per-element step of a compound action failed.
    ///
    /// `stage` names the step that failed, e.g. `click on` or
    /// `enter text into`.
    #[error("failed to {stage} selection '{selection}': {source}")]
    Action {
        /// The lifecycle stage that failed.
        stage: String,
        /// Description of the selection.
        selection: String,
        /// Underlying cause.
        source: Box<Error>,
    },

    // ========================================================================
    // Semantic Mismatch Errors
    // ========================================================================
    /// An upload target is not an `<input>` element.
    #[error("element for selection '{selection}' is not an input element")]
    NotAnInput {
        /// Description of the selection.
        selection: String,
    },

    /// An upload target is an `<input>` but not of type `file`.
    #[error("element for selection '{selection}' is not a file uploader")]
    NotAFileUpload {
        /// Description of the selection.
        selection: String,
    },

    /// A check/uncheck target is not an `<input>` of type `checkbox`.
    #[error("selection '{selection}' does not refer to a checkbox")]
    NotACheckbox {
        /// Description of the selection.
        selection: String,
    },

    /// A select target has no `<option>` child with the requested text.
    #[error("no options with text \"{text}\" found for selection '{selection}'")]
    NoSuchOption {
        /// The requested option text.
        text: String,
        /// Description of the selection.
        selection: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a remote error.
    #[inline]
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[inline]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Wraps a resolution failure with the selection it occurred in.
    #[inline]
    pub fn resolve(selection: impl Into<String>, source: Error) -> Self {
        Self::Resolve {
            selection: selection.into(),
            source: Box::new(source),
        }
    }

    /// Wraps an exactly-one resolution failure with the selection it
    /// occurred in.
    #[inline]
    pub fn resolve_one(selection: impl Into<String>, source: Error) -> Self {
        Self::ResolveOne {
            selection: selection.into(),
            source: Box::new(source),
        }
    }

    /// Wraps a per-element failure with its stage label and selection.
    #[inline]
    pub fn action(stage: impl Into<String>, selection: impl Into<String>, source: Error) -> Self {
        Self::Action {
            stage: stage.into(),
            selection: selection.into(),
            source: Box::new(source),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this error came from resolving a selection.
    #[inline]
    #[must_use]
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, Self::Resolve { .. } | Self::ResolveOne { .. })
    }

    /// Returns `true` if the selection pointed at the wrong kind of element,
    /// as opposed to a remote call failing.
    #[inline]
    #[must_use]
    pub fn is_semantic_mismatch(&self) -> bool {
        matches!(
            self,
            Self::NotAnInput { .. }
                | Self::NotAFileUpload { .. }
                | Self::NotACheckbox { .. }
                | Self::NoSuchOption { .. }
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
