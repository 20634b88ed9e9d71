//! Reusable, stateless element selections.
//!
//! A [`Selection`] binds a [`Selector`] to the element-resolution machinery
//! and a [`Session`]. It carries no server-side resource: every public
//! operation re-resolves its elements from scratch, so external DOM mutation
//! between calls is always observed freshly.
//!
//! | Submodule | Contents |
//! |-----------|----------|
//! | `actions` | Bulk user actions: click, fill, upload, check, select, submit |
//! | `properties` | Single-element getters: text, attributes, state |
//!
//! # Example
//!
//! ```ignore
//! let submit = session.select(Selector::css("#login-form")).find("button");
//! submit.click().await?;
//! ```

// ============================================================================
// Submodules
// ============================================================================

mod actions;
mod properties;

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::repository::ElementRepository;
use crate::selector::Selector;
use crate::session::Session;

// ============================================================================
// Selection
// ============================================================================

/// A reusable binding of a [`Selector`] to a session and repository.
///
/// Selections are set-valued: an action applies to every element the
/// selector resolves to. Cardinality can be narrowed per segment with
/// [`single`](Selection::single) and [`at`](Selection::at).
///
/// Cloning a selection is cheap; the selector is immutable and the session
/// and repository are shared.
#[derive(Clone)]
pub struct Selection {
    session: Arc<dyn Session>,
    repository: Arc<dyn ElementRepository>,
    selector: Selector,
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector)
    }
}

// ============================================================================
// Selection - Construction and Scoping
// ============================================================================

impl Selection {
    /// Creates a selection over `selector`.
    #[inline]
    pub fn new(
        session: Arc<dyn Session>,
        repository: Arc<dyn ElementRepository>,
        selector: Selector,
    ) -> Self {
        Self {
            session,
            repository,
            selector,
        }
    }

    /// Returns the selection's selector.
    #[inline]
    #[must_use]
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Scopes to the unique descendant matching a CSS selector.
    #[must_use]
    pub fn find(&self, css: &str) -> Self {
        self.scoped(self.selector.append_css(css).single())
    }

    /// Scopes to all descendants matching a CSS selector.
    #[must_use]
    pub fn all(&self, css: &str) -> Self {
        self.scoped(self.selector.append_css(css))
    }

    /// Scopes to the unique descendant matching an XPath expression.
    #[must_use]
    pub fn find_by_xpath(&self, xpath: &str) -> Self {
        self.scoped(self.selector.append_xpath(xpath).single())
    }

    /// Scopes to all descendants matching an XPath expression.
    #[must_use]
    pub fn all_by_xpath(&self, xpath: &str) -> Self {
        self.scoped(self.selector.append_xpath(xpath))
    }

    /// Scopes to the unique descendant link with the given text.
    #[must_use]
    pub fn find_by_link(&self, text: &str) -> Self {
        self.scoped(self.selector.append_link(text).single())
    }

    /// Scopes to all descendant links with the given text.
    #[must_use]
    pub fn all_by_link(&self, text: &str) -> Self {
        self.scoped(self.selector.append_link(text))
    }

    /// Narrows the last segment to its n-th match.
    #[must_use]
    pub fn at(&self, index: usize) -> Self {
        self.scoped(self.selector.at(index))
    }

    /// Narrows the last segment to exactly one match.
    #[must_use]
    pub fn single(&self) -> Self {
        self.scoped(self.selector.single())
    }

    fn scoped(&self, selector: Selector) -> Self {
        Self {
            session: self.session.clone(),
            repository: self.repository.clone(),
            selector,
        }
    }
}

// ============================================================================
// Selection - Resolution
// ============================================================================

impl Selection {
    /// Resolves at least one element, scoping failures to this selection.
    pub(crate) async fn elements(&self) -> Result<Vec<Box<dyn Element>>> {
        self.repository
            .get_at_least_one(&self.selector)
            .await
            .map_err(|err| Error::resolve(self.to_string(), err))
    }

    /// Resolves exactly one element, scoping failures to this selection.
    pub(crate) async fn element(&self) -> Result<Box<dyn Element>> {
        self.repository
            .get_exactly_one(&self.selector)
            .await
            .map_err(|err| Error::resolve_one(self.to_string(), err))
    }

    /// Returns the session for session-scoped actions.
    pub(crate) fn session(&self) -> &dyn Session {
        self.session.as_ref()
    }

    /// Returns the repository for unconstrained resolution.
    pub(crate) fn repository(&self) -> &dyn ElementRepository {
        self.repository.as_ref()
    }

    /// Builds a stage-labeled error scoped to this selection.
    pub(crate) fn action_error(&self, stage: impl Into<String>, cause: Error) -> Error {
        Error::action(stage, self.to_string(), cause)
    }
}

// ============================================================================
// Tests
// ============================================================================
