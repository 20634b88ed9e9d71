//! Element capability traits.
//!
//! An element handle is an opaque reference to one remote element, valid only
//! for the lifetime of the owning session. Handles are fetched fresh on every
//! action; selections never retain them between calls.
//!
//! The capability set is split in two: [`ElementSource`] is the ability to
//! look up elements by locator (shared with session roots), and [`Element`]
//! adds the per-element interactions. Any conforming implementation works —
//! the production adapter lives in [`crate::remote`], and the test suite
//! supplies an in-memory one.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;

use crate::error::Result;
use crate::selector::Locator;

// ============================================================================
// ElementSource
// ============================================================================

/// Anything that can look up elements by locator within its own scope.
///
/// Implemented by element handles (descendant lookup) and by session roots
/// (document-wide lookup).
#[async_trait]
pub trait ElementSource: Send + Sync {
    /// Returns all elements matching `locator` within this scope, in
    /// document order. Zero matches is a successful empty result.
    async fn elements(&self, locator: &Locator) -> Result<Vec<Box<dyn Element>>>;
}

// ============================================================================
// Element
// ============================================================================

/// A handle to a single remote element.
///
/// Every method issues a remote round-trip; failures surface to the caller
/// unretried.
#[async_trait]
pub trait Element: ElementSource + std::fmt::Debug {
    /// Returns this element's remote identifier.
    fn id(&self) -> &str;

    /// Clicks the element.
    async fn click(&self) -> Result<()>;

    /// Clears the element's value.
    async fn clear(&self) -> Result<()>;

    /// Sets the element's value.
    async fn set_value(&self, value: &str) -> Result<()>;

    /// Submits the form the element belongs to.
    async fn submit(&self) -> Result<()>;

    /// Returns the element's visible text.
    async fn text(&self) -> Result<String>;

    /// Returns the element's tag name, lowercased.
    async fn tag_name(&self) -> Result<String>;

    /// Returns an attribute value, or `None` if the attribute is absent.
    async fn attribute(&self, name: &str) -> Result<Option<String>>;

    /// Returns whether the element is selected (checkboxes, options).
    async fn is_selected(&self) -> Result<bool>;

    /// Returns whether the element is displayed.
    async fn is_displayed(&self) -> Result<bool>;

    /// Returns whether the element is enabled.
    async fn is_enabled(&self) -> Result<bool>;
}
