//! Session-scoped action boundary.
//!
//! Some interactions are addressed to the session rather than to a single
//! element: moving the virtual mouse and triggering a double-click at its
//! current position. [`Session`] is the only collaborator the selection
//! engine needs besides element handles themselves.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::Result;

// ============================================================================
// Offset
// ============================================================================

/// Pixel offset relative to an element's center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    /// Horizontal offset in pixels.
    pub x: i64,
    /// Vertical offset in pixels.
    pub y: i64,
}

// ============================================================================
// Session
// ============================================================================

/// Session-scoped remote actions.
#[async_trait]
pub trait Session: Send + Sync {
    /// Moves the mouse to `element`, displaced by `offset` if given.
    ///
    /// `None` targets the element's center.
    async fn move_to(&self, element: &dyn Element, offset: Option<Offset>) -> Result<()>;

    /// Double-clicks at the mouse's current position.
    async fn double_click(&self) -> Result<()>;
}
