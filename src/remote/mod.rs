//! Production adapters over a remote transport.
//!
//! This module binds the capability traits to a real remote end:
//!
//! | Type | Implements |
//! |------|------------|
//! | [`RemoteSession`] | [`Session`](crate::session::Session), [`ElementSource`](crate::element::ElementSource) (document root) |
//! | [`RemoteElement`] | [`Element`](crate::element::Element) |
//!
//! Both issue serde-encoded [`Request`](crate::protocol::Request)s through a
//! [`Transport`]. The transport owns connection management, timeouts and
//! cancellation; the adapters treat every call as either completing or
//! failing and never retry.

// ============================================================================
// Submodules
// ============================================================================

/// Remote element handle.
pub mod element;

/// Remote session root and session-scoped actions.
pub mod session;

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;

use crate::error::Result;
use crate::protocol::{Request, Response};

// ============================================================================
// Re-exports
// ============================================================================

pub use element::RemoteElement;
pub use session::RemoteSession;

// ============================================================================
// Transport
// ============================================================================

/// The wire boundary: delivers a request and returns its response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` to the remote end and waits for the matching
    /// response.
    async fn send(&self, request: Request) -> Result<Response>;
}

// ============================================================================
// Test Support
// ============================================================================
