//! Declarative element selection and bulk user actions for remote browser
//! sessions.
//!
//! This library turns selector expressions into live element handles and
//! applies compound user actions — click, fill, upload, check, select,
//! submit — across every resolved element, collapsing per-element failures
//! into a single selector-scoped error.
//!
//! # Architecture
//!
//! A [`Selection`] binds an immutable [`Selector`] to an
//! [`ElementRepository`] and a [`Session`]. Building one performs no network
//! activity: resolution is lazy, and every action re-resolves its elements
//! from scratch, so selections are reusable and always observe the current
//! DOM.
//!
//! Key design principles:
//!
//! - Actions fan out per element strictly in document order and abort on
//!   the first failure
//! - Errors name the failing stage and the selector, never an element index
//! - Remote calls are never retried; timeouts belong to the transport
//!
//! # Quick Start
//!
//! ```
//! use selections::Selector;
//!
//! // Selectors chain immutably and print the way they appear in errors.
//! let form = Selector::css("#login-form");
//! let field = form.append_css("input[name='email']").single();
//! assert_eq!(
//!     field.to_string(),
//!     "CSS: #login-form | CSS: input[name='email'] [single]"
//! );
//! ```
//!
//! Driving a real session (with a [`remote::Transport`] implementation in
//! hand):
//!
//! ```ignore
//! use selections::{RemoteSession, Result, Selector};
//!
//! async fn log_in(session: &RemoteSession) -> Result<()> {
//!     session.select(Selector::css("#email")).fill("user@example.com").await?;
//!     session.select(Selector::css("#remember-me")).check().await?;
//!     session.select(Selector::css("#login-form")).submit().await?;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`selection`] | [`Selection`]: the bulk-action engine |
//! | [`selector`] | Selector model: strategies, locators, chaining |
//! | [`element`] | Element capability traits |
//! | [`session`] | Session-scoped action boundary |
//! | [`repository`] | Selector resolution with cardinality policy |
//! | [`remote`] | Production adapters over a [`remote::Transport`] |
//! | [`protocol`] | Command and request/response envelope types |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |

// ============================================================================
// Modules
// ============================================================================

/// Element capability traits.
pub mod element;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers for remote entities.
pub mod identifiers;

/// Remote protocol message types.
pub mod protocol;

/// Production adapters over a remote transport.
pub mod remote;

/// Selector resolution with cardinality policy.
pub mod repository;

/// Reusable, stateless element selections.
pub mod selection;

/// Element selector model.
pub mod selector;

/// Session-scoped action boundary.
pub mod session;

#[cfg(test)]
pub(crate) mod mocks;

// ============================================================================
// Re-exports
// ============================================================================

// Selection types
pub use selection::Selection;

// Selector types
pub use selector::{Cardinality, Locator, Segment, Selector, Strategy};

// Capability traits
pub use element::{Element, ElementSource};
pub use repository::{ElementRepository, Repository};
pub use session::{Offset, Session};

// Production adapters
pub use remote::{RemoteElement, RemoteSession, Transport};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{ElementId, RequestId};
