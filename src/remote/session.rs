//! Remote session root and session-scoped actions.
//!
//! [`RemoteSession`] plays two roles: the document-root
//! [`ElementSource`] that selector chains resolve from, and the
//! [`Session`] that carries mouse-level actions which are not addressed to a
//! single element.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::element::{Element, ElementSource};
use crate::error::Result;
use crate::identifiers::ElementId;
use crate::protocol::{Command, ElementCommand, InputCommand, Request};
use crate::repository::Repository;
use crate::selection::Selection;
use crate::selector::{Locator, Selector};
use crate::session::{Offset, Session};

use super::Transport;
use super::element::elements_from_result;

// ============================================================================
// RemoteSession
// ============================================================================

/// A live remote browser-control session.
///
/// Cloning is cheap; clones share the underlying transport.
#[derive(Clone)]
pub struct RemoteSession {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for RemoteSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteSession").finish_non_exhaustive()
    }
}

impl RemoteSession {
    /// Creates a session over `transport`.
    #[inline]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Builds a selection over `selector`, resolved against this session's
    /// document root.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let session = RemoteSession::new(transport);
    /// session.select(Selector::css("#login-form")).submit().await?;
    /// ```
    #[must_use]
    pub fn select(&self, selector: Selector) -> Selection {
        let root: Arc<dyn ElementSource> = Arc::new(self.clone());
        let repository = Arc::new(Repository::new(root));
        Selection::new(Arc::new(self.clone()), repository, selector)
    }

    /// Sends a command and returns the response result.
    async fn send(&self, command: Command) -> Result<Value> {
        let response = self.transport.send(Request::new(command)).await?;
        response.into_result()
    }
}

// ============================================================================
// Capability Implementations
// ============================================================================

#[async_trait]
impl ElementSource for RemoteSession {
    async fn elements(&self, locator: &Locator) -> Result<Vec<Box<dyn Element>>> {
        debug!(strategy = locator.strategy().wire_name(), value = locator.value(), "Finding elements from document root");

        let result = self
            .send(Command::Element(ElementCommand::FindAll {
                strategy: locator.strategy().wire_name().to_string(),
                value: locator.value().to_string(),
                parent_id: None,
            }))
            .await?;
        Ok(elements_from_result(&result, &self.transport))
    }
}

#[async_trait]
impl Session for RemoteSession {
    async fn move_to(&self, element: &dyn Element, offset: Option<Offset>) -> Result<()> {
        debug!(element_id = element.id(), "Moving mouse to element");

        self.send(Command::Input(InputCommand::MouseMove {
            element_id: ElementId::new(element.id()),
            offset,
        }))
        .await?;
        Ok(())
    }

    async fn double_click(&self) -> Result<()> {
        debug!("Double-clicking at mouse position");

        self.send(Command::Input(InputCommand::DoubleClick))
            .await?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
