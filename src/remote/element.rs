//! Remote element handle.
//!
//! A [`RemoteElement`] is the production implementation of the
//! [`Element`] capability set: every method issues one command through the
//! shared transport. Handles are created per resolution call and hold no
//! remote resource of their own.

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
use crate::protocol::{Command, ElementCommand, Request};
use crate::selector::Locator;

use super::Transport;

// ============================================================================
// RemoteElement
// ============================================================================

/// A handle to one element on the remote end.
#[derive(Clone)]
pub struct RemoteElement {
    id: ElementId,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for RemoteElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteElement")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl RemoteElement {
    /// Creates a handle for `id` bound to `transport`.
    pub(crate) fn new(id: ElementId, transport: Arc<dyn Transport>) -> Self {
        Self { id, transport }
    }

    /// Returns this element's typed identifier.
    #[inline]
    #[must_use]
    pub fn element_id(&self) -> &ElementId {
        &self.id
    }

    /// Sends an element command and returns the response result.
    async fn send(&self, command: ElementCommand) -> Result<Value> {
        let response = self
            .transport
            .send(Request::new(Command::Element(command)))
            .await?;
        response.into_result()
    }
}

// ============================================================================
// Result Parsing
// ============================================================================

/// Builds element handles from a `findAll` result.
///
/// A missing or malformed `elementIds` field reads as zero matches.
pub(crate) fn elements_from_result(
    result: &Value,
    transport: &Arc<dyn Transport>,
) -> Vec<Box<dyn Element>> {
    result
        .get("elementIds")
        .and_then(Value::as_array)
        .map(|ids| {
            ids.iter()
                .filter_map(Value::as_str)
                .map(|id| {
                    Box::new(RemoteElement::new(ElementId::new(id), transport.clone()))
                        as Box<dyn Element>
                })
                .collect()
        })
        .unwrap_or_default()
}

fn string_value(result: &Value) -> String {
    result
        .get("value")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn bool_value(result: &Value) -> bool {
    result
        .get("value")
        .and_then(Value::as_bool)
        .unwrap_or_default()
}

// ============================================================================
// Capability Implementations
// ============================================================================

#[async_trait]
impl ElementSource for RemoteElement {
    async fn elements(&self, locator: &Locator) -> Result<Vec<Box<dyn Element>>> {
        debug!(element_id = %self.id, strategy = locator.strategy().wire_name(), value = locator.value(), "Finding sub-elements");

        let result = self
            .send(ElementCommand::FindAll {
                strategy: locator.strategy().wire_name().to_string(),
                value: locator.value().to_string(),
                parent_id: Some(self.id.clone()),
            })
            .await?;
        Ok(elements_from_result(&result, &self.transport))
    }
}

#[async_trait]
impl Element for RemoteElement {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    async fn click(&self) -> Result<()> {
        debug!(element_id = %self.id, "Clicking element");
        self.send(ElementCommand::Click {
            element_id: self.id.clone(),
        })
        .await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        debug!(element_id = %self.id, "Clearing element");
        self.send(ElementCommand::Clear {
            element_id: self.id.clone(),
        })
        .await?;
        Ok(())
    }

    async fn set_value(&self, value: &str) -> Result<()> {
        debug!(element_id = %self.id, "Setting element value");
        self.send(ElementCommand::SetValue {
            element_id: self.id.clone(),
            value: value.to_string(),
        })
        .await?;
        Ok(())
    }

    async fn submit(&self) -> Result<()> {
        debug!(element_id = %self.id, "Submitting element");
        self.send(ElementCommand::Submit {
            element_id: self.id.clone(),
        })
        .await?;
        Ok(())
    }

    async fn text(&self) -> Result<String> {
        let result = self
            .send(ElementCommand::GetText {
                element_id: self.id.clone(),
            })
            .await?;
        Ok(string_value(&result))
    }

    async fn tag_name(&self) -> Result<String> {
        let result = self
            .send(ElementCommand::GetTagName {
                element_id: self.id.clone(),
            })
            .await?;
        Ok(string_value(&result))
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        let result = self
            .send(ElementCommand::GetAttribute {
                element_id: self.id.clone(),
                name: name.to_string(),
            })
            .await?;
        Ok(result
            .get("value")
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    async fn is_selected(&self) -> Result<bool> {
        let result = self
            .send(ElementCommand::IsSelected {
                element_id: self.id.clone(),
            })
            .await?;
        Ok(bool_value(&result))
    }

    async fn is_displayed(&self) -> Result<bool> {
        let result = self
            .send(ElementCommand::IsDisplayed {
                element_id: self.id.clone(),
            })
            .await?;
        Ok(bool_value(&result))
    }

    async fn is_enabled(&self) -> Result<bool> {
        let result = self
            .send(ElementCommand::IsEnabled {
                element_id: self.id.clone(),
            })
            .await?;
        Ok(bool_value(&result))
    }
}

// ============================================================================
// Tests
// ============================================================================
