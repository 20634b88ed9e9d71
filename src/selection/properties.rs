//! Single-element getters over a selection.
//!
//! Getters resolve with the exactly-one policy: a selection that matches
//! zero or several elements is an error, because a property of "the
//! element" is only meaningful for one. [`count`](Selection::count) is the
//! exception — it uses unconstrained resolution and zero is a valid count.

// ============================================================================
// Imports
// ============================================================================

use tracing::debug;

use crate::error::{Error, Result};

use super::Selection;

// ============================================================================
// Selection - Properties
// ============================================================================

impl Selection {
    /// Returns the selected element's visible text.
    pub async fn text(&self) -> Result<String> {
        let element = self.element().await?;
        element
            .text()
            .await
            .map_err(|err| self.action_error("retrieve text for", err))
    }

    /// Returns an attribute of the selected element, or `None` if absent.
    pub async fn attribute(&self, name: &str) -> Result<Option<String>> {
        let element = self.element().await?;
        element
            .attribute(name)
            .await
            .map_err(|err| self.action_error(format!("retrieve attribute \"{name}\" for"), err))
    }

    /// Returns the selected element's value attribute, or `None` if absent.
    pub async fn value(&self) -> Result<Option<String>> {
        let element = self.element().await?;
        element
            .attribute("value")
            .await
            .map_err(|err| self.action_error("retrieve value of", err))
    }

    /// Returns the selected element's tag name.
    pub async fn tag_name(&self) -> Result<String> {
        let element = self.element().await?;
        element
            .tag_name()
            .await
            .map_err(|err| self.action_error("determine tag name of", err))
    }

    /// Returns whether the selected element is displayed.
    pub async fn visible(&self) -> Result<bool> {
        let element = self.element().await?;
        element
            .is_displayed()
            .await
            .map_err(|err| self.action_error("determine visibility of", err))
    }

    /// Returns whether the selected element is enabled.
    pub async fn enabled(&self) -> Result<bool> {
        let element = self.element().await?;
        element
            .is_enabled()
            .await
            .map_err(|err| self.action_error("determine enabled state of", err))
    }

    /// Returns whether the selected element is selected.
    pub async fn selected(&self) -> Result<bool> {
        let element = self.element().await?;
        element
            .is_selected()
            .await
            .map_err(|err| self.action_error("retrieve state of", err))
    }

    /// Returns the number of elements the selection matches.
    ///
    /// Zero is a valid count, not an error.
    pub async fn count(&self) -> Result<usize> {
        let elements = self
            .repository()
            .get(self.selector())
            .await
            .map_err(|err| Error::resolve(self.to_string(), err))?;

        debug!(selection = %self, count = elements.len(), "Counted selection");
        Ok(elements.len())
    }
}

// ============================================================================
// Tests
// ============================================================================
