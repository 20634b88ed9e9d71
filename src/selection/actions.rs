//! Bulk user actions over a selection.
//!
//! Every action shares one shape: resolve the selection's elements (at least
//! one required), apply a per-element sequence of remote operations strictly
//! in document order, and abort on the first failure. Failures are scoped to
//! the selection and labeled with the stage that failed, never with an
//! element index — callers reason about the selector, not individual DOM
//! nodes.
//!
//! Nothing is retried and nothing is cached: each call re-resolves from
//! scratch and every remote round-trip either completes or fails.

// ============================================================================
// Imports
// ============================================================================

use std::path;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::selector::Locator;

use super::Selection;

// ============================================================================
// Selection - Element Actions
// ============================================================================

impl Selection {
    /// Clicks every selected element.
    pub async fn click(&self) -> Result<()> {
        debug!(selection = %self, "Clicking selection");

        for element in self.elements().await? {
            element
                .click()
                .await
                .map_err(|err| self.action_error("click on", err))?;
        }
        Ok(())
    }

    /// Double-clicks every selected element.
    ///
    /// Each element completes its own move-then-double-click pair before the
    /// next element begins, emulating real user interaction.
    pub async fn double_click(&self) -> Result<()> {
        debug!(selection = %self, "Double-clicking selection");

        for element in self.elements().await? {
            self.session()
                .move_to(element.as_ref(), None)
                .await
                .map_err(|err| self.action_error("move mouse to", err))?;
            self.session()
                .double_click()
                .await
                .map_err(|err| self.action_error("double-click on", err))?;
        }
        Ok(())
    }

    /// Clears every selected element, then enters `text` into it.
    pub async fn fill(&self, text: &str) -> Result<()> {
        debug!(selection = %self, "Filling selection");

        for element in self.elements().await? {
            element
                .clear()
                .await
                .map_err(|err| self.action_error("clear", err))?;
            element
                .set_value(text)
                .await
                .map_err(|err| self.action_error("enter text into", err))?;
        }
        Ok(())
    }

    /// Enters the absolute path of `file` into every selected file input.
    ///
    /// Each element must be an `<input type="file">`; anything else is a
    /// semantic mismatch, not a remote failure.
    pub async fn upload_file(&self, file: impl AsRef<Path>) -> Result<()> {
        let absolute = path::absolute(file.as_ref())?;
        let value = absolute.to_string_lossy();
        debug!(selection = %self, path = %value, "Uploading file into selection");

        for element in self.elements().await? {
            let tag_name = element
                .tag_name()
                .await
                .map_err(|err| self.action_error("determine tag name of", err))?;
            if tag_name != "input" {
                return Err(Error::NotAnInput {
                    selection: self.to_string(),
                });
            }

            let element_type = element
                .attribute("type")
                .await
                .map_err(|err| self.action_error("determine type attribute of", err))?;
            if element_type.as_deref() != Some("file") {
                return Err(Error::NotAFileUpload {
                    selection: self.to_string(),
                });
            }

            element
                .set_value(&value)
                .await
                .map_err(|err| self.action_error("enter text into", err))?;
        }
        Ok(())
    }

    /// Checks every selected checkbox, skipping those already checked.
    pub async fn check(&self) -> Result<()> {
        self.set_checked(true).await
    }

    /// Unchecks every selected checkbox, skipping those already unchecked.
    pub async fn uncheck(&self) -> Result<()> {
        self.set_checked(false).await
    }

    /// Drives every selected checkbox to `checked`.
    ///
    /// All elements are verified to be checkboxes before any click is
    /// issued. A click toggles state, so it is only issued when an element's
    /// current state disagrees with the target state.
    async fn set_checked(&self, checked: bool) -> Result<()> {
        debug!(selection = %self, checked, "Setting checked state of selection");

        let elements = self.elements().await?;
        for element in &elements {
            let element_type = element
                .attribute("type")
                .await
                .map_err(|err| self.action_error("retrieve type attribute of", err))?;
            if element_type.as_deref() != Some("checkbox") {
                return Err(Error::NotACheckbox {
                    selection: self.to_string(),
                });
            }
        }

        for element in &elements {
            let selected = element
                .is_selected()
                .await
                .map_err(|err| self.action_error("retrieve state of", err))?;
            if selected != checked {
                element
                    .click()
                    .await
                    .map_err(|err| self.action_error("click on", err))?;
            }
        }
        Ok(())
    }

    /// Selects the `<option>` children with the given text under every
    /// selected element.
    ///
    /// Options are discovered per element and clicked as found; an element
    /// without a matching option is a semantic mismatch.
    pub async fn select(&self, text: &str) -> Result<()> {
        debug!(selection = %self, text, "Selecting option for selection");

        let option_locator = Locator::xpath(format!("./option[normalize-space()=\"{text}\"]"));
        for element in self.elements().await? {
            let options = element
                .elements(&option_locator)
                .await
                .map_err(|err| self.action_error("select specified option for", err))?;
            if options.is_empty() {
                return Err(Error::NoSuchOption {
                    text: text.to_string(),
                    selection: self.to_string(),
                });
            }

            for option in options {
                option.click().await.map_err(|err| {
                    self.action_error(format!("click on option with text \"{text}\" for"), err)
                })?;
            }
        }
        Ok(())
    }

    /// Submits the form every selected element belongs to.
    pub async fn submit(&self) -> Result<()> {
        debug!(selection = %self, "Submitting selection");

        for element in self.elements().await? {
            element
                .submit()
                .await
                .map_err(|err| self.action_error("submit", err))?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
