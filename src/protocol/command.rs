//! Command definitions organized by module.
//!
//! # Command Modules
//!
//! | Module | Commands |
//! |--------|----------|
//! | `element` | Lookup, interaction, properties |
//! | `input` | Session-scoped mouse actions |

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::identifiers::ElementId;
use crate::session::Offset;

// ============================================================================
// Command Wrapper
// ============================================================================

/// All protocol commands organized by module.
///
/// This enum wraps module-specific command enums for unified serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Command {
    /// Element module commands.
    Element(ElementCommand),
    /// Input module commands.
    Input(InputCommand),
}

// ============================================================================
// Element Commands
// ============================================================================

/// Element module commands for lookup and interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum ElementCommand {
    /// Find all elements matching a locator, in document order.
    ///
    /// With `parent_id` set, the lookup is scoped to that element's
    /// descendants; otherwise it runs against the document root.
    #[serde(rename = "element.findAll")]
    FindAll {
        /// Location strategy wire name, e.g. `css selector`.
        strategy: String,
        /// Selector value.
        value: String,
        /// Scoping parent element, if any.
        #[serde(rename = "parentId", skip_serializing_if = "Option::is_none")]
        parent_id: Option<ElementId>,
    },

    /// Click the element.
    #[serde(rename = "element.click")]
    Click {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
    },

    /// Clear the element's value.
    #[serde(rename = "element.clear")]
    Clear {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
    },

    /// Set the element's value.
    #[serde(rename = "element.setValue")]
    SetValue {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
        /// Value to set.
        value: String,
    },

    /// Submit the form the element belongs to.
    #[serde(rename = "element.submit")]
    Submit {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
    },

    /// Get the element's visible text.
    #[serde(rename = "element.getText")]
    GetText {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
    },

    /// Get the element's tag name.
    #[serde(rename = "element.getTagName")]
    GetTagName {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
    },

    /// Get an attribute value.
    #[serde(rename = "element.getAttribute")]
    GetAttribute {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
        /// Attribute name.
        name: String,
    },

    /// Get whether the element is selected.
    #[serde(rename = "element.isSelected")]
    IsSelected {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
    },

    /// Get whether the element is displayed.
    #[serde(rename = "element.isDisplayed")]
    IsDisplayed {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
    },

    /// Get whether the element is enabled.
    #[serde(rename = "element.isEnabled")]
    IsEnabled {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
    },
}

// ============================================================================
// Input Commands
// ============================================================================

/// Input module commands for session-scoped mouse actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "method", content = "params")]
pub enum InputCommand {
    /// Move the mouse to an element, optionally displaced from its center.
    #[serde(rename = "input.mouseMove")]
    MouseMove {
        /// Target element.
        #[serde(rename = "elementId")]
        element_id: ElementId,
        /// Displacement from the element's center.
        #[serde(skip_serializing_if = "Option::is_none")]
        offset: Option<Offset>,
    },

    /// Double-click at the mouse's current position.
    #[serde(rename = "input.doubleClick")]
    DoubleClick,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_all_serialization() {
        let command = Command::Element(ElementCommand::FindAll {
            strategy: "css selector".to_string(),
            value: "#login".to_string(),
            parent_id: None,
        });

        let json = serde_json::to_value(&command).expect("serialize");
        assert_eq!(json["method"], "element.findAll");
        assert_eq!(json["params"]["strategy"], "css selector");
        assert_eq!(json["params"]["value"], "#login");
        assert!(json["params"].get("parentId").is_none());
    }

    #[test]
    fn test_find_all_with_parent_serialization() {
        let command = Command::Element(ElementCommand::FindAll {
            strategy: "xpath".to_string(),
            value: "./option".to_string(),
            parent_id: Some(ElementId::new("parent-1")),
        });

        let json = serde_json::to_value(&command).expect("serialize");
        assert_eq!(json["params"]["parentId"], "parent-1");
    }

    #[test]
    fn test_mouse_move_omits_missing_offset() {
        let command = Command::Input(InputCommand::MouseMove {
            element_id: ElementId::new("element-1"),
            offset: None,
        });

        let json = serde_json::to_value(&command).expect("serialize");
        assert_eq!(json["method"], "input.mouseMove");
        assert!(json["params"].get("offset").is_none());
    }

    #[test]
    fn test_command_round_trip() {
        let command = Command::Element(ElementCommand::GetAttribute {
            element_id: ElementId::new("element-1"),
            name: "type".to_string(),
        });

        let json = serde_json::to_string(&command).expect("serialize");
        let parsed: Command = serde_json::from_str(&json).expect("deserialize");
        assert!(matches!(
            parsed,
            Command::Element(ElementCommand::GetAttribute { .. })
        ));
    }
}
