//! Element selector model.
//!
//! A [`Selector`] is an immutable chain of [`Segment`]s describing a path
//! from a root context to target elements. Composing a child selector always
//! produces a new value, never mutates the parent, so selections can be
//! scoped and reused freely.
//!
//! The `Display` form of a selector is stable and human-readable; it appears
//! verbatim in error messages (e.g. `CSS: #selector`).
//!
//! # Example
//!
//! ```
//! use selections::Selector;
//!
//! let form = Selector::css("#login-form");
//! let submit = form.append_css("button[type='submit']").single();
//!
//! assert_eq!(form.to_string(), "CSS: #login-form");
//! assert_eq!(
//!     submit.to_string(),
//!     "CSS: #login-form | CSS: button[type='submit'] [single]"
//! );
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Strategy
// ============================================================================

/// Element location strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// CSS selector (most common).
    Css,
    /// XPath expression.
    XPath,
    /// Link text (for `<a>` elements).
    Link,
}

impl Strategy {
    /// Returns the strategy name used on the wire.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Css => "css selector",
            Self::XPath => "xpath",
            Self::Link => "link text",
        }
    }
}

// ============================================================================
// Locator
// ============================================================================

/// A single strategy+value query, the unit handed to the remote end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locator {
    strategy: Strategy,
    value: String,
}

impl Locator {
    /// Creates a locator from a strategy and value.
    #[inline]
    pub fn new(strategy: Strategy, value: impl Into<String>) -> Self {
        Self {
            strategy,
            value: value.into(),
        }
    }

    /// Creates a CSS locator.
    #[inline]
    pub fn css(value: impl Into<String>) -> Self {
        Self::new(Strategy::Css, value)
    }

    /// Creates an XPath locator.
    #[inline]
    pub fn xpath(value: impl Into<String>) -> Self {
        Self::new(Strategy::XPath, value)
    }

    /// Creates a link text locator.
    #[inline]
    pub fn link(value: impl Into<String>) -> Self {
        Self::new(Strategy::Link, value)
    }

    /// Returns the location strategy.
    #[inline]
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns the selector value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

// ============================================================================
// Cardinality
// ============================================================================

/// How many of a segment's matches participate in resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cardinality {
    /// All matches, in document order.
    #[default]
    All,
    /// Exactly one match; resolution fails on zero or several.
    Single,
    /// The n-th match only; resolution fails if out of range.
    Index(usize),
}

// ============================================================================
// Segment
// ============================================================================

/// One step of a selector chain: a locator plus a cardinality constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    locator: Locator,
    cardinality: Cardinality,
}

impl Segment {
    fn new(locator: Locator) -> Self {
        Self {
            locator,
            cardinality: Cardinality::All,
        }
    }

    /// Returns the segment's locator.
    #[inline]
    #[must_use]
    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Returns the segment's cardinality constraint.
    #[inline]
    #[must_use]
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.locator.strategy() {
            Strategy::Css => write!(f, "CSS: {}", self.locator.value())?,
            Strategy::XPath => write!(f, "XPath: {}", self.locator.value())?,
            Strategy::Link => write!(f, "Link: \"{}\"", self.locator.value())?,
        }
        match self.cardinality {
            Cardinality::All => Ok(()),
            Cardinality::Single => write!(f, " [single]"),
            Cardinality::Index(index) => write!(f, " [{index}]"),
        }
    }
}

// ============================================================================
// Selector
// ============================================================================

/// An immutable, chainable description of how to locate elements.
///
/// Segments are resolved root-to-leaf: each segment is looked up within
/// every element matched by the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    segments: Vec<Segment>,
}

impl Selector {
    /// Creates a selector with a single CSS segment.
    #[inline]
    pub fn css(value: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::new(Locator::css(value))],
        }
    }

    /// Creates a selector with a single XPath segment.
    #[inline]
    pub fn xpath(value: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::new(Locator::xpath(value))],
        }
    }

    /// Creates a selector with a single link text segment.
    #[inline]
    pub fn link(value: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::new(Locator::link(value))],
        }
    }

    /// Returns a new selector scoped by a CSS segment.
    #[must_use]
    pub fn append_css(&self, value: impl Into<String>) -> Self {
        self.append(Segment::new(Locator::css(value)))
    }

    /// Returns a new selector scoped by an XPath segment.
    #[must_use]
    pub fn append_xpath(&self, value: impl Into<String>) -> Self {
        self.append(Segment::new(Locator::xpath(value)))
    }

    /// Returns a new selector scoped by a link text segment.
    #[must_use]
    pub fn append_link(&self, value: impl Into<String>) -> Self {
        self.append(Segment::new(Locator::link(value)))
    }

    /// Returns a new selector whose last segment picks the n-th match.
    #[must_use]
    pub fn at(&self, index: usize) -> Self {
        self.with_last_cardinality(Cardinality::Index(index))
    }

    /// Returns a new selector whose last segment must match exactly one
    /// element.
    #[must_use]
    pub fn single(&self) -> Self {
        self.with_last_cardinality(Cardinality::Single)
    }

    /// Returns the selector's segments, root first.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn append(&self, segment: Segment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    fn with_last_cardinality(&self, cardinality: Cardinality) -> Self {
        let mut segments = self.segments.clone();
        if let Some(last) = segments.last_mut() {
            last.cardinality = cardinality;
        }
        Self { segments }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            if position > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
