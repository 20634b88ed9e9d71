//! Selector resolution with cardinality policy.
//!
//! The repository turns a [`Selector`] into live element handles by walking
//! its segments root-to-leaf: each segment is looked up within every element
//! matched by the previous one, and the segment's cardinality constraint is
//! applied to the matches before descending further.
//!
//! Three resolution modes are exposed:
//!
//! | Mode | Behavior |
//! |------|----------|
//! | [`get`](ElementRepository::get) | Unconstrained; zero matches is a valid empty result |
//! | [`get_at_least_one`](ElementRepository::get_at_least_one) | Fails with `no elements found` on empty resolution |
//! | [`get_exactly_one`](ElementRepository::get_exactly_one) | Fails unless exactly one element matched |
//!
//! Remote failures during resolution pass through unretried.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::element::{Element, ElementSource};
use crate::error::{Error, Result};
use crate::selector::{Cardinality, Segment, Selector};

// ============================================================================
// ElementRepository
// ============================================================================

/// Resolution seam between selections and the remote end.
///
/// The production implementation is [`Repository`]; tests substitute an
/// in-memory one.
#[async_trait]
pub trait ElementRepository: Send + Sync {
    /// Resolves `selector`, returning all matches in document order.
    async fn get(&self, selector: &Selector) -> Result<Vec<Box<dyn Element>>>;

    /// Resolves `selector`, failing if it matches nothing.
    async fn get_at_least_one(&self, selector: &Selector) -> Result<Vec<Box<dyn Element>>>;

    /// Resolves `selector`, failing unless it matches exactly one element.
    async fn get_exactly_one(&self, selector: &Selector) -> Result<Box<dyn Element>>;
}

// ============================================================================
// Repository
// ============================================================================

/// Production repository resolving selectors against a root element source.
pub struct Repository {
    root: Arc<dyn ElementSource>,
}

impl Repository {
    /// Creates a repository that resolves from `root` (usually the document).
    #[inline]
    pub fn new(root: Arc<dyn ElementSource>) -> Self {
        Self { root }
    }
}

#[async_trait]
impl ElementRepository for Repository {
    async fn get(&self, selector: &Selector) -> Result<Vec<Box<dyn Element>>> {
        let Some((first, rest)) = selector.segments().split_first() else {
            return Err(Error::EmptySelection);
        };

        let mut elements = retrieve(self.root.as_ref(), first).await?;
        for segment in rest {
            let mut scoped = Vec::new();
            for element in &elements {
                let source: &dyn ElementSource = element.as_ref();
                scoped.extend(retrieve(source, segment).await?);
            }
            elements = scoped;
        }

        debug!(selector = %selector, count = elements.len(), "Resolved selector");
        Ok(elements)
    }

    async fn get_at_least_one(&self, selector: &Selector) -> Result<Vec<Box<dyn Element>>> {
        let elements = self.get(selector).await?;
        if elements.is_empty() {
            return Err(Error::NoElements);
        }
        Ok(elements)
    }

    async fn get_exactly_one(&self, selector: &Selector) -> Result<Box<dyn Element>> {
        let mut elements = self.get_at_least_one(selector).await?;
        if elements.len() > 1 {
            return Err(Error::MultipleElements {
                count: elements.len(),
            });
        }
        Ok(elements.remove(0))
    }
}

// ============================================================================
// Segment Retrieval
// ============================================================================

/// Looks up one segment within `source` and applies its cardinality.
async fn retrieve(source: &dyn ElementSource, segment: &Segment) -> Result<Vec<Box<dyn Element>>> {
    let mut elements = source.elements(segment.locator()).await?;
    match segment.cardinality() {
        Cardinality::All => Ok(elements),
        Cardinality::Single => match elements.len() {
            0 => Err(Error::ElementNotFound),
            1 => Ok(elements),
            count => Err(Error::AmbiguousMatch { count }),
        },
        Cardinality::Index(index) => {
            if index >= elements.len() {
                return Err(Error::IndexOutOfRange { index });
            }
            Ok(vec![elements.swap_remove(index)])
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
