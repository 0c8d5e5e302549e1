//! Advisory infrastructure for non-fatal findings attached to a valid result.
//!
//! The estimators never degrade a result into a warning: hard precondition
//! failures are [`EstError`](crate::EstError)s, while values outside typical
//! engineering ranges produce advisories alongside a complete result. The
//! caller decides whether and how to surface them.
//!
//! # Example
//!
//! ```
//! use dcest_core::advisories::Advisories;
//!
//! let mut advisories = Advisories::new();
//! advisories.add("pdu", "PDU count exceeds 500; consider larger PDU blocks");
//!
//! assert_eq!(advisories.len(), 1);
//! assert!(advisories.messages()[0].contains("PDU"));
//! ```

use serde::Serialize;

/// A single advisory finding raised during an estimation.
#[derive(Debug, Clone, Serialize)]
pub struct Advisory {
    /// Category for grouping (e.g., "sizing", "pdu", "load-split")
    pub category: String,
    /// Human-readable description of the finding
    pub message: String,
}

impl Advisory {
    /// Create a new advisory
    pub fn new(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Collection of advisories for one estimation call.
///
/// Each advisory is independently evaluated; an empty collection means every
/// derived quantity fell inside typical engineering ranges.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Advisories {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    items: Vec<Advisory>,
}

impl Advisories {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an advisory with category and message
    pub fn add(&mut self, category: &str, message: impl Into<String>) {
        self.items.push(Advisory::new(category, message));
    }

    /// Number of advisories raised
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no advisory was raised
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Plain-string view of the messages, for display layers that only
    /// render text
    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(|a| a.message.clone()).collect()
    }

    /// Iterate over the advisories
    pub fn iter(&self) -> impl Iterator<Item = &Advisory> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Advisories {
    type Item = &'a Advisory;
    type IntoIter = std::slice::Iter<'a, Advisory>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
