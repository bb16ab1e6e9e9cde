//! Queries

use serde_json::{Map, Value};

use crate::store::Collection;

/// A stored document: a JSON object keyed by field name.
pub type Document = Map<String, Value>;

/// Ordering by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Equality-filter query over a single collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: Collection,
    pub filters: Vec<(String, Value)>,
    pub order: Option<Direction>,
    pub limit: Option<usize>,
}

impl Query {
    #[must_use]
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Only match documents whose top-level `field` equals `value`.
    #[must_use]
    pub fn filter(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push((field.to_string(), value.into()));
        self
    }

    #[must_use]
    pub fn order_by_created(mut self, direction: Direction) -> Self {
        self.order = Some(direction);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether `document` satisfies every filter.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        self.filters
            .iter()
            .all(|(field, value)| document.get(field) == Some(value))
    }

    /// Filters as a JSON object, suitable for containment checks.
    #[must_use]
    pub fn filter_object(&self) -> Value {
        Value::Object(self.filters.iter().cloned().collect())
    }
}
