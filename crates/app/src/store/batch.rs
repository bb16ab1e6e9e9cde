//! Write batches

use jiff::Timestamp;
use serde::{Serialize, ser::Error as _};
use serde_json::Value;
use uuid::Uuid;

use crate::store::{Collection, Document, StoreError};

/// Value written into a single document field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Value(Value),

    /// Resolved by the store to the batch commit time.
    ServerTimestamp,
}

/// Top-level field updates merged into an existing document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Patch {
    fields: Vec<(String, FieldValue)>,
}

impl Patch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields
            .push((field.to_string(), FieldValue::Value(value.into())));
        self
    }

    /// Set `field` to `value` when present; leave it untouched otherwise.
    #[must_use]
    pub fn set_some(self, field: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.set(field, value),
            None => self,
        }
    }

    #[must_use]
    pub fn server_timestamp(mut self, field: &str) -> Self {
        self.fields
            .push((field.to_string(), FieldValue::ServerTimestamp));
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// Resolve server timestamps against the commit time.
    #[must_use]
    pub fn resolve(&self, now: Timestamp) -> Document {
        self.fields
            .iter()
            .map(|(field, value)| {
                let value = match value {
                    FieldValue::Value(value) => value.clone(),
                    FieldValue::ServerTimestamp => timestamp_value(now),
                };

                (field.clone(), value)
            })
            .collect()
    }
}

/// Condition evaluated against the stored document at commit time.
#[derive(Debug, Clone, PartialEq)]
pub enum Precondition {
    FieldEquals { field: String, value: Value },
}

impl Precondition {
    #[must_use]
    pub fn field_equals(field: &str, value: impl Into<Value>) -> Self {
        Self::FieldEquals {
            field: field.to_string(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn holds(&self, document: &Document) -> bool {
        match self {
            Self::FieldEquals { field, value } => document.get(field) == Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WriteOp {
    Create {
        collection: Collection,
        id: Uuid,
        data: Document,
    },
    Update {
        collection: Collection,
        id: Uuid,
        patch: Patch,
        precondition: Option<Precondition>,
    },
}

/// An ordered set of writes committed atomically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteBatch {
    ops: Vec<WriteOp>,
}

impl WriteBatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue creation of a new document.
    ///
    /// # Errors
    ///
    /// Returns an error when `value` does not serialize to a JSON object.
    pub fn create<T: Serialize>(
        &mut self,
        collection: Collection,
        id: impl Into<Uuid>,
        value: &T,
    ) -> Result<&mut Self, StoreError> {
        let Value::Object(data) = serde_json::to_value(value)? else {
            return Err(StoreError::Serialization(serde_json::Error::custom(
                "documents must serialize to JSON objects",
            )));
        };

        self.ops.push(WriteOp::Create {
            collection,
            id: id.into(),
            data,
        });

        Ok(self)
    }

    /// Queue an unconditional update.
    pub fn update(&mut self, collection: Collection, id: impl Into<Uuid>, patch: Patch) -> &mut Self {
        self.ops.push(WriteOp::Update {
            collection,
            id: id.into(),
            patch,
            precondition: None,
        });

        self
    }

    /// Queue an update that aborts the whole batch unless `precondition` holds.
    pub fn update_if(
        &mut self,
        collection: Collection,
        id: impl Into<Uuid>,
        patch: Patch,
        precondition: Precondition,
    ) -> &mut Self {
        self.ops.push(WriteOp::Update {
            collection,
            id: id.into(),
            patch,
            precondition: Some(precondition),
        });

        self
    }

    #[must_use]
    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    #[must_use]
    pub fn into_ops(self) -> Vec<WriteOp> {
        self.ops
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

pub(super) fn timestamp_value(timestamp: Timestamp) -> Value {
    Value::String(timestamp.to_string())
}
