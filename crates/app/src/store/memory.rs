//! In-memory document store.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use jiff::Timestamp;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{
    CREATED_AT_FIELD, Collection, Direction, Document, DocumentStore, ID_FIELD, Query, StoreError,
    UPDATED_AT_FIELD, WriteBatch, WriteOp, batch::timestamp_value,
};

type Key = (Collection, Uuid);

#[derive(Debug, Clone)]
struct Entry {
    sequence: u64,
    created_at: Timestamp,
    document: Document,
}

#[derive(Debug, Default)]
struct Documents {
    entries: HashMap<Key, Entry>,
    next_sequence: u64,
}

/// Process-local document store.
///
/// A commit holds the write lock from the first check to the last write, so
/// preconditions are evaluated and applied without interleaving.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    documents: Arc<RwLock<Documents>>,
}

impl MemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, collection: Collection, id: Uuid) -> Result<Option<Document>, StoreError> {
        let documents = self.documents.read().await;

        Ok(documents
            .entries
            .get(&(collection, id))
            .map(|entry| entry.document.clone()))
    }

    async fn query(&self, query: Query) -> Result<Vec<Document>, StoreError> {
        let documents = self.documents.read().await;

        let mut matched: Vec<&Entry> = documents
            .entries
            .iter()
            .filter(|((collection, _), entry)| {
                *collection == query.collection && query.matches(&entry.document)
            })
            .map(|(_, entry)| entry)
            .collect();

        match query.order {
            Some(Direction::Ascending) => {
                matched.sort_by_key(|entry| (entry.created_at, entry.sequence));
            }
            Some(Direction::Descending) => {
                matched.sort_by_key(|entry| (entry.created_at, entry.sequence));
                matched.reverse();
            }
            None => matched.sort_by_key(|entry| entry.sequence),
        }

        let limit = query.limit.unwrap_or(usize::MAX);

        Ok(matched
            .into_iter()
            .take(limit)
            .map(|entry| entry.document.clone())
            .collect())
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        let mut documents = self.documents.write().await;
        let now = Timestamp::now();

        let mut staged: HashMap<Key, Entry> = HashMap::new();
        let mut next_sequence = documents.next_sequence;

        for op in batch.into_ops() {
            match op {
                WriteOp::Create {
                    collection,
                    id,
                    mut data,
                } => {
                    let key = (collection, id);

                    if staged.contains_key(&key) || documents.entries.contains_key(&key) {
                        return Err(StoreError::AlreadyExists { collection, id });
                    }

                    data.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
                    data.insert(CREATED_AT_FIELD.to_string(), timestamp_value(now));
                    data.insert(UPDATED_AT_FIELD.to_string(), timestamp_value(now));

                    staged.insert(
                        key,
                        Entry {
                            sequence: next_sequence,
                            created_at: now,
                            document: data,
                        },
                    );

                    next_sequence += 1;
                }
                WriteOp::Update {
                    collection,
                    id,
                    patch,
                    precondition,
                } => {
                    let key = (collection, id);

                    let mut entry = match staged.remove(&key) {
                        Some(entry) => entry,
                        None => documents
                            .entries
                            .get(&key)
                            .cloned()
                            .ok_or(StoreError::NotFound { collection, id })?,
                    };

                    if let Some(precondition) = precondition
                        && !precondition.holds(&entry.document)
                    {
                        return Err(StoreError::PreconditionFailed { collection, id });
                    }

                    entry.document.extend(patch.resolve(now));
                    entry
                        .document
                        .insert(UPDATED_AT_FIELD.to_string(), timestamp_value(now));

                    staged.insert(key, entry);
                }
            }
        }

        documents.entries.extend(staged);
        documents.next_sequence = next_sequence;

        Ok(())
    }
}
