//! Document Store
//!
//! Hotels, bookings and guest links are persisted as JSON documents grouped
//! into collections. Reads are by id or by equality filter; every write goes
//! through an atomic [`WriteBatch`].

mod batch;
mod collection;
mod errors;
mod memory;
mod postgres;
mod query;

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

pub use batch::{FieldValue, Patch, Precondition, WriteBatch, WriteOp};
pub use collection::Collection;
pub use errors::StoreError;
pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use query::{Direction, Document, Query};

/// Field holding the document identifier.
pub const ID_FIELD: &str = "id";

/// Field stamped with the commit time when a document is created.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// Field stamped with the commit time on every write.
pub const UPDATED_AT_FIELD: &str = "updatedAt";

#[automock]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document by id.
    async fn get(&self, collection: Collection, id: Uuid) -> Result<Option<Document>, StoreError>;

    /// Run an equality-filter query.
    async fn query(&self, query: Query) -> Result<Vec<Document>, StoreError>;

    /// Apply every operation in the batch, or none of them.
    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError>;
}
