//! `PostgreSQL` document store.

use async_trait::async_trait;
use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use serde_json::Value;
use sqlx::{PgPool, Postgres, Transaction, query, query_scalar, types::Json};
use tracing::debug;
use uuid::Uuid;

use crate::store::{
    CREATED_AT_FIELD, Collection, Direction, Document, DocumentStore, ID_FIELD, Patch,
    Precondition, Query, StoreError, UPDATED_AT_FIELD, WriteBatch, WriteOp,
    batch::timestamp_value,
};

const GET_DOCUMENT_SQL: &str = include_str!("sql/get_document.sql");
const DOCUMENT_EXISTS_SQL: &str = include_str!("sql/document_exists.sql");
const QUERY_DOCUMENTS_SQL: &str = include_str!("sql/query_documents.sql");
const QUERY_DOCUMENTS_ASC_SQL: &str = include_str!("sql/query_documents_asc.sql");
const QUERY_DOCUMENTS_DESC_SQL: &str = include_str!("sql/query_documents_desc.sql");
const CREATE_DOCUMENT_SQL: &str = include_str!("sql/create_document.sql");
const UPDATE_DOCUMENT_SQL: &str = include_str!("sql/update_document.sql");
const UPDATE_DOCUMENT_IF_SQL: &str = include_str!("sql/update_document_if.sql");

/// Document store backed by a single `documents` table.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn create(
        tx: &mut Transaction<'_, Postgres>,
        collection: Collection,
        id: Uuid,
        mut data: Document,
        now: Timestamp,
    ) -> Result<(), StoreError> {
        data.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
        data.insert(CREATED_AT_FIELD.to_string(), timestamp_value(now));
        data.insert(UPDATED_AT_FIELD.to_string(), timestamp_value(now));

        let rows_affected = query(CREATE_DOCUMENT_SQL)
            .bind(collection.as_str())
            .bind(id)
            .bind(Value::Object(data))
            .bind(SqlxTimestamp::from(now))
            .execute(&mut **tx)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(StoreError::AlreadyExists { collection, id });
        }

        Ok(())
    }

    async fn update(
        tx: &mut Transaction<'_, Postgres>,
        collection: Collection,
        id: Uuid,
        patch: &Patch,
        precondition: Option<Precondition>,
        now: Timestamp,
    ) -> Result<(), StoreError> {
        let mut fields = patch.resolve(now);
        fields.insert(UPDATED_AT_FIELD.to_string(), timestamp_value(now));

        let rows_affected = match &precondition {
            None => {
                query(UPDATE_DOCUMENT_SQL)
                    .bind(collection.as_str())
                    .bind(id)
                    .bind(Value::Object(fields))
                    .bind(SqlxTimestamp::from(now))
                    .execute(&mut **tx)
                    .await?
            }
            Some(Precondition::FieldEquals { field, value }) => {
                query(UPDATE_DOCUMENT_IF_SQL)
                    .bind(collection.as_str())
                    .bind(id)
                    .bind(Value::Object(fields))
                    .bind(SqlxTimestamp::from(now))
                    .bind(field.as_str())
                    .bind(value.clone())
                    .execute(&mut **tx)
                    .await?
            }
        }
        .rows_affected();

        if rows_affected > 0 {
            return Ok(());
        }

        let exists: bool = query_scalar(DOCUMENT_EXISTS_SQL)
            .bind(collection.as_str())
            .bind(id)
            .fetch_one(&mut **tx)
            .await?;

        if exists && precondition.is_some() {
            Err(StoreError::PreconditionFailed { collection, id })
        } else {
            Err(StoreError::NotFound { collection, id })
        }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn get(&self, collection: Collection, id: Uuid) -> Result<Option<Document>, StoreError> {
        let document: Option<Json<Document>> = query_scalar(GET_DOCUMENT_SQL)
            .bind(collection.as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(document.map(|Json(document)| document))
    }

    async fn query(&self, query: Query) -> Result<Vec<Document>, StoreError> {
        let sql = match query.order {
            None => QUERY_DOCUMENTS_SQL,
            Some(Direction::Ascending) => QUERY_DOCUMENTS_ASC_SQL,
            Some(Direction::Descending) => QUERY_DOCUMENTS_DESC_SQL,
        };

        let limit = query
            .limit
            .map(|limit| i64::try_from(limit).unwrap_or(i64::MAX));

        let documents: Vec<Json<Document>> = query_scalar(sql)
            .bind(query.collection.as_str())
            .bind(query.filter_object())
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(documents.into_iter().map(|Json(document)| document).collect())
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        let now = Timestamp::now();
        let ops = batch.into_ops();

        debug!(operations = ops.len(), "committing write batch");

        for op in ops {
            match op {
                WriteOp::Create {
                    collection,
                    id,
                    data,
                } => Self::create(&mut tx, collection, id, data, now).await?,
                WriteOp::Update {
                    collection,
                    id,
                    patch,
                    precondition,
                } => Self::update(&mut tx, collection, id, &patch, precondition, now).await?,
            }
        }

        tx.commit().await?;

        Ok(())
    }
}
