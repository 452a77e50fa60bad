//! `MongoDB` repository implementation for task storage.

use crate::task::{
    domain::{TagCount, TaskId, TaskRecord},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use mongodb::bson::{Bson, Document, doc};
use mongodb::error::{Error as DriverError, ErrorKind};
use mongodb::{Client, Collection};
use thiserror::Error;

/// `MongoDB`-backed task repository.
///
/// Holds a handle to one collection within one database, fixed for the life
/// of the repository. Every operation issues exactly one driver call and
/// surfaces the outcome unchanged; concurrency control and write ordering
/// are the store's responsibility.
#[derive(Debug, Clone)]
pub struct MongoTaskRepository {
    collection: Collection<Document>,
}

impl MongoTaskRepository {
    /// Creates a repository from an existing collection handle.
    #[must_use]
    pub const fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }

    /// Connects to the store and resolves the named collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Connection`] when the connection
    /// string cannot be parsed or the client cannot be constructed.
    pub async fn connect(
        uri: &str,
        database: &str,
        collection: &str,
    ) -> TaskRepositoryResult<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(TaskRepositoryError::connection)?;
        let handle = client.database(database).collection::<Document>(collection);
        Ok(Self::new(handle))
    }
}

#[async_trait]
impl TaskRepository for MongoTaskRepository {
    async fn insert(&self, record: &TaskRecord) -> TaskRepositoryResult<TaskId> {
        // A non-ObjectId `_id` is rejected before the write; erroring after
        // `insert_one` would leave the document persisted behind a failed
        // create.
        if let Some(supplied) = record.as_document().get("_id") {
            if !matches!(supplied, Bson::ObjectId(_)) {
                return Err(TaskRepositoryError::write(UnsupportedIdError(
                    supplied.clone(),
                )));
            }
        }

        let result = self
            .collection
            .insert_one(record.as_document())
            .await
            .map_err(classify)?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(TaskId::from_object_id(oid)),
            other => Err(TaskRepositoryError::write(UnexpectedIdError(other))),
        }
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<TaskRecord>> {
        let found = self
            .collection
            .find_one(doc! { "_id": id.into_inner() })
            .await
            .map_err(classify)?;
        Ok(found.map(TaskRecord::from_document))
    }

    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.into_inner() })
            .await
            .map_err(classify)?;
        Ok(result.deleted_count > 0)
    }

    async fn count_by_tag(&self) -> TaskRepositoryResult<Vec<TagCount>> {
        // Executed server-side: unwind the tags array, keep string values
        // only, group by tag value, reshape to {tag, count}. No sort stage.
        let pipeline = [
            doc! { "$unwind": "$tags" },
            doc! { "$match": { "tags": { "$type": "string" } } },
            doc! { "$group": { "_id": "$tags", "count": { "$sum": 1 } } },
            doc! { "$project": { "tag": "$_id", "count": 1, "_id": 0 } },
        ];

        let mut cursor = self
            .collection
            .aggregate(pipeline)
            .with_type::<TagCount>()
            .await
            .map_err(classify)?;

        let mut counts = Vec::new();
        while cursor.advance().await.map_err(classify)? {
            counts.push(cursor.deserialize_current().map_err(classify)?);
        }
        Ok(counts)
    }
}

/// The store acknowledged an insert with an identifier that is not an
/// object identifier.
#[derive(Debug, Error)]
#[error("store assigned a non-object identifier: {0}")]
struct UnexpectedIdError(Bson);

/// A caller-supplied `_id` is not an object identifier.
#[derive(Debug, Error)]
#[error("unsupported task identifier value: {0}")]
struct UnsupportedIdError(Bson);

fn is_connectivity(err: &DriverError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::ConnectionPoolCleared { .. }
    )
}

/// Splits driver errors into connectivity failures and store-side
/// rejections.
fn classify(err: DriverError) -> TaskRepositoryError {
    if is_connectivity(&err) {
        TaskRepositoryError::connection(err)
    } else {
        TaskRepositoryError::write(err)
    }
}
