//! MongoDB-backed employee store.
//!
//! # Responsibilities
//! - Connect and ping once at startup, bounded by the configured timeout
//! - Map each store operation onto a single collection command
//! - Shut the driver down cleanly on process exit

use futures_util::future::{BoxFuture, FutureExt};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::employee::model::{DeleteOutcome, Employee, EmployeeDocument, EmployeeInput};
use crate::store::{EmployeeStore, StoreError};

/// Employee collection handle plus the client that owns its connection pool.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    database: Database,
    collection: Collection<EmployeeDocument>,
}

impl MongoStore {
    /// Connect to the configured deployment and verify it answers a ping.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let timeout = Duration::from_secs(config.connect_timeout_secs);

        let connect = async {
            let mut options = ClientOptions::parse(config.uri.as_str()).await?;
            options.connect_timeout = Some(timeout);
            options.server_selection_timeout = Some(timeout);
            let client = Client::with_options(options)?;
            client.database(&config.name).run_command(doc! { "ping": 1 }).await?;
            Ok::<_, StoreError>(client)
        };

        let client = tokio::time::timeout(timeout, connect)
            .await
            .map_err(|_| StoreError::ConnectTimeout {
                uri: config.uri.clone(),
                secs: config.connect_timeout_secs,
            })??;

        let database = client.database(&config.name);
        let collection = database.collection::<EmployeeDocument>(&config.collection);

        tracing::info!(
            database = %config.name,
            collection = %config.collection,
            "Connected to MongoDB"
        );

        Ok(Self {
            client,
            database,
            collection,
        })
    }
}

impl EmployeeStore for MongoStore {
    fn list(&self) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>> {
        async move {
            let cursor = self.collection.find(doc! {}).await?;
            let docs: Vec<EmployeeDocument> = cursor.try_collect().await?;
            Ok(docs.into_iter().map(Employee::from).collect())
        }
        .boxed()
    }

    fn insert(&self, input: EmployeeInput) -> BoxFuture<'_, Result<ObjectId, StoreError>> {
        async move {
            let id = ObjectId::new();
            self.collection.insert_one(EmployeeDocument::new(id, input)).await?;
            Ok(id)
        }
        .boxed()
    }

    fn find(&self, id: ObjectId) -> BoxFuture<'_, Result<Option<Employee>, StoreError>> {
        async move {
            let found = self.collection.find_one(doc! { "_id": id }).await?;
            Ok(found.map(Employee::from))
        }
        .boxed()
    }

    fn update(&self, id: ObjectId, input: EmployeeInput) -> BoxFuture<'_, Result<(), StoreError>> {
        async move {
            let update = doc! {
                "$set": {
                    "name": input.name,
                    "salary": input.salary,
                    "age": input.age,
                }
            };
            self.collection
                .find_one_and_update(doc! { "_id": id }, update)
                .await?
                .map(|_| ())
                .ok_or(StoreError::NotFound(id))
        }
        .boxed()
    }

    fn delete(&self, id: ObjectId) -> BoxFuture<'_, Result<DeleteOutcome, StoreError>> {
        async move {
            let result = self.collection.delete_one(doc! { "_id": id }).await?;
            Ok(DeleteOutcome {
                deleted_count: result.deleted_count,
            })
        }
        .boxed()
    }

    fn ping(&self) -> BoxFuture<'_, Result<(), StoreError>> {
        async move {
            self.database.run_command(doc! { "ping": 1 }).await?;
            Ok(())
        }
        .boxed()
    }

    fn close(&self) -> BoxFuture<'_, ()> {
        let client = self.client.clone();
        async move {
            client.shutdown().await;
            tracing::info!("MongoDB client shut down");
        }
        .boxed()
    }
}
