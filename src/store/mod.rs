//! Document store adapter.
//!
//! # Data Flow
//! ```text
//! handler
//!     → EmployeeStore (one logical operation per request)
//!     → mongo.rs  (MongoDB collection, production)
//!     → memory.rs (DashMap, tests and database-less runs)
//! ```
//!
//! # Design Decisions
//! - One trait object shared by all requests, built once at startup
//! - Each method is a single store-level request; no cross-document transactions
//! - `update` reports a missing document as `StoreError::NotFound`; `delete` never does

pub mod memory;
pub mod mongo;

use futures_util::future::BoxFuture;
use mongodb::bson::oid::ObjectId;
use thiserror::Error;

use crate::employee::model::{DeleteOutcome, Employee, EmployeeInput};

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Errors surfaced by a store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No document matched the identifier.
    #[error("no employee with id {0}")]
    NotFound(ObjectId),

    /// The database driver reported a failure.
    #[error("database error: {0}")]
    Backend(#[from] mongodb::error::Error),

    /// The initial connection did not complete in time.
    #[error("connecting to {uri} timed out after {secs} seconds")]
    ConnectTimeout { uri: String, secs: u64 },
}

/// Persistence operations over the employee collection.
pub trait EmployeeStore: Send + Sync + 'static {
    /// Every employee, in whatever order the store yields them.
    fn list(&self) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>>;

    /// Insert a new employee under a freshly generated identifier.
    fn insert(&self, input: EmployeeInput) -> BoxFuture<'_, Result<ObjectId, StoreError>>;

    /// Look up a single employee.
    fn find(&self, id: ObjectId) -> BoxFuture<'_, Result<Option<Employee>, StoreError>>;

    /// Replace `name`, `salary` and `age` of an existing employee.
    fn update(&self, id: ObjectId, input: EmployeeInput) -> BoxFuture<'_, Result<(), StoreError>>;

    /// Remove at most one employee.
    fn delete(&self, id: ObjectId) -> BoxFuture<'_, Result<DeleteOutcome, StoreError>>;

    /// Round-trip to the store to confirm it is reachable.
    fn ping(&self) -> BoxFuture<'_, Result<(), StoreError>>;

    /// Release connections. Called once during shutdown.
    fn close(&self) -> BoxFuture<'_, ()>;
}
