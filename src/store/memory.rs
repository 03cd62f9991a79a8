//! In-process employee store.

use dashmap::DashMap;
use futures_util::future::{self, BoxFuture, FutureExt};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use crate::employee::model::{DeleteOutcome, Employee, EmployeeDocument, EmployeeInput};
use crate::store::{EmployeeStore, StoreError};

/// A concurrent map standing in for the employee collection.
///
/// Cloning shares the underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<DashMap<ObjectId, EmployeeDocument>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored employees.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl EmployeeStore for MemoryStore {
    fn list(&self) -> BoxFuture<'_, Result<Vec<Employee>, StoreError>> {
        let employees: Vec<Employee> = self
            .inner
            .iter()
            .map(|entry| Employee::from(entry.value().clone()))
            .collect();
        future::ready(Ok(employees)).boxed()
    }

    fn insert(&self, input: EmployeeInput) -> BoxFuture<'_, Result<ObjectId, StoreError>> {
        let id = ObjectId::new();
        self.inner.insert(id, EmployeeDocument::new(id, input));
        future::ready(Ok(id)).boxed()
    }

    fn find(&self, id: ObjectId) -> BoxFuture<'_, Result<Option<Employee>, StoreError>> {
        let found = self.inner.get(&id).map(|doc| Employee::from(doc.value().clone()));
        future::ready(Ok(found)).boxed()
    }

    fn update(&self, id: ObjectId, input: EmployeeInput) -> BoxFuture<'_, Result<(), StoreError>> {
        let result = match self.inner.get_mut(&id) {
            Some(mut doc) => {
                doc.name = input.name;
                doc.salary = input.salary;
                doc.age = input.age;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        };
        future::ready(result).boxed()
    }

    fn delete(&self, id: ObjectId) -> BoxFuture<'_, Result<DeleteOutcome, StoreError>> {
        let deleted_count = u64::from(self.inner.remove(&id).is_some());
        future::ready(Ok(DeleteOutcome { deleted_count })).boxed()
    }

    fn ping(&self) -> BoxFuture<'_, Result<(), StoreError>> {
        future::ready(Ok(())).boxed()
    }

    fn close(&self) -> BoxFuture<'_, ()> {
        future::ready(()).boxed()
    }
}
