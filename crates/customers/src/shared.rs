//! Lock-guarded customer collection for callers that share it across threads.
//!
//! [`CustomerQueryEngine`] itself has no synchronisation. `SharedCustomers`
//! owns the collection behind an `RwLock` and hands out an engine for the
//! duration of a closure: many readers, or a single writer.

use std::sync::{Arc, RwLock};

use storefront_core::{DomainError, DomainResult};

use crate::customer::Customer;
use crate::engine::{CustomerQueryEngine, SpendPolicy};

#[derive(Debug, Clone, Default)]
pub struct SharedCustomers {
    inner: Arc<RwLock<Vec<Customer>>>,
    spend_policy: SpendPolicy,
}

impl SharedCustomers {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(customers)),
            spend_policy: SpendPolicy::default(),
        }
    }

    pub fn with_spend_policy(mut self, spend_policy: SpendPolicy) -> Self {
        self.spend_policy = spend_policy;
        self
    }

    /// Run a read-only query under the read lock.
    pub fn read<R>(&self, query: impl FnOnce(&CustomerQueryEngine<&[Customer]>) -> R) -> DomainResult<R> {
        let guard = self.inner.read().map_err(|_| DomainError::LockPoisoned)?;
        let engine = CustomerQueryEngine::new(guard.as_slice()).with_spend_policy(self.spend_policy);
        Ok(query(&engine))
    }

    /// Run a query that may mutate purchase lists under the write lock.
    pub fn write<R>(
        &self,
        update: impl FnOnce(&mut CustomerQueryEngine<&mut Vec<Customer>>) -> R,
    ) -> DomainResult<R> {
        let mut guard = self.inner.write().map_err(|_| DomainError::LockPoisoned)?;
        let mut engine = CustomerQueryEngine::new(&mut *guard).with_spend_policy(self.spend_policy);
        Ok(update(&mut engine))
    }

    /// Copy of the current collection.
    pub fn snapshot(&self) -> DomainResult<Vec<Customer>> {
        let guard = self.inner.read().map_err(|_| DomainError::LockPoisoned)?;
        Ok(guard.clone())
    }
}
