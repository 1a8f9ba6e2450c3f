use std::sync::Arc;

use innkeep_store::Collection;
use innkeep_types::{Customer, CustomerId};
use tracing::{debug, warn};

use crate::error::CatalogResult;
use crate::records::RecordSet;

/// CRUD over the customer collection.
///
/// Deleting a customer does not touch reservations that reference it.
#[derive(Debug)]
pub struct CustomerStore {
    records: RecordSet<Customer>,
}

impl CustomerStore {
    pub fn new(backend: Arc<dyn Collection<Customer>>) -> Self {
        Self {
            records: RecordSet::new(backend),
        }
    }

    /// All customers; empty if the collection is missing or malformed.
    pub fn load_all(&self) -> Vec<Customer> {
        self.records.load_all()
    }

    /// Replace the whole collection. Returns `false` if the write failed.
    pub fn save_all(&self, customers: &[Customer]) -> bool {
        self.records.save_all(customers)
    }

    pub fn get(&self, id: CustomerId) -> Option<Customer> {
        self.records.find(id)
    }

    pub fn contains(&self, id: CustomerId) -> bool {
        self.records.contains(id)
    }

    /// Create and persist a customer. Fails with `DuplicateKey` if `id` is
    /// taken; the stored collection is then left untouched.
    pub fn create(
        &self,
        id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> CatalogResult<Customer> {
        let customer = Customer::new(id, name, email);
        match self.records.insert(customer) {
            Ok(created) => {
                debug!(customer = %id, name = %created.name, "customer created");
                Ok(created)
            }
            Err(e) => {
                warn!(customer = %id, error = %e, "customer not created");
                Err(e)
            }
        }
    }

    /// Delete a customer. Returns whether a record was found and removed.
    pub fn delete(&self, id: CustomerId) -> bool {
        self.records.remove(id)
    }

    /// Patch the supplied fields of an existing customer and persist.
    pub fn modify(
        &self,
        id: CustomerId,
        name: Option<String>,
        email: Option<String>,
    ) -> CatalogResult<Customer> {
        let updated = self.records.update(id, |c| c.patch(name, email))?;
        debug!(customer = %id, "customer modified");
        Ok(updated)
    }
}
