use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identity::{CustomerId, RecordKey};

/// A customer record.
///
/// Customers carry no back-reference to their reservations; deleting a
/// customer leaves any reservations that name it in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(customer_id: CustomerId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            customer_id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Overwrite only the supplied fields.
    pub fn patch(&mut self, name: Option<String>, email: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
    }
}

impl RecordKey for Customer {
    type Key = CustomerId;
    const ENTITY: &'static str = "customer";

    fn key(&self) -> CustomerId {
        self.customer_id
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer {} | Name: {} | Email: {}",
            self.customer_id.get(),
            self.name,
            self.email
        )
    }
}
