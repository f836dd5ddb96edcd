//! Access to the remote contact service.
//!
//! The service is the single source of truth: it assigns ids and answers
//! every list request with the full collection. [`HttpGateway`] talks to a
//! real REST endpoint; [`MemoryGateway`] plays the same role in-process.

pub mod error;
pub mod http;
pub mod memory;

use async_trait::async_trait;

use crate::domain::{Contact, ContactFields, ContactId};

pub use error::*;
pub use http::HttpGateway;
pub use memory::MemoryGateway;
#[cfg(test)]
pub use memory::{ChannelGateway, GatewayRequest, Response};

/// CRUD verbs offered by the remote contact service.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Fetch the full, ordered collection.
    async fn list(&self) -> Result<Vec<Contact>, GatewayError>;

    /// Create a contact. Returns the server-assigned id when the service
    /// echoes the stored record.
    async fn create(&self, fields: ContactFields) -> Result<Option<ContactId>, GatewayError>;

    /// Replace the fields of the contact with this id.
    async fn update(&self, id: ContactId, fields: ContactFields) -> Result<(), GatewayError>;

    async fn delete(&self, id: ContactId) -> Result<(), GatewayError>;
}
