//! In-process stand-in for the remote contact service.
//!
//! [`MemoryGateway`] is an actor that owns the collection and assigns ids
//! the way the real service does. [`ChannelGateway`] is its client and
//! implements [`Gateway`], so the book cannot tell the two apart.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use super::{Gateway, GatewayError};
use crate::domain::{Contact, ContactFields, ContactId};

pub type Response<T> = oneshot::Sender<Result<T, GatewayError>>;

#[derive(Debug)]
pub enum GatewayRequest {
    List {
        respond_to: Response<Vec<Contact>>,
    },
    Create {
        fields: ContactFields,
        respond_to: Response<Option<ContactId>>,
    },
    Update {
        id: ContactId,
        fields: ContactFields,
        respond_to: Response<()>,
    },
    Delete {
        id: ContactId,
        respond_to: Response<()>,
    },
}

pub struct MemoryGateway {
    receiver: mpsc::Receiver<GatewayRequest>,
    contacts: Vec<Contact>,
    next_id: u64,
}

impl MemoryGateway {
    pub fn new(buffer_size: usize) -> (Self, ChannelGateway) {
        Self::with_contacts(buffer_size, Vec::new())
    }

    /// Start from an existing collection. Fresh ids continue after the
    /// highest numeric id present.
    pub fn with_contacts(buffer_size: usize, contacts: Vec<Contact>) -> (Self, ChannelGateway) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let next_id = contacts
            .iter()
            .filter_map(|c| c.id.as_number())
            .max()
            .map_or(1, |max| max + 1);
        let gateway = Self {
            receiver,
            contacts,
            next_id,
        };
        (gateway, ChannelGateway::new(sender))
    }

    #[instrument(name = "memory_gateway", skip(self))]
    pub async fn run(mut self) {
        info!("MemoryGateway starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                GatewayRequest::List { respond_to } => {
                    debug!(contact_count = self.contacts.len(), "Listing contacts");
                    let _ = respond_to.send(Ok(self.contacts.clone()));
                }
                GatewayRequest::Create { fields, respond_to } => {
                    let id = ContactId::from(self.next_id);
                    self.next_id += 1;
                    self.contacts.push(fields.into_contact(id.clone()));
                    info!(contact_id = %id, "Contact stored");
                    let _ = respond_to.send(Ok(Some(id)));
                }
                GatewayRequest::Update { id, fields, respond_to } => {
                    let result = match self.contacts.iter_mut().find(|c| c.id == id) {
                        Some(contact) => {
                            *contact = fields.into_contact(id);
                            Ok(())
                        }
                        None => {
                            warn!(contact_id = %id, "Update of unknown contact");
                            Err(GatewayError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                GatewayRequest::Delete { id, respond_to } => {
                    let before = self.contacts.len();
                    self.contacts.retain(|c| c.id != id);
                    let result = if self.contacts.len() < before {
                        Ok(())
                    } else {
                        warn!(contact_id = %id, "Delete of unknown contact");
                        Err(GatewayError::NotFound(id.to_string()))
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!("MemoryGateway stopped");
    }
}

/// [`Gateway`] over a request channel.
#[derive(Clone)]
pub struct ChannelGateway {
    sender: mpsc::Sender<GatewayRequest>,
}

impl ChannelGateway {
    pub fn new(sender: mpsc::Sender<GatewayRequest>) -> Self {
        Self { sender }
    }

    async fn call<T>(
        &self,
        request: impl FnOnce(Response<T>) -> GatewayRequest,
    ) -> Result<T, GatewayError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| GatewayError::Closed)?;
        response.await.map_err(|_| GatewayError::Closed)?
    }
}

#[async_trait]
impl Gateway for ChannelGateway {
    async fn list(&self) -> Result<Vec<Contact>, GatewayError> {
        self.call(|respond_to| GatewayRequest::List { respond_to }).await
    }

    async fn create(&self, fields: ContactFields) -> Result<Option<ContactId>, GatewayError> {
        self.call(|respond_to| GatewayRequest::Create { fields, respond_to })
            .await
    }

    async fn update(&self, id: ContactId, fields: ContactFields) -> Result<(), GatewayError> {
        self.call(|respond_to| GatewayRequest::Update { id, fields, respond_to })
            .await
    }

    async fn delete(&self, id: ContactId) -> Result<(), GatewayError> {
        self.call(|respond_to| GatewayRequest::Delete { id, respond_to })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> ContactFields {
        ContactFields::new(name, format!("{}@x.com", name.to_lowercase()), "111", "img")
    }

    #[tokio::test]
    async fn test_memory_gateway_assigns_ids_in_order() {
        let (gateway, client) = MemoryGateway::new(10);
        tokio::spawn(gateway.run());

        let first = client.create(fields("Ann")).await.unwrap();
        let second = client.create(fields("Bob")).await.unwrap();
        assert_eq!(first, Some(ContactId::from(1)));
        assert_eq!(second, Some(ContactId::from(2)));

        let listed = client.list().await.unwrap();
        let names: Vec<_> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[tokio::test]
    async fn test_memory_gateway_update_and_delete() {
        let (gateway, client) = MemoryGateway::new(10);
        tokio::spawn(gateway.run());

        let id = client.create(fields("Ann")).await.unwrap().unwrap();
        client.update(id.clone(), fields("Anna")).await.unwrap();
        assert_eq!(client.list().await.unwrap()[0].name, "Anna");

        client.delete(id.clone()).await.unwrap();
        assert!(client.list().await.unwrap().is_empty());

        assert_eq!(
            client.delete(id.clone()).await,
            Err(GatewayError::NotFound(id.to_string()))
        );
        assert!(client.update(id, fields("Ghost")).await.is_err());
    }

    #[tokio::test]
    async fn test_seeded_gateway_continues_numbering() {
        let seed = vec![fields("Ann").into_contact(ContactId::from(41))];
        let (gateway, client) = MemoryGateway::with_contacts(10, seed);
        tokio::spawn(gateway.run());

        let id = client.create(fields("Bob")).await.unwrap();
        assert_eq!(id, Some(ContactId::from(42)));
    }

    #[tokio::test]
    async fn test_closed_gateway_reports_closed() {
        let (gateway, client) = MemoryGateway::new(1);
        drop(gateway);
        assert_eq!(client.list().await, Err(GatewayError::Closed));
    }
}
