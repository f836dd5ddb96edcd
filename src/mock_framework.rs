//! # Mock Framework
//!
//! Utilities for testing the book against a scripted gateway.
//!
//! Use [`create_mock_gateway`] to get a gateway and a receiver, then use
//! helpers like [`expect_list`] or [`expect_create`] to assert each request
//! and answer it with whatever the test needs: success, failure, or nothing.

use tokio::sync::mpsc;

use crate::domain::{Contact, ContactFields, ContactId};
use crate::gateway::{ChannelGateway, GatewayRequest, Response};

/// Creates a gateway whose requests arrive on the returned receiver instead
/// of at a service.
pub fn create_mock_gateway(buffer_size: usize) -> (ChannelGateway, mpsc::Receiver<GatewayRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ChannelGateway::new(sender), receiver)
}

/// Helper to verify that the next request is a List
pub async fn expect_list(receiver: &mut mpsc::Receiver<GatewayRequest>) -> Option<Response<Vec<Contact>>> {
    match receiver.recv().await {
        Some(GatewayRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next request is a Create
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<GatewayRequest>,
) -> Option<(ContactFields, Response<Option<ContactId>>)> {
    match receiver.recv().await {
        Some(GatewayRequest::Create { fields, respond_to }) => Some((fields, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is an Update
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<GatewayRequest>,
) -> Option<(ContactId, ContactFields, Response<()>)> {
    match receiver.recv().await {
        Some(GatewayRequest::Update { id, fields, respond_to }) => Some((id, fields, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a Delete
pub async fn expect_delete(receiver: &mut mpsc::Receiver<GatewayRequest>) -> Option<(ContactId, Response<()>)> {
    match receiver.recv().await {
        Some(GatewayRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Gateway;

    #[tokio::test]
    async fn test_mock_gateway() {
        let (gateway, mut receiver) = create_mock_gateway(10);

        let create_task = tokio::spawn(async move {
            let fields = ContactFields::new("Test", "test@example.com", "123", "img");
            gateway.create(fields).await
        });

        let (fields, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(fields.name, "Test");
        responder.send(Ok(Some(ContactId::from(1)))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(Some(ContactId::from(1))));
    }
}
