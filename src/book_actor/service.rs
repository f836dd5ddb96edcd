use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use super::{BookError, SubmitOutcome};
use crate::book::ContactBook;
use crate::clients::BookClient;
use crate::domain::{Contact, ContactId, Field};
use crate::gateway::Gateway;
use crate::messages::{BookRequest, ServiceResponse};

/// Owns the view state and is the only writer of it.
///
/// Requests are handled one at a time, gateway round-trips included, so two
/// submissions never interleave: the second one sees the state the first
/// one left behind.
pub struct BookService {
    receiver: mpsc::Receiver<BookRequest>,
    book: ContactBook,
    gateway: Arc<dyn Gateway>,
}

impl BookService {
    pub fn new(
        buffer_size: usize,
        page_size: NonZeroUsize,
        gateway: Arc<dyn Gateway>,
    ) -> (Self, BookClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            book: ContactBook::new(page_size),
            gateway,
        };
        (service, BookClient::new(sender))
    }

    /// Loads the collection once, then serves requests until shut down or
    /// every client is dropped.
    #[instrument(name = "book_service", skip(self))]
    pub async fn run(mut self) {
        info!("BookService starting");
        self.refresh().await;

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                BookRequest::Refresh { respond_to } => {
                    let total = self.refresh().await;
                    let _ = respond_to.send(Ok(total));
                }
                BookRequest::SetField {
                    field,
                    value,
                    respond_to,
                } => self.handle_set_field(field, value, respond_to),
                BookRequest::BeginEdit { id, respond_to } => self.handle_begin_edit(id, respond_to),
                BookRequest::Submit { respond_to } => {
                    let outcome = self.submit().await;
                    let _ = respond_to.send(Ok(outcome));
                }
                BookRequest::Delete { id, respond_to } => {
                    self.delete(id).await;
                    let _ = respond_to.send(Ok(()));
                }
                BookRequest::SetSearchTerm { term, respond_to } => {
                    self.book.set_search_term(term);
                    let _ = respond_to.send(Ok(()));
                }
                BookRequest::SetPage { page, respond_to } => {
                    debug!(page, "Page selected");
                    self.book.set_page(page);
                    let _ = respond_to.send(Ok(()));
                }
                BookRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.book.snapshot()));
                }
                BookRequest::Shutdown => {
                    info!("BookService shutting down");
                    break;
                }
            }
        }

        info!("BookService stopped");
    }

    /// Replace the cached collection with the gateway's. On failure the
    /// previous collection stays. Returns the number of cached contacts.
    #[instrument(skip(self))]
    async fn refresh(&mut self) -> usize {
        match self.gateway.list().await {
            Ok(contacts) => {
                info!(contact_count = contacts.len(), "Contacts refreshed");
                self.book.replace_contacts(contacts);
            }
            Err(e) => error!(error = %e, "Error fetching contacts"),
        }
        self.book.store().len()
    }

    #[instrument(fields(field = %field), skip(self, value, respond_to))]
    fn handle_set_field(
        &mut self,
        field: Field,
        value: String,
        respond_to: ServiceResponse<(), BookError>,
    ) {
        self.book.set_field(field, value);
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(contact_id = %id), skip(self, respond_to))]
    fn handle_begin_edit(
        &mut self,
        id: ContactId,
        respond_to: ServiceResponse<Option<Contact>, BookError>,
    ) {
        let contact = self.book.begin_edit(&id);
        match &contact {
            Some(contact) => info!(contact_name = %contact.name, "Editing contact"),
            None => warn!("Contact to edit is no longer cached"),
        }
        let _ = respond_to.send(Ok(contact));
    }

    #[instrument(skip(self))]
    async fn submit(&mut self) -> SubmitOutcome {
        debug!(mode = ?self.book.form().mode(), "Processing submit request");
        let fields = match self.book.prepare_submit() {
            Ok(fields) => fields,
            Err(e) => {
                debug!(field = %e.field, "Validation failed");
                return SubmitOutcome::Invalid(e);
            }
        };

        let result = match self.book.form().editing_id().cloned() {
            Some(id) => self
                .gateway
                .update(id.clone(), fields)
                .await
                .map(|()| SubmitOutcome::Updated(id)),
            None => self.gateway.create(fields).await.map(SubmitOutcome::Created),
        };

        match result {
            Ok(outcome) => {
                info!(outcome = ?outcome, "Contact saved");
                self.book.submit_succeeded();
                self.refresh().await;
                outcome
            }
            Err(e) => {
                error!(error = %e, "Error adding/updating contact");
                SubmitOutcome::GatewayFailed
            }
        }
    }

    /// Nothing is removed locally; the refresh that follows always runs and
    /// shows whatever the gateway now holds.
    #[instrument(fields(contact_id = %id), skip(self))]
    async fn delete(&mut self, id: ContactId) {
        match self.gateway.delete(id).await {
            Ok(()) => info!("Contact deleted"),
            Err(e) => error!(error = %e, "Error deleting contact"),
        }
        self.refresh().await;
    }
}
