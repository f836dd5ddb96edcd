use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::book::BookSnapshot;
use crate::book_actor::{BookError, SubmitOutcome};
use crate::domain::{Contact, ContactId, Field};
use crate::messages::BookRequest;

/// Handle to a running [`crate::book_actor::BookService`].
#[derive(Clone)]
pub struct BookClient {
    sender: mpsc::Sender<BookRequest>,
}

impl BookClient {
    pub fn new(sender: mpsc::Sender<BookRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), BookError> {
        debug!("Sending shutdown request");
        self.sender
            .send(BookRequest::Shutdown)
            .await
            .map_err(|_| BookError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(BookClient => fn refresh() -> usize as BookRequest::Refresh, Error = BookError);
client_method!(BookClient => fn set_field(field: Field, value: String) -> () as BookRequest::SetField, Error = BookError);
client_method!(BookClient => fn begin_edit(id: ContactId) -> Option<Contact> as BookRequest::BeginEdit, Error = BookError);
client_method!(BookClient => fn submit() -> SubmitOutcome as BookRequest::Submit, Error = BookError);
client_method!(BookClient => fn delete(id: ContactId) -> () as BookRequest::Delete, Error = BookError);
client_method!(BookClient => fn set_search_term(term: String) -> () as BookRequest::SetSearchTerm, Error = BookError);
client_method!(BookClient => fn set_page(page: usize) -> () as BookRequest::SetPage, Error = BookError);
client_method!(BookClient => fn snapshot() -> BookSnapshot as BookRequest::Snapshot, Error = BookError);
