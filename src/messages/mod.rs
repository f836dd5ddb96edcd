use tokio::sync::oneshot;

use crate::book::BookSnapshot;
use crate::book_actor::{BookError, SubmitOutcome};
use crate::domain::{Contact, ContactId, Field};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// One variant per operation on the contact book. Each carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum BookRequest {
    Refresh {
        respond_to: ServiceResponse<usize, BookError>,
    },
    SetField {
        field: Field,
        value: String,
        respond_to: ServiceResponse<(), BookError>,
    },
    BeginEdit {
        id: ContactId,
        respond_to: ServiceResponse<Option<Contact>, BookError>,
    },
    Submit {
        respond_to: ServiceResponse<SubmitOutcome, BookError>,
    },
    Delete {
        id: ContactId,
        respond_to: ServiceResponse<(), BookError>,
    },
    SetSearchTerm {
        term: String,
        respond_to: ServiceResponse<(), BookError>,
    },
    SetPage {
        page: usize,
        respond_to: ServiceResponse<(), BookError>,
    },
    Snapshot {
        respond_to: ServiceResponse<BookSnapshot, BookError>,
    },
    Shutdown,
}
