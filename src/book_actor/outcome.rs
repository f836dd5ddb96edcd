use serde::{Deserialize, Serialize};

use crate::book::ValidationError;
use crate::domain::ContactId;

/// What a submit attempt ended in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Stopped at the first invalid field; nothing was sent.
    Invalid(ValidationError),
    /// Created; carries the id when the service echoed one.
    Created(Option<ContactId>),
    Updated(ContactId),
    /// The gateway call failed. The form is kept as it was and the
    /// collection was not refreshed.
    GatewayFailed,
}
