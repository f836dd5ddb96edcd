//! View state of the contact book: the cached collection, the form and the
//! query. Synchronous; all I/O happens in [`crate::book_actor`].

pub mod form;
pub mod query;
pub mod store;
pub mod validation;

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::domain::{Contact, ContactFields, ContactId, Field};

pub use form::*;
pub use query::*;
pub use store::*;
pub use validation::*;

#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    store: RecordStore,
    form: FormState,
    errors: ValidationErrors,
    query: QueryState,
}

/// Everything needed to draw the book once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub form: FormState,
    pub mode: FormMode,
    pub errors: ValidationErrors,
    pub query: QueryState,
    pub visible: Vec<Contact>,
    pub page_count: usize,
    pub total: usize,
}

impl ContactBook {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            query: QueryState::new(page_size),
            ..Self::default()
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[cfg(test)]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn replace_contacts(&mut self, contacts: Vec<Contact>) {
        self.store.replace(contacts);
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set_field(field, value);
    }

    /// Load the stored contact into the form. `None` when the id is no
    /// longer cached; the form is left untouched in that case.
    pub fn begin_edit(&mut self, id: &ContactId) -> Option<Contact> {
        let contact = self.store.find(id)?.clone();
        self.form.load(&contact);
        Some(contact)
    }

    /// Validate the form for submission. A failure is recorded as the only
    /// visible error; success clears the error map and hands back the body
    /// to send.
    pub fn prepare_submit(&mut self) -> Result<ContactFields, ValidationError> {
        match validate(self.form.fields()) {
            Ok(()) => {
                self.errors.clear();
                Ok(self.form.fields().clone())
            }
            Err(e) => {
                self.errors.report(&e);
                Err(e)
            }
        }
    }

    /// The gateway accepted the submission.
    pub fn submit_succeeded(&mut self) {
        self.form.finish_edit();
        self.form.clear_fields();
    }

    pub fn set_search_term(&mut self, term: String) {
        self.query.set_search_term(term);
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.set_page(page);
    }

    pub fn visible(&self) -> Vec<&Contact> {
        self.query.visible(self.store.as_slice())
    }

    pub fn page_count(&self) -> usize {
        self.query.page_count(self.store.len())
    }

    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            form: self.form.clone(),
            mode: self.form.mode(),
            errors: self.errors.clone(),
            query: self.query.clone(),
            visible: self.visible().into_iter().cloned().collect(),
            page_count: self.page_count(),
            total: self.store.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with(contacts: Vec<Contact>) -> ContactBook {
        let mut book = ContactBook::default();
        book.replace_contacts(contacts);
        book
    }

    fn ann() -> Contact {
        ContactFields::new("Ann", "ann@x.com", "111", "img").into_contact(ContactId::from(1))
    }

    #[test]
    fn begin_edit_unknown_id_is_a_no_op() {
        let mut book = book_with(vec![ann()]);
        book.set_field(Field::Name, "draft".into());
        assert_eq!(book.begin_edit(&ContactId::from(99)), None);
        assert_eq!(book.form().fields().name, "draft");
        assert_eq!(book.form().mode(), FormMode::Create);
    }

    #[test]
    fn failed_submit_leaves_form_and_reports_one_error() {
        let mut book = ContactBook::default();
        book.set_field(Field::Name, "Al".into());
        let err = book.prepare_submit().unwrap_err();
        assert_eq!(err.field, Field::Name);
        assert_eq!(book.errors().len(), 1);
        assert_eq!(book.form().fields().name, "Al");

        book.set_field(Field::Name, "Alice".into());
        book.prepare_submit().unwrap_err();
        assert_eq!(book.errors().get(Field::Name), None);
        assert!(book.errors().get(Field::Email).is_some());
    }

    #[test]
    fn successful_validation_clears_errors() {
        let mut book = ContactBook::default();
        book.prepare_submit().unwrap_err();
        for (field, value) in [
            (Field::Name, "Ann"),
            (Field::Email, "ann@x.com"),
            (Field::Phone, "111"),
            (Field::Image, "img"),
        ] {
            book.set_field(field, value.into());
        }
        let body = book.prepare_submit().unwrap();
        assert_eq!(body, ann().fields());
        assert!(book.errors().is_empty());
    }

    #[test]
    fn snapshot_reflects_edit_mode() {
        let mut book = book_with(vec![ann()]);
        book.begin_edit(&ContactId::from(1)).unwrap();
        let snapshot = book.snapshot();
        assert_eq!(snapshot.mode, FormMode::Edit);
        assert_eq!(snapshot.total, 1);
        assert_eq!(snapshot.page_count, 1);
        assert_eq!(snapshot.visible, vec![ann()]);

        book.submit_succeeded();
        assert_eq!(book.form(), &FormState::default());
    }
}
