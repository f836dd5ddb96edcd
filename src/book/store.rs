use crate::domain::{Contact, ContactId};

/// Full snapshot of the remote collection, replaced wholesale on refresh.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    contacts: Vec<Contact>,
}

impl RecordStore {
    pub fn replace(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    pub fn find(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    pub fn as_slice(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }
}
