use serde::{Deserialize, Serialize};

use crate::domain::{Contact, ContactFields, ContactId, Field};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    /// Label of the submit control.
    pub fn label(self) -> &'static str {
        match self {
            FormMode::Create => "Add",
            FormMode::Edit => "Update",
        }
    }
}

/// The in-progress contact plus the id being edited, if any.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    fields: ContactFields,
    editing_id: Option<ContactId>,
}

impl FormState {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn editing_id(&self) -> Option<&ContactId> {
        self.editing_id.as_ref()
    }

    pub fn mode(&self) -> FormMode {
        match self.editing_id {
            Some(_) => FormMode::Edit,
            None => FormMode::Create,
        }
    }

    /// Touches exactly one field.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    /// Copy a stored contact into the form and switch to edit mode.
    pub fn load(&mut self, contact: &Contact) {
        self.fields = contact.fields();
        self.editing_id = Some(contact.id.clone());
    }

    pub fn finish_edit(&mut self) {
        self.editing_id = None;
    }

    pub fn clear_fields(&mut self) {
        self.fields = ContactFields::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_leaves_others_alone() {
        let mut form = FormState::default();
        form.set_field(Field::Name, "Ann".into());
        form.set_field(Field::Phone, "111".into());
        assert_eq!(form.fields(), &ContactFields::new("Ann", "", "111", ""));
        assert_eq!(form.mode(), FormMode::Create);
    }

    #[test]
    fn load_switches_to_edit_mode() {
        let contact = ContactFields::new("Bob", "bob@x.com", "222", "img").into_contact(ContactId::from(4));
        let mut form = FormState::default();
        form.load(&contact);
        assert_eq!(form.editing_id(), Some(&ContactId::from(4)));
        assert_eq!(form.mode().label(), "Update");
        assert_eq!(form.fields().email, "bob@x.com");

        form.finish_edit();
        form.clear_fields();
        assert_eq!(form, FormState::default());
    }
}
