use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote service.
///
/// JSON backends disagree on whether ids are numbers or strings. The form
/// that was read is the form written back, so `"0123"` stays a string.
/// Ids compare by their textual form: `7` and `"7"` name the same contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactId {
    Number(u64),
    Text(String),
}

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        ContactId::Text(id.into())
    }

    /// Numeric value, for stores that allocate ids by counting.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            ContactId::Number(n) => Some(*n),
            ContactId::Text(s) => s.parse().ok(),
        }
    }

    fn text(&self) -> Cow<'_, str> {
        match self {
            ContactId::Number(n) => Cow::Owned(n.to_string()),
            ContactId::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl PartialEq for ContactId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ContactId::Number(a), ContactId::Number(b)) => a == b,
            _ => self.text() == other.text(),
        }
    }
}

impl Eq for ContactId {}

impl Hash for ContactId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text().hash(state);
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text())
    }
}

impl From<u64> for ContactId {
    fn from(id: u64) -> Self {
        ContactId::Number(id)
    }
}

/// A contact record as held by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub image: String,
}

impl Contact {
    pub fn fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            image: self.image.clone(),
        }
    }

    /// Case-insensitive substring match on name, email or phone. The image
    /// URL is never searched.
    pub fn matches(&self, needle_lowercase: &str) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .any(|value| value.to_lowercase().contains(needle_lowercase))
    }
}

/// Body of create and update requests; also the buffer behind the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub image: String,
}

impl ContactFields {
    #[allow(dead_code)]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            image: image.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Image => &self.image,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Image => &mut self.image,
        };
        *slot = value;
    }

    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            image: self.image,
        }
    }
}

/// One editable field of a contact, listed in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Image,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Image];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Image => "image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown field: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_decodes_from_number_and_string() {
        let numeric: Contact = serde_json::from_str(
            r#"{"id":7,"name":"Ann","email":"ann@x.com","phone":"111","image":"i"}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, ContactId::from(7));

        let textual: Contact = serde_json::from_str(
            r#"{"id":"a1f3","name":"Ann","email":"ann@x.com","phone":"111","image":"i"}"#,
        )
        .unwrap();
        assert_eq!(textual.id.to_string(), "a1f3");
    }

    #[test]
    fn numeric_id_is_written_back_as_number() {
        let contact = ContactFields::new("Ann", "ann@x.com", "111", "i").into_contact(ContactId::from(3));
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["id"], serde_json::json!(3));
    }

    #[test]
    fn digit_only_string_id_keeps_its_form() {
        let id = ContactId::new("0123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""0123""#);

        let back: ContactId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ContactId::new("0123"));
        assert_ne!(back, ContactId::from(123));
    }

    #[test]
    fn numeric_and_textual_ids_compare_by_text() {
        assert_eq!(ContactId::from(7), ContactId::new("7"));
        assert_eq!(ContactId::new("7").as_number(), Some(7));
        assert_eq!(ContactId::new("ab").as_number(), None);
    }

    #[test]
    fn matches_ignores_image() {
        let contact = ContactFields::new("Ann", "ann@x.com", "111", "http://pics/bob.png")
            .into_contact(ContactId::from(1));
        assert!(contact.matches("ann"));
        assert!(contact.matches("x.com"));
        assert!(contact.matches("11"));
        assert!(!contact.matches("bob"));
    }

    #[test]
    fn field_parses_case_insensitively() {
        assert_eq!("Email".parse::<Field>(), Ok(Field::Email));
        assert!("title".parse::<Field>().is_err());
    }
}
