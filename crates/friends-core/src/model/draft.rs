//! Unsaved friend records and their local validation.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Minimum description length accepted on submit.
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Soft length shown in the description counter. Not enforced.
pub const DESCRIPTION_HINT_MAX: usize = 500;

/// A friend that does not exist on the service yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendDraft {
    pub name: String,
    pub photo: String,
    pub description: String,
}

/// One editable field of a [`FriendDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DraftField {
    Name,
    Photo,
    Description,
}

impl DraftField {
    pub const ALL: [DraftField; 3] = [DraftField::Name, DraftField::Photo, DraftField::Description];

    pub fn as_str(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Photo => "photo",
            DraftField::Description => "description",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(DraftField::Name),
            "photo" => Ok(DraftField::Photo),
            "description" => Ok(DraftField::Description),
            other => Err(InvalidInputError::Field {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<DraftField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Removes the message for `field`, returning whether one existed.
    pub fn clear(&mut self, field: DraftField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl FriendDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Photo => &self.photo,
            DraftField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Name => self.name = value,
            DraftField::Photo => self.photo = value,
            DraftField::Description => self.description = value,
        }
    }

    /// Returns true if the photo is a syntactically valid absolute URL.
    pub fn has_valid_photo_url(&self) -> bool {
        is_valid_url(&self.photo)
    }

    /// Length of the description in UTF-16 code units, the unit browsers
    /// count form input in. Characters outside the BMP count twice.
    pub fn description_len(&self) -> usize {
        self.description.encode_utf16().count()
    }

    /// Check every field, returning the messages for those that fail.
    ///
    /// An empty result means the draft may be submitted.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.name.trim().is_empty() {
            errors.insert(DraftField::Name, "Name is required");
        }

        if self.photo.trim().is_empty() {
            errors.insert(DraftField::Photo, "Photo URL is required");
        } else if !self.has_valid_photo_url() {
            errors.insert(DraftField::Photo, "Please enter a valid URL");
        }

        // Length counts the untrimmed value; only emptiness is checked trimmed
        if self.description.trim().is_empty() {
            errors.insert(DraftField::Description, "Description is required");
        } else if self.description_len() < MIN_DESCRIPTION_LEN {
            errors.insert(
                DraftField::Description,
                format!(
                    "Description must be at least {} characters long",
                    MIN_DESCRIPTION_LEN
                ),
            );
        }

        errors
    }
}

fn is_valid_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, photo: &str, description: &str) -> FriendDraft {
        FriendDraft {
            name: name.to_string(),
            photo: photo.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn valid_draft_has_no_errors() {
        let errors = draft("Sam", "https://x.test/p.jpg", "A very good friend indeed").validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn every_field_can_fail_at_once() {
        let errors = draft("", "not-a-url", "short").validate();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(DraftField::Name), Some("Name is required"));
        assert_eq!(errors.get(DraftField::Photo), Some("Please enter a valid URL"));
        assert_eq!(
            errors.get(DraftField::Description),
            Some("Description must be at least 10 characters long")
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let errors = draft("   ", "  ", "\t\n").validate();
        assert_eq!(errors.get(DraftField::Name), Some("Name is required"));
        assert_eq!(errors.get(DraftField::Photo), Some("Photo URL is required"));
        assert_eq!(
            errors.get(DraftField::Description),
            Some("Description is required")
        );
    }

    #[test]
    fn description_length_boundary() {
        let ok = draft("Sam", "https://x.test/p.jpg", "0123456789").validate();
        assert!(ok.is_empty());

        let short = draft("Sam", "https://x.test/p.jpg", "012345678").validate();
        assert!(short.get(DraftField::Description).is_some());
    }

    #[test]
    fn astral_characters_count_twice() {
        let d = draft("Sam", "https://x.test/p.jpg", "😀😀😀😀😀");
        assert_eq!(d.description_len(), 10);
        assert!(d.validate().is_empty());

        let d = draft("Sam", "https://x.test/p.jpg", "ééééééééé");
        assert_eq!(d.description_len(), 9);
        assert!(d.validate().get(DraftField::Description).is_some());
    }

    #[test]
    fn any_absolute_url_is_accepted() {
        assert!(draft("", "mailto:sam@x.test", "").has_valid_photo_url());
        assert!(!draft("", "/relative/p.jpg", "").has_valid_photo_url());
    }

    #[test]
    fn clearing_a_field_error() {
        let mut errors = draft("", "https://x.test/p.jpg", "A very good friend").validate();
        assert!(errors.clear(DraftField::Name));
        assert!(!errors.clear(DraftField::Name));
        assert!(errors.is_empty());
    }

    #[test]
    fn field_names_round_trip_through_parsing() {
        for field in DraftField::ALL {
            assert_eq!(field.as_str().parse::<DraftField>().unwrap(), field);
        }
        assert!("age".parse::<DraftField>().is_err());
    }

    #[test]
    fn set_and_get_fields() {
        let mut d = FriendDraft::default();
        d.set(DraftField::Photo, "https://x.test/p.jpg");
        assert_eq!(d.get(DraftField::Photo), "https://x.test/p.jpg");
        assert_eq!(d.get(DraftField::Name), "");
    }
}
