/// Booking request draft
///
/// Holds the form fields while the guest edits them. The draft is
/// serialized as-is into the request payload, so the field names here
/// are the wire contract of the booking endpoint.

use serde::Serialize;

/// Which form field an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Name,
    Phone,
    Dates,
    Guests,
    Message,
}

/// The in-progress booking request
///
/// `name`, `phone` and `dates` are required; `guests` and `message` may
/// stay empty. Required fields are checked only at submission time, on
/// the raw value (no trimming), and the draft is cleared only after a
/// successful submission so failed attempts keep the guest's input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub dates: String,
    pub guests: String,
    pub message: String,
}

impl BookingDraft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a single field with the latest input value
    pub fn set(&mut self, field: BookingField, value: String) {
        match field {
            BookingField::Name => self.name = value,
            BookingField::Phone => self.phone = value,
            BookingField::Dates => self.dates = value,
            BookingField::Guests => self.guests = value,
            BookingField::Message => self.message = value,
        }
    }

    /// Whether every required field has been filled in
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.phone.is_empty() && !self.dates.is_empty()
    }

    /// Reset every field back to empty after a successful submission
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookingDraft {
        BookingDraft {
            name: "Иван".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
            dates: "01.06 - 07.06".to_string(),
            guests: "2".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_empty_draft_is_incomplete() {
        assert!(!BookingDraft::new().is_complete());
    }

    #[test]
    fn test_optional_fields_may_stay_empty() {
        let mut draft = filled();
        draft.guests = String::new();
        draft.message = String::new();
        assert!(draft.is_complete());
    }

    #[test]
    fn test_each_required_field_is_checked() {
        for field in [BookingField::Name, BookingField::Phone, BookingField::Dates] {
            let mut draft = filled();
            draft.set(field, String::new());
            assert!(!draft.is_complete(), "{:?} should be required", field);
        }
    }

    #[test]
    fn test_set_overwrites_one_field() {
        let mut draft = filled();
        draft.set(BookingField::Guests, "4".to_string());
        assert_eq!(draft.guests, "4");
        assert_eq!(draft.name, "Иван");
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut draft = filled();
        draft.clear();
        assert_eq!(draft, BookingDraft::default());
    }

    #[test]
    fn test_payload_field_names_match_endpoint_contract() {
        let json = serde_json::to_value(filled()).unwrap();
        for key in ["name", "phone", "dates", "guests", "message"] {
            assert!(json.get(key).is_some(), "payload must carry {}", key);
        }
    }
}
