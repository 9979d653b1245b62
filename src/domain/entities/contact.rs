use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::photographer::PhotographerId;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}][\p{L} '\-]*$").expect("valid name regex")
});

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[validate(
        length(min = 2, max = 50, message = "First name must be 2 to 50 characters"),
        regex(path = *NAME_REGEX, message = "First name may only contain letters")
    )]
    pub first_name: String,

    #[validate(
        length(min = 2, max = 50, message = "Last name must be 2 to 50 characters"),
        regex(path = *NAME_REGEX, message = "Last name may only contain letters")
    )]
    pub last_name: String,

    #[validate(email(message = "Email address is not valid"))]
    pub email: String,

    #[validate(length(min = 10, max = 1000, message = "Message must be 10 to 1000 characters"))]
    pub message: String,
}

impl ContactForm {
    /// Trims every field before validation.
    pub fn normalized(self) -> Self {
        ContactForm {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
    pub photographer_id: PhotographerId,
    pub recipient: String,
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            first_name: "Ellie-Rose".into(),
            last_name: "D'Arcy".into(),
            email: "ellie@example.com".into(),
            message: "Bonjour, je voudrais réserver une séance.".into(),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn rejects_digits_in_names() {
        let mut form = form();
        form.first_name = "R2D2".into();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn rejects_short_message_and_bad_email() {
        let mut form = form();
        form.email = "not-an-email".into();
        form.message = "hi".into();
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("message"));
    }

    #[test]
    fn normalized_trims_and_lowercases_email() {
        let mut raw = form();
        raw.first_name = "  Mimi ".into();
        raw.email = " Mimi@Example.COM ".into();
        let form = raw.normalized();
        assert_eq!(form.first_name, "Mimi");
        assert_eq!(form.email, "mimi@example.com");
    }
}
