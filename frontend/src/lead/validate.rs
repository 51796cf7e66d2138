use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::answers::{Field, LeadAnswers};
use super::session::Step;

const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// A rejected answer. The display text is what the form shows under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please select your intent")]
    MissingIntent,
    #[error("Please select your timeline")]
    MissingTimeline,
    #[error("Please select your budget range")]
    MissingBudget,
    #[error("Please enter your preferred location")]
    MissingLocation,
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Separators and other characters are ignored; only ASCII digits count.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

/// Check only the fields owned by `step`. Earlier steps are never rechecked.
pub fn validate_step(step: Step, answers: &LeadAnswers) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let mut require = |field: Field, ok: bool, error: FieldError| {
        if !ok {
            errors.insert(field, error);
        }
    };

    match step {
        Step::Intent => {
            require(Field::Intent, answers.intent.is_some(), FieldError::MissingIntent);
        }
        Step::Timeline => {
            require(Field::Timeline, answers.timeline.is_some(), FieldError::MissingTimeline);
        }
        Step::BudgetLocation => {
            require(Field::Budget, answers.is_set(Field::Budget), FieldError::MissingBudget);
            require(Field::Location, answers.is_set(Field::Location), FieldError::MissingLocation);
        }
        Step::Contact => {
            require(Field::Name, answers.is_set(Field::Name), FieldError::MissingName);
            require(Field::Email, is_valid_email(&answers.email), FieldError::InvalidEmail);
            require(Field::Phone, is_valid_phone(&answers.phone), FieldError::InvalidPhone);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_at_and_dot() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("jane.doe@example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn phone_counts_digits_only() {
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+1 555 123 4567"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("phone: 555-1234"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn phone_ignores_non_ascii_digits() {
        assert!(!is_valid_phone("١٢٣٤٥"));
        assert!(!is_valid_phone("１２３４"));
        assert!(!is_valid_phone("٠١٢٣٤٥٦٧٨٩"));
        assert!(is_valid_phone("５５５ 555-123-4567"));
    }

    #[test]
    fn messages_match_form_copy() {
        assert_eq!(FieldError::MissingIntent.to_string(), "Please select your intent");
        assert_eq!(FieldError::MissingTimeline.to_string(), "Please select your timeline");
        assert_eq!(FieldError::MissingBudget.to_string(), "Please select your budget range");
        assert_eq!(
            FieldError::MissingLocation.to_string(),
            "Please enter your preferred location"
        );
        assert_eq!(FieldError::MissingName.to_string(), "Please enter your name");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email");
        assert_eq!(FieldError::InvalidPhone.to_string(), "Please enter a valid phone number");
    }

    #[test]
    fn budget_and_location_are_reported_together() {
        let errors = validate_step(Step::BudgetLocation, &LeadAnswers::default());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(&Field::Budget), Some(&FieldError::MissingBudget));
        assert_eq!(errors.get(&Field::Location), Some(&FieldError::MissingLocation));
    }

    #[test]
    fn location_is_any_non_empty_text() {
        let mut answers = LeadAnswers::default();
        answers.set(Field::Budget, "Under $300K");
        answers.set(Field::Location, "x");
        assert!(validate_step(Step::BudgetLocation, &answers).is_empty());
    }

    #[test]
    fn contact_step_ignores_earlier_fields() {
        let mut answers = LeadAnswers::default();
        answers.set(Field::Name, "Jane Doe");
        answers.set(Field::Email, "jane@example.com");
        answers.set(Field::Phone, "555-123-4567");
        assert!(validate_step(Step::Contact, &answers).is_empty());
    }

    #[test]
    fn contact_step_reports_every_bad_field() {
        let mut answers = LeadAnswers::default();
        answers.set(Field::Email, "jane@example");
        answers.set(Field::Phone, "12345");
        let errors = validate_step(Step::Contact, &answers);
        assert_eq!(
            errors.into_iter().collect::<Vec<_>>(),
            vec![
                (Field::Name, FieldError::MissingName),
                (Field::Email, FieldError::InvalidEmail),
                (Field::Phone, FieldError::InvalidPhone),
            ]
        );
    }
}
