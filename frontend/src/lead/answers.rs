use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseLeadError {
    #[error("unknown intent `{0}`")]
    UnknownIntent(String),
    #[error("unknown timeline `{0}`")]
    UnknownTimeline(String),
}

/// Every input the lead form collects, in the order the steps ask for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Intent,
    Timeline,
    Budget,
    Location,
    Name,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Buyer,
    Seller,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Buyer => "buyer",
            Intent::Seller => "seller",
        }
    }
}

impl FromStr for Intent {
    type Err = ParseLeadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(Intent::Buyer),
            "seller" => Ok(Intent::Seller),
            other => Err(ParseLeadError::UnknownIntent(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Timeline {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "1-3months")]
    OneToThreeMonths,
    #[serde(rename = "3-6months")]
    ThreeToSixMonths,
    #[serde(rename = "browsing")]
    Browsing,
}

impl Timeline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::Immediate => "immediate",
            Timeline::OneToThreeMonths => "1-3months",
            Timeline::ThreeToSixMonths => "3-6months",
            Timeline::Browsing => "browsing",
        }
    }
}

impl FromStr for Timeline {
    type Err = ParseLeadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "immediate" => Ok(Timeline::Immediate),
            "1-3months" | "1-3 months" => Ok(Timeline::OneToThreeMonths),
            "3-6months" | "3-6 months" => Ok(Timeline::ThreeToSixMonths),
            "browsing" => Ok(Timeline::Browsing),
            other => Err(ParseLeadError::UnknownTimeline(other.to_string())),
        }
    }
}

/// The record a visitor builds up across the form steps. `None` and empty
/// strings both mean "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadAnswers {
    pub intent: Option<Intent>,
    pub timeline: Option<Timeline>,
    pub budget: String,
    pub location: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl LeadAnswers {
    /// Overwrite one field. Intent and timeline only accept their known
    /// values; anything else leaves them unset.
    pub fn set(&mut self, field: Field, value: &str) {
        match field {
            Field::Intent => self.intent = value.parse().ok(),
            Field::Timeline => self.timeline = value.parse().ok(),
            Field::Budget => self.budget = value.to_string(),
            Field::Location => self.location = value.to_string(),
            Field::Name => self.name = value.to_string(),
            Field::Email => self.email = value.to_string(),
            Field::Phone => self.phone = value.to_string(),
        }
    }

    /// Current value of a field as the inputs display it; unset is "".
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Intent => self.intent.as_ref().map_or("", Intent::as_str),
            Field::Timeline => self.timeline.as_ref().map_or("", Timeline::as_str),
            Field::Budget => &self.budget,
            Field::Location => &self.location,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn is_set(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_intent_leaves_field_unset() {
        let mut answers = LeadAnswers::default();
        answers.set(Field::Intent, "buyer");
        assert_eq!(answers.intent, Some(Intent::Buyer));

        answers.set(Field::Intent, "landlord");
        assert_eq!(answers.intent, None);
        assert!(!answers.is_set(Field::Intent));
    }

    #[test]
    fn timeline_accepts_spaced_spelling() {
        let mut answers = LeadAnswers::default();
        answers.set(Field::Timeline, "1-3 months");
        assert_eq!(answers.timeline, Some(Timeline::OneToThreeMonths));
        assert_eq!(answers.get(Field::Timeline), "1-3months");
    }

    #[test]
    fn set_only_touches_the_named_field() {
        let mut answers = LeadAnswers::default();
        answers.set(Field::Location, "Seattle");
        answers.set(Field::Name, "Jane Doe");

        assert_eq!(answers.get(Field::Location), "Seattle");
        assert_eq!(answers.get(Field::Name), "Jane Doe");
        for field in [Field::Intent, Field::Timeline, Field::Budget, Field::Email, Field::Phone] {
            assert!(!answers.is_set(field), "{field:?} should still be unset");
        }
    }

    #[test]
    fn serializes_with_wire_values() {
        let mut answers = LeadAnswers::default();
        answers.set(Field::Intent, "seller");
        answers.set(Field::Timeline, "3-6months");
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json["intent"], "seller");
        assert_eq!(json["timeline"], "3-6months");
        assert_eq!(json["budget"], "");
    }
}
