use log::debug;

use super::answers::{Field, LeadAnswers};
use super::validate::{validate_step, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Intent,
    Timeline,
    BudgetLocation,
    Contact,
}

impl Step {
    pub const COUNT: usize = 4;

    pub fn index(&self) -> usize {
        match self {
            Step::Intent => 0,
            Step::Timeline => 1,
            Step::BudgetLocation => 2,
            Step::Contact => 3,
        }
    }

    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Intent => Some(Step::Timeline),
            Step::Timeline => Some(Step::BudgetLocation),
            Step::BudgetLocation => Some(Step::Contact),
            Step::Contact => None,
        }
    }

    pub fn prev(&self) -> Option<Step> {
        match self {
            Step::Intent => None,
            Step::Timeline => Some(Step::Intent),
            Step::BudgetLocation => Some(Step::Timeline),
            Step::Contact => Some(Step::BudgetLocation),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

/// What a call to [`FormSession::request_advance`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(Step),
    Submitted,
    Rejected,
}

/// Per-visit state of the lead form. Lives in a `use_state` and is replaced
/// wholesale on every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSession {
    step: Step,
    answers: LeadAnswers,
    errors: FieldErrors,
    submitted: bool,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            step: Step::Intent,
            answers: LeadAnswers::default(),
            errors: FieldErrors::new(),
            submitted: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn current_step(&self) -> usize {
        self.step.index()
    }

    pub fn answers(&self) -> &LeadAnswers {
        &self.answers
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whole-number percentage shown next to the progress bar.
    pub fn percent_complete(&self) -> u32 {
        (((self.current_step() + 1) as f64 / Step::COUNT as f64) * 100.0).round() as u32
    }

    pub fn update_field(&mut self, field: Field, value: &str) {
        if self.submitted {
            return;
        }
        self.answers.set(field, value);
        self.errors.remove(&field);
    }

    pub fn request_advance(&mut self) -> Advance {
        if self.submitted {
            return Advance::Submitted;
        }

        self.errors = validate_step(self.step, &self.answers);
        if !self.errors.is_empty() {
            debug!(
                "Step {} rejected: {:?}",
                self.current_step(),
                self.errors.keys().collect::<Vec<_>>()
            );
            return Advance::Rejected;
        }

        match self.step.next() {
            Some(next) => {
                debug!("Advancing lead form to step {}", next.index());
                self.step = next;
                Advance::Moved(next)
            }
            None => {
                self.submitted = true;
                Advance::Submitted
            }
        }
    }

    pub fn request_back(&mut self) {
        if self.submitted {
            return;
        }
        if let Some(prev) = self.step.prev() {
            debug!("Lead form back to step {}", prev.index());
            self.step = prev;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::validate::FieldError;

    fn session_at(step: Step) -> FormSession {
        let mut session = FormSession::new();
        session.update_field(Field::Intent, "buyer");
        session.update_field(Field::Timeline, "immediate");
        session.update_field(Field::Budget, "$300K - $500K");
        session.update_field(Field::Location, "Seattle");
        while session.step() != step {
            assert!(matches!(session.request_advance(), Advance::Moved(_)));
        }
        session
    }

    #[test]
    fn starts_empty_at_first_step() {
        let session = FormSession::new();
        assert_eq!(session.current_step(), 0);
        assert_eq!(session.answers(), &LeadAnswers::default());
        assert!(session.errors().is_empty());
        assert!(!session.is_submitted());
        assert_eq!(session.percent_complete(), 25);
    }

    #[test]
    fn empty_required_field_blocks_every_step() {
        for step in [Step::Intent, Step::Timeline, Step::BudgetLocation, Step::Contact] {
            let mut session = FormSession::new();
            session.step = step;
            assert_eq!(session.request_advance(), Advance::Rejected);
            assert!(!session.errors().is_empty());
            assert_eq!(session.step(), step);
            assert!(!session.is_submitted());
        }
    }

    #[test]
    fn rejected_advance_is_idempotent() {
        let mut session = session_at(Step::Contact);
        session.update_field(Field::Email, "a@b");
        session.request_advance();
        let first = session.errors().clone();
        session.request_advance();
        assert_eq!(session.errors(), &first);
        assert_eq!(session.step(), Step::Contact);
    }

    #[test]
    fn valid_step_moves_forward_by_one() {
        let mut session = FormSession::new();
        session.update_field(Field::Intent, "seller");
        assert_eq!(session.request_advance(), Advance::Moved(Step::Timeline));
        assert_eq!(session.current_step(), 1);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn back_is_a_no_op_at_first_step() {
        let mut session = FormSession::new();
        session.update_field(Field::Intent, "buyer");
        let before = session.clone();
        session.request_back();
        assert_eq!(session, before);
    }

    #[test]
    fn back_keeps_answers() {
        let mut session = session_at(Step::Contact);
        let answers = session.answers().clone();
        session.request_back();
        assert_eq!(session.step(), Step::BudgetLocation);
        session.request_back();
        assert_eq!(session.step(), Step::Timeline);
        assert_eq!(session.answers(), &answers);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut session = session_at(Step::Contact);
        session.request_advance();
        assert_eq!(session.errors().len(), 3);

        session.update_field(Field::Email, "still-bad");
        assert_eq!(session.errors().get(&Field::Email), None);
        assert_eq!(session.errors().get(&Field::Name), Some(&FieldError::MissingName));
        assert_eq!(session.errors().get(&Field::Phone), Some(&FieldError::InvalidPhone));
    }

    #[test]
    fn submission_is_one_way() {
        let mut session = session_at(Step::Contact);
        session.update_field(Field::Name, "Jane Doe");
        session.update_field(Field::Email, "jane@example.com");
        session.update_field(Field::Phone, "555-123-4567");
        assert_eq!(session.request_advance(), Advance::Submitted);
        assert!(session.is_submitted());

        session.request_back();
        session.update_field(Field::Name, "Someone Else");
        assert_eq!(session.step(), Step::Contact);
        assert_eq!(session.answers().name, "Jane Doe");
        assert_eq!(session.request_advance(), Advance::Submitted);
    }

    #[test]
    fn buyer_walks_through_to_submission() {
        let mut session = FormSession::new();

        session.update_field(Field::Intent, "buyer");
        session.request_advance();
        assert_eq!(session.current_step(), 1);

        session.request_advance();
        assert_eq!(
            session.errors().get(&Field::Timeline).map(ToString::to_string).as_deref(),
            Some("Please select your timeline")
        );
        assert_eq!(session.current_step(), 1);

        session.update_field(Field::Timeline, "immediate");
        session.request_advance();
        assert_eq!(session.current_step(), 2);

        session.update_field(Field::Budget, "$300K - $500K");
        session.update_field(Field::Location, "Seattle");
        session.request_advance();
        assert_eq!(session.current_step(), 3);
        assert_eq!(session.percent_complete(), 100);

        session.update_field(Field::Name, "Jane Doe");
        session.update_field(Field::Email, "jane@example.com");
        session.update_field(Field::Phone, "(206) 555-0100");
        session.request_advance();
        assert!(session.is_submitted());
    }
}
