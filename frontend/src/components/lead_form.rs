use yew::prelude::*;
use log::{info, warn};

use crate::components::form_steps::{BudgetLocationStep, ContactStep, IntentStep, TimelineStep};
use crate::components::success::SuccessView;
use crate::lead::answers::{Field, LeadAnswers};
use crate::lead::catalog::Variant;
use crate::lead::session::{Advance, FormSession, Step};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub variant: Variant,
    /// Receives the completed answers once, when the last step validates.
    #[prop_or_default]
    pub on_submit: Callback<LeadAnswers>,
}

fn log_submission(answers: &LeadAnswers) {
    match serde_json::to_string(answers) {
        Ok(json) => info!("Lead submitted: {}", json),
        Err(e) => warn!("Lead submitted but could not be serialized: {}", e),
    }
}

/// Run an advance on `next` and hand the answers off if it submitted.
fn advance(mut next: FormSession, on_submit: &Callback<LeadAnswers>) -> FormSession {
    let already_submitted = next.is_submitted();
    if next.request_advance() == Advance::Submitted && !already_submitted {
        log_submission(next.answers());
        on_submit.emit(next.answers().clone());
    }
    next
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let session = use_state(FormSession::new);
    let catalog = props.variant.catalog();

    let on_update = {
        let session = session.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*session).clone();
            next.update_field(field, &value);
            session.set(next);
        })
    };

    let on_pick = {
        let session = session.clone();
        let on_submit = props.on_submit.clone();
        let advance_on_pick = catalog.advance_on_pick;
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*session).clone();
            next.update_field(field, &value);
            if advance_on_pick {
                next = advance(next, &on_submit);
            }
            session.set(next);
        })
    };

    let on_next = {
        let session = session.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| {
            session.set(advance((*session).clone(), &on_submit));
        })
    };

    let on_back = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.request_back();
            session.set(next);
        })
    };

    if session.is_submitted() {
        return html! { <SuccessView variant={props.variant} /> };
    }

    let step = session.step();
    let step_number = session.current_step() + 1;
    let progress = match props.variant {
        Variant::Classic => html! {
            <div class="form-progress">
                <div class="progress-labels">
                    <span class="progress-step">{format!("Step {} of {}", step_number, Step::COUNT)}</span>
                    <span class="progress-percent">{format!("{}% Complete", session.percent_complete())}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-bar" style={format!("width: {}%;", session.percent_complete())}></div>
                </div>
            </div>
        },
        Variant::Premium => html! {
            <div class="form-progress">
                <span class="progress-step">{format!("Step 0{}", step_number)}</span>
                <span class="progress-fraction">{format!("{}/{}", step_number, Step::COUNT)}</span>
            </div>
        },
    };

    let variant = props.variant;
    let answers = session.answers().clone();
    let errors = session.errors().clone();
    let step_view = match step {
        Step::Intent => html! {
            <IntentStep {variant} {answers} {errors} on_update={on_update.clone()} on_pick={on_pick.clone()} />
        },
        Step::Timeline => html! {
            <TimelineStep {variant} {answers} {errors} on_update={on_update.clone()} on_pick={on_pick.clone()} />
        },
        Step::BudgetLocation => html! {
            <BudgetLocationStep {variant} {answers} {errors} on_update={on_update.clone()} on_pick={on_pick.clone()} />
        },
        Step::Contact => html! {
            <ContactStep {variant} {answers} {errors} on_update={on_update.clone()} on_pick={on_pick.clone()} />
        },
    };

    // Pick-and-go steps in the premium form have no separate continue button.
    let picks_advance = catalog.advance_on_pick && matches!(step, Step::Intent | Step::Timeline);
    let next_label = if step.is_last() { catalog.submit_label } else { catalog.continue_label };

    html! {
        <div class={props.variant.class()}>
            { progress }
            <div class="form-step-frame" key={step.index().to_string()}>
                { step_view }
            </div>
            <div class="form-nav">
                if step.prev().is_some() {
                    <button class="form-back" onclick={on_back}>{"Back"}</button>
                }
                if !picks_advance {
                    <button class="form-next" onclick={on_next}>{next_label}</button>
                }
            </div>
            if props.variant == Variant::Classic {
                <div class="form-secure">{"🔒 Your information is secure and will never be shared"}</div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recorder() -> (Callback<LeadAnswers>, Rc<RefCell<Vec<LeadAnswers>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let callback = Callback::from(move |answers: LeadAnswers| sink.borrow_mut().push(answers));
        (callback, seen)
    }

    fn at_contact_step(on_submit: &Callback<LeadAnswers>) -> FormSession {
        let mut session = FormSession::new();
        for (field, value) in [
            (Field::Intent, "buyer"),
            (Field::Timeline, "immediate"),
            (Field::Budget, "$300K - $500K"),
            (Field::Location, "Seattle"),
        ] {
            session.update_field(field, value);
        }
        for _ in 0..3 {
            session = advance(session, on_submit);
        }
        assert_eq!(session.step(), Step::Contact);
        session
    }

    #[test]
    fn submit_fires_once_across_repeated_advances() {
        let (on_submit, seen) = recorder();
        let mut session = at_contact_step(&on_submit);
        assert!(seen.borrow().is_empty());

        session.update_field(Field::Name, "Jane Doe");
        session.update_field(Field::Email, "jane@example.com");
        session.update_field(Field::Phone, "555-123-4567");
        for _ in 0..3 {
            session = advance(session, &on_submit);
        }

        assert!(session.is_submitted());
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].name, "Jane Doe");
    }

    #[test]
    fn rejected_advance_does_not_submit() {
        let (on_submit, seen) = recorder();
        let mut session = at_contact_step(&on_submit);
        session.update_field(Field::Email, "jane@example");
        session = advance(session, &on_submit);

        assert!(!session.is_submitted());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn picking_an_option_moves_to_the_next_step() {
        let (on_submit, seen) = recorder();
        let mut session = FormSession::new();

        session.update_field(Field::Intent, "seller");
        session = advance(session, &on_submit);
        assert_eq!(session.step(), Step::Timeline);

        session.update_field(Field::Timeline, "3-6months");
        session = advance(session, &on_submit);
        assert_eq!(session.step(), Step::BudgetLocation);
        assert_eq!(session.answers().intent.map(|i| i.as_str()), Some("seller"));
        assert!(seen.borrow().is_empty());
    }
}
