use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::lead::answers::{Field, LeadAnswers};
use crate::lead::catalog::Variant;
use crate::lead::validate::FieldErrors;

/// Shared props for every step renderer. `on_update` carries edits to text
/// inputs; `on_pick` carries choices made on option buttons.
#[derive(Properties, PartialEq)]
pub struct StepProps {
    pub variant: Variant,
    pub answers: LeadAnswers,
    pub errors: FieldErrors,
    pub on_update: Callback<(Field, String)>,
    pub on_pick: Callback<(Field, String)>,
}

fn field_error(errors: &FieldErrors, field: Field) -> Html {
    match errors.get(&field) {
        Some(error) => html! { <p class="field-error">{ error.to_string() }</p> },
        None => html! {},
    }
}

fn text_input(on_update: &Callback<(Field, String)>, field: Field) -> Callback<InputEvent> {
    on_update.reform(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        (field, input.value())
    })
}

fn step_header(heading: &'static str, subheading: &'static str) -> Html {
    html! {
        <>
            <h3 class="step-heading">{heading}</h3>
            <p class="step-subheading">{subheading}</p>
        </>
    }
}

#[function_component(IntentStep)]
pub fn intent_step(props: &StepProps) -> Html {
    let catalog = props.variant.catalog();

    html! {
        <div class="form-step intent-step">
            { step_header(catalog.intent_heading, catalog.intent_subheading) }
            <div class="option-grid">
                { for catalog.intents.iter().map(|option| {
                    let selected = props.answers.intent == Some(option.intent);
                    let value = option.intent.as_str();
                    let onclick = props.on_pick.reform(move |_: MouseEvent| (Field::Intent, value.to_string()));
                    html! {
                        <button class={classes!("option-card", selected.then(|| "selected"))} {onclick}>
                            <span class="option-icon">{option.icon}</span>
                            <span class="option-title">{option.title}</span>
                            <span class="option-description">{option.description}</span>
                        </button>
                    }
                }) }
            </div>
            { field_error(&props.errors, Field::Intent) }
        </div>
    }
}

#[function_component(TimelineStep)]
pub fn timeline_step(props: &StepProps) -> Html {
    let catalog = props.variant.catalog();

    html! {
        <div class="form-step timeline-step">
            { step_header(catalog.timeline_heading, catalog.timeline_subheading) }
            <div class="option-list">
                { for catalog.timelines.iter().map(|option| {
                    let selected = props.answers.timeline == Some(option.timeline);
                    let value = option.timeline.as_str();
                    let onclick = props.on_pick.reform(move |_: MouseEvent| (Field::Timeline, value.to_string()));
                    html! {
                        <button class={classes!("option-row", selected.then(|| "selected"))} {onclick}>
                            <span class="option-text">
                                <span class="option-title">{option.label}</span>
                                if !option.sublabel.is_empty() {
                                    <span class="option-description">{option.sublabel}</span>
                                }
                            </span>
                            <span class={classes!("option-check", selected.then(|| "checked"))}>
                                if selected { {"✓"} }
                            </span>
                        </button>
                    }
                }) }
            </div>
            { field_error(&props.errors, Field::Timeline) }
        </div>
    }
}

#[function_component(BudgetLocationStep)]
pub fn budget_location_step(props: &StepProps) -> Html {
    let catalog = props.variant.catalog();
    let budget = props.answers.budget.clone();

    // Premium shows a dropdown whose first entry is a non-choice.
    let budget_picker = match catalog.budget_placeholder {
        Some(placeholder) => {
            let onchange = props.on_update.reform(|e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                (Field::Budget, select.value())
            });
            html! {
                <select class="budget-select" {onchange}>
                    <option value="" selected={budget.is_empty()}>{placeholder}</option>
                    { for catalog.budgets.iter().map(|bracket| html! {
                        <option value={*bracket} selected={budget == *bracket}>{*bracket}</option>
                    }) }
                </select>
            }
        }
        None => html! {
            <div class="budget-chips">
                { for catalog.budgets.iter().map(|bracket| {
                    let selected = budget == *bracket;
                    let onclick = props.on_update.reform(move |_: MouseEvent| (Field::Budget, bracket.to_string()));
                    html! {
                        <button class={classes!("budget-chip", selected.then(|| "selected"))} {onclick}>
                            {*bracket}
                        </button>
                    }
                }) }
            </div>
        },
    };

    html! {
        <div class="form-step budget-step">
            { step_header(catalog.budget_heading, catalog.budget_subheading) }
            <div class="form-group">
                <label>{catalog.budget_label}</label>
                { budget_picker }
                { field_error(&props.errors, Field::Budget) }
            </div>
            <div class="form-group">
                <label>{catalog.location_label}</label>
                <input
                    type="text"
                    class={classes!("form-input", props.errors.contains_key(&Field::Location).then(|| "invalid"))}
                    value={props.answers.location.clone()}
                    placeholder={catalog.location_placeholder}
                    oninput={text_input(&props.on_update, Field::Location)}
                />
                { field_error(&props.errors, Field::Location) }
            </div>
        </div>
    }
}

#[function_component(ContactStep)]
pub fn contact_step(props: &StepProps) -> Html {
    let catalog = props.variant.catalog();
    let fields = [
        (Field::Name, "Full Name", "text", catalog.name_placeholder),
        (Field::Email, "Email Address", "email", catalog.email_placeholder),
        (Field::Phone, "Phone Number", "tel", catalog.phone_placeholder),
    ];

    html! {
        <div class="form-step contact-step">
            { step_header(catalog.contact_heading, catalog.contact_subheading) }
            { for fields.into_iter().map(|(field, label, kind, placeholder)| html! {
                <div class="form-group">
                    <label>{label}</label>
                    <input
                        type={kind}
                        class={classes!("form-input", props.errors.contains_key(&field).then(|| "invalid"))}
                        value={props.answers.get(field).to_string()}
                        {placeholder}
                        oninput={text_input(&props.on_update, field)}
                    />
                    { field_error(&props.errors, field) }
                </div>
            }) }
            if let Some(consent) = catalog.consent {
                <p class="consent">{"🔒 "}{consent}</p>
            }
        </div>
    }
}
