use super::answers::{Intent, Timeline};

/// Which landing page a lead form is embedded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Classic,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentOption {
    pub intent: Intent,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineOption {
    pub timeline: Timeline,
    pub label: &'static str,
    pub sublabel: &'static str,
}

/// Copy and option lists for one variant of the lead form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Catalog {
    pub intent_heading: &'static str,
    pub intent_subheading: &'static str,
    pub intents: &'static [IntentOption],
    pub timeline_heading: &'static str,
    pub timeline_subheading: &'static str,
    pub timelines: &'static [TimelineOption],
    pub budget_heading: &'static str,
    pub budget_subheading: &'static str,
    pub budget_label: &'static str,
    pub budget_placeholder: Option<&'static str>,
    pub budgets: &'static [&'static str],
    pub location_label: &'static str,
    pub location_placeholder: &'static str,
    pub contact_heading: &'static str,
    pub contact_subheading: &'static str,
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub phone_placeholder: &'static str,
    pub consent: Option<&'static str>,
    pub continue_label: &'static str,
    pub submit_label: &'static str,
    /// Choosing an option on a pick-one step also moves to the next step.
    pub advance_on_pick: bool,
    pub success_title: &'static str,
    pub success_body: &'static [&'static str],
}

static CLASSIC: Catalog = Catalog {
    intent_heading: "What brings you here today?",
    intent_subheading: "Choose the option that best describes your needs",
    intents: &[
        IntentOption {
            intent: Intent::Buyer,
            title: "I'm Looking to Buy",
            description: "Find your dream home with expert guidance",
            icon: "🏡",
        },
        IntentOption {
            intent: Intent::Seller,
            title: "I'm Looking to Sell",
            description: "Get top dollar for your property",
            icon: "💰",
        },
    ],
    timeline_heading: "What's your timeline?",
    timeline_subheading: "This helps us prioritize the best matches for you",
    timelines: &[
        TimelineOption { timeline: Timeline::Immediate, label: "Immediately", sublabel: "I'm ready now" },
        TimelineOption { timeline: Timeline::OneToThreeMonths, label: "1-3 Months", sublabel: "Planning ahead" },
        TimelineOption { timeline: Timeline::ThreeToSixMonths, label: "3-6 Months", sublabel: "Exploring options" },
        TimelineOption { timeline: Timeline::Browsing, label: "Just Browsing", sublabel: "Gathering information" },
    ],
    budget_heading: "Let's narrow it down",
    budget_subheading: "Tell us about your budget and preferred location",
    budget_label: "What's your budget range?",
    budget_placeholder: None,
    budgets: &["Under $300K", "$300K - $500K", "$500K - $750K", "$750K - $1M", "Over $1M"],
    location_label: "Where are you looking?",
    location_placeholder: "e.g., Downtown Seattle, Bellevue, Capitol Hill",
    contact_heading: "Almost there!",
    contact_subheading: "Enter your contact information to receive your personalized recommendations",
    name_placeholder: "John Smith",
    email_placeholder: "john@example.com",
    phone_placeholder: "(555) 123-4567",
    consent: Some(
        "By submitting this form, you agree to receive personalized property recommendations \
         and market updates. You can unsubscribe at any time. We respect your privacy and will \
         never sell your information.",
    ),
    continue_label: "Continue",
    submit_label: "Get My Free Valuation",
    advance_on_pick: false,
    success_title: "Thank You!",
    success_body: &[
        "Your request has been received. One of our expert agents will contact you within 24 hours with personalized recommendations.",
        "Check your email for immediate access to our exclusive market insights.",
    ],
};

static PREMIUM: Catalog = Catalog {
    intent_heading: "Your objective",
    intent_subheading: "Select the mandate we will represent",
    intents: &[
        IntentOption {
            intent: Intent::Buyer,
            title: "Acquisition",
            description: "Off-market buyer representation",
            icon: "⌂",
        },
        IntentOption {
            intent: Intent::Seller,
            title: "Divestment",
            description: "Strategic property liquidation",
            icon: "↗",
        },
    ],
    timeline_heading: "Horizon",
    timeline_subheading: "When do you intend to transact?",
    timelines: &[
        TimelineOption { timeline: Timeline::Immediate, label: "Immediately", sublabel: "" },
        TimelineOption { timeline: Timeline::OneToThreeMonths, label: "1-3 Months", sublabel: "" },
        TimelineOption { timeline: Timeline::ThreeToSixMonths, label: "3-6 Months", sublabel: "" },
        TimelineOption { timeline: Timeline::Browsing, label: "Researching", sublabel: "" },
    ],
    budget_heading: "Parameters",
    budget_subheading: "Where, and at what scale",
    budget_label: "Investment Bracket",
    budget_placeholder: Some("Investment Bracket"),
    budgets: &["$2M - $5M", "$5M - $15M", "$15M+"],
    location_label: "Target Location",
    location_placeholder: "Target Location",
    contact_heading: "Private channel",
    contact_subheading: "A partner will reach out personally",
    name_placeholder: "Full Name",
    email_placeholder: "Private Email",
    phone_placeholder: "Mobile Number",
    consent: None,
    continue_label: "Next",
    submit_label: "Authenticate & Access Data",
    advance_on_pick: true,
    success_title: "Request Submitted.",
    success_body: &["Expect a briefing within 6 hours."],
};

impl Variant {
    pub fn catalog(&self) -> &'static Catalog {
        match self {
            Variant::Classic => &CLASSIC,
            Variant::Premium => &PREMIUM,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Variant::Classic => "lead-form classic",
            Variant::Premium => "lead-form premium",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::answers::{Field, LeadAnswers};

    #[test]
    fn every_option_stores_an_allowed_value() {
        for variant in [Variant::Classic, Variant::Premium] {
            let catalog = variant.catalog();
            for option in catalog.intents {
                let mut answers = LeadAnswers::default();
                answers.set(Field::Intent, option.intent.as_str());
                assert_eq!(answers.intent, Some(option.intent));
            }
            for option in catalog.timelines {
                let mut answers = LeadAnswers::default();
                answers.set(Field::Timeline, option.timeline.as_str());
                assert_eq!(answers.timeline, Some(option.timeline));
            }
        }
    }

    #[test]
    fn both_variants_offer_buy_and_sell() {
        for variant in [Variant::Classic, Variant::Premium] {
            let intents: Vec<_> = variant.catalog().intents.iter().map(|o| o.intent).collect();
            assert_eq!(intents, vec![Intent::Buyer, Intent::Seller]);
        }
    }

    #[test]
    fn budget_placeholder_is_not_a_bracket() {
        for variant in [Variant::Classic, Variant::Premium] {
            let catalog = variant.catalog();
            assert!(!catalog.budgets.is_empty());
            if let Some(placeholder) = catalog.budget_placeholder {
                assert!(!catalog.budgets.contains(&placeholder));
            }
        }
    }
}
