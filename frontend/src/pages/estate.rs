use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::info;

use crate::components::lead_form::LeadForm;
use crate::components::motion::{scroll_to_section, stagger_ms};
use crate::components::reveal::Reveal;
use crate::config;
use crate::lead::answers::LeadAnswers;
use crate::lead::catalog::Variant;

pub const FORM_SECTION_ID: &str = "form-section";
const TRUST_SECTION_ID: &str = "trust-section";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Sold,
    Pending,
    Active,
}

impl ListingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Sold => "Sold",
            ListingStatus::Pending => "Pending",
            ListingStatus::Active => "Available",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ListingStatus::Sold => "status-sold",
            ListingStatus::Pending => "status-pending",
            ListingStatus::Active => "status-active",
        }
    }
}

struct Listing {
    photo: &'static str,
    price: &'static str,
    beds: u8,
    baths: u8,
    sqft: &'static str,
    location: &'static str,
    status: ListingStatus,
}

static LISTINGS: [Listing; 4] = [
    Listing {
        photo: "photo-1613977257363-707ba9348227",
        price: "$1,250,000",
        beds: 4,
        baths: 3,
        sqft: "3,200",
        location: "Downtown Seattle",
        status: ListingStatus::Sold,
    },
    Listing {
        photo: "photo-1600585154340-be6161a56a0c",
        price: "$875,000",
        beds: 3,
        baths: 2,
        sqft: "2,400",
        location: "Capitol Hill",
        status: ListingStatus::Pending,
    },
    Listing {
        photo: "photo-1600607687939-ce8a6c25118c",
        price: "$1,450,000",
        beds: 5,
        baths: 4,
        sqft: "4,100",
        location: "Bellevue",
        status: ListingStatus::Active,
    },
    Listing {
        photo: "photo-1600566753190-17f0baa2a6c3",
        price: "$695,000",
        beds: 3,
        baths: 2,
        sqft: "1,850",
        location: "Queen Anne",
        status: ListingStatus::Sold,
    },
];

const METRICS: [(&str, &str); 3] = [
    ("$2.4B+", "Properties Sold"),
    ("15 Years", "Local Expertise"),
    ("4.9/5", "Client Rating"),
];

const TRUST_POINTS: [(&str, &str, &str); 3] = [
    ("⚡", "Lightning Fast", "Get matched with properties in under 60 seconds. Our AI-powered platform delivers results while others are still processing your request."),
    ("✔", "Verified Listings", "Every property is personally inspected and verified by our team. No surprises, no disappointments, just quality homes."),
    ("$", "Save More Money", "Our clients save an average of $18,000 through expert negotiation and exclusive off-market opportunities."),
];

const TESTIMONIALS: [(&str, &str, &str); 2] = [
    (
        "Found our dream home in just 3 weeks. The team's knowledge of the local market was incredible. They knew about listings before they hit the market.",
        "Sarah & Michael Chen",
        "First-time Homebuyers",
    ),
    (
        "Sold our home for 12% above asking price in less than a week. Their marketing strategy and staging advice were game-changers. Highly recommend!",
        "Robert Martinez",
        "Home Seller",
    ),
];

fn scroll_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| scroll_to_section(id))
}

fn staggered_words(words: &[&'static str], base_ms: u32, class: Option<&'static str>) -> Html {
    html! {
        <div class="headline-line">
            { for words.iter().enumerate().map(|(i, word)| html! {
                <span class={classes!("headline-word", class)} style={format!("transition-delay: {}ms;", stagger_ms(base_ms, i, 100))}>
                    {*word}
                </span>
            }) }
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let entered = use_state_eq(|| false);

    // Flip to the entered state right after the first paint so every
    // staggered transition has a starting frame.
    {
        let entered = entered.clone();
        use_effect_with_deps(move |_| {
            let timeout = Timeout::new(50, move || entered.set(true));
            move || drop(timeout)
        }, ());
    }

    html! {
        <section class={classes!("estate-hero", (*entered).then(|| "entered"))}>
            <div class="estate-hero-background" style={format!("background-image: url('{}');", config::image_url("photo-1600596542815-ffad4c1539a9", 2400))}></div>
            <div class="estate-hero-overlay"></div>
            <div class="hero-orb orb-emerald"></div>
            <div class="hero-orb orb-cyan"></div>
            <div class="estate-hero-content">
                <div class="trust-badge">
                    <span class="pulse-dot"></span>
                    {"Trusted by 2,400+ Local Families"}
                </div>
                <h1 class="estate-headline">
                    { staggered_words(&["Find", "Your", "Dream", "Home"], 400, None) }
                    { staggered_words(&["Without", "the", "Stress"], 800, Some("gradient-text")) }
                </h1>
                <p class="estate-subtitle">
                    {"Work with award-winning local agents who know your neighborhood inside out. Get personalized matches in under 60 seconds."}
                </p>
                <div class="metric-grid">
                    { for METRICS.iter().enumerate().map(|(i, (value, label))| html! {
                        <div class="metric-card" style={format!("transition-delay: {}ms;", stagger_ms(1400, i, 150))}>
                            <div class="metric-value">{*value}</div>
                            <div class="metric-label">{*label}</div>
                        </div>
                    }) }
                </div>
                <button class="primary-cta" onclick={scroll_to(FORM_SECTION_ID)}>
                    <span>{"Get Your Free Home Valuation"}</span>
                    <span class="cta-arrow">{"→"}</span>
                </button>
                <p class="hero-fineprint">{"No obligations. Your information stays private."}</p>
            </div>
            <div class="scroll-indicator" onclick={scroll_to(TRUST_SECTION_ID)}>
                <span>{"Scroll"}</span>
                <span class="scroll-chevron">{"⌄"}</span>
            </div>
        </section>
    }
}

#[function_component(TrustSection)]
fn trust_section() -> Html {
    html! {
        <section id={TRUST_SECTION_ID} class="trust-section">
            <Reveal class={classes!("section-header")}>
                <h2>{"Why Thousands Choose Us"}</h2>
                <p>{"Local expertise meets cutting-edge technology to give you an unfair advantage"}</p>
            </Reveal>
            <div class="trust-grid">
                { for TRUST_POINTS.iter().enumerate().map(|(i, (icon, title, body))| html! {
                    <Reveal delay_ms={stagger_ms(0, i, 200)} class={classes!("trust-card")}>
                        <div class="trust-icon">{*icon}</div>
                        <h3>{*title}</h3>
                        <p>{*body}</p>
                    </Reveal>
                }) }
            </div>
            <div class="testimonial-grid">
                { for TESTIMONIALS.iter().enumerate().map(|(i, (quote, name, role))| html! {
                    <Reveal delay_ms={stagger_ms(0, i, 200)} class={classes!("testimonial-card")}>
                        <div class="stars">{"★★★★★"}</div>
                        <p class="testimonial-quote">{format!("\"{}\"", quote)}</p>
                        <div class="testimonial-author">
                            <div class="author-name">{*name}</div>
                            <div class="author-role">{*role}</div>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(PropertiesShowcase)]
fn properties_showcase() -> Html {
    html! {
        <section class="properties-section">
            <Reveal class={classes!("section-header")}>
                <h2>{"Recently Sold & Active Listings"}</h2>
                <p>{"See the caliber of properties we work with every day"}</p>
            </Reveal>
            <div class="property-grid">
                { for LISTINGS.iter().enumerate().map(|(i, listing)| html! {
                    <Reveal delay_ms={stagger_ms(0, i, 150)} class={classes!("property-card")}>
                        <div class="property-image">
                            <img src={config::image_url(listing.photo, 800)} alt={listing.location} loading="lazy" />
                            <span class={classes!("status-badge", listing.status.class())}>{listing.status.label()}</span>
                        </div>
                        <div class="property-body">
                            <div class="property-price">{listing.price}</div>
                            <div class="property-location">{listing.location}</div>
                            <div class="property-stats">
                                <span>{format!("{} beds", listing.beds)}</span>
                                <span>{format!("{} baths", listing.baths)}</span>
                                <span>{format!("{} sqft", listing.sqft)}</span>
                            </div>
                        </div>
                    </Reveal>
                }) }
            </div>
            <div class="showcase-cta">
                <button class="secondary-cta" onclick={scroll_to(FORM_SECTION_ID)}>
                    {"Find Properties Like These"}{" →"}
                </button>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta() -> Html {
    html! {
        <section class="final-cta">
            <Reveal>
                <h2>{"Ready to Make Your Move?"}</h2>
                <p>{"Join thousands of satisfied clients who found their perfect home with our help. Your dream property is waiting."}</p>
                <button class="primary-cta light" onclick={scroll_to(FORM_SECTION_ID)}>
                    <span>{"Start Your Journey Today"}</span>
                    <span class="cta-arrow">{"→"}</span>
                </button>
                <p class="cta-fineprint">{"100% free consultation · No obligations · Results guaranteed"}</p>
            </Reveal>
        </section>
    }
}

#[function_component(RealEstateLanding)]
pub fn real_estate_landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_submit = Callback::from(|answers: LeadAnswers| {
        info!("Handing off lead for {}", answers.email);
        scroll_to_section(FORM_SECTION_ID);
    });

    html! {
        <div class="estate-page">
            <Hero />
            <TrustSection />
            <PropertiesShowcase />
            <section id={FORM_SECTION_ID} class="form-section">
                <Reveal class={classes!("section-header")}>
                    <h2>{"Let's Find Your Perfect Match"}</h2>
                    <p>{"Answer a few quick questions to get personalized recommendations"}</p>
                </Reveal>
                <div class="form-card">
                    <LeadForm variant={Variant::Classic} {on_submit} />
                </div>
            </section>
            <FinalCta />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_listings_read_as_available() {
        assert_eq!(ListingStatus::Active.label(), "Available");
        assert_eq!(ListingStatus::Sold.label(), "Sold");
        assert_eq!(ListingStatus::Pending.class(), "status-pending");
    }

    #[test]
    fn showcase_has_one_listing_per_status_at_least() {
        for status in [ListingStatus::Sold, ListingStatus::Pending, ListingStatus::Active] {
            assert!(LISTINGS.iter().any(|l| l.status == status));
        }
    }
}
