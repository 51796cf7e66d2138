use yew::prelude::*;
use yew_hooks::prelude::*;
use log::info;

use crate::components::faq::{toggle_active, FaqItem};
use crate::components::lead_form::LeadForm;
use crate::components::motion::{map_range, scroll_progress, scroll_to_section};
use crate::components::reveal::Reveal;
use crate::components::trusted_by::TrustedBy;
use crate::config;
use crate::lead::answers::LeadAnswers;
use crate::lead::catalog::Variant;

pub const CAPTURE_SECTION_ID: &str = "capture";
const HERO_PHOTO: &str = "photo-1600585154340-be6161a56a0c";

const FEATURES: [(&str, &str); 2] = [
    ("Strict Confidentiality", "Your data is shielded by end-to-end encryption and high-level NDA protocols."),
    ("Instant Valuation", "Receive proprietary market liquidity scores for your target areas immediately."),
];

const TESTIMONIALS: [(&str, &str); 2] = [
    (
        "The off-market inventory they provided wasn't just exclusive; it was transformative for our portfolio.",
        "Alexander V., Venture Partner",
    ),
    (
        "Absolute discretion and clinical precision. They don't just find houses; they engineer acquisitions.",
        "Sarah L., Tech Founder",
    ),
];

const FAQS: [(&str, &str); 3] = [
    (
        "How do you access off-market listings?",
        "We maintain direct relationships with estate attorneys, private banks, and wealth managers to secure assets before public listing.",
    ),
    (
        "What is the typical investment bracket?",
        "We specialize in properties starting at $2.5M, ensuring high-liquidity assets for our discerning clientele.",
    ),
    (
        "Are your services available globally?",
        "While our core data centers are in the US and UK, our concierge service supports acquisitions across 40+ countries.",
    ),
];

/// Scroll-linked styles for the hero and gallery at a given page progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollScene {
    pub hero_scale: f64,
    pub hero_opacity: f64,
    pub gallery_offset: f64,
}

impl ScrollScene {
    pub fn at(progress: f64) -> Self {
        Self {
            hero_scale: map_range(progress, (0.0, 0.2), (1.0, 0.9)),
            hero_opacity: map_range(progress, (0.0, 0.2), (1.0, 0.0)),
            gallery_offset: map_range(progress, (0.1, 0.4), (100.0, 0.0)),
        }
    }
}

fn page_progress(scroll_y: f64) -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let viewport = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(scroll_y, scroll_height, viewport)
}

#[function_component(PremiumLanding)]
pub fn premium_landing() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let active_faq = use_state(|| None::<usize>);
    let scene = ScrollScene::at(page_progress(scroll_y));

    let on_toggle_faq = {
        let active_faq = active_faq.clone();
        Callback::from(move |index: usize| {
            active_faq.set(toggle_active(*active_faq, index));
        })
    };

    let on_submit = Callback::from(|answers: LeadAnswers| {
        info!("Handing off premium lead for {}", answers.email);
        scroll_to_section(CAPTURE_SECTION_ID);
    });

    let unlock = Callback::from(|_: MouseEvent| scroll_to_section(CAPTURE_SECTION_ID));

    html! {
        <div class="premium-page">
            <section class="premium-hero">
                <div
                    class="premium-hero-media"
                    style={format!("transform: scale({}); opacity: {};", scene.hero_scale, scene.hero_opacity)}
                >
                    <div class="premium-hero-shade"></div>
                    <img src={config::image_url(HERO_PHOTO, 2000)} alt="Luxury Architecture" />
                </div>
                <div class="premium-hero-content">
                    <span class="premium-eyebrow">{"Private Client Advisory"}</span>
                    <h1 class="premium-headline">
                        {"Wealth"}<br />
                        <span class="premium-headline-accent">{"In Residence."}</span>
                    </h1>
                    <p class="premium-subtitle">
                        {"Access the most significant off-market estates and data-driven investment analysis globally."}
                    </p>
                    <div class="premium-unlock">
                        <input type="email" placeholder="Private email" />
                        <button onclick={unlock}>{"Unlock Access"}</button>
                    </div>
                </div>
                <div class="premium-stat">
                    <div class="premium-stat-value">{"$4.2B"}</div>
                    <div class="premium-stat-label">{"Transactions"}</div>
                    <div class="premium-stat-value">{"40+"}</div>
                    <div class="premium-stat-label">{"Market Access"}</div>
                </div>
            </section>

            <TrustedBy />

            <section class="premium-gallery">
                <div class="gallery-grid" style={format!("transform: translateY({}px);", scene.gallery_offset)}>
                    <div class="gallery-feature">
                        <img src={config::image_url(HERO_PHOTO, 1200)} alt="Estate" loading="lazy" />
                        <div class="gallery-caption">
                            <p>{"Modern Minimalist"}</p>
                            <h3>{"The Obsidian Villa"}</h3>
                        </div>
                    </div>
                    <div class="gallery-stack">
                        <img src={config::image_url(HERO_PHOTO, 800)} alt="Estate" loading="lazy" />
                        <img src={config::image_url(HERO_PHOTO, 800)} alt="Estate" loading="lazy" />
                    </div>
                </div>
            </section>

            <section id={CAPTURE_SECTION_ID} class="premium-capture">
                <div class="capture-copy">
                    <h2>{"Tell us"}<br /><span class="capture-accent">{"what you seek."}</span></h2>
                    { for FEATURES.iter().enumerate().map(|(i, (title, desc))| html! {
                        <Reveal delay_ms={i as u32 * 150} class={classes!("feature-item")}>
                            <div class="feature-icon">{"●"}</div>
                            <div>
                                <h4>{*title}</h4>
                                <p>{*desc}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
                <div class="capture-panel">
                    <div class="bubble bubble-blue"></div>
                    <div class="bubble bubble-purple"></div>
                    <div class="bubble bubble-accent"></div>
                    <LeadForm variant={Variant::Premium} {on_submit} />
                </div>
            </section>

            <section class="premium-testimonials">
                { for TESTIMONIALS.iter().map(|(quote, author)| html! {
                    <Reveal class={classes!("premium-testimonial")}>
                        <p class="premium-quote">{format!("\"{}\"", quote)}</p>
                        <div class="premium-author">
                            <div class="author-avatar"></div>
                            <p>{*author}</p>
                        </div>
                    </Reveal>
                }) }
            </section>

            <section class="premium-faq">
                <h3>{"Frequent Inquiries"}</h3>
                { for FAQS.iter().enumerate().map(|(index, (question, answer))| html! {
                    <FaqItem
                        {index}
                        active={*active_faq}
                        question={*question}
                        answer={*answer}
                        on_toggle={on_toggle_faq.clone()}
                    />
                }) }
            </section>

            <footer class="premium-footer">
                <div class="footer-grid">
                    <div>
                        <h2>{"Let's discuss"}<br /><span class="capture-accent">{"the next move."}</span></h2>
                    </div>
                    <div>
                        <p class="footer-heading">{"Concierge"}</p>
                        <ul>
                            <li>{"concierge@sovereign.estate"}</li>
                            <li>{"+1 (310) 555-0142"}</li>
                        </ul>
                    </div>
                    <div>
                        <p class="footer-heading">{"Offices"}</p>
                        <ul>
                            <li>{"Beverly Hills, CA"}</li>
                            <li>{"Manhattan, NY"}</li>
                            <li>{"Mayfair, London"}</li>
                        </ul>
                    </div>
                </div>
                <div class="footer-legal">
                    <p>{"© 2026 Sovereign Estate Collective. All Rights Reserved."}</p>
                </div>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_shrinks_and_fades_over_first_fifth() {
        let top = ScrollScene::at(0.0);
        assert_eq!(top.hero_scale, 1.0);
        assert_eq!(top.hero_opacity, 1.0);
        assert_eq!(top.gallery_offset, 100.0);

        let past_hero = ScrollScene::at(0.5);
        assert_eq!(past_hero.hero_scale, 0.9);
        assert_eq!(past_hero.hero_opacity, 0.0);
        assert_eq!(past_hero.gallery_offset, 0.0);
    }

    #[test]
    fn gallery_holds_until_tenth_of_page() {
        assert_eq!(ScrollScene::at(0.05).gallery_offset, 100.0);
        assert!(ScrollScene::at(0.25).gallery_offset < 100.0);
    }
}
