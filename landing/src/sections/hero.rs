use leptos::html;
use leptos::prelude::*;

use super::icons::{ICON_ARROW_RIGHT, Icon};
use crate::PageState;
use crate::config::SiteConfig;
use crate::interaction::{HeroFade, Section};

#[component]
pub fn Hero() -> impl IntoView {
    let state = expect_context::<PageState>();
    let config = expect_context::<SiteConfig>();
    let hero_ref = NodeRef::<html::Section>::new();

    // Re-read the hero rect whenever the scroll listener reports a new offset
    let fade_style = move || {
        state.scroll_y.track();
        hero_ref
            .get()
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                HeroFade::at(rect.top(), rect.height(), config.hero_min_scale)
            })
            .unwrap_or(HeroFade::VISIBLE)
            .style()
    };

    view! {
        <section class="hero" node_ref=hero_ref>
            <div class="container hero-content" style=fade_style>
                <h1 class="hero-title">
                    "Big Data Intelligence Meets Decision-Ready Dashboards"
                </h1>
                <p class="hero-description">
                    "We build custom AI systems that transform complex data into real-time insights."
                </p>
                <HeroActions />
            </div>

            <div class="hero-backdrop">
                <div class="hero-blob hero-blob-primary"></div>
                <div class="hero-blob hero-blob-secondary"></div>
            </div>
        </section>
    }
}

/// "Book a consultation" + "View case studies"; shared with the CTA band.
#[component]
pub fn HeroActions() -> impl IntoView {
    let state = expect_context::<PageState>();
    let config = expect_context::<SiteConfig>();

    view! {
        <div class="hero-actions">
            <button class="btn btn-primary btn-lg group">
                <span>"Book a consultation"</span>
                <Icon paths=ICON_ARROW_RIGHT size="16" class="btn-arrow" />
            </button>
            <button
                class="btn btn-outline btn-lg"
                on:click=move |_| state.go_to(Section::CaseStudies, &config)
            >
                <span>"View case studies"</span>
            </button>
        </div>
    }
}
