use leptos::prelude::*;

use super::hero::HeroActions;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Build AI-powered systems for risk, insight, and action."</h2>
                    <p class="section-description">
                        "Let's explore your needs and design a solution together."
                    </p>
                    <HeroActions />
                </div>
            </div>
        </section>
    }
}
