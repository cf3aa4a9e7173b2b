use leptos::prelude::*;

use super::icons::{ICON_BRAIN, ICON_CHEVRON_RIGHT, ICON_LAYOUT, ICON_SETTINGS, Icon};
use crate::interaction::Section;

/// Service offering card
pub(crate) struct Solution {
    pub title: &'static str,
    pub icon: &'static [&'static str],
    pub description: &'static str,
    pub bullets: [&'static str; 3],
}

pub(crate) const SOLUTIONS: &[Solution] = &[
    Solution {
        title: "AI & Data Systems",
        icon: ICON_BRAIN,
        description: "Domain-specific AI to process multilingual text, legal data, spatial information, and unstructured sources.",
        bullets: [
            "Custom LLMs for legal, geospatial, and financial data",
            "Text mining across sources and in 20+ languages",
            "Risk tagging and predictive scoring",
        ],
    },
    Solution {
        title: "Dashboards & Visualization",
        icon: ICON_LAYOUT,
        description: "Real-time dashboards with mapping, KPIs, and automated reporting — built for decision-makers.",
        bullets: [
            "Interactive dashboards with spatial analytics",
            "Automated workflows for reporting and alerts",
            "Modular design tailored to operational needs",
        ],
    },
    Solution {
        title: "Custom Infrastructure",
        icon: ICON_SETTINGS,
        description: "Secure, privacy-first systems built on open standards. Fully auditable and aligned with your stack.",
        bullets: [
            "Zero-license, open-source deployments",
            "Custom APIs, database, and pipeline design",
            "Integrations with your existing tools and workflows",
        ],
    },
];

#[component]
pub fn Solutions() -> impl IntoView {
    view! {
        <section id={Section::Solutions.id()} class="solutions">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our Work"</h2>
                    <p class="section-description">
                        "We build smart, secure, and open tools to extract, analyze, and visualize complex data — "
                        "from text and documents to geospatial layers and predictive models."
                    </p>
                </div>
                <div class="solutions-grid">
                    {SOLUTIONS.iter().map(|solution| view! { <SolutionCard solution=solution /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SolutionCard(solution: &'static Solution) -> impl IntoView {
    view! {
        <article class="solution-card">
            <div class="solution-icon">
                <Icon paths={solution.icon} class="icon-primary" />
            </div>
            <h3 class="solution-title">{solution.title}</h3>
            <p class="solution-description">{solution.description}</p>
            <ul class="solution-bullets">
                {solution.bullets.iter().map(|point| {
                    view! {
                        <li class="solution-bullet">
                            <Icon paths=ICON_CHEVRON_RIGHT size="16" class="icon-primary" />
                            <span>{*point}</span>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_cards_with_three_bullets() {
        assert_eq!(SOLUTIONS.len(), 3);
        assert!(SOLUTIONS.iter().all(|s| !s.icon.is_empty()));
        assert!(SOLUTIONS.iter().flat_map(|s| s.bullets).all(|b| !b.is_empty()));
    }
}
