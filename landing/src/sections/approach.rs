use leptos::prelude::*;

use crate::interaction::Section;

/// One stage of the delivery process
pub(crate) struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub(crate) const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Collect",
        description: "We extract structured and unstructured data from the web, APIs, documents, and media in over 20 languages.",
    },
    Step {
        number: "02",
        title: "Extract",
        description: "Using domain-specific AI, we enrich raw data with metadata, predictive tags, and risk scores.",
    },
    Step {
        number: "03",
        title: "Visualize",
        description: "We turn data into dashboards, spatial layers, and real-time KPIs — all designed for decision-making.",
    },
    Step {
        number: "04",
        title: "Build",
        description: "We deploy scalable, open-source solutions aligned with your infrastructure — secure, flexible, and future-proof.",
    },
];

#[component]
pub fn Approach() -> impl IntoView {
    view! {
        <section id={Section::Approach.id()} class="approach">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our Process"</h2>
                    <p class="section-description">
                        "From messy data to decision-ready insights — our workflow blends automation, precision, and purpose."
                    </p>
                </div>

                // Desktop: horizontal row on a connecting line
                <div class="steps-row">
                    <div class="steps-line"></div>
                    {STEPS.iter().map(|step| {
                        view! {
                            <div class="step group">
                                <div class="step-number">{step.number}</div>
                                <h3 class="step-title">{step.title}</h3>
                                <p class="step-description">{step.description}</p>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                // Mobile: vertical list
                <div class="steps-column">
                    {STEPS.iter().map(|step| {
                        view! {
                            <div class="step-compact">
                                <div class="step-compact-head">
                                    <div class="step-number">{step.number}</div>
                                    <h3 class="step-title">{step.title}</h3>
                                </div>
                                <p class="step-description">{step.description}</p>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_numbered_in_order() {
        let numbers: Vec<_> = STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, ["01", "02", "03", "04"]);
    }
}
