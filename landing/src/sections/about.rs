use leptos::prelude::*;

use crate::config::BRAND;
use crate::interaction::Section;

/// Capability card in the about grid
pub(crate) struct Feature {
    pub title: &'static str,
    pub text: &'static str,
}

pub(crate) const FEATURES: &[Feature] = &[
    Feature {
        title: "Data Harvesting & Augmentation",
        text: "Extract structured and unstructured data from websites, PDFs, APIs, and multilingual sources across 20+ languages.",
    },
    Feature {
        title: "Domain-Specific AI",
        text: "Tailored AI systems for law, finance, geopolitics, and infrastructure — focused on classification, prediction, and risk signals.",
    },
    Feature {
        title: "Dashboards & Mapping",
        text: "Real-time platforms with live KPIs, spatial layers, and one-click reporting. Designed for speed, clarity, and impact.",
    },
    Feature {
        title: "Open & Secure Infrastructure",
        text: "Open-source, privacy-first architecture. Seamless APIs. Zero license fees. Built for interoperability and auditability.",
    },
];

#[component]
pub fn About() -> impl IntoView {
    let heading = format!("About {BRAND}");
    view! {
        <section id={Section::About.id()} class="about">
            <div class="container about-grid">
                <div class="about-text">
                    <h2 class="section-title">{heading}</h2>
                    <p class="section-description">
                        "We’re a Brooklyn-based, full-stack team of engineers, developers, analysts, researchers, "
                        "and designers building tailored data and AI solutions for clients across the US, Europe, "
                        "China, and MENA."
                    </p>
                </div>
                <div class="about-cards">
                    {FEATURES.iter().map(|feature| {
                        view! {
                            <article class="feature-card">
                                <h3 class="feature-title">{feature.title}</h3>
                                <p class="feature-text">{feature.text}</p>
                            </article>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Single-quote band between about and solutions
#[component]
pub fn PullQuote() -> impl IntoView {
    view! {
        <section class="pull-quote">
            <div class="container">
                <blockquote class="pull-quote-text">
                    "“We build systems that turn messy, multilingual data into clear, actionable insight”"
                </blockquote>
            </div>
        </section>
    }
}
