//! Tabbed case-study showcase.
//!
//! One panel per [`CaseStudyTab`]; only the active one is mounted.

use leptos::prelude::*;

use super::icons::{ICON_EXTERNAL_LINK, Icon};
use crate::interaction::{CaseStudyTab, Section, TabSelector, TabSet};

/// Panel artwork, referenced by literal path
pub(crate) enum Media {
    Video(&'static str),
    Image { src: &'static str, alt: &'static str },
}

pub(crate) struct CaseStudy {
    pub tab: CaseStudyTab,
    pub title: &'static str,
    pub summary: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: [&'static str; 3],
    pub quote: &'static str,
    pub attribution: &'static str,
    pub media: Media,
}

pub(crate) const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        tab: CaseStudyTab::Ai,
        title: "RAG System",
        summary: "A document intelligence system for policy analysts navigating 15TB of reports across multilateral banks.",
        challenge: "Analysts struggled to find relevant language in thousands of dense policy documents. Manual search was slow and inconsistent.",
        solution: "We built a RAG (Retrieval-Augmented Generation) pipeline using Sentence Transformers, Haystack, and Gemini Pro — enabling filtered QA over massive multilingual corpora.",
        results: [
            "Cut research time by 90%",
            "Improved document coverage and traceability",
            "Deployed securely via Streamlit with metadata filters",
        ],
        quote: "This RAG system completely transformed how we interact with complex policy data.",
        attribution: "Policy analyst",
        media: Media::Video("/wb_rag.mp4"),
    },
    CaseStudy {
        tab: CaseStudyTab::Dashboards,
        title: "Development Tracker",
        summary: "A public dashboard tracking multilateral development bank projects across Pakistan with geospatial filters, visual summaries, and real-time data.",
        challenge: "Local organizations lacked access to clean, up-to-date information about foreign-funded infrastructure projects.",
        solution: "We developed MDB Watchdog — a full-stack platform with Supabase + PostGIS backend and Mapbox-powered frontend, enabling live mapping, project filtering, and leaderboard contributions.",
        results: [
            "Over 3000 development projects mapped",
            "Used by researchers, journalists, and NGOs",
            "Mobile-ready, with community contribution feature",
        ],
        quote: "This dashboard makes foreign-funded development finally visible and accountable.",
        attribution: "Open Data advocate, Islamabad",
        media: Media::Video("/mdb_watchdog.mp4"),
    },
    CaseStudy {
        tab: CaseStudyTab::Infra,
        title: "Sanctions Intelligence Tracker",
        summary: "A unified, automated pipeline for tracking international sanctions data from EU, UK, and UN sources.",
        challenge: "Sanctions data is fragmented across jurisdictions and formats. Tracking designations and updates is time-consuming.",
        solution: "We engineered a Python-based system using Scrapy + Zyte + Supabase to fetch, normalize, and merge updates across multiple sources — complete with UUID-based matching and geospatial enrichment.",
        results: [
            "Daily updated dataset with 100k+ records",
            "Integrated into global compliance workflows",
            "Trackable by source, ID, and geolocation",
        ],
        quote: "Finally, a sanctions tracker that's automated, reliable, and actually usable.",
        attribution: "Risk analyst, global compliance firm",
        media: Media::Image {
            src: "/case-sanctions.png",
            alt: "Sanctions data pipeline",
        },
    },
];

#[component]
pub fn CaseStudies() -> impl IntoView {
    let tabs = RwSignal::new(TabSelector::<CaseStudyTab>::default());

    let select = move |tab: CaseStudyTab| {
        if tabs.try_update(|t| t.select(tab)).unwrap_or(false) {
            tracing::debug!(tab = tab.value(), "case study tab selected");
        }
    };

    view! {
        <section id={Section::CaseStudies.id()} class="case-studies">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Case Studies"</h2>
                    <p class="section-description">
                        "From retrieval systems to real-time dashboards and global sanctions infrastructure — "
                        "our tools turn complexity into clarity."
                    </p>
                </div>

                <div class="tab-bar" role="tablist">
                    {CaseStudyTab::ALL.iter().copied().map(|tab| {
                        view! {
                            <button
                                role="tab"
                                data-tab={tab.value()}
                                class=move || if tabs.get().is_active(tab) { "tab-trigger active" } else { "tab-trigger" }
                                on:click=move |_| select(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                {CASE_STUDIES.iter().map(|study| {
                    let tab = study.tab;
                    view! {
                        <Show when=move || tabs.get().is_active(tab)>
                            <CaseStudyPanel study=study />
                        </Show>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn CaseStudyPanel(study: &'static CaseStudy) -> impl IntoView {
    // `muted` has to be a markup attribute for autoplay
    let media = match study.media {
        Media::Video(src) => view! {
            <div
                class="case-media"
                inner_html=format!(r#"<video src="{src}" muted loop autoplay playsinline></video>"#)
            ></div>
        }
        .into_any(),
        Media::Image { src, alt } => view! {
            <img src=src alt=alt width="800" height="600" class="case-media" />
        }
        .into_any(),
    };

    view! {
        <div class="tab-content active" data-tab-panel={study.tab.value()}>
            <div class="case-grid">
                <div class="case-body">
                    <h3 class="case-title">{study.title}</h3>
                    <p class="case-summary">{study.summary}</p>

                    <div class="case-facts">
                        <div>
                            <h4 class="case-label">"Challenge"</h4>
                            <p>{study.challenge}</p>
                        </div>
                        <div>
                            <h4 class="case-label">"Solution"</h4>
                            <p>{study.solution}</p>
                        </div>
                        <div>
                            <h4 class="case-label">"Results"</h4>
                            <ul class="case-results">
                                {study.results.iter().map(|r| view! {
                                    <li><span class="bullet-dot"></span>{*r}</li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    </div>

                    <div class="case-quote">
                        <p class="case-quote-text">"\""{study.quote}"\""</p>
                        <p class="case-quote-author">"— "{study.attribution}</p>
                    </div>
                </div>

                <div class="case-visual">
                    {media}
                    <div class="case-visual-fade"></div>
                    <div class="case-visual-action">
                        <button class="btn btn-outline btn-xs">
                            <span>"View case study"</span>
                            <Icon paths=ICON_EXTERNAL_LINK size="14" />
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_case_study_per_tab_in_declaration_order() {
        let tabs: Vec<_> = CASE_STUDIES.iter().map(|c| c.tab).collect();
        assert_eq!(tabs, CaseStudyTab::ALL.to_vec());
    }

    #[test]
    fn media_paths_are_absolute() {
        for study in CASE_STUDIES {
            let src = match study.media {
                Media::Video(src) => src,
                Media::Image { src, .. } => src,
            };
            assert!(src.starts_with('/'), "{} -> {src}", study.title);
        }
    }
}
