use leptos::prelude::*;

use super::icons::{
    ICON_BRAIN, ICON_GITHUB, ICON_LINKEDIN, ICON_MAIL, ICON_MAP_PIN, ICON_PHONE, ICON_TWITTER,
    Icon,
};
use crate::config::{BRAND, SiteConfig, TAGLINE};

/// Footer link column
struct LinkGroup {
    heading: &'static str,
    links: &'static [&'static str],
}

const LINK_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        heading: "Company",
        links: &["About Us", "Careers", "Blog"],
    },
    LinkGroup {
        heading: "Services",
        links: &["Generative AI", "Data Visualization", "AI Strategy"],
    },
];

const SOCIAL: &[(&str, &[&str])] = &[
    ("Twitter", ICON_TWITTER),
    ("LinkedIn", ICON_LINKEDIN),
    ("GitHub", ICON_GITHUB),
];

const CONTACT: &[(&[&str], &str)] = &[
    (ICON_PHONE, "+1 (555) 123-4567"),
    (ICON_MAIL, "info@dash-dev.com"),
    (ICON_MAP_PIN, "123 Broadway, New York, NY 10007"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-top">
                    <div class="footer-brand">
                        <div class="nav-brand">
                            <Icon paths=ICON_BRAIN class="icon-primary" />
                            <span class="footer-title">{BRAND}</span>
                        </div>
                        <p class="footer-tagline">{TAGLINE}</p>
                        <div class="footer-social">
                            {SOCIAL.iter().map(|(label, icon)| view! {
                                <a href="#" class="footer-link" aria-label={*label}>
                                    <Icon paths={*icon} stroke_width="1.5" />
                                </a>
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="footer-columns">
                        {LINK_GROUPS.iter().map(|group| view! {
                            <div>
                                <h3 class="footer-heading">{group.heading}</h3>
                                <ul class="footer-list">
                                    {group.links.iter().map(|link| view! {
                                        <li><a href="#" class="footer-link">{*link}</a></li>
                                    }).collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }).collect::<Vec<_>>()}

                        <div>
                            <h3 class="footer-heading">"Contact"</h3>
                            <ul class="footer-list">
                                {CONTACT.iter().map(|(icon, text)| view! {
                                    <li class="footer-contact">
                                        <Icon paths={*icon} size="16" stroke_width="1.5" class="icon-muted" />
                                        <span>{*text}</span>
                                    </li>
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">{config.copyright()}</p>
                    <div class="footer-legal">
                        <a href="#" class="footer-link">"Privacy Policy"</a>
                        <a href="#" class="footer-link">"Terms of Service"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
