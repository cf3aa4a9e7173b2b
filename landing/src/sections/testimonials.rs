use leptos::prelude::*;

use crate::interaction::Section;

/// Client quote card
pub(crate) struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

impl Testimonial {
    /// Avatar text: first letter of each name part.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub(crate) const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "James Davidson",
        role: "CTO, TechInnovate",
        quote: "Dash-Dev helped us implement a generative AI solution that automated our content creation process. \
                The results were immediate and impressive—we've seen a 40% increase in productivity and a 25% \
                reduction in costs.",
    },
    Testimonial {
        name: "Lisa Patel",
        role: "VP of Analytics, FinServe Group",
        quote: "The data visualization dashboards created by Dash-Dev have transformed how we make decisions. Our \
                executives can now instantly understand complex financial data and make informed decisions faster \
                than ever before.",
    },
    Testimonial {
        name: "Mark Rodriguez",
        role: "Director of Operations, LogiTech Solutions",
        quote: "Working with Dash-Dev on our supply chain optimization project exceeded our expectations. Their AI \
                strategy and implementation helped us reduce delivery times by 30% and cut operational costs by \
                22%.",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id={Section::Testimonials.id()} class="testimonials">
            <div class="container">
                <div class="section-header section-header-left">
                    <h2 class="section-title">"What Our Clients Say"</h2>
                    <p class="section-description">
                        "Hear from the businesses we've helped transform with our AI solutions."
                    </p>
                </div>
                <div class="testimonials-grid">
                    {TESTIMONIALS.iter().map(|t| {
                        view! {
                            <article class="testimonial-card">
                                <div class="testimonial-head">
                                    <div class="testimonial-avatar">{t.initials()}</div>
                                    <div>
                                        <p class="testimonial-name">{t.name}</p>
                                        <p class="testimonial-role">{t.role}</p>
                                    </div>
                                </div>
                                <p class="testimonial-quote">"\""{t.quote}"\""</p>
                            </article>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
