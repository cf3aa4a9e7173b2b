// Landing page sections
// Developed by the Dash-Dev team (c)2025

mod about;
mod approach;
mod case_studies;
mod cta;
mod footer;
mod hero;
pub mod icons;
mod nav;
mod solutions;
mod testimonials;

pub use about::{About, PullQuote};
pub use approach::Approach;
pub use case_studies::CaseStudies;
pub use cta::CallToAction;
pub use footer::Footer;
pub use hero::{Hero, HeroActions};
pub use nav::{Header, MobileDrawer, NavLink};
pub use solutions::Solutions;
pub use testimonials::Testimonials;
