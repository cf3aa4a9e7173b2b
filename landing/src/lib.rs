//! # dashdev-landing
//!
//! Single-page marketing site for Dash-Dev, rendered client-side with
//! [Leptos](https://leptos.dev/) 0.8 (CSR) and mounted by `main.rs`.
//!
//! ## Architecture
//!
//! - [`interaction`] - drawer, anchor scrolling, scroll listener, tabs
//! - [`sections`] - one component per page section, static content inline
//! - [`config`] - constants and [`config::SiteConfig`]
//! - [`error`] - [`error::NavError`]
//!
//! All view state lives in [`PageState`], created by [`App`] and handed to
//! the sections through Leptos context. Nothing is global.
//!
//! Developed by the Dash-Dev team (c)2025

pub mod config;
pub mod error;
pub mod interaction;
pub mod sections;

use config::SiteConfig;
use error::NavError;
use interaction::{
    BrowserViewport, DrawerState, ScrollSubscription, Section, Viewport, is_scrolled, navigate,
};
use leptos::prelude::*;
use sections::{
    About, Approach, CallToAction, CaseStudies, Footer, Header, Hero, MobileDrawer, PullQuote,
    Solutions, Testimonials,
};

/// View state owned by one rendered page.
#[derive(Debug, Clone, Copy)]
pub struct PageState {
    pub drawer: RwSignal<DrawerState>,
    pub scrolled: RwSignal<bool>,
    /// Last observed vertical offset; the hero fade tracks it.
    pub scroll_y: RwSignal<f64>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

impl PageState {
    pub fn new() -> Self {
        Self {
            drawer: RwSignal::new(DrawerState::default()),
            scrolled: RwSignal::new(false),
            scroll_y: RwSignal::new(0.0),
        }
    }

    pub fn open_menu(&self) {
        if self.drawer.try_update(|d| d.open()).unwrap_or(false) {
            tracing::debug!("menu opened");
        }
    }

    pub fn close_menu(&self) {
        if self.drawer.try_update(|d| d.close()).unwrap_or(false) {
            tracing::debug!("menu closed");
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.drawer.get().is_open()
    }

    /// Scroll listener body: recomputed on every event.
    pub fn on_scroll(&self, offset: f64, threshold: f64) {
        self.scroll_y.set(offset);
        self.scrolled.set(is_scrolled(offset, threshold));
    }

    /// Anchor navigation against any [`Viewport`]; closes the drawer on
    /// success.
    pub fn navigate_in<V: Viewport + ?Sized>(
        &self,
        viewport: &V,
        section: Section,
        config: &SiteConfig,
    ) -> Result<f64, NavError> {
        let mut drawer = self.drawer.get_untracked();
        let destination = navigate(viewport, section, &mut drawer, config)?;
        if drawer != self.drawer.get_untracked() {
            self.drawer.set(drawer);
        }
        tracing::debug!(section = section.id(), destination, "anchor scroll");
        Ok(destination)
    }

    /// Nav-link handler. A missing target (or a missing window) is ignored
    /// without a trace.
    pub fn go_to(&self, section: Section, config: &SiteConfig) {
        let _ = BrowserViewport::new()
            .and_then(|viewport| self.navigate_in(&viewport, section, config));
    }
}

/// The page view.
#[component]
pub fn App() -> impl IntoView {
    let config = SiteConfig::default();
    let state = PageState::new();
    provide_context(config);
    provide_context(state);

    let subscription =
        ScrollSubscription::attach(move |offset| state.on_scroll(offset, config.scroll_threshold));
    on_cleanup(move || subscription.detach());

    tracing::info!("page view mounted");

    view! {
        <div class="page">
            <Header />
            <MobileDrawer />
            <main>
                <Hero />
                <About />
                <PullQuote />
                <Solutions />
                <Approach />
                <CaseStudies />
                <Testimonials />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    struct OneSection {
        id: &'static str,
        top: f64,
        scroll_y: f64,
        requests: RefCell<Vec<f64>>,
    }

    impl Viewport for OneSection {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn element_top(&self, id: &str) -> Result<f64, NavError> {
            if id == self.id {
                Ok(self.top)
            } else {
                Err(NavError::TargetNotFound(id.to_string()))
            }
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.requests.borrow_mut().push(top);
        }
    }

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        Owner::new().with(f)
    }

    #[test]
    fn menu_toggles_are_idempotent() {
        with_owner(|| {
            let state = PageState::new();
            assert!(!state.is_menu_open());
            state.open_menu();
            state.open_menu();
            assert!(state.is_menu_open());
            state.close_menu();
            assert!(!state.is_menu_open());
        });
    }

    #[test]
    fn scroll_updates_header_flag() {
        with_owner(|| {
            let state = PageState::new();
            state.on_scroll(20.0, 20.0);
            assert!(!state.scrolled.get_untracked());
            state.on_scroll(21.0, 20.0);
            assert!(state.scrolled.get_untracked());
            state.on_scroll(0.0, 20.0);
            assert!(!state.scrolled.get_untracked());
            assert_eq!(state.scroll_y.get_untracked(), 0.0);
        });
    }

    #[test]
    fn scroll_does_not_touch_drawer() {
        with_owner(|| {
            let state = PageState::new();
            state.open_menu();
            state.on_scroll(500.0, 20.0);
            assert!(state.is_menu_open());
        });
    }

    #[test]
    fn navigation_closes_drawer_and_reports_destination() {
        with_owner(|| {
            let state = PageState::new();
            let viewport = OneSection {
                id: "case-studies",
                top: 420.0,
                scroll_y: 1000.0,
                requests: RefCell::new(Vec::new()),
            };
            state.open_menu();

            let dest = state
                .navigate_in(&viewport, Section::CaseStudies, &SiteConfig::default())
                .unwrap();

            assert_eq!(dest, 1340.0);
            assert_eq!(*viewport.requests.borrow(), vec![1340.0]);
            assert!(!state.is_menu_open());
        });
    }

    #[test]
    fn navigation_to_missing_section_keeps_drawer_open() {
        with_owner(|| {
            let state = PageState::new();
            let viewport = OneSection {
                id: "about",
                top: 0.0,
                scroll_y: 0.0,
                requests: RefCell::new(Vec::new()),
            };
            state.open_menu();

            let result = state.navigate_in(&viewport, Section::Testimonials, &SiteConfig::default());

            assert!(result.is_err());
            assert!(viewport.requests.borrow().is_empty());
            assert!(state.is_menu_open());
        });
    }
}
