//! Smooth anchor scrolling with fixed-header compensation.
//!
//! The DOM is reached through [`Viewport`] so the offset arithmetic and the
//! drawer side effect can be checked without a browser. [`BrowserViewport`]
//! is the `web_sys` implementation used by the page.

use crate::config::SiteConfig;
use crate::error::NavError;

use super::anchors::Section;
use super::drawer::DrawerState;

/// What the scroll handler needs from the document.
pub trait Viewport {
    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;

    /// Top of the element with `id`, relative to the visible viewport
    /// (bounding-rect semantics).
    fn element_top(&self, id: &str) -> Result<f64, NavError>;

    /// Start an animated scroll to the absolute offset `top`. Not awaited.
    fn smooth_scroll_to(&self, top: f64);
}

/// Absolute scroll offset that puts an element just under the fixed header.
pub fn scroll_destination(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    element_top + scroll_y - header_offset
}

/// Scroll to the element with `id`, issuing exactly one scroll request.
///
/// Returns the requested destination. A missing element issues nothing.
pub fn scroll_to_anchor<V: Viewport + ?Sized>(
    viewport: &V,
    id: &str,
    header_offset: f64,
) -> Result<f64, NavError> {
    let top = viewport.element_top(id)?;
    let destination = scroll_destination(top, viewport.scroll_y(), header_offset);
    viewport.smooth_scroll_to(destination);
    Ok(destination)
}

/// Nav-link click: scroll to `section` and, on success, close the drawer.
///
/// On failure the drawer is left as it was.
pub fn navigate<V: Viewport + ?Sized>(
    viewport: &V,
    section: Section,
    drawer: &mut DrawerState,
    config: &SiteConfig,
) -> Result<f64, NavError> {
    let destination = scroll_to_anchor(viewport, section.id(), config.header_offset)?;
    drawer.close();
    Ok(destination)
}

/// [`Viewport`] over the live browser window.
#[derive(Debug, Clone)]
pub struct BrowserViewport {
    window: web_sys::Window,
}

impl BrowserViewport {
    pub fn new() -> Result<Self, NavError> {
        web_sys::window()
            .map(|window| Self { window })
            .ok_or(NavError::NoWindow)
    }
}

impl Viewport for BrowserViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn element_top(&self, id: &str) -> Result<f64, NavError> {
        let document = self.window.document().ok_or(NavError::NoDocument)?;
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| NavError::TargetNotFound(id.to_string()))?;
        Ok(element.get_bounding_client_rect().top())
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory document: element tops by id plus a log of scroll requests.
    #[derive(Default)]
    struct MockViewport {
        scroll_y: f64,
        tops: HashMap<String, f64>,
        requests: RefCell<Vec<f64>>,
    }

    impl MockViewport {
        fn with_all_sections(scroll_y: f64) -> Self {
            let tops = Section::ALL
                .iter()
                .enumerate()
                .map(|(i, s)| (s.id().to_string(), 100.0 + 250.0 * i as f64))
                .collect();
            Self {
                scroll_y,
                tops,
                ..Default::default()
            }
        }
    }

    impl Viewport for MockViewport {
        fn scroll_y(&self) -> f64 {
            self.scroll_y
        }

        fn element_top(&self, id: &str) -> Result<f64, NavError> {
            self.tops
                .get(id)
                .copied()
                .ok_or_else(|| NavError::TargetNotFound(id.to_string()))
        }

        fn smooth_scroll_to(&self, top: f64) {
            self.requests.borrow_mut().push(top);
        }
    }

    #[test]
    fn destination_subtracts_header_offset() {
        assert_eq!(scroll_destination(300.0, 1200.0, 80.0), 1420.0);
        assert_eq!(scroll_destination(-500.0, 1200.0, 80.0), 620.0);
    }

    #[test]
    fn every_section_scrolls_once_to_top_plus_scroll_minus_offset() {
        let cfg = SiteConfig::default();
        for section in Section::ALL {
            let viewport = MockViewport::with_all_sections(640.0);
            let mut drawer = DrawerState::default();
            let top = viewport.tops[section.id()];

            let dest = navigate(&viewport, section, &mut drawer, &cfg).unwrap();

            assert_eq!(dest, top + 640.0 - 80.0, "section {section}");
            assert_eq!(*viewport.requests.borrow(), vec![dest], "section {section}");
        }
    }

    #[test]
    fn missing_target_issues_no_request() {
        let viewport = MockViewport::default();
        let err = scroll_to_anchor(&viewport, "testimonials", 80.0).unwrap_err();

        assert_eq!(err, NavError::TargetNotFound("testimonials".into()));
        assert!(viewport.requests.borrow().is_empty());
    }

    #[test]
    fn successful_navigation_closes_open_drawer() {
        let viewport = MockViewport::with_all_sections(0.0);
        let mut drawer = DrawerState::default();
        drawer.open();

        navigate(&viewport, Section::Solutions, &mut drawer, &SiteConfig::default()).unwrap();
        assert!(!drawer.is_open());

        // Already closed stays closed
        navigate(&viewport, Section::About, &mut drawer, &SiteConfig::default()).unwrap();
        assert!(!drawer.is_open());
    }

    #[test]
    fn failed_navigation_leaves_drawer_alone() {
        let viewport = MockViewport::default();
        let mut drawer = DrawerState::default();
        drawer.open();

        let result = navigate(&viewport, Section::Approach, &mut drawer, &SiteConfig::default());

        assert_eq!(result, Err(NavError::TargetNotFound("approach".into())));
        assert!(drawer.is_open());
    }

    #[test]
    fn consecutive_navigations_each_issue_a_request() {
        let viewport = MockViewport::with_all_sections(0.0);
        let mut drawer = DrawerState::default();
        let cfg = SiteConfig::default();

        navigate(&viewport, Section::About, &mut drawer, &cfg).unwrap();
        navigate(&viewport, Section::CaseStudies, &mut drawer, &cfg).unwrap();

        assert_eq!(*viewport.requests.borrow(), vec![20.0, 770.0]);
    }
}
