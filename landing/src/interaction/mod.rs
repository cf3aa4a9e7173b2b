//! Client-side interaction: drawer, anchor scrolling, scroll listener, tabs.
//!
//! Everything here except [`ScrollSubscription`] and [`BrowserViewport`] is
//! plain data and arithmetic, testable off the browser.

mod anchors;
mod drawer;
mod header;
mod scroll;
mod tabs;

pub use anchors::Section;
pub use drawer::DrawerState;
pub use header::{HeroFade, ScrollSubscription, is_scrolled};
pub use scroll::{BrowserViewport, Viewport, navigate, scroll_destination, scroll_to_anchor};
pub use tabs::{CaseStudyTab, TabSelector, TabSet};
