//! Site-wide constants and the [`SiteConfig`] handed to components through
//! Leptos context.

/// Brand name used in the header, drawer and footer (single source of truth)
pub const BRAND: &str = "Dash-Dev";

/// Footer tagline
pub const TAGLINE: &str = "AI Solutions Engineered for Business Impact";

/// Year printed in the copyright line
pub const COPYRIGHT_YEAR: u16 = 2025;

/// Height of the fixed header in CSS pixels; subtracted from every anchor
/// scroll destination so the section top is not hidden under it.
pub const HEADER_OFFSET: f64 = 80.0;

/// Vertical offset above which the header switches to its scrolled style.
/// The comparison is strict: exactly 20 is still "not scrolled".
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// Scale of the hero content once it has fully scrolled out of view.
pub const HERO_MIN_SCALE: f64 = 0.8;

/// Tunables read by the interactive parts of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    /// See [`HEADER_OFFSET`].
    pub header_offset: f64,
    /// See [`SCROLL_THRESHOLD`].
    pub scroll_threshold: f64,
    /// See [`HERO_MIN_SCALE`].
    pub hero_min_scale: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: HEADER_OFFSET,
            scroll_threshold: SCROLL_THRESHOLD,
            hero_min_scale: HERO_MIN_SCALE,
        }
    }
}

impl SiteConfig {
    /// Copyright line shown at the bottom of the footer.
    pub fn copyright(&self) -> String {
        format!("© {COPYRIGHT_YEAR} {BRAND}. All rights reserved.")
    }
}
