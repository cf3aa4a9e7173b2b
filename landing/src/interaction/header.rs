//! Scroll-driven header styling and hero fade.
//!
//! One window `scroll` listener feeds both. It lives in a
//! [`ScrollSubscription`], which removes the listener when dropped; the page
//! view drops it from its cleanup hook.

use leptos::ev;
use leptos::prelude::*;

/// Header style switch. Strictly greater than: `offset == threshold` is not
/// scrolled.
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Opacity and scale applied to the hero content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFade {
    pub opacity: f64,
    pub scale: f64,
}

impl HeroFade {
    pub const VISIBLE: HeroFade = HeroFade {
        opacity: 1.0,
        scale: 1.0,
    };

    /// Fade for a hero whose bounding rect currently starts at `hero_top`
    /// (viewport-relative) and is `hero_height` tall.
    ///
    /// Progress runs from 0 when the hero top touches the viewport top to 1
    /// when its bottom does.
    pub fn at(hero_top: f64, hero_height: f64, min_scale: f64) -> Self {
        if hero_height <= 0.0 {
            return Self::VISIBLE;
        }
        let progress = (-hero_top / hero_height).clamp(0.0, 1.0);
        Self {
            opacity: 1.0 - progress,
            scale: 1.0 - (1.0 - min_scale) * progress,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: scale({:.3});",
            self.opacity, self.scale
        )
    }
}

/// Live window `scroll` listener. Detached on drop.
pub struct ScrollSubscription {
    handle: Option<WindowListenerHandle>,
}

impl ScrollSubscription {
    /// Call `on_scroll` with the current vertical offset on every scroll
    /// event, with no throttling.
    pub fn attach(on_scroll: impl Fn(f64) + 'static) -> Self {
        let handle = window_event_listener(ev::scroll, move |_| {
            let offset = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            on_scroll(offset);
        });
        tracing::debug!("scroll listener attached");
        Self {
            handle: Some(handle),
        }
    }

    pub fn detach(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.remove();
            tracing::debug!("scroll listener detached");
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, 20.0));
        assert!(!is_scrolled(19.9, 20.0));
        assert!(!is_scrolled(20.0, 20.0));
        assert!(is_scrolled(20.5, 20.0));
        assert!(is_scrolled(5000.0, 20.0));
    }

    #[test]
    fn hero_fully_visible_at_top() {
        assert_eq!(HeroFade::at(0.0, 600.0, 0.8), HeroFade::VISIBLE);
        // Below the viewport top (e.g. overscroll) clamps to 0
        assert_eq!(HeroFade::at(40.0, 600.0, 0.8), HeroFade::VISIBLE);
    }

    #[test]
    fn hero_halfway() {
        let fade = HeroFade::at(-300.0, 600.0, 0.8);
        assert!((fade.opacity - 0.5).abs() < 1e-9);
        assert!((fade.scale - 0.9).abs() < 1e-9);
    }

    #[test]
    fn hero_gone_clamps_to_min() {
        let fade = HeroFade::at(-2000.0, 600.0, 0.8);
        assert_eq!(fade.opacity, 0.0);
        assert!((fade.scale - 0.8).abs() < 1e-9);
    }

    #[test]
    fn zero_height_hero_stays_visible() {
        assert_eq!(HeroFade::at(-100.0, 0.0, 0.8), HeroFade::VISIBLE);
    }

    #[test]
    fn style_string() {
        assert_eq!(
            HeroFade::at(-300.0, 600.0, 0.8).style(),
            "opacity: 0.500; transform: scale(0.900);"
        );
    }
}
