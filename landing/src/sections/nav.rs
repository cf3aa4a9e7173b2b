use leptos::ev;
use leptos::prelude::*;

use super::icons::{ICON_BRAIN, ICON_CLOSE, ICON_MENU, Icon};
use crate::PageState;
use crate::config::{BRAND, SiteConfig};
use crate::interaction::Section;

/// Anchor link that smooth-scrolls instead of jumping.
#[component]
pub fn NavLink(section: Section, #[prop(default = "nav-link")] class: &'static str) -> impl IntoView {
    let state = expect_context::<PageState>();
    let config = expect_context::<SiteConfig>();

    let on_click = move |event: ev::MouseEvent| {
        event.prevent_default();
        state.go_to(section, &config);
    };

    view! {
        <a href={section.href()} class=class on:click=on_click>
            {section.label()}
        </a>
    }
}

#[component]
fn Brand() -> impl IntoView {
    view! {
        <div class="nav-brand">
            <Icon paths=ICON_BRAIN size="24" class="icon-primary" />
            <span class="nav-title">{BRAND}</span>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <header class=move || if state.scrolled.get() { "site-header scrolled" } else { "site-header" }>
            <div class="container nav-inner">
                <Brand />

                <nav class="nav-links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section=section /> })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="nav-actions">
                    <button class="btn btn-outline btn-sm">"Contact"</button>
                    <button class="btn btn-primary btn-sm">"Book a Demo"</button>
                </div>

                <button class="nav-menu-btn" on:click=move |_| state.open_menu()>
                    <Icon paths=ICON_MENU size="24" />
                </button>
            </div>
        </header>
    }
}

#[component]
pub fn MobileDrawer() -> impl IntoView {
    let state = expect_context::<PageState>();

    view! {
        <Show when=move || state.is_menu_open()>
            <div class="nav-drawer">
                <div class="container nav-inner">
                    <Brand />
                    <button class="nav-menu-btn" on:click=move |_| state.close_menu()>
                        <Icon paths=ICON_CLOSE size="24" />
                    </button>
                </div>
                <nav class="container drawer-links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section=section class="drawer-link" /> })
                        .collect::<Vec<_>>()}
                    <div class="drawer-actions">
                        <button class="btn btn-outline btn-block">"Contact"</button>
                        <button class="btn btn-primary btn-block">"Book a Demo"</button>
                    </div>
                </nav>
            </div>
        </Show>
    }
}
