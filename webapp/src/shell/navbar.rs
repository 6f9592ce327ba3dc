use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::common::icons::{Glyph, Icon};
use crate::common::motion::{Animated, Motion};
use crate::common::theme::use_theme;
use crate::common::viewport::Viewport;
use crate::config::BRAND;

use super::navigation;

/// How the navigation bar lays itself out for a viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPresentation {
    /// Every navigation item inline, plus the theme toggle.
    Inline,
    /// Theme toggle and the side menu trigger only.
    Compact,
}

impl NavPresentation {
    pub fn for_viewport(viewport: Viewport) -> Self {
        match viewport {
            Viewport::Desktop => NavPresentation::Inline,
            Viewport::Compact => NavPresentation::Compact,
        }
    }

    pub fn shows_links(self) -> bool {
        self == NavPresentation::Inline
    }

    pub fn shows_menu_trigger(self) -> bool {
        self == NavPresentation::Compact
    }

    pub fn shows_theme_toggle(self) -> bool {
        true
    }
}

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let next = theme.name().toggled();

    rsx! {
        button {
            class: "btn btn-ghost btn-icon theme-toggle",
            title: "Switch to {next} theme",
            onclick: move |_| theme.toggle(),
            Glyph { icon: Icon::Sun, class: "icon glyph-sun" }
            Glyph { icon: Icon::Moon, class: "icon glyph-moon" }
            span { class: "sr-only", "Toggle theme" }
        }
    }
}

#[component]
fn DesktopNav() -> Element {
    rsx! {
        div { class: "nav-links",
            for item in navigation().iter() {
                Link {
                    key: "{item.label}",
                    class: "btn btn-ghost",
                    to: item.href,
                    Glyph { icon: item.icon }
                    "{item.label}"
                }
            }
            ThemeToggle {}
        }
    }
}

#[component]
fn CompactNav(on_menu_trigger: EventHandler<()>) -> Element {
    rsx! {
        div { class: "nav-compact",
            ThemeToggle {}
            button {
                class: "btn btn-ghost btn-icon",
                "aria-haspopup": "dialog",
                onclick: move |_| on_menu_trigger.call(()),
                Glyph { icon: Icon::Menu }
                span { class: "sr-only", "Toggle menu" }
            }
        }
    }
}

#[component]
pub fn NavigationBar(presentation: NavPresentation, on_menu_trigger: EventHandler<()>) -> Element {
    rsx! {
        nav { class: "app-nav",
            Animated { motion: Motion::slide_in(0.0, -20.0, 0.5),
                h1 { class: "brand", "{BRAND}" }
            }
            match presentation {
                NavPresentation::Inline => rsx! {
                    DesktopNav {}
                },
                NavPresentation::Compact => rsx! {
                    CompactNav { on_menu_trigger }
                },
            }
        }
    }
}
