//! The landing page: navigation bar, side menu, content and footer.
//!
//! [`AppShell`] owns the side menu state and the measured viewport. The theme
//! comes from the surrounding [`ThemeProvider`](crate::common::theme::ThemeProvider).
//! What gets drawn is decided by [`Layout::compute`] so the rendering rules
//! can be checked without a browser.

use dioxus::prelude::*;
use tracing::debug;

use crate::common::viewport::Viewport;
use crate::config::{MENU_ITEMS, NavigationItem};

mod content;
mod footer;
mod menu;
mod navbar;
mod side_menu;

use content::ContentArea;
use footer::Footer;
use navbar::NavigationBar;
use side_menu::SideMenuPanel;

pub use menu::{MenuEvent, MenuState};
pub use navbar::NavPresentation;

/// The one ordered navigation list behind every menu on the page.
pub fn navigation() -> &'static [NavigationItem] {
    MENU_ITEMS
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub nav: NavPresentation,
    pub side_menu: bool,
}

impl Layout {
    pub fn compute(viewport: Viewport, menu: MenuState) -> Self {
        Layout {
            nav: NavPresentation::for_viewport(viewport),
            side_menu: viewport == Viewport::Compact && menu.is_open(),
        }
    }
}

fn dispatch(mut menu: Signal<MenuState>, event: MenuEvent) {
    let current = *menu.peek();

    if let Some(next) = current.next(event) {
        debug!("side menu {current:?} -> {next:?} on {event:?}");
        menu.set(next);
    }
}

#[component]
pub fn AppShell() -> Element {
    let menu = use_signal(MenuState::default);
    let mut viewport = use_signal(Viewport::current);

    let layout = Layout::compute(viewport(), menu());

    rsx! {
        div {
            class: "app-shell",
            onresize: move |evt| {
                let Ok(size) = evt.get_border_box_size() else {
                    return;
                };

                let next = Viewport::from_width(size.width);
                if next != *viewport.peek() {
                    debug!("viewport changed to {next:?}");
                    viewport.set(next);

                    if next == Viewport::Desktop {
                        dispatch(menu, MenuEvent::Widened);
                    }
                }
            },
            NavigationBar {
                presentation: layout.nav,
                on_menu_trigger: move |_| dispatch(menu, MenuEvent::Trigger),
            }
            SideMenuPanel {
                open: layout.side_menu,
                on_event: move |event: MenuEvent| dispatch(menu, event),
            }
            ContentArea {}
            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::theme::ThemeName;

    fn walk(state: MenuState, events: &[MenuEvent]) -> MenuState {
        events
            .iter()
            .fold(state, |state, event| state.next(*event).unwrap_or(state))
    }

    #[test]
    fn initial_layout_hides_the_side_menu() {
        for viewport in [Viewport::Compact, Viewport::Desktop] {
            let layout = Layout::compute(viewport, MenuState::default());
            assert!(!layout.side_menu);
        }
    }

    #[test]
    fn compact_trigger_shows_the_side_menu() {
        let menu = walk(MenuState::default(), &[MenuEvent::Trigger]);
        let layout = Layout::compute(Viewport::Compact, menu);

        assert!(layout.side_menu);
        assert_eq!(layout.nav, NavPresentation::Compact);
        assert!(layout.nav.shows_menu_trigger());
        assert!(!layout.nav.shows_links());
    }

    #[test]
    fn desktop_never_shows_the_side_menu() {
        let layout = Layout::compute(Viewport::Desktop, MenuState::Open);

        assert!(!layout.side_menu);
        assert!(layout.nav.shows_links());
        assert!(!layout.nav.shows_menu_trigger());
    }

    #[test]
    fn theme_toggle_is_always_available() {
        for viewport in [Viewport::Compact, Viewport::Desktop] {
            assert!(NavPresentation::for_viewport(viewport).shows_theme_toggle());
        }
    }

    #[test]
    fn side_menu_rows_follow_the_navigation_list() {
        let expected: Vec<_> = MENU_ITEMS.iter().map(|item| item.label).collect();
        let rows: Vec<_> = side_menu::entries(navigation())
            .iter()
            .map(|(item, _)| item.label)
            .collect();

        assert_eq!(rows, expected);
        assert_eq!(rows, ["Home", "Users", "Settings", "Help", "Contact"]);
    }

    #[test]
    fn dispatch_applies_transitions_and_skips_redundant_ones() {
        let mut dom = VirtualDom::new(|| rsx! {});
        dom.rebuild_in_place();

        dom.in_runtime(|| {
            ScopeId::ROOT.in_runtime(|| {
                let menu = Signal::new(MenuState::default());

                dispatch(menu, MenuEvent::Escape);
                assert_eq!(*menu.peek(), MenuState::Closed);

                dispatch(menu, MenuEvent::Trigger);
                assert_eq!(*menu.peek(), MenuState::Open);

                dispatch(menu, MenuEvent::Trigger);
                assert_eq!(*menu.peek(), MenuState::Open);

                dispatch(menu, MenuEvent::Navigate);
                assert_eq!(*menu.peek(), MenuState::Closed);
            })
        });
    }

    #[test]
    fn landing_page_walkthrough() {
        let viewport = Viewport::Compact;
        let mut menu = MenuState::default();
        let theme = ThemeName::default();

        assert!(!Layout::compute(viewport, menu).side_menu);
        assert_eq!(theme, ThemeName::Light);

        menu = walk(menu, &[MenuEvent::Trigger]);
        assert!(Layout::compute(viewport, menu).side_menu);

        // Following a link from the side menu closes it
        menu = walk(menu, &[MenuEvent::Navigate]);
        assert!(!Layout::compute(viewport, menu).side_menu);

        let toggled = theme.toggled().toggled();
        assert_eq!(toggled, theme);
    }
}
