use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::common::icons::Glyph;
use crate::common::motion::{Animated, Motion};
use crate::common::sheet::{Dismissal, Sheet};
use crate::config::{NavigationItem, SIDE_MENU_DESCRIPTION, SIDE_MENU_TITLE};

use super::{MenuEvent, navigation};

/// Menu rows with their staggered entrance.
pub fn entries(items: &'static [NavigationItem]) -> Vec<(NavigationItem, Motion)> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let motion = Motion::slide_in(-20.0, 0.0, 0.2)
                .staggered(index, 0.1)
                .pressable(1.05, 0.95);
            (*item, motion)
        })
        .collect()
}

#[component]
pub fn SideMenuPanel(open: bool, on_event: EventHandler<MenuEvent>) -> Element {
    rsx! {
        Sheet {
            open,
            title: SIDE_MENU_TITLE,
            description: SIDE_MENU_DESCRIPTION.to_owned(),
            on_close: move |dismissal: Dismissal| {
                let event = match dismissal {
                    Dismissal::CloseButton => MenuEvent::CloseButton,
                    Dismissal::Backdrop => MenuEvent::Backdrop,
                    Dismissal::Escape => MenuEvent::Escape,
                };
                on_event.call(event);
            },
            nav { class: "side-menu",
                for (item, motion) in entries(navigation()) {
                    Animated { key: "{item.label}", motion,
                        Link {
                            class: "side-menu-link",
                            to: item.href,
                            onclick: move |_| on_event.call(MenuEvent::Navigate),
                            Glyph { icon: item.icon }
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
