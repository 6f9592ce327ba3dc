use dioxus::prelude::*;

use crate::common::icons::{Glyph, Icon};

/// Why the sheet asked to be closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    CloseButton,
    Backdrop,
    Escape,
}

#[derive(Clone, PartialEq, Props)]
pub struct SheetProps {
    open: bool,
    #[props(into)]
    title: String,
    #[props(into, default)]
    description: Option<String>,
    on_close: EventHandler<Dismissal>,
    children: Element,
}

/// Dismissible panel sliding in from the left edge of the page.
///
/// Emits `on_close` for the close button, a click on the backdrop, or the
/// Escape key; the owner decides whether to actually close.
#[component]
pub fn Sheet(props: SheetProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    let on_close = props.on_close;

    rsx! {
        div {
            class: "sheet-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                on_close.call(Dismissal::Backdrop);
            },
            div {
                class: "sheet-panel",
                role: "dialog",
                "aria-modal": "true",
                tabindex: "-1",
                // Clicks inside the panel must not reach the backdrop
                onclick: move |evt| evt.stop_propagation(),
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        on_close.call(Dismissal::Escape);
                    }
                },
                onmounted: move |evt| async move {
                    let _ = evt.set_focus(true).await;
                },
                button {
                    class: "btn btn-ghost btn-icon sheet-close",
                    onclick: move |_| on_close.call(Dismissal::CloseButton),
                    Glyph { icon: Icon::Close }
                    span { class: "sr-only", "Close" }
                }
                div { class: "sheet-header",
                    h2 { class: "sheet-title", "{props.title}" }
                    if let Some(description) = props.description {
                        p { class: "sheet-description", "{description}" }
                    }
                }
                {props.children}
            }
        }
    }
}
