use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::config::{ABOUT_US, CONTACT};

use super::navigation;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "app-footer",
            div { class: "footer-grid",
                div {
                    h3 { class: "footer-heading", "About Us" }
                    p { "{ABOUT_US}" }
                }
                div {
                    h3 { class: "footer-heading", "Quick Links" }
                    ul { class: "footer-links",
                        for item in navigation().iter() {
                            li { key: "{item.label}",
                                Link { to: item.href, "{item.label}" }
                            }
                        }
                    }
                }
                div {
                    h3 { class: "footer-heading", "Contact Us" }
                    p { "{CONTACT.address}" }
                    p { "Phone: {CONTACT.phone}" }
                    p { "Email: {CONTACT.email}" }
                }
            }
        }
    }
}
