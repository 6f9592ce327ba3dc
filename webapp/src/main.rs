#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;
use common::theme::ThemeProvider;

mod config;

mod shell;
use shell::AppShell;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// Every destination renders the landing page; the hrefs in the navigation
// lists are plain strings and need no dedicated routes
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/:..segments")]
    Elsewhere { segments: Vec<String> },
}

#[component]
fn Landing() -> Element {
    rsx! {
        AppShell {}
    }
}

#[component]
fn Elsewhere(segments: Vec<String>) -> Element {
    tracing::debug!("rendering landing page for /{}", segments.join("/"));

    rsx! {
        AppShell {}
    }
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::APP_STYLES}" }
        ThemeProvider {
            Router::<Route> { config: RouterConfig::default }
        }
    }
}
