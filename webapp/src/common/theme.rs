//! Process-wide light/dark theme.
//!
//! [`ThemeProvider`] owns the current [`ThemeName`] and hands out a [`Theme`]
//! handle through context. Components read and flip the theme through the
//! handle only; the provider applies it to the document and remembers it in
//! local storage.

use std::fmt;
use std::str::FromStr;

use dioxus::prelude::*;
use tracing::{debug, error};

use crate::common::storage::{get_local_storage, set_local_storage};

const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
}

impl ThemeName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme. Applying this twice gives back the original.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(anyhow::Error::msg(format!("unknown theme: {other}"))),
        }
    }
}

/// Handle to the shared theme, cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Theme {
    name: Signal<ThemeName>,
}

impl Theme {
    pub fn new(name: Signal<ThemeName>) -> Self {
        Self { name }
    }

    pub fn name(&self) -> ThemeName {
        (self.name)()
    }

    pub fn set(&mut self, name: ThemeName) {
        if *self.name.peek() != name {
            debug!("theme changed to {name}");
            self.name.set(name);
        }
    }

    pub fn toggle(&mut self) {
        let next = self.name.peek().toggled();
        self.set(next);
    }
}

/// Returns the theme provided by the nearest [`ThemeProvider`].
///
/// # Panics
///
/// Panics when no [`ThemeProvider`] is mounted above the caller.
pub fn use_theme() -> Theme {
    use_context::<Theme>()
}

// Stored as the bare name; anything unreadable falls back to the default
fn theme_from_stored(stored: anyhow::Result<Option<String>>) -> ThemeName {
    let parsed = stored.and_then(|name| name.map(|name| name.parse::<ThemeName>()).transpose());

    match parsed {
        Ok(Some(name)) => name,
        Ok(None) => ThemeName::default(),
        Err(err) => {
            error!("failed to load stored theme, using default: {err}");
            ThemeName::default()
        }
    }
}

fn stored_theme() -> ThemeName {
    theme_from_stored(get_local_storage::<String>(THEME_KEY))
}

fn apply_to_document(name: ThemeName) -> anyhow::Result<()> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or_else(|| anyhow::Error::msg("no document element"))?;

    root.set_attribute("data-theme", name.as_str())
        .map_err(|err| anyhow::Error::msg(format!("failed to set data-theme: {err:?}")))
}

#[derive(Clone, PartialEq, Props)]
pub struct ThemeProviderProps {
    children: Element,
}

#[component]
pub fn ThemeProvider(props: ThemeProviderProps) -> Element {
    let name = use_signal(stored_theme);
    use_context_provider(|| Theme::new(name));

    use_effect(move || {
        let current = name();

        if let Err(err) = apply_to_document(current) {
            error!("{err}");
        }

        // set_local_storage already reports to the console
        let _ = set_local_storage(THEME_KEY, current.as_str());
    });

    rsx! {
        div { class: "theme-root", "data-theme": "{name}", {props.children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_light() {
        assert_eq!(ThemeName::default(), ThemeName::Light);
    }

    #[test]
    fn toggle_flips_between_light_and_dark() {
        assert_eq!(ThemeName::Light.toggled(), ThemeName::Dark);
        assert_eq!(ThemeName::Dark.toggled(), ThemeName::Light);
    }

    #[test]
    fn toggling_twice_is_identity() {
        for name in [ThemeName::Light, ThemeName::Dark] {
            assert_eq!(name.toggled().toggled(), name);
        }
    }

    #[test]
    fn names_parse_and_print() {
        assert_eq!("dark".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert_eq!("light".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert!("system".parse::<ThemeName>().is_err());
        assert_eq!(ThemeName::Dark.to_string(), "dark");
    }

    #[test]
    fn stored_names_are_parsed() {
        assert_eq!(theme_from_stored(Ok(Some("dark".to_owned()))), ThemeName::Dark);
        assert_eq!(theme_from_stored(Ok(Some("light".to_owned()))), ThemeName::Light);
    }

    #[test]
    fn unreadable_storage_falls_back_to_light() {
        assert_eq!(theme_from_stored(Ok(None)), ThemeName::Light);
        assert_eq!(theme_from_stored(Ok(Some("sepia".to_owned()))), ThemeName::Light);
        assert_eq!(
            theme_from_stored(Err(anyhow::Error::msg("storage unavailable"))),
            ThemeName::Light
        );
    }

    #[test]
    fn handle_reflects_the_latest_change() {
        let mut dom = VirtualDom::new(|| rsx! {});
        dom.rebuild_in_place();

        dom.in_runtime(|| {
            ScopeId::ROOT.in_runtime(|| {
                let mut theme = Theme::new(Signal::new(ThemeName::Light));
                assert_eq!(theme.name(), ThemeName::Light);

                theme.toggle();
                assert_eq!(theme.name(), ThemeName::Dark);

                theme.toggle();
                assert_eq!(theme.name(), ThemeName::Light);

                theme.set(ThemeName::Dark);
                assert_eq!(theme.name(), ThemeName::Dark);

                theme.set(ThemeName::Dark);
                assert_eq!(theme.name(), ThemeName::Dark);
            })
        });
    }

    #[test]
    fn copies_of_the_handle_share_one_theme() {
        let mut dom = VirtualDom::new(|| rsx! {});
        dom.rebuild_in_place();

        dom.in_runtime(|| {
            ScopeId::ROOT.in_runtime(|| {
                let mut toggle = Theme::new(Signal::new(ThemeName::Light));
                let reader = toggle;

                toggle.toggle();
                assert_eq!(reader.name(), ThemeName::Dark);
            })
        });
    }
}
