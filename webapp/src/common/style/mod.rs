use constcat::concat;

mod components;
mod shell;
mod variables;

pub use components::BASE_COMPONENTS;
pub use shell::SHELL_STYLES;
pub use variables::CSS_VARIABLES;

pub const APP_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
}

a {
  color: inherit;
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    SHELL_STYLES
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_includes_every_sheet() {
        assert!(APP_STYLES.contains(CSS_VARIABLES));
        assert!(APP_STYLES.contains(BASE_COMPONENTS));
        assert!(APP_STYLES.contains(SHELL_STYLES));
    }

    #[test]
    fn both_themes_are_styled() {
        assert!(CSS_VARIABLES.contains(r#"[data-theme="light"]"#));
        assert!(CSS_VARIABLES.contains(r#"[data-theme="dark"]"#));
    }
}
