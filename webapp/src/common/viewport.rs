use crate::config::DESKTOP_MIN_WIDTH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewport {
    Compact,
    Desktop,
}

impl Viewport {
    pub fn from_width(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Viewport::Desktop
        } else {
            Viewport::Compact
        }
    }

    /// Reads the document width without the scrollbar, the same box the
    /// shell measures on resize. Assumes desktop when there is no document.
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .map(|root| Viewport::from_width(f64::from(root.client_width())))
            .unwrap_or(Viewport::Desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(Viewport::from_width(767.9), Viewport::Compact);
        assert_eq!(Viewport::from_width(768.0), Viewport::Desktop);
        assert_eq!(Viewport::from_width(1440.0), Viewport::Desktop);
        assert_eq!(Viewport::from_width(0.0), Viewport::Compact);
    }
}
