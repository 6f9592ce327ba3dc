//! Open/closed state of the compact side menu.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Everything that can move the side menu between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Trigger,
    CloseButton,
    Backdrop,
    Escape,
    /// A navigation item inside the menu was activated.
    Navigate,
    /// The viewport grew past the desktop breakpoint.
    Widened,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// The state after `event`, or `None` when the event changes nothing.
    pub fn next(self, event: MenuEvent) -> Option<MenuState> {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Trigger) => Some(MenuState::Open),
            (MenuState::Open, MenuEvent::Trigger) => None,
            (MenuState::Open, _) => Some(MenuState::Closed),
            (MenuState::Closed, _) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSING: [MenuEvent; 5] = [
        MenuEvent::CloseButton,
        MenuEvent::Backdrop,
        MenuEvent::Escape,
        MenuEvent::Navigate,
        MenuEvent::Widened,
    ];

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn trigger_opens() {
        assert_eq!(MenuState::Closed.next(MenuEvent::Trigger), Some(MenuState::Open));
    }

    #[test]
    fn every_dismissal_closes() {
        for event in CLOSING {
            assert_eq!(MenuState::Open.next(event), Some(MenuState::Closed), "{event:?}");
        }
    }

    #[test]
    fn redundant_events_report_no_change() {
        assert_eq!(MenuState::Open.next(MenuEvent::Trigger), None);
        for event in CLOSING {
            assert_eq!(MenuState::Closed.next(event), None, "{event:?}");
        }
    }
}
