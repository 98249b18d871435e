//! State machine behind the navigation shell.
//!
//! The shell has three menus and a scroll-driven style. Each is a small enum
//! and every change goes through [`MenuState::apply`], so there is a single
//! place where transitions happen and no way to render a sub-dropdown under a
//! closed mobile menu.

use crate::nav::is_quick_access_active;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DesktopDropdown {
    #[default]
    Closed,
    Open,
}

/// Mobile menu with its nested quick-access section.
///
/// A closed menu still remembers whether the section was expanded, so the
/// hamburger reopens it as it was left. Only link activation clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobileMenu {
    Closed { dropdown_remembered: bool },
    Open { dropdown_open: bool },
}

impl Default for MobileMenu {
    fn default() -> Self {
        MobileMenu::Closed {
            dropdown_remembered: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollMode {
    #[default]
    Relaxed,
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    ToggleDesktopDropdown,
    /// Focus left an element inside the desktop dropdown container.
    /// `focus_within` tells whether the new focus target is still inside it.
    DropdownFocusLost { focus_within: bool },
    ToggleMobileMenu,
    ToggleMobileDropdown,
    /// Any shell link was clicked, primary or quick access, desktop or mobile.
    LinkActivated,
    Scrolled { offset_y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuState {
    pub desktop: DesktopDropdown,
    pub mobile: MobileMenu,
    pub scroll: ScrollMode,
    compact_threshold: f64,
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new(20.0)
    }
}

impl MenuState {
    pub fn new(compact_threshold: f64) -> Self {
        Self {
            desktop: DesktopDropdown::default(),
            mobile: MobileMenu::default(),
            scroll: ScrollMode::default(),
            compact_threshold,
        }
    }

    /// Applies one UI event. Returns `true` if the state changed.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        let before = *self;

        match event {
            NavEvent::ToggleDesktopDropdown => {
                self.desktop = match self.desktop {
                    DesktopDropdown::Closed => DesktopDropdown::Open,
                    DesktopDropdown::Open => DesktopDropdown::Closed,
                };
            }
            NavEvent::DropdownFocusLost { focus_within } => {
                if !focus_within {
                    self.desktop = DesktopDropdown::Closed;
                }
            }
            NavEvent::ToggleMobileMenu => {
                self.mobile = match self.mobile {
                    MobileMenu::Closed {
                        dropdown_remembered,
                    } => MobileMenu::Open {
                        dropdown_open: dropdown_remembered,
                    },
                    MobileMenu::Open { dropdown_open } => MobileMenu::Closed {
                        dropdown_remembered: dropdown_open,
                    },
                };
            }
            NavEvent::ToggleMobileDropdown => {
                // The section header is only rendered inside an open menu.
                if let MobileMenu::Open { dropdown_open } = self.mobile {
                    self.mobile = MobileMenu::Open {
                        dropdown_open: !dropdown_open,
                    };
                }
            }
            NavEvent::LinkActivated => {
                self.desktop = DesktopDropdown::Closed;
                self.mobile = MobileMenu::Closed {
                    dropdown_remembered: false,
                };
            }
            NavEvent::Scrolled { offset_y } => {
                self.scroll = if offset_y > self.compact_threshold {
                    ScrollMode::Compact
                } else {
                    ScrollMode::Relaxed
                };
            }
        }

        let changed = *self != before;
        if changed {
            log::debug!("navigation shell {:?}: {:?} -> {:?}", event, before, self);
        }
        changed
    }

    pub fn desktop_dropdown_open(&self) -> bool {
        self.desktop == DesktopDropdown::Open
    }

    pub fn mobile_menu_open(&self) -> bool {
        matches!(self.mobile, MobileMenu::Open { .. })
    }

    /// The nested section is visible only inside an open mobile menu.
    pub fn mobile_dropdown_open(&self) -> bool {
        matches!(self.mobile, MobileMenu::Open { dropdown_open: true })
    }

    pub fn is_compact(&self) -> bool {
        self.scroll == ScrollMode::Compact
    }

    /// Highlight for the desktop quick-access trigger: the group rule, or the
    /// dropdown being open.
    pub fn quick_access_highlighted(&self, current: &str, needle: &str) -> bool {
        is_quick_access_active(current, needle) || self.desktop_dropdown_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_mobile_with_dropdown() -> MenuState {
        let mut state = MenuState::default();
        state.apply(NavEvent::ToggleMobileMenu);
        state.apply(NavEvent::ToggleMobileDropdown);
        state
    }

    #[test]
    fn test_everything_starts_closed() {
        let state = MenuState::default();
        assert!(!state.desktop_dropdown_open());
        assert!(!state.mobile_menu_open());
        assert!(!state.mobile_dropdown_open());
        assert!(!state.is_compact());
    }

    #[test]
    fn test_desktop_toggle_twice_returns_to_closed() {
        let mut state = MenuState::default();
        assert!(state.apply(NavEvent::ToggleDesktopDropdown));
        assert!(state.desktop_dropdown_open());
        assert!(state.apply(NavEvent::ToggleDesktopDropdown));
        assert_eq!(state, MenuState::default());
    }

    #[test]
    fn test_focus_moving_inside_dropdown_keeps_it_open() {
        let mut state = MenuState::default();
        state.apply(NavEvent::ToggleDesktopDropdown);

        let changed = state.apply(NavEvent::DropdownFocusLost { focus_within: true });

        assert!(!changed);
        assert!(state.desktop_dropdown_open());
    }

    #[test]
    fn test_focus_leaving_dropdown_closes_it() {
        let mut state = MenuState::default();
        state.apply(NavEvent::ToggleDesktopDropdown);

        assert!(state.apply(NavEvent::DropdownFocusLost { focus_within: false }));
        assert!(!state.desktop_dropdown_open());
    }

    #[test]
    fn test_focus_loss_leaves_mobile_menu_alone() {
        let mut state = open_mobile_with_dropdown();
        state.apply(NavEvent::DropdownFocusLost { focus_within: false });
        assert!(state.mobile_menu_open());
        assert!(state.mobile_dropdown_open());
    }

    #[test]
    fn test_link_activation_closes_mobile_menu_and_dropdown_together() {
        let mut state = open_mobile_with_dropdown();
        assert!(state.mobile_menu_open());
        assert!(state.mobile_dropdown_open());

        assert!(state.apply(NavEvent::LinkActivated));

        assert!(!state.mobile_menu_open());
        assert!(!state.mobile_dropdown_open());
        assert_eq!(
            state.mobile,
            MobileMenu::Closed {
                dropdown_remembered: false
            }
        );
    }

    #[test]
    fn test_link_activation_closes_desktop_dropdown() {
        let mut state = MenuState::default();
        state.apply(NavEvent::ToggleDesktopDropdown);
        state.apply(NavEvent::LinkActivated);
        assert!(!state.desktop_dropdown_open());
    }

    #[test]
    fn test_link_activation_keeps_scroll_mode() {
        let mut state = MenuState::default();
        state.apply(NavEvent::Scrolled { offset_y: 300.0 });
        state.apply(NavEvent::LinkActivated);
        assert!(state.is_compact());
    }

    #[test]
    fn test_hamburger_close_remembers_dropdown() {
        let mut state = open_mobile_with_dropdown();

        state.apply(NavEvent::ToggleMobileMenu);
        assert!(!state.mobile_menu_open());
        assert!(!state.mobile_dropdown_open());

        state.apply(NavEvent::ToggleMobileMenu);
        assert!(state.mobile_menu_open());
        assert!(state.mobile_dropdown_open());
    }

    #[test]
    fn test_mobile_dropdown_toggle_ignored_when_menu_closed() {
        let mut state = MenuState::default();
        assert!(!state.apply(NavEvent::ToggleMobileDropdown));
        assert_eq!(state, MenuState::default());
    }

    #[test]
    fn test_mobile_dropdown_toggles() {
        let mut state = open_mobile_with_dropdown();
        state.apply(NavEvent::ToggleMobileDropdown);
        assert!(state.mobile_menu_open());
        assert!(!state.mobile_dropdown_open());
    }

    #[test]
    fn test_scroll_crosses_threshold_once() {
        let mut state = MenuState::default();

        assert!(!state.apply(NavEvent::Scrolled { offset_y: 10.0 }));
        assert!(state.apply(NavEvent::Scrolled { offset_y: 25.0 }));
        assert!(state.is_compact());
        assert!(!state.apply(NavEvent::Scrolled { offset_y: 80.0 }));
        assert!(state.is_compact());
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let mut state = MenuState::default();
        state.apply(NavEvent::Scrolled { offset_y: 20.0 });
        assert!(!state.is_compact());

        state.apply(NavEvent::Scrolled { offset_y: 20.5 });
        assert!(state.is_compact());

        state.apply(NavEvent::Scrolled { offset_y: 20.0 });
        assert!(!state.is_compact());
    }

    #[test]
    fn test_custom_threshold() {
        let mut state = MenuState::new(100.0);
        state.apply(NavEvent::Scrolled { offset_y: 50.0 });
        assert!(!state.is_compact());
        state.apply(NavEvent::Scrolled { offset_y: 101.0 });
        assert!(state.is_compact());
    }

    #[test]
    fn test_scroll_is_independent_of_menus() {
        let mut state = open_mobile_with_dropdown();
        state.apply(NavEvent::ToggleDesktopDropdown);
        state.apply(NavEvent::Scrolled { offset_y: 40.0 });

        assert!(state.desktop_dropdown_open());
        assert!(state.mobile_dropdown_open());
        assert!(state.is_compact());
    }

    #[test]
    fn test_quick_access_highlight() {
        let mut state = MenuState::default();
        assert!(state.quick_access_highlighted("/report-reader-agent", "agent"));
        assert!(!state.quick_access_highlighted("/about", "agent"));

        state.apply(NavEvent::ToggleDesktopDropdown);
        assert!(state.quick_access_highlighted("/about", "agent"));
    }
}
