//! Route-driven page chrome decisions.
//!
//! Everything here is a pure function of the current path (and, for the top
//! inset, the viewport width). Unknown paths fall through to the defaults:
//! navbar shown, no mesh background.

use crate::routes::{MESH_BACKGROUND_ROUTES, NO_NAVBAR_ROUTES};

/// Space reserved above page content for the fixed navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopInset {
    None,
    Compact,
    Full,
}

impl TopInset {
    pub fn padding_class(&self) -> &'static str {
        match self {
            TopInset::None => "",
            TopInset::Compact => "pt-16",
            TopInset::Full => "pt-20",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: f64, desktop_min_width: f64) -> Self {
        if width >= desktop_min_width {
            Breakpoint::Desktop
        } else {
            Breakpoint::Mobile
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityDecision {
    pub show_navbar: bool,
    pub show_background_treatment: bool,
    pub top_inset: TopInset,
}

impl VisibilityDecision {
    pub fn container_class(&self) -> &'static str {
        if self.show_background_treatment {
            "min-h-screen page-bg-mesh"
        } else {
            "min-h-screen"
        }
    }
}

/// Decides the page chrome for `route`, assuming the narrowest viewport.
///
/// The navbar wraps onto a taller bar on mobile, so the full inset is the
/// safe choice when the width is not known.
pub fn decide(route: &str) -> VisibilityDecision {
    decide_at(route, Breakpoint::Mobile)
}

/// Same as [`decide`], with the top inset resolved for the given viewport.
pub fn decide_for_viewport(route: &str, width: f64, desktop_min_width: f64) -> VisibilityDecision {
    decide_at(route, Breakpoint::from_width(width, desktop_min_width))
}

fn decide_at(route: &str, breakpoint: Breakpoint) -> VisibilityDecision {
    let show_navbar = !NO_NAVBAR_ROUTES.contains(&route);
    let show_background_treatment = MESH_BACKGROUND_ROUTES.contains(&route);

    let top_inset = match (show_navbar, breakpoint) {
        (false, _) => TopInset::None,
        (true, Breakpoint::Mobile) => TopInset::Full,
        (true, Breakpoint::Desktop) => TopInset::Compact,
    };

    VisibilityDecision {
        show_navbar,
        show_background_treatment,
        top_inset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::AppRoute;

    #[test]
    fn test_agent_routes_hide_navbar() {
        for path in NO_NAVBAR_ROUTES {
            let decision = decide(path);
            assert!(!decision.show_navbar, "{} should hide the navbar", path);
            assert_eq!(decision.top_inset, TopInset::None);
        }
    }

    #[test]
    fn test_other_known_routes_show_navbar() {
        for route in AppRoute::ALL {
            if NO_NAVBAR_ROUTES.contains(&route.path()) {
                continue;
            }
            let decision = decide(route.path());
            assert!(decision.show_navbar, "{} should show the navbar", route);
            assert_ne!(decision.top_inset, TopInset::None);
        }
    }

    #[test]
    fn test_background_treatment_membership() {
        for route in AppRoute::ALL {
            let expected = MESH_BACKGROUND_ROUTES.contains(&route.path());
            assert_eq!(decide(route.path()).show_background_treatment, expected);
        }
    }

    #[test]
    fn test_home_scenario() {
        let decision = decide("/");
        assert!(decision.show_navbar);
        assert!(decision.show_background_treatment);
        assert_eq!(decision.container_class(), "min-h-screen page-bg-mesh");
    }

    #[test]
    fn test_doctor_agent_scenario() {
        let decision = decide("/doctor-agent");
        assert!(!decision.show_navbar);
        assert!(!decision.show_background_treatment);
        assert_eq!(decision.top_inset.padding_class(), "");
    }

    #[test]
    fn test_unknown_route_defaults() {
        let decision = decide("/no-such-page");
        assert_eq!(
            decision,
            VisibilityDecision {
                show_navbar: true,
                show_background_treatment: false,
                top_inset: TopInset::Full,
            }
        );
    }

    #[test]
    fn test_decide_is_idempotent() {
        assert_eq!(decide("/about"), decide("/about"));
    }

    #[test]
    fn test_top_inset_per_viewport() {
        assert_eq!(decide_for_viewport("/about", 375.0, 768.0).top_inset, TopInset::Full);
        assert_eq!(decide_for_viewport("/about", 768.0, 768.0).top_inset, TopInset::Compact);
        assert_eq!(decide_for_viewport("/about", 1440.0, 768.0).top_inset, TopInset::Compact);
        assert_eq!(
            decide_for_viewport("/report-reader-agent", 1440.0, 768.0).top_inset,
            TopInset::None
        );
    }

    #[test]
    fn test_viewport_does_not_change_visibility() {
        for route in AppRoute::ALL {
            let narrow = decide_for_viewport(route.path(), 320.0, 768.0);
            let wide = decide_for_viewport(route.path(), 1920.0, 768.0);
            assert_eq!(narrow.show_navbar, wide.show_navbar);
            assert_eq!(narrow.show_background_treatment, wide.show_background_treatment);
        }
    }
}
