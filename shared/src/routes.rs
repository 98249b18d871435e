//! Registry of the client-side routes the site knows about.
//!
//! Paths are compared as plain strings; query strings and fragments are
//! stripped by the router before they reach this crate.

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

/// Agent pages render full-screen and hide the navigation bar.
pub const NO_NAVBAR_ROUTES: &[&str] = &[
    "/doctor-agent",
    "/report-reader-agent",
    "/prescription-reader-agent",
];

/// Marketing pages drawn on top of the mesh background.
pub const MESH_BACKGROUND_ROUTES: &[&str] = &["/", "/about", "/contact", "/ai-agent"];

/// Path prefixes the dev server forwards untouched to the analysis backend.
/// The client never builds requests against them; they are listed so route
/// additions can be checked against the proxy table.
pub const BACKEND_PROXY_PREFIXES: &[&str] = &[
    "/sessions",
    "/memory",
    "/analyze_reports",
    "/analyze_prescription",
    "/doctor_assistant",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    About,
    Contact,
    AiAgents,
    DoctorAgent,
    ReportReaderAgent,
    PrescriptionReaderAgent,
    Privacy,
    Terms,
}

impl AppRoute {
    pub const ALL: [AppRoute; 9] = [
        AppRoute::Home,
        AppRoute::About,
        AppRoute::Contact,
        AppRoute::AiAgents,
        AppRoute::DoctorAgent,
        AppRoute::ReportReaderAgent,
        AppRoute::PrescriptionReaderAgent,
        AppRoute::Privacy,
        AppRoute::Terms,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::About => "/about",
            AppRoute::Contact => "/contact",
            AppRoute::AiAgents => "/ai-agent",
            AppRoute::DoctorAgent => "/doctor-agent",
            AppRoute::ReportReaderAgent => "/report-reader-agent",
            AppRoute::PrescriptionReaderAgent => "/prescription-reader-agent",
            AppRoute::Privacy => "/privacy",
            AppRoute::Terms => "/terms",
        }
    }

    /// Whether this route is one of the standalone agent workspaces.
    pub fn is_agent_workspace(&self) -> bool {
        NO_NAVBAR_ROUTES.contains(&self.path())
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for AppRoute {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppRoute::ALL
            .into_iter()
            .find(|route| route.path() == s)
            .ok_or_else(|| SiteError::UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_str() {
        assert_eq!("/".parse(), Ok(AppRoute::Home));
        assert_eq!("/ai-agent".parse(), Ok(AppRoute::AiAgents));
        assert_eq!("/report-reader-agent".parse(), Ok(AppRoute::ReportReaderAgent));
        assert_eq!("/terms".parse(), Ok(AppRoute::Terms));
        assert_eq!(
            "/missing".parse::<AppRoute>(),
            Err(SiteError::UnknownRoute("/missing".to_string()))
        );
    }

    #[test]
    fn test_route_paths_are_case_sensitive() {
        assert!("/About".parse::<AppRoute>().is_err());
        assert!("/about/".parse::<AppRoute>().is_err());
    }

    #[test]
    fn test_route_display_matches_path() {
        for route in AppRoute::ALL {
            assert_eq!(route.to_string(), route.path());
        }
    }

    #[test]
    fn test_route_sets_are_disjoint_and_registered() {
        for path in NO_NAVBAR_ROUTES {
            assert!(!MESH_BACKGROUND_ROUTES.contains(path));
            assert!(path.parse::<AppRoute>().is_ok());
        }
        for path in MESH_BACKGROUND_ROUTES {
            assert!(path.parse::<AppRoute>().is_ok());
        }
    }

    #[test]
    fn test_agent_workspaces() {
        let agents: Vec<_> = AppRoute::ALL
            .into_iter()
            .filter(AppRoute::is_agent_workspace)
            .collect();
        assert_eq!(
            agents,
            vec![
                AppRoute::DoctorAgent,
                AppRoute::ReportReaderAgent,
                AppRoute::PrescriptionReaderAgent,
            ]
        );
    }

    #[test]
    fn test_no_client_route_is_shadowed_by_backend_proxy() {
        for route in AppRoute::ALL {
            assert!(
                !BACKEND_PROXY_PREFIXES
                    .iter()
                    .any(|prefix| route.path().starts_with(prefix)),
                "{} would be forwarded to the backend",
                route
            );
        }
    }
}
