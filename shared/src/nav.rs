//! Static link sets and the two link-activation rules.
//!
//! Individual links highlight on an exact path match. The quick-access group
//! header uses a coarser substring rule so it stays highlighted while any
//! agent page is open. The two rules are kept apart on purpose.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub const fn new(path: &'static str, label: &'static str) -> Self {
        Self { path, label }
    }

    pub fn is_active(&self, current: &str) -> bool {
        is_link_active(self.path, current)
    }
}

pub const PRIMARY_LINKS: &[NavLink] = &[
    NavLink::new("/", "Home"),
    NavLink::new("/ai-agent", "AI Agents"),
    NavLink::new("/about", "About"),
    NavLink::new("/contact", "Contact"),
];

pub const QUICK_ACCESS_LINKS: &[NavLink] = &[
    NavLink::new("/doctor-agent", "Doctor Assistant"),
    NavLink::new("/report-reader-agent", "Report Reader"),
    NavLink::new("/prescription-reader-agent", "Prescription Reader"),
];

pub const FOOTER_SITE_LINKS: &[NavLink] = &[
    NavLink::new("/", "Home"),
    NavLink::new("/about", "About Us"),
    NavLink::new("/contact", "Contact"),
    NavLink::new("/ai-agent", "AI Agents"),
];

pub const FOOTER_AGENT_LINKS: &[NavLink] = &[
    NavLink::new("/doctor-agent", "Doctor Assistant"),
    NavLink::new("/report-reader-agent", "Report Reader"),
    NavLink::new("/prescription-reader-agent", "Rx Reader"),
];

pub const LEGAL_LINKS: &[NavLink] = &[
    NavLink::new("/privacy", "Privacy Policy"),
    NavLink::new("/terms", "Terms of Service"),
];

/// Item highlight: exact path equality.
pub fn is_link_active(link_path: &str, current: &str) -> bool {
    link_path == current
}

/// Group highlight: the current path contains `needle` anywhere.
pub fn is_quick_access_active(current: &str, needle: &str) -> bool {
    current.contains(needle)
}
