pub mod config;
pub mod contact;
pub mod error;
pub mod layout;
pub mod menu;
pub mod nav;
pub mod routes;

pub use config::SiteConfig;
pub use contact::{ContactForm, SubmissionStatus};
pub use error::SiteError;
pub use layout::{decide, decide_for_viewport, Breakpoint, TopInset, VisibilityDecision};
pub use menu::{DesktopDropdown, MenuState, MobileMenu, NavEvent, ScrollMode};
pub use nav::{is_link_active, is_quick_access_active, NavLink, PRIMARY_LINKS, QUICK_ACCESS_LINKS};
pub use routes::AppRoute;
