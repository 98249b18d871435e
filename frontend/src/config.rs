use leptos::logging::warn;
use leptos::*;
use shared::SiteConfig;

const SITE_CONFIG_JSON: &str = include_str!("../config/site.json");

/// Parse the embedded site configuration, falling back to defaults.
fn load_site_config(json: &str) -> SiteConfig {
    match SiteConfig::from_json(json) {
        Ok(config) => config,
        Err(err) => {
            warn!("{}, using defaults", err);
            SiteConfig::default()
        }
    }
}

/// Provide the site configuration to the application
pub fn provide_site_config() {
    provide_context(load_site_config(SITE_CONFIG_JSON));
}

/// Use the site configuration from within a component
pub fn use_site_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}
