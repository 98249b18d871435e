use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Tunables for the navigation shell and the surrounding site.
///
/// Every field has a default, so a partial JSON document only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand_name: String,
    /// Vertical offset in pixels above which the navbar switches to compact mode.
    pub scroll_compact_threshold: f64,
    /// Substring that marks a path as belonging to the quick-access group.
    pub quick_access_needle: String,
    /// Viewport width in pixels from which the desktop layout applies.
    pub desktop_min_width: f64,
    pub contact_submit_delay_ms: u32,
    pub support_email: String,
    pub support_phone: String,
    pub office_address: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "MedAI".to_string(),
            scroll_compact_threshold: 20.0,
            quick_access_needle: "agent".to_string(),
            desktop_min_width: 768.0,
            contact_submit_delay_ms: 1500,
            support_email: "support@medai.com".to_string(),
            support_phone: "+1 (555) 123-4567".to_string(),
            office_address: "123 AI Drive, San Francisco, CA".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SiteError> {
        if !self.scroll_compact_threshold.is_finite() || self.scroll_compact_threshold < 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "scroll_compact_threshold must be a non-negative number, got {}",
                self.scroll_compact_threshold
            )));
        }
        if self.quick_access_needle.is_empty() {
            return Err(SiteError::InvalidConfig(
                "quick_access_needle must not be empty".to_string(),
            ));
        }
        if !self.desktop_min_width.is_finite() || self.desktop_min_width <= 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "desktop_min_width must be positive, got {}",
                self.desktop_min_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SiteConfig::default();

        assert_eq!(config.brand_name, "MedAI");
        assert_eq!(config.scroll_compact_threshold, 20.0);
        assert_eq!(config.quick_access_needle, "agent");
        assert_eq!(config.desktop_min_width, 768.0);
        assert_eq!(config.contact_submit_delay_ms, 1500);
    }

    #[test]
    fn test_config_partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(r#"{ "scroll_compact_threshold": 48 }"#).unwrap();

        assert_eq!(config.scroll_compact_threshold, 48.0);
        assert_eq!(config.quick_access_needle, "agent");
        assert_eq!(config.brand_name, "MedAI");
    }

    #[test]
    fn test_config_empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        let result = SiteConfig::from_json("{ not json");
        assert!(matches!(result, Err(SiteError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_rejects_negative_threshold() {
        let result = SiteConfig::from_json(r#"{ "scroll_compact_threshold": -1 }"#);
        assert!(matches!(result, Err(SiteError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_rejects_empty_needle() {
        let result = SiteConfig::from_json(r#"{ "quick_access_needle": "" }"#);
        assert!(matches!(result, Err(SiteError::InvalidConfig(_))));
    }
}
