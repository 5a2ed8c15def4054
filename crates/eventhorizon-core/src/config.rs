//! Export configuration.

use serde::{Deserialize, Serialize};

/// Domain suffix of every ICS UID.
pub const DEFAULT_UID_DOMAIN: &str = "event-horizon.app";

/// ICS `PRODID` value.
pub const DEFAULT_PROD_ID: &str = "-//Event Horizon//Event Horizon App//EN";

/// Google Calendar template endpoint.
pub const DEFAULT_GOOGLE_BASE_URL: &str = "https://www.google.com/calendar/render";

/// Description budget for Google Calendar links, leaving headroom for the
/// other parameters under the ~2000 character practical URL limit.
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 1500;

/// Settings shared by every export of a deployment.
///
/// The UID domain must stay the same across exports, otherwise calendar
/// clients treat a re-import as a new event instead of an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Domain suffix of ICS UIDs.
    pub uid_domain: String,
    /// ICS `PRODID` value.
    pub prod_id: String,
    /// Google Calendar template endpoint.
    pub google_base_url: String,
    /// Maximum description length in Google Calendar links, in characters.
    pub max_description_length: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
            prod_id: DEFAULT_PROD_ID.to_string(),
            google_base_url: DEFAULT_GOOGLE_BASE_URL.to_string(),
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl ExportConfig {
    /// Builder: set the UID domain.
    pub fn with_uid_domain(mut self, domain: impl Into<String>) -> Self {
        self.uid_domain = domain.into();
        self
    }

    /// Builder: set the `PRODID` value.
    pub fn with_prod_id(mut self, prod_id: impl Into<String>) -> Self {
        self.prod_id = prod_id.into();
        self
    }

    /// Builder: set the Google Calendar endpoint.
    pub fn with_google_base_url(mut self, url: impl Into<String>) -> Self {
        self.google_base_url = url.into();
        self
    }

    /// Builder: set the Google Calendar description budget.
    pub fn with_max_description_length(mut self, max: usize) -> Self {
        self.max_description_length = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ExportConfig::default();
        assert_eq!(config.uid_domain, "event-horizon.app");
        assert_eq!(config.prod_id, "-//Event Horizon//Event Horizon App//EN");
        assert_eq!(config.google_base_url, "https://www.google.com/calendar/render");
        assert_eq!(config.max_description_length, 1500);
    }

    #[test]
    fn builder_methods() {
        let config = ExportConfig::default()
            .with_uid_domain("calendar.example")
            .with_prod_id("-//Example//EN")
            .with_google_base_url("https://calendar.example/render")
            .with_max_description_length(800);

        assert_eq!(config.uid_domain, "calendar.example");
        assert_eq!(config.prod_id, "-//Example//EN");
        assert_eq!(config.google_base_url, "https://calendar.example/render");
        assert_eq!(config.max_description_length, 800);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: ExportConfig =
            serde_json::from_str(r#"{"uid_domain": "staging.event-horizon.app"}"#).unwrap();
        assert_eq!(config.uid_domain, "staging.event-horizon.app");
        assert_eq!(config.max_description_length, 1500);
    }
}
