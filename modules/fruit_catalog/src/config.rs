use serde::{Deserialize, Serialize};

/// Configuration for the fruit_catalog module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FruitCatalogConfig {
    /// Name of the cookie carrying the session user id issued on login.
    #[serde(default = "default_session_cookie_name")]
    pub session_cookie_name: String,
}

impl Default for FruitCatalogConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: default_session_cookie_name(),
        }
    }
}

fn default_session_cookie_name() -> String {
    "user_session".to_string()
}
