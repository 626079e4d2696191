//! Client configuration.

use serde::{Deserialize, Serialize};

/// Frontend configuration. The backend is a fixed local origin reached with
/// plain JSON requests; there is no versioning and no auth headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend origin for all API calls
    pub api_base: String,

    /// localStorage slot holding the signed-in user record
    pub user_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:5000".to_string(),
            user_storage_key: "mindspace-user".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.user_storage_key, "mindspace-user");
    }
}
