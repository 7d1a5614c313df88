use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_API_BASE_URL: &str = "https://api.godaddy.com/v1";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(length(min = 1, message = "API key cannot be empty"))]
    pub api_key: String,

    #[validate(length(min = 1, message = "API secret cannot be empty"))]
    pub api_secret: String,

    #[validate(length(min = 1, message = "Domain cannot be empty"))]
    pub domain: String,

    #[serde(default = "default_api_base_url")]
    #[validate(url(message = "API base URL must be a valid URL"))]
    pub api_base_url: String,
}

/// The credential triple every provider call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
    pub domain: String,
}

impl Credentials {
    pub fn authorization(&self) -> String {
        format!("sso-key {}:{}", self.api_key, self.api_secret)
    }
}
