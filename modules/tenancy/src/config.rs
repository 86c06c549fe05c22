use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Configuration for the tenancy module.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenancyConfig {
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
    #[serde(default = "default_max_title_length")]
    pub max_title_length: usize,
    #[serde(default = "default_max_description_length")]
    pub max_description_length: usize,
}

impl Default for TenancyConfig {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            max_title_length: default_max_title_length(),
            max_description_length: default_max_description_length(),
        }
    }
}

impl From<TenancyConfig> for ServiceConfig {
    fn from(config: TenancyConfig) -> Self {
        Self {
            max_name_length: config.max_name_length,
            max_title_length: config.max_title_length,
            max_description_length: config.max_description_length,
        }
    }
}

fn default_max_name_length() -> usize {
    100
}

fn default_max_title_length() -> usize {
    120
}

fn default_max_description_length() -> usize {
    4000
}
