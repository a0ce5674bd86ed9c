use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080/api/admin";
pub const API_PREFIX: &str = "/api/admin";
pub const UPLOADS_PATH: &str = "/uploads/cars";

pub const ENV_API_BASE_URL: &str = "CATALOG_ADMIN_URL";
pub const ENV_ASSET_BASE_URL: &str = "CATALOG_ADMIN_ASSETS";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Base URL of the admin API; resource paths are appended to it.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Where uploaded car images are served from. Derived from
    /// `api_base_url` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_base_url: Option<String>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Select a brand/model right after creating it.
    #[serde(default = "default_true")]
    pub auto_select_created: bool,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    "catalog-admin".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            asset_base_url: None,
            user_agent: default_user_agent(),
            auto_select_created: true,
        }
    }
}

impl AdminConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let cfg: AdminConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(self).context("serialize config")?;
        std::fs::write(path, bytes).with_context(|| format!("write config {}", path.display()))
    }

    /// Overlay `CATALOG_ADMIN_URL` / `CATALOG_ADMIN_ASSETS` from the process
    /// environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
        if let Some(url) = lookup(ENV_ASSET_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.asset_base_url = Some(url.trim().to_string());
        }
    }

    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn asset_base(&self) -> &str {
        match &self.asset_base_url {
            Some(base) => base.trim_end_matches('/'),
            None => {
                let api = self.api_base();
                api.strip_suffix(API_PREFIX).unwrap_or(api)
            }
        }
    }

    /// Resolve a car's stored image reference to a fetchable URL.
    pub fn image_url(&self, image_ref: &str) -> String {
        if image_ref.starts_with("http://") || image_ref.starts_with("https://") {
            return image_ref.to_string();
        }
        format!(
            "{}{}/{}",
            self.asset_base(),
            UPLOADS_PATH,
            image_ref.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
