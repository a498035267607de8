//! Preview configuration: store labels and the primary color.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StudioError, StudioResult};
use crate::theme::{is_color_literal, DEFAULT_PRIMARY};

pub const DEFAULT_STORE_NAME: &str = "متجري";
pub const DEFAULT_STORE_KIND: &str = "general";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreviewConfig {
    pub store_name: String,
    pub store_kind: String,
    pub primary_color: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            store_kind: DEFAULT_STORE_KIND.to_string(),
            primary_color: DEFAULT_PRIMARY.to_string(),
        }
    }
}

impl PreviewConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> StudioResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: PreviewConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overlay the values that were given explicitly.
    pub fn with_overrides(
        mut self,
        store_name: Option<String>,
        store_kind: Option<String>,
        primary_color: Option<String>,
    ) -> Self {
        if let Some(name) = store_name {
            self.store_name = name;
        }
        if let Some(kind) = store_kind {
            self.store_kind = kind;
        }
        if let Some(color) = primary_color {
            self.primary_color = color;
        }
        self
    }

    pub fn validate(&self) -> StudioResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(StudioError::Config("store name must not be empty".into()));
        }
        if !is_color_literal(&self.primary_color) {
            return Err(StudioError::Config(format!(
                "primary color is not a color literal: {}",
                self.primary_color
            )));
        }
        Ok(())
    }
}
