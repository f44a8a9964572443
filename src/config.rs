// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editor configuration.
//!
//! Every field has a default, so a JSON file only needs to name what it overrides:
//!
//! ```json
//! { "layout": { "level_one_radius": 300.0 }, "view": { "max_scale": 4.0 } }
//! ```

use std::error::Error;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use serde::{Deserialize, Serialize};

use crate::canvas::ViewConfig;
use crate::layout::RadialLayout;
use crate::render::NodeGeometry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    pub layout: RadialLayout,
    pub view: ViewConfig,
    pub node: NodeGeometry,
    /// Label given to children created from the UI.
    pub default_child_label: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            layout: RadialLayout::default(),
            view: ViewConfig::default(),
            node: NodeGeometry::default(),
            default_child_label: "New idea".to_owned(),
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse { path: None, source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|source| ConfigError::Parse { path: Some(path.to_path_buf()), source })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded editor config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("layout.level_one_radius", self.layout.level_one_radius),
            ("layout.sub_branch_radius", self.layout.sub_branch_radius),
            ("view.min_scale", self.view.min_scale),
            ("view.zoom_step", self.view.zoom_step),
            ("node.width", self.node.width),
            ("node.height", self.node.height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }

        let view = &self.view;
        if !(view.min_scale <= view.initial_scale && view.initial_scale <= view.max_scale) {
            return Err(ConfigError::Invalid {
                field: "view.initial_scale",
                reason: format!(
                    "must lie within [{}, {}], got {}",
                    view.min_scale, view.max_scale, view.initial_scale
                ),
            });
        }

        let angles = [
            ("layout.fan_spread", self.layout.fan_spread),
            ("layout.max_fan_step", self.layout.max_fan_step),
            ("layout.insert_fan_step", self.layout.insert_fan_step),
            ("node.link_gap", self.node.link_gap),
        ];
        for (field, value) in angles {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a non-negative number, got {value}"),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse { path: Option<PathBuf>, source: serde_json::Error },
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::Parse { path: Some(path), source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
            Self::Parse { path: None, source } => write!(f, "invalid config: {source}"),
            Self::Invalid { field, reason } => write!(f, "invalid config value {field}: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}
