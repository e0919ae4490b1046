use std::{fs, path::Path};

use chess_rules::{Glyphs, RenderOptions};
use serde::Deserialize;

use crate::CliError;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub glyphs: Glyphs,
    pub coordinates: bool,
    pub stop_on_illegal: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glyphs: Glyphs::Unicode,
            coordinates: true,
            stop_on_illegal: true,
        }
    }
}

impl Config {
    /// Load from `path` when it exists; otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(p) if p.exists() => {
                let content = fs::read_to_string(p)?;
                Self::from_yaml(&content)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, CliError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            glyphs: self.glyphs,
            coordinates: self.coordinates,
            highlight: None,
        }
    }
}
