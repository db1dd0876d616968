//! Haven Extension Registry
//!
//! Extensions are simulated: a catalog of entries whose only behavior is
//! the enabled flag. Toggling flips one entry and nothing else.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, ExtensionError>;

#[derive(Error, Debug)]
pub enum ExtensionError {
    #[error("Extension not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extension {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    /// Icon identifier the presentation layer maps to a glyph
    pub icon: String,
}

impl Extension {
    fn new(name: &str, description: &str, icon: &str, enabled: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.to_string(),
            enabled,
            icon: icon.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtensionRegistry {
    extensions: Vec<Extension>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog every new profile starts with.
    pub fn seeded() -> Self {
        Self {
            extensions: vec![
                Extension::new(
                    "Tracker Shield",
                    "Blocks known trackers and fingerprinting scripts on every page.",
                    "shield",
                    true,
                ),
                Extension::new(
                    "Vault Keys",
                    "Generates and fills strong passwords for the sites you visit.",
                    "key",
                    true,
                ),
                Extension::new(
                    "Midnight Mode",
                    "Applies a dark theme to simulated pages after sunset.",
                    "moon",
                    false,
                ),
                Extension::new(
                    "Page Translator",
                    "Translates page content between twelve languages.",
                    "globe",
                    false,
                ),
            ],
        }
    }

    pub fn list(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn get(&self, id: &str) -> Result<&Extension> {
        self.extensions
            .iter()
            .find(|ext| ext.id == id)
            .ok_or_else(|| ExtensionError::NotFound(id.to_string()))
    }

    /// Flip one extension's enabled flag and return the new value.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let ext = self
            .extensions
            .iter_mut()
            .find(|ext| ext.id == id)
            .ok_or_else(|| ExtensionError::NotFound(id.to_string()))?;

        ext.enabled = !ext.enabled;
        tracing::info!(
            extension = %ext.name,
            enabled = ext.enabled,
            "Toggled extension"
        );

        Ok(ext.enabled)
    }

    pub fn enabled_count(&self) -> usize {
        self.extensions.iter().filter(|ext| ext.enabled).count()
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}
