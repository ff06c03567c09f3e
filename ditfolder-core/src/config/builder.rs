// ============================================================================
// ditfolder-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CoreConfig
//
// Fluent construction of CoreConfig. Unset fields keep their defaults and
// build() runs CoreConfig::validate, so a built config is always usable.

use std::path::PathBuf;

use super::CoreConfig;
use crate::error::CoreResult;
use crate::export::{DocumentLayout, Overflow};

/// Builder for creating CoreConfig instances.
#[derive(Debug, Clone, Default)]
pub struct CoreConfigBuilder {
    config: CoreConfig,
}

impl CoreConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory preset files are read from.
    pub fn presets_dir(mut self, presets_dir: impl Into<PathBuf>) -> Self {
        self.config.presets_dir = presets_dir.into();
        self
    }

    /// Appends a target location. The first one added is the primary.
    pub fn location(mut self, location: impl Into<PathBuf>) -> Self {
        self.config.locations.push(location.into());
        self
    }

    /// Replaces all target locations.
    pub fn locations<I, P>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config.locations = locations.into_iter().map(Into::into).collect();
        self
    }

    pub fn project_name(mut self, project_name: &str) -> Self {
        self.config.project_name = project_name.to_string();
        self
    }

    pub fn preset_name(mut self, preset_name: &str) -> Self {
        self.config.preset_name = preset_name.to_string();
        self
    }

    /// Enables the all-locations collision check before creation.
    pub fn precheck(mut self, precheck: bool) -> Self {
        self.config.precheck = precheck;
        self
    }

    pub fn document_layout(mut self, layout: DocumentLayout) -> Self {
        self.config.document_layout = layout;
        self
    }

    /// Shorthand for setting only the PDF overflow policy.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.config.document_layout.overflow = overflow;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Any error from [`CoreConfig::validate`].
    pub fn build(self) -> CoreResult<CoreConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
