//! Shared configuration loader for keysym-gen.
//!
//! `defaults/keysym.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. Callers layer
//! user-specific files on top of those defaults via [`Loader`] before
//! deserializing into [`GeneratorConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use keysym_emit::{DocumentLayout, GuardRule, NamingPreset, TableNaming};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/keysym.default.toml");

/// Top-level configuration consumed by keysym-gen.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub guard: GuardConfig,
    pub naming: NamingConfig,
    pub document: DocumentConfig,
    pub formatter: FormatterConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub path: PathBuf,
    pub macro_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GuardConfig {
    pub project_root: Option<PathBuf>,
    pub strip_components: usize,
}

impl GuardConfig {
    pub fn rule(&self) -> GuardRule {
        GuardRule::new(self.project_root.clone(), self.strip_components)
    }
}

/// A preset plus optional per-identifier overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct NamingConfig {
    pub preset: NamingPreset,
    pub struct_name: Option<String>,
    pub table_name: Option<String>,
    pub keysym_type: Option<String>,
    pub code_point_type: Option<String>,
    pub keysym_field: Option<String>,
    pub code_point_field: Option<String>,
}

impl NamingConfig {
    pub fn resolve(&self) -> TableNaming {
        let mut naming = TableNaming::from(self.preset);
        let overrides = [
            (&mut naming.struct_name, &self.struct_name),
            (&mut naming.table_name, &self.table_name),
            (&mut naming.keysym_type, &self.keysym_type),
            (&mut naming.code_point_type, &self.code_point_type),
            (&mut naming.keysym_field, &self.keysym_field),
            (&mut naming.code_point_field, &self.code_point_field),
        ];
        for (slot, value) in overrides {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
        naming
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub banner: Option<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    pub namespace: String,
    pub platform_namespace: String,
}

impl DocumentConfig {
    pub fn layout(&self) -> DocumentLayout {
        DocumentLayout {
            banner: self.banner.clone(),
            includes: self.includes.clone(),
            namespace: self.namespace.clone(),
            platform_namespace: self.platform_namespace.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormatterConfig {
    pub enabled: bool,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GeneratorConfig, ConfigError> {
    Loader::new().build()
}
