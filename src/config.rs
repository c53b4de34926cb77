//! Layered settings.
//!
//! `defaults/tinytime.default.toml` is embedded into the library so that documented defaults
//! and runtime behavior stay in sync. Applications layer their own files and overrides on top
//! via [Loader] before deserializing into [Settings].

use crate::calendar::Date;
use crate::error::CompileError;
use crate::parsing::ParseOptions;
use crate::rendering::Options;
use crate::template::{compile, compile_lenient, Template};
use chrono::NaiveDateTime;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/tinytime.default.toml");

/// Top-level settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub compile: CompileSettings,
    pub render: Options,
    #[serde(default)]
    pub parse: ParseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompileSettings {
    pub strict: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseSettings {
    #[serde(default)]
    pub base_date: Option<NaiveDateTime>,
}

impl Settings {
    /// Compile a template honoring `compile.strict`.
    pub fn compile(&self, template: &str) -> Result<Template, CompileError> {
        if self.compile.strict {
            compile(template)
        } else {
            Ok(compile_lenient(template))
        }
    }

    pub fn render_options(&self) -> Options {
        self.render
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            base_date: self.parse.base_date.map(Date::from),
        }
    }
}

/// Builds [Settings] from `defaults/tinytime.default.toml` plus whatever the application layers
/// on top. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only the embedded `[compile]`, `[render]` and `[parse]` defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML settings file. Building fails if the file does not exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a TOML settings file that may be missing.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add settings from TOML text, e.g. `[parse]\nbase_date = "2001-03-04T05:06:07"`.
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Override one key, such as `compile.strict` or `render.pad_hours`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers into [Settings].
    pub fn build(self) -> Result<Settings, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings with no overrides: strict compile, no padding, epoch seed.
pub fn load_defaults() -> Result<Settings, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_settings() {
        let settings = load_defaults().expect("defaults to deserialize");
        assert!(settings.compile.strict);
        assert_eq!(settings.render_options(), Options::default());
        assert_eq!(settings.parse_options(), ParseOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let settings = Loader::new()
            .set_override("render.pad_hours", true)
            .expect("override to apply")
            .set_override("compile.strict", false)
            .expect("override to apply")
            .build()
            .expect("settings to build");
        assert!(settings.render.pad_hours);
        assert!(!settings.render.pad_days);
        assert!(settings.compile("{YYY}").is_ok());
    }

    #[test]
    fn strict_setting_controls_compile() {
        let settings = load_defaults().expect("defaults to deserialize");
        assert!(settings.compile("{YYY}").is_err());
        assert!(settings.compile("{YYYY}").is_ok());
    }

    #[test]
    fn base_date_seeds_parsing() {
        let settings = Loader::new()
            .with_toml("[parse]\nbase_date = \"2001-03-04T05:06:07\"\n")
            .build()
            .expect("settings to build");
        let template = settings.compile("{DD}_{MM}_{YY}").expect("template to compile");
        let date = template
            .parse("3_Nov_16", &settings.parse_options())
            .expect("input to parse");
        assert_eq!(date, Date::new(2016, 10, 3, 5, 6, 7).unwrap());
    }

    #[test]
    fn later_layers_win() {
        let settings = Loader::new()
            .with_toml("[render]\npad_days = true\npad_month = true\n")
            .set_override("render.pad_month", false)
            .expect("override to apply")
            .build()
            .expect("settings to build");
        assert!(settings.render.pad_days);
        assert!(!settings.render.pad_month);
        assert!(!settings.render.pad_hours);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/nonexistent/tinytime.toml")
            .build();
        assert!(result.is_err());
        let settings = Loader::new()
            .with_optional_file("/nonexistent/tinytime.toml")
            .build();
        assert!(settings.is_ok());
    }
}
