use crate::config::{merge::Merge, types::*};
use crate::constants::{CATALOG_ENV_VAR, USER_ENV_VAR};
use anyhow::{Result, anyhow};
use std::path::{Path, PathBuf};

pub struct ConfigBuilder {
    config_input: ConfigInput,
    root_dir: PathBuf,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config_input: ConfigInput::default(),
            root_dir: PathBuf::from("."),
        }
    }

    /// Relative paths from the config file are resolved against `root_dir`.
    pub fn with_root_dir(mut self, root_dir: &Path) -> Self {
        self.root_dir = root_dir.to_path_buf();
        self
    }

    pub fn with_file(mut self, file_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(file_input);
        self
    }

    pub fn with_cli_args(mut self, cli_input: ConfigInput) -> Self {
        self.config_input = self.config_input.merge(cli_input);
        self
    }

    pub fn resolve(self) -> Result<Config> {
        let defaults = Config::default();

        Ok(Config {
            catalog: self.resolve_catalog(&defaults.catalog),
            session: self.resolve_session(&defaults.session)?,
        })
    }

    fn resolve_catalog(&self, defaults: &CatalogConfig) -> CatalogConfig {
        let file = self
            .config_input
            .catalog
            .as_ref()
            .and_then(|c| c.file.clone())
            .or_else(|| std::env::var(CATALOG_ENV_VAR).ok())
            .map(PathBuf::from)
            .unwrap_or_else(|| defaults.file.clone());

        let file = if file.is_relative() {
            self.root_dir.join(file)
        } else {
            file
        };

        CatalogConfig { file }
    }

    fn resolve_session(&self, defaults: &SessionConfig) -> Result<SessionConfig> {
        let input = self.config_input.session.as_ref();

        let user = input
            .and_then(|s| s.user.clone())
            .or_else(|| std::env::var(USER_ENV_VAR).ok())
            .unwrap_or_else(|| defaults.user.clone());
        if user.trim().is_empty() {
            return Err(anyhow!("session user must not be empty"));
        }

        let current_schema = input
            .and_then(|s| s.current_schema.clone())
            .unwrap_or_else(|| defaults.current_schema.clone());
        if current_schema.trim().is_empty() {
            return Err(anyhow!("current schema must not be empty"));
        }

        Ok(SessionConfig {
            user,
            admin: input.and_then(|s| s.admin).unwrap_or(defaults.admin),
            current_schema,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
