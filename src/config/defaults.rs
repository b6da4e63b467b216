use crate::config::types::*;
use crate::constants::{DEFAULT_ADMIN_USER, DEFAULT_CATALOG_FILE, MAIN_SCHEMA};
use std::path::PathBuf;

// Config derives Default

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CATALOG_FILE),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_ADMIN_USER.to_string(),
            admin: true,
            current_schema: MAIN_SCHEMA.to_string(),
        }
    }
}
