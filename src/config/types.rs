use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration input - all fields Optional for merging
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigInput {
    pub catalog: Option<CatalogInput>,
    pub session: Option<SessionInput>,
}

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub session: SessionConfig,
}

// Catalog snapshot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogInput {
    pub file: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub file: PathBuf,
}

// Session configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionInput {
    pub user: Option<String>,
    pub admin: Option<bool>,
    pub current_schema: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub user: String,
    pub admin: bool,
    pub current_schema: String,
}

// CLI argument groups for command-specific options
#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArgs {
    #[arg(long, help = "Catalog snapshot file (.yaml or .json)")]
    pub catalog: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct SessionArgs {
    #[arg(long, help = "User the statement runs as")]
    pub user: Option<String>,

    #[arg(long, help = "Schema used when the statement names none")]
    pub current_schema: Option<String>,
}

impl From<CatalogArgs> for CatalogInput {
    fn from(args: CatalogArgs) -> Self {
        Self { file: args.catalog }
    }
}

impl From<SessionArgs> for SessionInput {
    fn from(args: SessionArgs) -> Self {
        Self {
            user: args.user,
            admin: None, // Privileges come from the config file only
            current_schema: args.current_schema,
        }
    }
}
