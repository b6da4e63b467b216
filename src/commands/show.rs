//! `dbcomment show`: list every comment in the catalog snapshot.

use anyhow::Result;

use crate::catalog::InMemoryCatalog;
use crate::config::Config;
use crate::render::{list_comments, render_comment_entry};

/// Output format for the comment listing
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq)]
pub enum ShowFormat {
    /// One COMMENT ON statement per line
    Sql,
    /// JSON array for piping to jq
    Json,
}

pub fn cmd_show(config: &Config, format: ShowFormat) -> Result<()> {
    let catalog = InMemoryCatalog::load(&config.catalog.file)?;
    let entries = list_comments(&catalog);

    match format {
        ShowFormat::Sql => {
            if entries.is_empty() {
                eprintln!("No comments in {}", config.catalog.file.display());
            }
            for entry in &entries {
                println!("{}", render_comment_entry(entry).sql);
            }
        }
        ShowFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }

    Ok(())
}
