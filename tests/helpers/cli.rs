use anyhow::Result;
use assert_cmd::Command;
use dbcomment::catalog::InMemoryCatalog;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary project directory with a catalog snapshot for CLI runs
pub struct CliTestHelper {
    pub temp_dir: TempDir,
    pub catalog_path: PathBuf,
}

impl CliTestHelper {
    pub fn new(catalog: &InMemoryCatalog) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let catalog_path = temp_dir.path().join("catalog.yaml");
        catalog.save(&catalog_path)?;
        Ok(Self {
            temp_dir,
            catalog_path,
        })
    }

    pub fn write_config(&self, contents: &str) -> Result<()> {
        fs::write(self.temp_dir.path().join("dbcomment.yaml"), contents)?;
        Ok(())
    }

    /// `dbcomment` running inside the project directory
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("dbcomment").expect("binary should build");
        cmd.current_dir(self.temp_dir.path())
            .env_remove("DBCOMMENT_CATALOG")
            .env_remove("DBCOMMENT_USER")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn load_catalog(&self) -> Result<InMemoryCatalog> {
        InMemoryCatalog::load(&self.catalog_path)
    }
}
