use crate::helpers::catalog::{id_of, sample_catalog};
use crate::helpers::cli::CliTestHelper;
use anyhow::Result;
use dbcomment::catalog::{CatalogStore, ObjectKind};
use predicates::prelude::*;

#[test]
fn test_comment_on_table() -> Result<()> {
    let helper = CliTestHelper::new(&sample_catalog())?;

    helper
        .command()
        .args(["comment", "table", "T1", "--text", "orders table"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "COMMENT ON TABLE \"T1\" IS 'orders table';",
        ));

    let catalog = helper.load_catalog()?;
    let t1 = id_of(&catalog, ObjectKind::TableOrView, "T1");
    assert_eq!(catalog.comment_of(t1, None), Some("orders table".into()));
    Ok(())
}

#[test]
fn test_clear_comment_on_sequence() -> Result<()> {
    let helper = CliTestHelper::new(&sample_catalog())?;

    helper
        .command()
        .args(["comment", "sequence", "SEQ1", "--text", "ids"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Clearing comment").not());
    helper
        .command()
        .args(["comment", "sequence", "SEQ1", "--null"])
        .assert()
        .success()
        .stdout(predicate::str::contains("IS NULL;"))
        .stderr(predicate::str::contains(
            "Clearing comment: COMMENT ON SEQUENCE \"SEQ1\" IS NULL;",
        ));

    let catalog = helper.load_catalog()?;
    assert_eq!(catalog.comment_records().count(), 0);
    Ok(())
}

#[test]
fn test_column_comment_with_explicit_catalog() -> Result<()> {
    let helper = CliTestHelper::new(&sample_catalog())?;
    let catalog_arg = helper.catalog_path.display().to_string();

    helper
        .command()
        .args([
            "comment", "table", "T1", "--schema", "PUBLIC", "--column", "TOTAL", "--text",
            "gross", "--catalog", catalog_arg.as_str(),
        ])
        .assert()
        .success();

    let catalog = helper.load_catalog()?;
    let t1 = id_of(&catalog, ObjectKind::TableOrView, "T1");
    assert_eq!(catalog.comment_of(t1, Some("TOTAL")), Some("gross".into()));
    Ok(())
}

#[test]
fn test_missing_table_fails() -> Result<()> {
    let helper = CliTestHelper::new(&sample_catalog())?;

    helper
        .command()
        .args(["comment", "table", "ghost", "--text", "boo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"ghost\" not found"));
    Ok(())
}

#[test]
fn test_unknown_kind_fails() -> Result<()> {
    let helper = CliTestHelper::new(&sample_catalog())?;

    helper
        .command()
        .args(["comment", "aggregate", "X", "--text", "y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
    Ok(())
}

#[test]
fn test_text_or_null_is_required() -> Result<()> {
    let helper = CliTestHelper::new(&sample_catalog())?;

    helper
        .command()
        .args(["comment", "table", "T1"])
        .assert()
        .failure();
    helper
        .command()
        .args(["comment", "table", "T1", "--text", "a", "--null"])
        .assert()
        .failure();
    Ok(())
}

#[test]
fn test_non_admin_user_from_config_is_rejected() -> Result<()> {
    let helper = CliTestHelper::new(&sample_catalog())?;
    helper.write_config("session:\n  user: AUDITOR\n  admin: false\n")?;

    helper
        .command()
        .args(["comment", "role", "READERS", "--text", "ro"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Admin rights are required"));

    let catalog = helper.load_catalog()?;
    assert_eq!(catalog.comment_records().count(), 0);
    Ok(())
}
