use crate::helpers::catalog::{comment_on, sample_catalog};
use crate::helpers::cli::CliTestHelper;
use anyhow::Result;
use dbcomment::catalog::ObjectKind;
use predicates::prelude::*;

#[test]
fn test_show_lists_comments_as_sql() -> Result<()> {
    let mut catalog = sample_catalog();
    comment_on(&mut catalog, ObjectKind::TableOrView, "T1", Some("orders table"))?;
    comment_on(&mut catalog, ObjectKind::Role, "READERS", Some("read only"))?;
    let helper = CliTestHelper::new(&catalog)?;

    let output = helper.command().arg("show").output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;

    insta::assert_snapshot!(stdout.trim_end(), @r#"
    COMMENT ON TABLE "PUBLIC"."T1" IS 'orders table';
    COMMENT ON ROLE "READERS" IS 'read only';
    "#);
    Ok(())
}

#[test]
fn test_show_json() -> Result<()> {
    let mut catalog = sample_catalog();
    comment_on(&mut catalog, ObjectKind::Sequence, "SEQ1", Some("ids"))?;
    let helper = CliTestHelper::new(&catalog)?;

    let output = helper.command().args(["show", "--format", "json"]).output()?;
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(entries[0]["kind"], "sequence");
    assert_eq!(entries[0]["schema"], "PUBLIC");
    assert_eq!(entries[0]["text"], "ids");
    assert!(entries[0]["record"].is_u64());
    Ok(())
}

#[test]
fn test_show_empty_catalog() -> Result<()> {
    let helper = CliTestHelper::new(&sample_catalog())?;

    helper
        .command()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No comments"));
    Ok(())
}
