// Configuration file name
pub const CONFIG_FILENAME: &str = "dbcomment.yaml";

// Catalog snapshot used when neither config nor CLI names one
pub const DEFAULT_CATALOG_FILE: &str = "catalog.yaml";

// Objects every database starts with
pub const MAIN_SCHEMA: &str = "PUBLIC";
pub const DEFAULT_ADMIN_USER: &str = "SA";

// Environment overrides
pub const CATALOG_ENV_VAR: &str = "DBCOMMENT_CATALOG";
pub const USER_ENV_VAR: &str = "DBCOMMENT_USER";

/// Completion code of a successful definition statement. These statements
/// never report an affected-row count.
pub const UPDATE_COUNT_NONE: i32 = 0;
