//! Error taxonomy for comment statements.

use std::fmt;

/// Numeric error codes surfaced to clients. Values follow the H2 family of
/// engines so existing tooling keeps matching on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    TableOrViewNotFound,
    IndexNotFound,
    ConstantNotFound,
    ConstraintNotFound,
    FunctionAliasNotFound,
    RoleNotFound,
    SchemaNotFound,
    SequenceNotFound,
    TriggerNotFound,
    UserNotFound,
    /// Generic fallback for kinds without a dedicated code
    ObjectNotFound,
    ColumnNotFound,
    AdminRightsRequired,
    FeatureNotSupported,
}

impl ErrorCode {
    pub fn code(self) -> u32 {
        match self {
            ErrorCode::TableOrViewNotFound => 42102,
            ErrorCode::IndexNotFound => 42112,
            ErrorCode::ColumnNotFound => 42122,
            ErrorCode::ObjectNotFound => 50000,
            ErrorCode::FeatureNotSupported => 50100,
            ErrorCode::UserNotFound => 90032,
            ErrorCode::SequenceNotFound => 90036,
            ErrorCode::AdminRightsRequired => 90040,
            ErrorCode::TriggerNotFound => 90042,
            ErrorCode::ConstraintNotFound => 90057,
            ErrorCode::RoleNotFound => 90070,
            ErrorCode::FunctionAliasNotFound => 90077,
            ErrorCode::SchemaNotFound => 90079,
            ErrorCode::ConstantNotFound => 90115,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ErrorCode::TableOrViewNotFound => "Table or view",
            ErrorCode::IndexNotFound => "Index",
            ErrorCode::ConstantNotFound => "Constant",
            ErrorCode::ConstraintNotFound => "Constraint",
            ErrorCode::FunctionAliasNotFound => "Function alias",
            ErrorCode::RoleNotFound => "Role",
            ErrorCode::SchemaNotFound => "Schema",
            ErrorCode::SequenceNotFound => "Sequence",
            ErrorCode::TriggerNotFound => "Trigger",
            ErrorCode::UserNotFound => "User",
            ErrorCode::ObjectNotFound => "Object",
            ErrorCode::ColumnNotFound => "Column",
            ErrorCode::AdminRightsRequired => "Admin rights",
            ErrorCode::FeatureNotSupported => "Feature",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommentError {
    #[error("{} \"{name}\" not found [{code}]", .code.label())]
    NotFound { code: ErrorCode, name: String },

    #[error(
        "Column \"{column}\" not found in table \"{table}\" [{code}]",
        code = ErrorCode::ColumnNotFound
    )]
    ColumnNotFound { column: String, table: String },

    #[error(
        "Admin rights are required for user \"{user}\" [{code}]",
        code = ErrorCode::AdminRightsRequired
    )]
    PermissionDenied { user: String },

    #[error("Feature not supported: \"{0}\" [{code}]", code = ErrorCode::FeatureNotSupported)]
    Unsupported(String),

    #[error("catalog: {0}")]
    Catalog(String),
}

impl CommentError {
    pub fn not_found(code: ErrorCode, name: impl Into<String>) -> Self {
        CommentError::NotFound {
            code,
            name: name.into(),
        }
    }

    /// Numeric code reported to the client. Collaborator failures report the
    /// generic code.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            CommentError::NotFound { code, .. } => *code,
            CommentError::ColumnNotFound { .. } => ErrorCode::ColumnNotFound,
            CommentError::PermissionDenied { .. } => ErrorCode::AdminRightsRequired,
            CommentError::Unsupported(_) => ErrorCode::FeatureNotSupported,
            CommentError::Catalog(_) => ErrorCode::ObjectNotFound,
        }
    }
}

pub type Result<T, E = CommentError> = std::result::Result<T, E>;

macro_rules! catalog_err {
    ($($arg:tt)*) => {
        crate::error::CommentError::Catalog(std::format!($($arg)*))
    };
}
pub(crate) use catalog_err;
