use crate::config::types::*;

/// Trait for merging optional configuration values
pub trait Merge<T> {
    fn merge(self, other: T) -> T;
}

impl Merge<ConfigInput> for ConfigInput {
    fn merge(self, other: ConfigInput) -> ConfigInput {
        ConfigInput {
            catalog: match (self.catalog, other.catalog) {
                (None, None) => None,
                (Some(a), None) => Some(a),
                (None, Some(b)) => Some(b),
                (Some(a), Some(b)) => Some(a.merge_with(b)),
            },
            session: match (self.session, other.session) {
                (None, None) => None,
                (Some(a), None) => Some(a),
                (None, Some(b)) => Some(b),
                (Some(a), Some(b)) => Some(a.merge_with(b)),
            },
        }
    }
}

impl CatalogInput {
    pub fn merge_with(self, other: CatalogInput) -> CatalogInput {
        CatalogInput {
            file: other.file.or(self.file),
        }
    }
}

impl SessionInput {
    pub fn merge_with(self, other: SessionInput) -> SessionInput {
        SessionInput {
            user: other.user.or(self.user),
            admin: other.admin.or(self.admin),
            current_schema: other.current_schema.or(self.current_schema),
        }
    }
}
