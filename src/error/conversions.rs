use crate::error::app_error::{AppError, ValidationIssue};
use crate::error::db_mapping::map_database_error;
use crate::error::validation_mapping::collect_validation_issues;

impl From<crate::domain::DomainError> for AppError {
    fn from(err: crate::domain::DomainError) -> Self {
        let message = err.to_string();
        match err {
            crate::domain::DomainError::EmptyBatch => AppError::ValidationError {
                message,
                issues: vec![ValidationIssue {
                    field: "data".to_string(),
                    message: "The data field is required.".to_string(),
                    code: "required".to_string(),
                }],
            },
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_) => AppError::database_unavailable(
                "Unable to connect to database. Please try again later.",
            ),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => AppError::database_unavailable(
                "Service temporarily unavailable. Please try again later.",
            ),
            sqlx::Error::Database(database_error) => {
                if let Some(mapped) = map_database_error(database_error.code().as_deref()) {
                    mapped
                } else {
                    AppError::DatabaseError(sqlx::Error::Database(database_error))
                }
            }
            other => AppError::DatabaseError(other),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::from_nested_validation([(None, err)])
    }
}

impl AppError {
    /// Flattens validation failures of several inputs into one error. Each
    /// entry carries the path prefix of the input it belongs to, e.g.
    /// `data.3` for the fourth item of a batch. Issues keep the order of the
    /// entries and are sorted by field only within an entry.
    pub fn from_nested_validation<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Option<String>, validator::ValidationErrors)>,
    {
        let mut issues = Vec::new();
        for (prefix, errors) in entries {
            let mut entry_issues = Vec::new();
            collect_validation_issues(prefix, &errors, &mut entry_issues);
            entry_issues.sort_by(|left, right| {
                left.field
                    .cmp(&right.field)
                    .then(left.code.cmp(&right.code))
            });
            issues.extend(entry_issues);
        }

        let message = match issues.as_slice() {
            [issue] => issue.message.clone(),
            _ => "Request validation failed".to_string(),
        };

        AppError::ValidationError { message, issues }
    }
}
