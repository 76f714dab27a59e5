use super::app_error::AppError;

/// Postgres rejects NUL bytes in `TEXT`, which JSON strings can carry.
const CHARACTER_NOT_IN_REPERTOIRE: &str = "22021";

pub(super) fn map_database_error(code: Option<&str>) -> Option<AppError> {
    match code {
        Some(CHARACTER_NOT_IN_REPERTOIRE) => Some(AppError::validation_error(
            "input contains characters that cannot be stored",
        )),
        Some("08001") | Some("08006") => Some(AppError::database_unavailable(
            "Unable to connect to database. Please try again later.",
        )),
        Some("53300") | Some("57P03") => Some(AppError::database_unavailable(
            "Service temporarily unavailable. Please try again later.",
        )),
        _ => None,
    }
}
