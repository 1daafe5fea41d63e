use crate::errors::AppError;

/// Reads a path segment as a row id. `None` means no row can carry it.
pub fn parse_project_id(id: &str) -> Option<i64> {
    id.trim().parse::<i64>().ok()
}

/// Parses a project id taken from a request path
pub fn valid_project_id(id: &str) -> Result<i64, AppError> {
    parse_project_id(id).ok_or_else(|| AppError::InvalidInput(format!("Invalid project id: {}", id)))
}
