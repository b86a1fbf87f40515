use crate::errors::AppError;

/// Parses a path segment as a project id, before any storage lookup.
pub fn valid_project_id(id: &str) -> Result<i32, AppError> {
    id.trim()
        .parse::<i32>()
        .map_err(|_| AppError::Validation("Invalid project ID".to_string()))
}
