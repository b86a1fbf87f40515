use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    entities::option_fields::{PatchString, PatchVec},
    errors::AppError,
};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw create payload. Every field is absent-capable so that a missing
/// required field surfaces as the stable "Missing required fields" answer
/// instead of a deserializer message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Option<Vec<String>>,
}

/// Validated insert payload. `technologies` stays optional here on purpose:
/// the storage layer separately insists the field is explicitly supplied
/// (even when empty), independent of request validation.
#[derive(Debug, Clone)]
pub struct ProjectInsert {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub technologies: Option<Vec<String>>,
}

impl TryFrom<NewProjectRequest> for ProjectInsert {
    type Error = AppError;

    fn try_from(request: NewProjectRequest) -> Result<Self, AppError> {
        let (Some(title), Some(description), Some(technologies)) =
            (request.title, request.description, request.technologies)
        else {
            return Err(missing_required_fields());
        };

        if title.is_empty() || description.is_empty() || !valid_technologies(&technologies) {
            return Err(missing_required_fields());
        }

        Ok(ProjectInsert {
            title,
            description,
            image_url: request.image_url,
            project_url: request.project_url,
            github_url: request.github_url,
            technologies: Some(technologies),
        })
    }
}

/// Partial update. Tri-state fields distinguish "omitted" from "null" from
/// "value"; omitted fields never reach the UPDATE statement.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProjectRequest {
    pub title: PatchString,
    pub description: PatchString,
    pub image_url: PatchString,
    pub project_url: PatchString,
    pub github_url: PatchString,
    pub technologies: PatchVec<String>,
}

impl UpdateProjectRequest {
    /// Required fields may be left out of the payload, but when supplied
    /// they must carry a usable value.
    pub fn validate(&self) -> Result<(), AppError> {
        let blank_title = supplied_but_blank(&self.title);
        let blank_description = supplied_but_blank(&self.description);
        let blank_technologies = self.technologies.is_set_to_null()
            || self
                .technologies
                .value_ref()
                .is_some_and(|t| !valid_technologies(t));

        if blank_title || blank_description || blank_technologies {
            return Err(missing_required_fields());
        }
        Ok(())
    }
}

fn supplied_but_blank(field: &PatchString) -> bool {
    field.is_set_to_null() || field.value_ref().is_some_and(|v| v.is_empty())
}

/// Non-empty sequence of non-empty tokens.
fn valid_technologies(technologies: &[String]) -> bool {
    !technologies.is_empty() && technologies.iter().all(|t| !t.trim().is_empty())
}

fn missing_required_fields() -> AppError {
    AppError::Validation("Missing required fields".to_string())
}
