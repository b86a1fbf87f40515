use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    entities::project::{Project, ProjectInsert, UpdateProjectRequest},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self, limit: Option<i64>) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: i32) -> Result<Project, AppError>;
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
    async fn update_project(
        &self,
        id: i32,
        patch: &UpdateProjectRequest,
    ) -> Result<Project, AppError>;
    async fn delete_project(&self, id: i32) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self, limit: Option<i64>) -> Result<Vec<Project>, AppError> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT * FROM projects ORDER BY created_at DESC");

        if let Some(limit) = limit {
            builder.push(" LIMIT ").push_bind(limit);
        }

        let projects = builder
            .build_query_as::<Project>()
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: i32) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        project.ok_or_else(project_not_found)
    }

    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        // The column has no default: an insert that never mentions
        // `technologies` must fail as a schema problem, even when request
        // validation was bypassed. An explicitly supplied empty list is fine.
        let Some(technologies) = project.technologies.as_deref() else {
            return Err(AppError::Schema(
                "technologies must be explicitly provided when inserting a project".to_string(),
            ));
        };

        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, description, image_url, project_url, github_url, technologies)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.project_url)
        .bind(&project.github_url)
        .bind(technologies)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn update_project(
        &self,
        id: i32,
        patch: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        // Only supplied fields make it into the SET clause; `updated_at` is
        // always refreshed, even for an empty payload.
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE projects SET updated_at = NOW()");

        if let Some(title) = patch.title.value_ref() {
            builder.push(", title = ").push_bind(title.clone());
        }
        if let Some(description) = patch.description.value_ref() {
            builder.push(", description = ").push_bind(description.clone());
        }
        if let Some(image_url) = patch.image_url.as_ref_option() {
            builder.push(", image_url = ").push_bind(image_url.cloned());
        }
        if let Some(project_url) = patch.project_url.as_ref_option() {
            builder.push(", project_url = ").push_bind(project_url.cloned());
        }
        if let Some(github_url) = patch.github_url.as_ref_option() {
            builder.push(", github_url = ").push_bind(github_url.cloned());
        }
        if let Some(technologies) = patch.technologies.value_ref() {
            builder.push(", technologies = ").push_bind(technologies.clone());
        }

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        let updated = builder
            .build_query_as::<Project>()
            .fetch_optional(&self.pool)
            .await?;

        updated.ok_or_else(project_not_found)
    }

    async fn delete_project(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|result| {
                if result.rows_affected() == 0 {
                    Err(project_not_found())
                } else {
                    Ok(())
                }
            })?
    }
}

fn project_not_found() -> AppError {
    AppError::NotFound("Project not found".to_string())
}
