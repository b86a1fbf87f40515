use crate::{
    constants::PUBLIC_PROJECT_LIMIT,
    entities::project::{NewProjectRequest, Project, UpdateProjectRequest},
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::valid_id::valid_project_id,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects newest-first. The capped variant backs the public
    /// listing page and returns at most `PUBLIC_PROJECT_LIMIT` rows.
    pub async fn list_projects(&self, capped: bool) -> Result<Vec<Project>, AppError> {
        let limit = capped.then_some(PUBLIC_PROJECT_LIMIT);
        self.project_repo.list_projects(limit).await
    }

    /// Retrieves a single project by its ID
    pub async fn get_project(&self, id: &str) -> Result<Project, AppError> {
        let valid_id = valid_project_id(id)?;
        self.project_repo.get_project_by_id(valid_id).await
    }

    /// Validates and persists a new project
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        let insert = request.try_into()?;
        self.project_repo.create_project(&insert).await
    }

    /// Partial update. Existence is confirmed before the payload is
    /// validated; only supplied fields are merged.
    pub async fn update_project(
        &self,
        id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        let valid_id = valid_project_id(id)?;

        self.project_repo.get_project_by_id(valid_id).await?;
        request.validate()?;

        self.project_repo.update_project(valid_id, request).await
    }

    /// Hard delete
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_project_id(id)?;
        self.project_repo.delete_project(valid_id).await
    }
}
