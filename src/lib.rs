mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils};

use repositories::sqlx_repo::{SqlxContactRepo, SqlxProjectRepo};
use use_cases::{contact::ContactHandler, projects::ProjectHandler};

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppContactHandler = ContactHandler<SqlxContactRepo>;

/// Per-process state: one handler per entity, each holding a clone of the
/// injected pool. Nothing here is mutated after construction.
pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub contact_handler: AppContactHandler,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let project_handler = ProjectHandler::new(SqlxProjectRepo::new(pool.clone()));
        let contact_handler = ContactHandler::new(SqlxContactRepo::new(pool));

        AppState {
            project_handler,
            contact_handler,
        }
    }
}
