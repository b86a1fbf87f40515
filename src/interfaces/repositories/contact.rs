use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::contact::{ContactInsert, ContactMessage},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact_message(&self, msg: &ContactInsert) -> Result<i32, AppError>;
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_contact_message(&self, msg: &ContactInsert) -> Result<i32, AppError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
