use crate::{
    entities::contact::{ContactMessage, ContactResponse, NewContactRequest},
    errors::AppError,
    repositories::contact::ContactRepository,
};

pub struct ContactHandler<R>
where
    R: ContactRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Handles the creation of a new contact message
    pub async fn create_contact_message(
        &self,
        request: NewContactRequest,
    ) -> Result<ContactResponse, AppError> {
        let new_msg = request.try_into()?;

        let id = self.contact_repo.create_contact_message(&new_msg).await?;

        Ok(ContactResponse {
            message: "Contact message sent successfully".to_string(),
            id,
        })
    }

    /// Lists all contact messages, newest first
    pub async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        self.contact_repo.list_contact_messages().await
    }
}
