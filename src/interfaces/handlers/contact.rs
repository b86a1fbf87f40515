use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::contact::NewContactRequest, errors::AppError, AppState};

#[instrument(skip(state, form))]
pub async fn create_contact_message(
    state: web::Data<AppState>,
    form: web::Json<NewContactRequest>,
) -> Result<impl Responder, AppError> {
    let response = state
        .contact_handler
        .create_contact_message(form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(state))]
pub async fn list_contact_messages(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let messages = state.contact_handler.list_contact_messages().await?;

    Ok(HttpResponse::Ok().json(messages))
}
