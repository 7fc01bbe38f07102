// src/api/messages.rs

use actix_web::{HttpResponse, delete, post, put, web};
use mongodb::bson::doc;

use crate::AppState;
use crate::error::ApiError;
use crate::models::{ContactMessage, ViewStatus};
use crate::store::{delete_echo, insert_echo, parse_object_id, update_echo};

/// Public contact form. Messages always land unseen.
#[utoipa::path(
    request_body = ContactMessage,
    responses((status = 200, description = "Insert result")),
    tag = "messages"
)]
#[post("/contact-us/message")]
pub async fn create_message(
    state: web::Data<AppState>,
    payload: web::Json<ContactMessage>,
) -> Result<HttpResponse, ApiError> {
    let mut message = payload.into_inner();
    if message.email.trim().is_empty() {
        return Err(ApiError::Validation("email is required".to_string()));
    }
    message.status = ViewStatus::Unseen;

    let result = state.store.contact_messages().insert_one(&message).await?;
    Ok(HttpResponse::Ok().json(insert_echo(&result)))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Message document id")),
    responses((status = 200, description = "Update result")),
    tag = "messages"
)]
#[put("/contact-us/single-massage-seen/{id}")]
pub async fn mark_message_seen(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;
    let result = state
        .store
        .contact_messages()
        .update_one(
            doc! { "_id": id },
            doc! { "$set": { "status": ViewStatus::Seen.as_str() } },
        )
        .await?;
    Ok(HttpResponse::Ok().json(update_echo(&result)))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Message document id")),
    responses((status = 200, description = "Delete result")),
    tag = "messages"
)]
#[delete("/contact-us/single-message/delete/{id}")]
pub async fn delete_message(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;
    let result = state
        .store
        .contact_messages()
        .delete_one(doc! { "_id": id })
        .await?;
    Ok(HttpResponse::Ok().json(delete_echo(&result)))
}
