// src/api/users.rs

use actix_web::{HttpResponse, delete, get, patch, post, web};
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use serde_json::json;

use crate::AppState;
use crate::error::ApiError;
use crate::models::{Role, User};
use crate::store::{delete_echo, insert_echo, parse_object_id, update_echo};

/// Register-or-fetch: the only signup path. An email that is already known
/// returns the stored profile untouched.
#[utoipa::path(
    request_body = User,
    responses((status = 200, description = "Insert result, or the existing user")),
    tag = "users"
)]
#[post("/login-user")]
pub async fn login_user(
    state: web::Data<AppState>,
    payload: web::Json<User>,
) -> Result<HttpResponse, ApiError> {
    let user = payload.into_inner();
    if user.email.trim().is_empty() {
        return Err(ApiError::Validation("email is required".to_string()));
    }

    let users = state.store.users();
    if let Some(existing) = users.find_one(doc! { "email": &user.email }).await? {
        return Ok(HttpResponse::Ok().json(json!({
            "message": "user already exists",
            "user": existing,
        })));
    }

    log::info!("registering user email={}", user.email);
    let result = users.insert_one(&user).await?;
    Ok(HttpResponse::Ok().json(insert_echo(&result)))
}

#[utoipa::path(
    responses((status = 200, description = "All users")),
    tag = "users"
)]
#[get("/manage-user")]
pub async fn manage_users(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users: Vec<User> = state.store.users().find(doc! {}).await?.try_collect().await?;
    Ok(HttpResponse::Ok().json(users))
}

async fn set_role(state: &AppState, user_id: &str, role: Role) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(user_id)?;
    let result = state
        .store
        .users()
        .update_one(doc! { "_id": id }, doc! { "$set": { "role": role.as_str() } })
        .upsert(true)
        .await?;
    Ok(HttpResponse::Ok().json(update_echo(&result)))
}

/// Unconditional single-field overwrite; no check of the caller or of the
/// prior role.
#[utoipa::path(
    params(("user_id" = String, Path, description = "User document id")),
    responses((status = 200, description = "Update result")),
    tag = "users"
)]
#[patch("/manage-user/update-role-admin/{user_id}")]
pub async fn update_role_admin(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    set_role(&state, &path.into_inner(), Role::Admin).await
}

#[utoipa::path(
    params(("user_id" = String, Path, description = "User document id")),
    responses((status = 200, description = "Update result")),
    tag = "users"
)]
#[patch("/manage-user/update-role-instructor/{user_id}")]
pub async fn update_role_instructor(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    set_role(&state, &path.into_inner(), Role::Instructor).await
}

#[utoipa::path(
    params(("id" = String, Path, description = "User document id")),
    responses((status = 200, description = "Delete result")),
    tag = "users"
)]
#[delete("/user/delete/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;
    let result = state.store.users().delete_one(doc! { "_id": id }).await?;
    Ok(HttpResponse::Ok().json(delete_echo(&result)))
}

#[utoipa::path(
    responses((status = 200, description = "Up to 4 instructors, name ascending")),
    tag = "users"
)]
#[get("/home/instructor")]
pub async fn home_instructors(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let instructors: Vec<User> = state
        .store
        .users()
        .find(doc! { "role": Role::Instructor.as_str() })
        .sort(doc! { "name": 1 })
        .limit(4)
        .await?
        .try_collect()
        .await?;
    Ok(HttpResponse::Ok().json(instructors))
}

#[utoipa::path(
    responses((status = 200, description = "All instructors, name ascending")),
    tag = "users"
)]
#[get("/all-instructor")]
pub async fn all_instructors(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let instructors: Vec<User> = state
        .store
        .users()
        .find(doc! { "role": Role::Instructor.as_str() })
        .sort(doc! { "name": 1 })
        .await?
        .try_collect()
        .await?;
    Ok(HttpResponse::Ok().json(instructors))
}
