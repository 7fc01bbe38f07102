// src/api/selections.rs

use actix_web::{HttpResponse, delete, get, post, web};
use futures_util::TryStreamExt;
use mongodb::bson::doc;

use crate::AppState;
use crate::error::ApiError;
use crate::models::SelectedCourse;
use crate::store::{delete_echo, insert_echo, parse_object_id};

#[utoipa::path(
    request_body = SelectedCourse,
    responses((status = 200, description = "Insert result")),
    tag = "selections"
)]
#[post("/student/selected-course")]
pub async fn add_selected_course(
    state: web::Data<AppState>,
    payload: web::Json<SelectedCourse>,
) -> Result<HttpResponse, ApiError> {
    let selection = payload.into_inner();
    if selection.user_email.trim().is_empty() {
        return Err(ApiError::Validation("user_email is required".to_string()));
    }

    let result = state.store.selected_courses().insert_one(&selection).await?;
    Ok(HttpResponse::Ok().json(insert_echo(&result)))
}

#[utoipa::path(
    params(("email" = String, Path, description = "Student email")),
    responses((status = 200, description = "The student's checkout selections")),
    tag = "selections"
)]
#[get("/student/selected-all-course/{email}")]
pub async fn selected_courses_by_email(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    let selections: Vec<SelectedCourse> = state
        .store
        .selected_courses()
        .find(doc! { "user_email": &email })
        .await?
        .try_collect()
        .await?;
    Ok(HttpResponse::Ok().json(selections))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Selection document id")),
    responses((status = 200, description = "Delete result")),
    tag = "selections"
)]
#[delete("/student/delete-selected-course/{id}")]
pub async fn delete_selected_course(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;
    let result = state
        .store
        .selected_courses()
        .delete_one(doc! { "_id": id })
        .await?;
    Ok(HttpResponse::Ok().json(delete_echo(&result)))
}
