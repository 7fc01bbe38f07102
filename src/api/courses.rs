// src/api/courses.rs

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::AppState;
use crate::error::ApiError;
use crate::models::{Course, CourseStatus, ViewStatus};
use crate::store::{delete_echo, insert_echo, parse_object_id, update_echo};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCourseRequest {
    pub class_name: String,
    pub class_image: String,
    pub instructor_name: String,
    pub instructor_email: String,
    pub available_seats: i64,
    pub course_price: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    pub class_name: String,
    pub class_image: String,
    pub available_seats: i64,
    pub course_price: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FeedbackRequest {
    pub feedback: String,
}

async fn accepted_courses(state: &AppState, limit: Option<i64>) -> Result<Vec<Course>, ApiError> {
    let courses = state.store.courses();
    let find = courses
        .find(doc! { "status": CourseStatus::Accepted.as_str() })
        .sort(doc! { "class_name": -1 });
    let cursor = match limit {
        Some(n) => find.limit(n).await?,
        None => find.await?,
    };
    Ok(cursor.try_collect().await?)
}

#[utoipa::path(
    responses((status = 200, description = "Up to 6 accepted courses, class name descending")),
    tag = "courses"
)]
#[get("/home/course")]
pub async fn home_courses(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let courses = accepted_courses(&state, Some(6)).await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[utoipa::path(
    responses((status = 200, description = "All accepted courses, class name descending")),
    tag = "courses"
)]
#[get("/all-course")]
pub async fn all_courses(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let courses = accepted_courses(&state, None).await?;
    Ok(HttpResponse::Ok().json(courses))
}

/// New submissions always start pending with no feedback, whatever the
/// client sent.
#[utoipa::path(
    request_body = AddCourseRequest,
    responses((status = 200, description = "Insert result")),
    tag = "courses"
)]
#[post("/add-course")]
pub async fn add_course(
    state: web::Data<AppState>,
    payload: web::Json<AddCourseRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = payload.into_inner();
    let course = Course {
        id: None,
        class_name: req.class_name,
        class_image: req.class_image,
        instructor_name: req.instructor_name,
        instructor_email: req.instructor_email,
        available_seats: req.available_seats,
        course_price: req.course_price,
        status: CourseStatus::Pending,
        feedback: None,
        view_status: ViewStatus::Unseen,
    };

    let result = state.store.courses().insert_one(&course).await?;
    Ok(HttpResponse::Ok().json(insert_echo(&result)))
}

#[utoipa::path(
    params(("email" = String, Path, description = "Instructor email")),
    responses((status = 200, description = "Courses owned by the instructor")),
    tag = "courses"
)]
#[get("/my-course/{email}")]
pub async fn my_courses(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    let courses: Vec<Course> = state
        .store
        .courses()
        .find(doc! { "instructor_email": &email })
        .await?
        .try_collect()
        .await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Course document id")),
    request_body = UpdateCourseRequest,
    responses((status = 200, description = "Update result")),
    tag = "courses"
)]
#[put("/my-course/update-data/{id}")]
pub async fn update_course_data(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateCourseRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;
    let req = payload.into_inner();
    let result = state
        .store
        .courses()
        .update_one(
            doc! { "_id": id },
            doc! { "$set": {
                "class_name": req.class_name,
                "class_image": req.class_image,
                "available_seats": req.available_seats,
                "course_price": req.course_price,
            } },
        )
        .await?;
    Ok(HttpResponse::Ok().json(update_echo(&result)))
}

async fn set_status(
    state: &AppState,
    course_id: &str,
    status: CourseStatus,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(course_id)?;
    let result = state
        .store
        .courses()
        .update_one(
            doc! { "_id": id },
            doc! { "$set": { "status": status.as_str() } },
        )
        .await?;
    Ok(HttpResponse::Ok().json(update_echo(&result)))
}

/// Moderation is a plain overwrite: approving twice, or approving a
/// previously denied course, all succeed.
#[utoipa::path(
    params(("id" = String, Path, description = "Course document id")),
    responses((status = 200, description = "Update result")),
    tag = "courses"
)]
#[patch("/admin/approve-course/{id}")]
pub async fn approve_course(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    set_status(&state, &path.into_inner(), CourseStatus::Accepted).await
}

#[utoipa::path(
    params(("id" = String, Path, description = "Course document id")),
    responses((status = 200, description = "Update result")),
    tag = "courses"
)]
#[patch("/admin/deny-course/{id}")]
pub async fn deny_course(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    set_status(&state, &path.into_inner(), CourseStatus::Rejected).await
}

#[utoipa::path(
    params(("id" = String, Path, description = "Course document id")),
    request_body = FeedbackRequest,
    responses((status = 200, description = "Update result")),
    tag = "courses"
)]
#[patch("/admin/feedback/{id}")]
pub async fn course_feedback(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<FeedbackRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;
    let result = state
        .store
        .courses()
        .update_one(
            doc! { "_id": id },
            doc! { "$set": { "feedback": payload.into_inner().feedback } },
        )
        .await?;
    Ok(HttpResponse::Ok().json(update_echo(&result)))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Course document id")),
    responses((status = 200, description = "Delete result")),
    tag = "courses"
)]
#[delete("/admin/delete-course/{id}")]
pub async fn delete_course(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&path.into_inner())?;
    let result = state.store.courses().delete_one(doc! { "_id": id }).await?;
    Ok(HttpResponse::Ok().json(delete_echo(&result)))
}
