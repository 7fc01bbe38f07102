// src/api/dashboard.rs

use actix_web::{HttpResponse, get, web};
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;
use crate::error::ApiError;
use crate::models::{CourseStatus, Payment, Role, ViewStatus};

// Each aggregate is assembled from independent reads; there is no single
// combined query against the store.

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminStats {
    pub total_users: u64,
    pub total_students: u64,
    pub total_instructors: u64,
    pub total_courses: u64,
    pub approved_courses: u64,
    pub pending_courses: u64,
    pub denied_courses: u64,
    pub total_payments: u64,
    pub total_revenue: f64,
    pub unseen_messages: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InstructorStats {
    pub total_courses: u64,
    pub approved_courses: u64,
    pub pending_courses: u64,
    pub denied_courses: u64,
    pub total_enrolled: u64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentStats {
    pub selected_courses: u64,
    pub enrolled_courses: u64,
    pub total_spent: f64,
}

#[utoipa::path(
    responses((status = 200, body = AdminStats)),
    tag = "dashboard"
)]
#[get("/admin-dashboard/statices")]
pub async fn admin_stats(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = state.store.users();
    let courses = state.store.courses();

    let total_users = users.count_documents(doc! {}).await?;
    let total_students = users
        .count_documents(doc! { "role": Role::Student.as_str() })
        .await?;
    let total_instructors = users
        .count_documents(doc! { "role": Role::Instructor.as_str() })
        .await?;

    let total_courses = courses.count_documents(doc! {}).await?;
    let approved_courses = courses
        .count_documents(doc! { "status": CourseStatus::Accepted.as_str() })
        .await?;
    let pending_courses = courses
        .count_documents(doc! { "status": CourseStatus::Pending.as_str() })
        .await?;
    let denied_courses = courses
        .count_documents(doc! { "status": CourseStatus::Rejected.as_str() })
        .await?;

    let payments: Vec<Payment> = state
        .store
        .payments()
        .find(doc! {})
        .await?
        .try_collect()
        .await?;
    let total_payments = payments.len() as u64;
    let total_revenue = payments.iter().map(|p| p.amount).sum();

    let unseen_messages = state
        .store
        .contact_messages()
        .count_documents(doc! { "status": ViewStatus::Unseen.as_str() })
        .await?;

    Ok(HttpResponse::Ok().json(AdminStats {
        total_users,
        total_students,
        total_instructors,
        total_courses,
        approved_courses,
        pending_courses,
        denied_courses,
        total_payments,
        total_revenue,
        unseen_messages,
    }))
}

#[utoipa::path(
    params(("email" = String, Path, description = "Instructor email")),
    responses((status = 200, body = InstructorStats)),
    tag = "dashboard"
)]
#[get("/instructor-dashboard/{email}")]
pub async fn instructor_stats(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();
    let courses = state.store.courses();

    let total_courses = courses
        .count_documents(doc! { "instructor_email": &email })
        .await?;
    let approved_courses = courses
        .count_documents(
            doc! { "instructor_email": &email, "status": CourseStatus::Accepted.as_str() },
        )
        .await?;
    let pending_courses = courses
        .count_documents(
            doc! { "instructor_email": &email, "status": CourseStatus::Pending.as_str() },
        )
        .await?;
    let denied_courses = courses
        .count_documents(
            doc! { "instructor_email": &email, "status": CourseStatus::Rejected.as_str() },
        )
        .await?;

    let total_enrolled = state
        .store
        .payments()
        .count_documents(doc! { "instructor_email": &email })
        .await?;

    Ok(HttpResponse::Ok().json(InstructorStats {
        total_courses,
        approved_courses,
        pending_courses,
        denied_courses,
        total_enrolled,
    }))
}

#[utoipa::path(
    params(("email" = String, Path, description = "Student email")),
    responses((status = 200, body = StudentStats)),
    tag = "dashboard"
)]
#[get("/student-dashboard/{email}")]
pub async fn student_stats(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email = path.into_inner();

    let selected_courses = state
        .store
        .selected_courses()
        .count_documents(doc! { "user_email": &email })
        .await?;

    let payments: Vec<Payment> = state
        .store
        .payments()
        .find(doc! { "user_email": &email })
        .await?
        .try_collect()
        .await?;
    let enrolled_courses = payments.len() as u64;
    let total_spent = payments.iter().map(|p| p.amount).sum();

    Ok(HttpResponse::Ok().json(StudentStats {
        selected_courses,
        enrolled_courses,
        total_spent,
    }))
}
