// src/models.rs

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Instructor,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::Pending => "pending",
            CourseStatus::Accepted => "accepted",
            CourseStatus::Rejected => "rejected",
        }
    }
}

/// Seen/unseen flag shared by contact messages and freshly submitted courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ViewStatus {
    Seen,
    #[default]
    Unseen,
}

impl ViewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewStatus::Seen => "seen",
            ViewStatus::Unseen => "unseen",
        }
    }
}

/// Account profile captured on first login. Email is unique by convention
/// only; the login flow checks before inserting.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub photo_url: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub class_name: String,
    pub class_image: String,
    pub instructor_name: String,
    pub instructor_email: String,
    pub available_seats: i64,
    pub course_price: f64,
    #[serde(default)]
    pub status: CourseStatus,
    pub feedback: Option<String>,
    #[serde(default)]
    pub view_status: ViewStatus,
}

/// A course a student placed into checkout. `course_id` is the hex id of the
/// course document, stored as sent; nothing enforces that it resolves.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SelectedCourse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub user_email: String,
    pub course_id: String,
    pub class_name: String,
    pub class_image: Option<String>,
    pub instructor_email: Option<String>,
    pub price: f64,
}

/// Recorded after the client confirms a payment intent. Immutable once
/// written; admins may only delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Payment {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub user_email: String,
    pub instructor_email: Option<String>,
    pub course_id: String,
    pub selected_course_id: Option<String>,
    pub class_name: Option<String>,
    pub amount: f64,
    pub transaction_id: String,
    /// ISO-8601; stamped server-side when the client omits it.
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    #[serde(default)]
    pub status: ViewStatus,
}
