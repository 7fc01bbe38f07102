use serde_json::json;

use camp_school_api::api::payments::to_minor_units;
use camp_school_api::models::{ContactMessage, CourseStatus, Role, User, ViewStatus};
use camp_school_api::store::parse_object_id;

#[test]
fn minor_units_conversion_is_exact() {
    assert_eq!(to_minor_units(19.99), 1999);
    assert_eq!(to_minor_units(10.0), 1000);
    assert_eq!(to_minor_units(0.1), 10);
    assert_eq!(to_minor_units(123.456), 12346);
}

#[test]
fn object_id_parsing_accepts_hex_and_rejects_garbage() {
    let parsed = parse_object_id("64af1f77bcf86cd799439011").expect("24-hex id");
    assert_eq!(parsed.to_hex(), "64af1f77bcf86cd799439011");

    for raw in ["", "not-an-id", "64af1f77", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
        let err = parse_object_id(raw).expect_err("malformed id must be rejected");
        assert_eq!(err.kind(), "malformed_identifier");
    }
}

#[test]
fn roles_and_statuses_serialize_lowercase() {
    assert_eq!(serde_json::to_value(Role::Instructor).unwrap(), json!("instructor"));
    assert_eq!(serde_json::to_value(CourseStatus::Accepted).unwrap(), json!("accepted"));
    assert_eq!(serde_json::to_value(ViewStatus::Unseen).unwrap(), json!("unseen"));

    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(CourseStatus::Rejected.as_str(), "rejected");
    assert_eq!(ViewStatus::Seen.as_str(), "seen");
}

#[test]
fn login_payload_defaults_to_student_role() {
    let user: User = serde_json::from_value(json!({
        "name": "Ada",
        "email": "ada@example.com"
    }))
    .expect("minimal profile");

    assert_eq!(user.role, Role::Student);
    assert!(user.id.is_none());
    assert!(user.photo_url.is_none());
}

#[test]
fn contact_message_defaults_to_unseen() {
    let message: ContactMessage = serde_json::from_value(json!({
        "name": "Bea",
        "email": "bea@example.com",
        "message": "When does enrollment open?"
    }))
    .expect("contact body");

    assert_eq!(message.status, ViewStatus::Unseen);
}
