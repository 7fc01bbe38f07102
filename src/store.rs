// src/store.rs

use mongodb::bson::Bson;
use mongodb::bson::oid::ObjectId;
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::{Collection, Database};
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::models::{ContactMessage, Course, Payment, SelectedCourse, User};

/// Handle on the document store. One typed collection per entity; every
/// route receives this through the injected application state.
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection("users")
    }

    pub fn courses(&self) -> Collection<Course> {
        self.db.collection("courses")
    }

    pub fn selected_courses(&self) -> Collection<SelectedCourse> {
        self.db.collection("selected_courses")
    }

    pub fn payments(&self) -> Collection<Payment> {
        self.db.collection("payments")
    }

    pub fn contact_messages(&self) -> Collection<ContactMessage> {
        self.db.collection("contact_messages")
    }
}

/// Path parameters must be 24-hex document ids; anything else is rejected
/// here, before a filter is ever built.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::MalformedId(raw.to_string()))
}

fn id_value(id: &Bson) -> Value {
    match id.as_object_id() {
        Some(oid) => Value::String(oid.to_hex()),
        None => Value::Null,
    }
}

// Write responses echo the driver's raw result objects in the field shape
// the legacy Node backend produced.

pub fn insert_echo(result: &InsertOneResult) -> Value {
    json!({
        "acknowledged": true,
        "insertedId": id_value(&result.inserted_id),
    })
}

pub fn update_echo(result: &UpdateResult) -> Value {
    json!({
        "acknowledged": true,
        "matchedCount": result.matched_count,
        "modifiedCount": result.modified_count,
        "upsertedId": result.upserted_id.as_ref().map(id_value),
        "upsertedCount": if result.upserted_id.is_some() { 1 } else { 0 },
    })
}

pub fn delete_echo(result: &DeleteResult) -> Value {
    json!({
        "acknowledged": true,
        "deletedCount": result.deleted_count,
    })
}
