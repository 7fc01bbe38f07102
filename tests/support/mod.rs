#![allow(dead_code)]

use mongodb::{Client, Database};
use std::env;
use std::sync::OnceLock;
use tokio::sync::{Mutex, MutexGuard};

use camp_school_api::AppState;
use camp_school_api::store::Store;

static TEST_DB_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub struct TestDb {
    pub db: Database,
    _guard: MutexGuard<'static, ()>,
}

/// Provisions a fresh database from TEST_DATABASE_URL, serialized so suites
/// cannot trample each other. Returns None when the variable is unset so the
/// store-backed tests skip instead of failing on machines without MongoDB.
pub async fn init_test_db() -> Option<TestDb> {
    dotenvy::dotenv().ok();
    let Ok(test_url) = env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping store-backed test");
        return None;
    };

    let lock = TEST_DB_LOCK.get_or_init(|| Mutex::new(()));
    let guard = lock.lock().await;

    let client = Client::with_uri_str(&test_url)
        .await
        .expect("connect test mongodb");
    let db_name = env::var("TEST_DB_NAME").unwrap_or_else(|_| "camp_school_test".to_string());
    let db = client.database(&db_name);
    db.drop().await.expect("drop test db");

    Some(TestDb { db, _guard: guard })
}

pub fn build_state(db: Database) -> AppState {
    AppState {
        store: Store::new(db),
        stripe_secret_key: "sk_test_dummy".to_string(),
    }
}

/// State over a lazily-connecting client for routes that never reach the
/// store (payment intents, malformed-id rejections).
pub async fn detached_state() -> AppState {
    let client = Client::with_uri_str("mongodb://127.0.0.1:27017")
        .await
        .expect("parse mongodb uri");
    build_state(client.database("camp_school_detached"))
}
