pub mod api;
pub mod docs;
pub mod error;
pub mod models;
pub mod store;

use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub stripe_secret_key: String,
}
