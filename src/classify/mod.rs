use crate::state::AppState;
use axum::Router;

pub mod client;
pub mod handlers;

pub use client::{ImageClassifier, SpoonacularClassifier};

pub fn router() -> Router<AppState> {
    handlers::classify_routes()
}
