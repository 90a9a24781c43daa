use crate::state::AppState;
use axum::Router;

pub mod client;
pub mod dto;
pub mod handlers;

pub use client::{FoodDataClient, UsdaClient};

pub fn router() -> Router<AppState> {
    handlers::nutrition_routes()
}
