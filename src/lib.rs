//! Nutrition tracking backend: accounts, health profiles, a daily food log
//! scored against the user's health goal, and proxies to USDA FoodData
//! Central and an image classifier.

pub mod app;
pub mod auth;
pub mod classify;
pub mod config;
pub mod error;
pub mod food_log;
pub mod foods;
pub mod profiles;
pub mod scoring;
pub mod state;
