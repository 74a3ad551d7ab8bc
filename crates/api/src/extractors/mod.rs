//! Custom Axum extractors.
//!
//! Extractors that turn request rejections into [`ApiError`](crate::error::ApiError)
//! so every failure shares the same JSON error body.

pub mod json;

pub use json::{AppJson, AppPath, AppQuery};
