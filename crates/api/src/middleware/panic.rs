//! Turns handler panics into the standard JSON 500 body.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Response builder for `tower_http::catch_panic::CatchPanicLayer`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("Handler panicked: {}", detail)).into_response()
}
