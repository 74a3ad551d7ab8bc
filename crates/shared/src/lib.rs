//! Shared utilities and common types for the Fyyur backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Form field validation (states, genres, phone numbers)
//! - Form payload deserialization helpers (optional text, genre lists, date-times)
//! - Search pattern escaping

pub mod form;
pub mod search;
pub mod validation;
