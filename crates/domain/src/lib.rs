//! Domain layer for the Fyyur booking directory.
//!
//! This crate contains:
//! - Domain models (Venue, Artist, Show) and their form payloads
//! - Listing options (show counting, deletion policy)
//! - Listing services (area grouping, past/upcoming scheduling)

pub mod models;
pub mod services;
