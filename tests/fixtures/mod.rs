//! Test fixtures for rain-ride.
//!
//! Provides realistic test data including:
//! - Real Monaco locations (from OpenStreetMap)
//! - Builders for vehicles and travellers

pub mod monaco_locations;

pub use monaco_locations::*;
