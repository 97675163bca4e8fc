//! rain-ride core
//!
//! Recommends nearby vehicles of the right fuel class to pedestrians when
//! rain is forecast for the coming week.

pub mod traits;
pub mod model;
pub mod error;
pub mod haversine;
pub mod nearest;
pub mod recommender;
pub mod candidates;
pub mod ingest;
pub mod weather;
pub mod presentation;
pub mod dashboard;
