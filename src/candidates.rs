//! Candidate vehicle assembly.
//!
//! Narrows the raw vehicle table to one cluster and the requested vehicle
//! types, and fixes the order the engine uses to break distance ties.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Vehicle, VehicleType};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateFilter {
    /// Keep only vehicles in this cluster. `None` keeps every cluster.
    pub cluster_label: Option<i64>,
    /// Vehicle types a pedestrian can book.
    pub vehicle_types: Vec<VehicleType>,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self {
            cluster_label: None,
            vehicle_types: vec![VehicleType::Taxi, VehicleType::Uber],
        }
    }
}

impl CandidateFilter {
    pub fn for_cluster(cluster_label: i64) -> Self {
        Self {
            cluster_label: Some(cluster_label),
            ..Self::default()
        }
    }

    fn admits(&self, vehicle: &Vehicle) -> bool {
        if let Some(cluster) = self.cluster_label {
            if vehicle.cluster_label != Some(cluster) {
                return false;
            }
        }
        self.vehicle_types.contains(&vehicle.vehicle_type)
    }
}

/// Builds the candidate list handed to the engine.
///
/// Keeps the first record seen per vehicle id, then orders candidates by
/// ascending id.
pub fn assemble_candidates(vehicles: &[Vehicle], filter: &CandidateFilter) -> Vec<Vehicle> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut candidates: Vec<Vehicle> = Vec::new();

    for vehicle in vehicles {
        if !filter.admits(vehicle) {
            continue;
        }
        if !seen.insert(vehicle.id.as_str()) {
            continue;
        }
        candidates.push(vehicle.clone());
    }

    candidates.sort_by(|a, b| a.id.cmp(&b.id));

    debug!(
        input = vehicles.len(),
        candidates = candidates.len(),
        cluster = ?filter.cluster_label,
        "assembled candidate vehicles"
    );

    candidates
}
