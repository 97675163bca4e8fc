//! Vehicle recommendation engine.
//!
//! For every traveller, picks the nearest candidate vehicle positions and
//! keeps the vehicles standing on them whose fuel matches the traveller's
//! preference.

use std::collections::{BTreeMap, HashSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::RecommendError;
use crate::haversine::Haversine;
use crate::model::{FuelPreference, GeoPoint, Traveller, TravellerId, Vehicle};
use crate::nearest::nearest;
use crate::traits::{DistanceMetric, Located};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendOptions {
    /// How many nearest vehicle positions to consider per traveller.
    pub nearest_k: usize,
    /// Evaluate travellers on the rayon pool.
    pub parallel: bool,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            nearest_k: 3,
            parallel: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub traveller_id: TravellerId,
    pub traveller_name: String,
    pub traveller_position: GeoPoint,
    pub fuel_preference: FuelPreference,
    /// Nearest candidate positions, nearest first.
    pub nearest_points: Vec<GeoPoint>,
    /// Fuel-matching vehicles on those positions, in candidate order.
    pub matched_vehicles: Vec<Vehicle>,
}

impl RecommendationResult {
    pub fn has_match(&self) -> bool {
        !self.matched_vehicles.is_empty()
    }
}

pub type Recommendations = BTreeMap<TravellerId, RecommendationResult>;

/// Recommends vehicles with the haversine metric and default options.
pub fn recommend(
    travellers: &[Traveller],
    vehicles: &[Vehicle],
    has_rainy_day: bool,
) -> Result<Recommendations, RecommendError> {
    recommend_with(
        &Haversine,
        travellers,
        vehicles,
        has_rainy_day,
        &RecommendOptions::default(),
    )
}

/// Recommends vehicles for every traveller.
///
/// Returns an empty mapping without computing anything when no rain is
/// forecast. Vehicle order is the tie-break order for equidistant
/// positions and is never re-sorted here.
pub fn recommend_with<M>(
    metric: &M,
    travellers: &[Traveller],
    vehicles: &[Vehicle],
    has_rainy_day: bool,
    options: &RecommendOptions,
) -> Result<Recommendations, RecommendError>
where
    M: DistanceMetric + Sync,
{
    if !has_rainy_day {
        debug!("no rain forecast, skipping recommendations");
        return Ok(Recommendations::new());
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for traveller in travellers {
        if !seen.insert(traveller.id.as_str()) {
            return Err(RecommendError::DuplicateTraveller(traveller.id.clone()));
        }
    }

    info!(
        travellers = travellers.len(),
        candidates = vehicles.len(),
        k = options.nearest_k,
        "computing vehicle recommendations"
    );

    let candidates: Vec<GeoPoint> = vehicles.iter().map(Located::position).collect();

    // Collected in input order so the first failing traveller wins in both modes.
    let outcomes: Vec<Result<RecommendationResult, RecommendError>> = if options.parallel {
        travellers
            .par_iter()
            .map(|traveller| recommend_one(metric, traveller, vehicles, &candidates, options.nearest_k))
            .collect()
    } else {
        travellers
            .iter()
            .map(|traveller| recommend_one(metric, traveller, vehicles, &candidates, options.nearest_k))
            .collect()
    };

    let mut recommendations = Recommendations::new();
    for outcome in outcomes {
        let result = outcome?;
        recommendations.insert(result.traveller_id.clone(), result);
    }

    Ok(recommendations)
}

fn recommend_one<M>(
    metric: &M,
    traveller: &Traveller,
    vehicles: &[Vehicle],
    candidates: &[GeoPoint],
    k: usize,
) -> Result<RecommendationResult, RecommendError>
where
    M: DistanceMetric,
{
    let nearest_points = nearest(metric, candidates, traveller.position, k)?;

    let matched_vehicles: Vec<Vehicle> = vehicles
        .iter()
        .filter(|vehicle| nearest_points.contains(&vehicle.position))
        .filter(|vehicle| traveller.fuel_preference.accepts(vehicle.fuel_type))
        .cloned()
        .collect();

    debug!(
        traveller = %traveller.id,
        preference = ?traveller.fuel_preference,
        matched = matched_vehicles.len(),
        "matched vehicles for traveller"
    );

    Ok(RecommendationResult {
        traveller_id: traveller.id.clone(),
        traveller_name: traveller.name.clone(),
        traveller_position: traveller.position,
        fuel_preference: traveller.fuel_preference,
        nearest_points,
        matched_vehicles,
    })
}
