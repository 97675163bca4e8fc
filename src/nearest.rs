//! k-nearest selection over candidate points.

use crate::error::RecommendError;
use crate::model::GeoPoint;
use crate::traits::DistanceMetric;

/// One selected candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Position of the candidate in the input slice.
    pub index: usize,
    pub point: GeoPoint,
    pub distance_km: f64,
}

/// Finds the `k` candidates closest to `reference`, nearest first.
///
/// Candidates at identical distance keep their input order. Fails with
/// `InsufficientCandidates` when fewer than `k` candidates are given.
pub fn nearest_neighbors<M>(
    metric: &M,
    candidates: &[GeoPoint],
    reference: GeoPoint,
    k: usize,
) -> Result<Vec<Neighbor>, RecommendError>
where
    M: DistanceMetric + ?Sized,
{
    if candidates.len() < k {
        return Err(RecommendError::InsufficientCandidates {
            requested: k,
            available: candidates.len(),
        });
    }

    let mut ranked: Vec<Neighbor> = candidates
        .iter()
        .enumerate()
        .map(|(index, point)| Neighbor {
            index,
            point: *point,
            distance_km: metric.distance_km(reference, *point),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(k);

    Ok(ranked)
}

/// Points of the `k` nearest candidates, nearest first.
pub fn nearest<M>(
    metric: &M,
    candidates: &[GeoPoint],
    reference: GeoPoint,
    k: usize,
) -> Result<Vec<GeoPoint>, RecommendError>
where
    M: DistanceMetric + ?Sized,
{
    Ok(nearest_neighbors(metric, candidates, reference, k)?
        .into_iter()
        .map(|neighbor| neighbor.point)
        .collect())
}
