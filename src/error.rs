//! Errors raised by the recommendation engine and its collaborators.

#[derive(thiserror::Error, Debug)]
pub enum RecommendError {
    #[error("requested {requested} nearest vehicles but only {available} candidates are available")]
    InsufficientCandidates { requested: usize, available: usize },
    #[error("unknown fuel preference '{0}'")]
    UnknownFuelPreference(String),
    #[error("unknown fuel type '{0}'")]
    UnknownFuelType(String),
    #[error("traveller id {0} appears more than once")]
    DuplicateTraveller(String),
    #[error("two map pages would be written to {0}")]
    MapFileCollision(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RecommendError {
    /// Errors the dashboard shows as "no recommendation available" instead of
    /// a failure.
    ///
    /// `UnknownFuelPreference` only arises while parsing traveller rows, so it
    /// is seen by `Dashboard::build_from_csv`, not by `Dashboard::build`.
    pub fn is_no_recommendation(&self) -> bool {
        matches!(
            self,
            RecommendError::InsufficientCandidates { .. } | RecommendError::UnknownFuelPreference(_)
        )
    }
}
