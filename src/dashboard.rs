//! One dashboard build: candidates, rain trigger, engine, presentation.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::candidates::{CandidateFilter, assemble_candidates};
use crate::error::RecommendError;
use crate::haversine::Haversine;
use crate::ingest::{read_travellers, read_vehicles};
use crate::model::{Traveller, TravellerId, Vehicle};
use crate::presentation::{MapOptions, MapView, VehicleRow, rain_notice, table_rows};
use crate::recommender::{RecommendOptions, recommend_with};
use crate::weather::WeeklyForecast;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardOptions {
    pub candidates: CandidateFilter,
    pub recommend: RecommendOptions,
    pub map: MapOptions,
}

impl DashboardOptions {
    pub fn from_json(text: &str) -> Result<Self, RecommendError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PanelContent {
    Recommendation { map: MapView, rows: Vec<VehicleRow> },
    NoRecommendation { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravellerPanel {
    pub traveller_id: TravellerId,
    pub traveller_name: String,
    pub content: PanelContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub rainy_days: Vec<NaiveDate>,
    pub notice: Option<String>,
    /// One panel per traveller, in input order. Empty when no rain is due.
    pub panels: Vec<TravellerPanel>,
    /// Set when the traveller table itself could not be used.
    pub unavailable: Option<String>,
}

impl Dashboard {
    /// Builds the dashboard for a set of travellers.
    ///
    /// Engine errors that mean "nothing to recommend" become a notice on
    /// every panel; anything else is returned to the caller.
    pub fn build(
        travellers: &[Traveller],
        vehicles: &[Vehicle],
        forecast: &WeeklyForecast,
        options: &DashboardOptions,
    ) -> Result<Self, RecommendError> {
        let rainy_days = forecast.rainy_days();
        let notice = rain_notice(&rainy_days);
        let candidates = assemble_candidates(vehicles, &options.candidates);

        let panels: Vec<TravellerPanel> = match recommend_with(
            &Haversine,
            travellers,
            &candidates,
            !rainy_days.is_empty(),
            &options.recommend,
        ) {
            Ok(mut recommendations) => travellers
                .iter()
                .filter_map(|traveller| recommendations.remove(&traveller.id))
                .map(|result| TravellerPanel {
                    traveller_id: result.traveller_id.clone(),
                    traveller_name: result.traveller_name.clone(),
                    content: PanelContent::Recommendation {
                        map: MapView::from_result(&result, &options.map),
                        rows: table_rows(&result),
                    },
                })
                .collect(),
            Err(err) if err.is_no_recommendation() => {
                warn!(error = %err, "no recommendation available");
                travellers
                    .iter()
                    .map(|traveller| TravellerPanel {
                        traveller_id: traveller.id.clone(),
                        traveller_name: traveller.name.clone(),
                        content: PanelContent::NoRecommendation {
                            reason: err.to_string(),
                        },
                    })
                    .collect()
            }
            Err(err) => return Err(err),
        };

        info!(
            rainy_days = rainy_days.len(),
            panels = panels.len(),
            "built dashboard"
        );

        Ok(Self {
            rainy_days,
            notice,
            panels,
            unavailable: None,
        })
    }

    /// Builds the dashboard straight from the cleaned CSV tables.
    ///
    /// A traveller table with an unknown fuel preference yields a dashboard
    /// with no panels and an `unavailable` reason instead of an error.
    pub fn build_from_csv<V, T>(
        vehicles_csv: V,
        travellers_csv: T,
        forecast: &WeeklyForecast,
        options: &DashboardOptions,
    ) -> Result<Self, RecommendError>
    where
        V: Read,
        T: Read,
    {
        let vehicles = read_vehicles(vehicles_csv)?;
        let travellers = match read_travellers(travellers_csv) {
            Ok(travellers) => travellers,
            Err(err) if err.is_no_recommendation() => {
                warn!(error = %err, "traveller table rejected");
                let rainy_days = forecast.rainy_days();
                return Ok(Self {
                    notice: rain_notice(&rainy_days),
                    rainy_days,
                    panels: Vec::new(),
                    unavailable: Some(err.to_string()),
                });
            }
            Err(err) => return Err(err),
        };

        Self::build(&travellers, &vehicles, forecast, options)
    }

    /// Writes one map page per recommendation panel into `dir`.
    pub fn write_maps(&self, dir: &Path) -> Result<Vec<PathBuf>, RecommendError> {
        fs::create_dir_all(dir)?;

        let mut written: Vec<PathBuf> = Vec::new();
        for panel in &self.panels {
            if let PanelContent::Recommendation { map, .. } = &panel.content {
                let path = dir.join(map.file_name());
                if written.contains(&path) {
                    return Err(RecommendError::MapFileCollision(path.display().to_string()));
                }
                fs::write(&path, map.to_html()?)?;
                written.push(path);
            }
        }
        Ok(written)
    }
}
