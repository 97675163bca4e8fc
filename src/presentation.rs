//! Shapes recommendation results for the map and the dashboard table.
//!
//! The map is emitted as GeoJSON and as a small Leaflet page; encoding
//! happens here, at the boundary, never inside the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::model::{GeoPoint, Vehicle};
use crate::recommender::RecommendationResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    pub zoom_start: u8,
    /// Radius of the search circle drawn around the traveller, in meters.
    pub circle_radius_m: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            zoom_start: 15,
            circle_radius_m: 100.0,
        }
    }
}

/// Vehicle fields the map needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapVehicle {
    pub driver_name: String,
    pub phone: String,
    pub vehicle_type: String,
    pub fuel_type: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<&Vehicle> for MapVehicle {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            driver_name: vehicle.driver.name.clone(),
            phone: vehicle.driver.phone.clone(),
            vehicle_type: vehicle.vehicle_type.to_string(),
            fuel_type: vehicle.fuel_type.to_string(),
            lat: vehicle.position.lat,
            lon: vehicle.position.lon,
        }
    }
}

impl MapVehicle {
    pub fn popup(&self) -> String {
        format!("{}---{}---{}", self.driver_name, self.vehicle_type, self.fuel_type)
    }
}

/// A dashboard table row, serialized under display labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleRow {
    #[serde(rename = "Driver")]
    pub driver: String,
    #[serde(rename = "Phone Number")]
    pub phone_number: String,
    #[serde(rename = "Type")]
    pub vehicle_type: String,
    #[serde(rename = "Fuel")]
    pub fuel: String,
}

impl From<&Vehicle> for VehicleRow {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            driver: vehicle.driver.name.clone(),
            phone_number: vehicle.driver.phone.clone(),
            vehicle_type: vehicle.vehicle_type.to_string(),
            fuel: vehicle.fuel_type.to_string(),
        }
    }
}

pub fn table_rows(result: &RecommendationResult) -> Vec<VehicleRow> {
    result.matched_vehicles.iter().map(VehicleRow::from).collect()
}

/// Everything needed to draw one traveller's map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub traveller_id: String,
    pub center: GeoPoint,
    pub traveller_name: String,
    pub fuel_label: String,
    pub vehicles: Vec<MapVehicle>,
    pub zoom_start: u8,
    pub circle_radius_m: f64,
}

impl MapView {
    pub fn from_result(result: &RecommendationResult, options: &MapOptions) -> Self {
        Self {
            traveller_id: result.traveller_id.clone(),
            center: result.traveller_position,
            traveller_name: result.traveller_name.clone(),
            fuel_label: result.fuel_preference.label().to_string(),
            vehicles: result.matched_vehicles.iter().map(MapVehicle::from).collect(),
            zoom_start: options.zoom_start,
            circle_radius_m: options.circle_radius_m,
        }
    }

    /// File the rendered page is saved under, one per traveller.
    ///
    /// Characters outside `[A-Za-z0-9_-]` in the traveller id become `_`.
    pub fn file_name(&self) -> String {
        let id: String = self
            .traveller_id
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        format!("avail_{}_{}_veh.html", self.fuel_label, id)
    }

    /// GeoJSON FeatureCollection: the traveller first, then one feature per
    /// vehicle. Coordinates are `[lon, lat]`.
    pub fn to_geojson(&self) -> Value {
        let mut features = vec![json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [self.center.lon, self.center.lat],
            },
            "properties": {
                "role": "traveller",
                "popup": self.traveller_name,
                "radius_m": self.circle_radius_m,
            },
        })];

        features.extend(self.vehicles.iter().map(|vehicle| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [vehicle.lon, vehicle.lat],
                },
                "properties": {
                    "role": "vehicle",
                    "popup": vehicle.popup(),
                    "driver_name": vehicle.driver_name,
                    "phone": vehicle.phone,
                    "vehicle_type": vehicle.vehicle_type,
                    "fuel_type": vehicle.fuel_type,
                },
            })
        }));

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }

    /// Self-contained Leaflet page: blue traveller marker with its search
    /// circle, red vehicle markers.
    pub fn to_html(&self) -> Result<String, serde_json::Error> {
        let geojson = script_safe(&serde_json::to_string(&self.to_geojson())?);
        Ok(format!(
            r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>{title}</title>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
<div id="map"></div>
<script>
var map = L.map('map').setView([{lat}, {lon}], {zoom});
L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{ maxZoom: 19 }}).addTo(map);
L.circle([{lat}, {lon}], {{ radius: {radius}, color: 'blue', fillColor: 'blue' }}).addTo(map);
L.geoJSON({geojson}, {{
  pointToLayer: function (feature, latlng) {{
    var color = feature.properties.role === 'traveller' ? 'blue' : 'red';
    return L.circleMarker(latlng, {{ radius: 8, color: color, fillColor: color, fillOpacity: 0.8 }});
  }},
  onEachFeature: function (feature, layer) {{
    layer.bindPopup(function () {{
      var text = document.createElement('span');
      text.textContent = feature.properties.popup;
      return text;
    }});
  }}
}}).addTo(map);
</script>
</body>
</html>
"#,
            title = html_escape(&self.traveller_name),
            lat = self.center.lat,
            lon = self.center.lon,
            zoom = self.zoom_start,
            radius = self.circle_radius_m,
            geojson = geojson,
        ))
    }
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escapes JSON for an inline `<script>` block. The `\uXXXX` forms decode
/// to the same strings, so the data is unchanged.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

/// Banner shown when rain is expected, naming the first rainy day.
pub fn rain_notice(rainy_days: &[NaiveDate]) -> Option<String> {
    rainy_days.first().map(|day| {
        format!(
            "We are expecting rain on {}. Would you like to book a taxi for the day?",
            day.format("%A")
        )
    })
}
