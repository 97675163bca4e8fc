//! Data model shared by the engine and its collaborators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecommendError;
use crate::traits::Located;

pub type VehicleId = String;
pub type TravellerId = String;

/// A (latitude, longitude) pair in degrees.
///
/// Equality is exact coordinate equality; the engine relies on it to
/// re-identify vehicles sitting on a selected nearest point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Electric,
    Petrol,
    Diesel,
}

impl FuelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Electric => "electric",
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electric" => Ok(FuelType::Electric),
            "petrol" => Ok(FuelType::Petrol),
            "diesel" => Ok(FuelType::Diesel),
            _ => Err(RecommendError::UnknownFuelType(s.to_string())),
        }
    }
}

/// The fuel class a traveller asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelPreference {
    Electric,
    PetrolOrDiesel,
}

impl FuelPreference {
    /// Raw fuel types belonging to this class.
    pub fn fuel_class(&self) -> &'static [FuelType] {
        match self {
            FuelPreference::Electric => &[FuelType::Electric],
            FuelPreference::PetrolOrDiesel => &[FuelType::Petrol, FuelType::Diesel],
        }
    }

    pub fn accepts(&self, fuel: FuelType) -> bool {
        self.fuel_class().contains(&fuel)
    }

    /// Short label used for map file names.
    pub fn label(&self) -> &'static str {
        match self {
            FuelPreference::Electric => "electric",
            FuelPreference::PetrolOrDiesel => "gas",
        }
    }
}

impl FromStr for FuelPreference {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electric" => Ok(FuelPreference::Electric),
            "petrol_or_diesel" | "petrol/diesel" | "gas" => Ok(FuelPreference::PetrolOrDiesel),
            _ => Err(RecommendError::UnknownFuelPreference(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Taxi,
    Uber,
    Bus,
    Coach,
    HwCoach,
    #[serde(other)]
    Other,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::Taxi => "taxi",
            VehicleType::Uber => "uber",
            VehicleType::Bus => "bus",
            VehicleType::Coach => "coach",
            VehicleType::HwCoach => "hw_coach",
            VehicleType::Other => "other",
        }
    }

    /// Parses a simulation label; unrecognised labels map to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "taxi" => VehicleType::Taxi,
            "uber" => VehicleType::Uber,
            "bus" => VehicleType::Bus,
            "coach" => VehicleType::Coach,
            "hw_coach" => VehicleType::HwCoach,
            _ => VehicleType::Other,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverContact {
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub position: GeoPoint,
    pub vehicle_type: VehicleType,
    pub fuel_type: FuelType,
    pub driver: DriverContact,
    /// Cluster assigned upstream, if any.
    pub cluster_label: Option<i64>,
}

impl Located for Vehicle {
    fn position(&self) -> GeoPoint {
        self.position
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traveller {
    pub id: TravellerId,
    pub name: String,
    pub position: GeoPoint,
    pub fuel_preference: FuelPreference,
}

impl Located for Traveller {
    fn position(&self) -> GeoPoint {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel_class_membership() {
        assert!(FuelPreference::Electric.accepts(FuelType::Electric));
        assert!(!FuelPreference::Electric.accepts(FuelType::Petrol));
        assert!(FuelPreference::PetrolOrDiesel.accepts(FuelType::Petrol));
        assert!(FuelPreference::PetrolOrDiesel.accepts(FuelType::Diesel));
        assert!(!FuelPreference::PetrolOrDiesel.accepts(FuelType::Electric));
    }

    #[test]
    fn test_parse_preference_labels() {
        assert_eq!("electric".parse::<FuelPreference>().unwrap(), FuelPreference::Electric);
        assert_eq!(
            "petrol/diesel".parse::<FuelPreference>().unwrap(),
            FuelPreference::PetrolOrDiesel
        );
        assert_eq!(
            " Petrol_Or_Diesel ".parse::<FuelPreference>().unwrap(),
            FuelPreference::PetrolOrDiesel
        );
    }

    #[test]
    fn test_unknown_preference_fails_fast() {
        let err = "hydrogen".parse::<FuelPreference>().unwrap_err();
        assert!(matches!(err, RecommendError::UnknownFuelPreference(label) if label == "hydrogen"));
    }

    #[test]
    fn test_unknown_fuel_type() {
        assert!(matches!(
            "lpg".parse::<FuelType>(),
            Err(RecommendError::UnknownFuelType(_))
        ));
    }

    #[test]
    fn test_vehicle_type_fallback() {
        assert_eq!(VehicleType::from_label("hw_coach"), VehicleType::HwCoach);
        assert_eq!(VehicleType::from_label("tram"), VehicleType::Other);
    }

    #[test]
    fn test_geopoint_equality_is_exact() {
        assert_eq!(GeoPoint::new(43.739, 7.425), GeoPoint::from((43.739, 7.425)));
        assert_ne!(GeoPoint::new(43.739, 7.425), GeoPoint::new(43.739, 7.4250001));
    }
}
