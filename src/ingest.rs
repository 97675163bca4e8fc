//! CSV ingestion of cleaned vehicle and traveller tables.
//!
//! Column names follow the cleaned simulation export: vehicles carry
//! `vehicle_id, lat, lon, vehicle_type, fuel_type, driver_name, phnum` and an
//! optional `cluster_label`; travellers carry `person_id, traveller_name,
//! person_y, person_x, fuel_preference`.

use std::io::Read;

use serde::Deserialize;
use tracing::debug;

use crate::error::RecommendError;
use crate::model::{DriverContact, FuelPreference, FuelType, GeoPoint, Traveller, Vehicle, VehicleType};

#[derive(Debug, Deserialize)]
struct RawVehicleRow {
    vehicle_id: String,
    lat: f64,
    lon: f64,
    vehicle_type: String,
    fuel_type: String,
    driver_name: String,
    phnum: String,
    #[serde(default)]
    cluster_label: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct RawTravellerRow {
    person_id: String,
    traveller_name: String,
    person_y: f64,
    person_x: f64,
    fuel_preference: String,
}

/// Reads vehicle records, failing on the first malformed row.
pub fn read_vehicles<R: Read>(reader: R) -> Result<Vec<Vehicle>, RecommendError> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut vehicles = Vec::new();
    for row in csv_reader.deserialize::<RawVehicleRow>() {
        let row = row?;
        vehicles.push(Vehicle {
            id: row.vehicle_id,
            position: GeoPoint::new(row.lat, row.lon),
            vehicle_type: VehicleType::from_label(&row.vehicle_type),
            fuel_type: row.fuel_type.parse::<FuelType>()?,
            driver: DriverContact {
                name: row.driver_name,
                phone: row.phnum,
            },
            cluster_label: row.cluster_label,
        });
    }

    debug!(count = vehicles.len(), "read vehicle records");
    Ok(vehicles)
}

/// Reads traveller records. Unknown fuel preferences fail fast.
pub fn read_travellers<R: Read>(reader: R) -> Result<Vec<Traveller>, RecommendError> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut travellers = Vec::new();
    for row in csv_reader.deserialize::<RawTravellerRow>() {
        let row = row?;
        travellers.push(Traveller {
            id: row.person_id,
            name: row.traveller_name,
            position: GeoPoint::new(row.person_y, row.person_x),
            fuel_preference: row.fuel_preference.parse::<FuelPreference>()?,
        });
    }

    debug!(count = travellers.len(), "read traveller records");
    Ok(travellers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VEHICLES_CSV: &str = "\
vehicle_id,lat,lon,vehicle_type,fuel_type,driver_name,phnum,cluster_label
taxi_1,43.7390,7.4250,taxi,electric,Ann Lee,9023456789,1
uber_2,43.7395,7.4260,uber,petrol,Bo Chen,9021112223,
bus_3,43.7400,7.4270,bus,diesel,Cy Park,9029998887,2
";

    #[test]
    fn test_read_vehicles() {
        let vehicles = read_vehicles(VEHICLES_CSV.as_bytes()).unwrap();
        assert_eq!(vehicles.len(), 3);

        assert_eq!(vehicles[0].id, "taxi_1");
        assert_eq!(vehicles[0].position, GeoPoint::new(43.7390, 7.4250));
        assert_eq!(vehicles[0].fuel_type, FuelType::Electric);
        assert_eq!(vehicles[0].driver.phone, "9023456789");
        assert_eq!(vehicles[0].cluster_label, Some(1));

        assert_eq!(vehicles[1].vehicle_type, VehicleType::Uber);
        assert_eq!(vehicles[1].cluster_label, None);
        assert_eq!(vehicles[2].vehicle_type, VehicleType::Bus);
    }

    #[test]
    fn test_unknown_vehicle_fuel_fails() {
        let csv = "\
vehicle_id,lat,lon,vehicle_type,fuel_type,driver_name,phnum
taxi_1,43.7390,7.4250,taxi,hydrogen,Ann Lee,9023456789
";
        let err = read_vehicles(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RecommendError::UnknownFuelType(label) if label == "hydrogen"));
    }

    #[test]
    fn test_read_travellers_maps_axes() {
        let csv = "\
person_id,traveller_name,person_y,person_x,fuel_preference
ped_1,Mary Jane,43.7384,7.4246,electric
ped_2,Alex Joe,43.7380,7.4240,petrol/diesel
";
        let travellers = read_travellers(csv.as_bytes()).unwrap();
        assert_eq!(travellers.len(), 2);
        assert_eq!(travellers[0].position, GeoPoint::new(43.7384, 7.4246));
        assert_eq!(travellers[0].fuel_preference, FuelPreference::Electric);
        assert_eq!(travellers[1].fuel_preference, FuelPreference::PetrolOrDiesel);
    }

    #[test]
    fn test_unknown_preference_fails() {
        let csv = "\
person_id,traveller_name,person_y,person_x,fuel_preference
ped_1,Mary Jane,43.7384,7.4246,walking
";
        let err = read_travellers(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RecommendError::UnknownFuelPreference(_)));
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let csv = "\
person_id,traveller_name,person_y,person_x,fuel_preference
ped_1,Mary Jane,not-a-number,7.4246,electric
";
        let err = read_travellers(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RecommendError::Csv(_)));
    }
}
