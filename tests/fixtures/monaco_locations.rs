//! Monaco locations and record builders for realistic fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Not every helper is used by every
//! test binary.
#![allow(dead_code)]

use rain_ride::model::{
    DriverContact, FuelPreference, FuelType, GeoPoint, Traveller, Vehicle, VehicleType,
};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

// ============================================================================
// Pedestrian spots
// ============================================================================

pub const CASINO_SQUARE: Location = Location::new("Place du Casino", 43.7384, 7.4246);
pub const PORT_HERCULE: Location = Location::new("Port Hercule", 43.7347, 7.4221);

// ============================================================================
// Taxi ranks and pickup points
// ============================================================================

pub const TAXI_RANKS: &[Location] = &[
    Location::new("Avenue de Monte-Carlo", 43.7390, 7.4250),
    Location::new("Boulevard des Moulins", 43.7395, 7.4260),
    Location::new("Avenue de la Costa", 43.7400, 7.4270),
    Location::new("Quai Albert Ier", 43.7350, 7.4225),
    Location::new("Fontvieille", 43.7280, 7.4150),
    Location::new("Larvotto", 43.7450, 7.4330),
];

/// Well outside the city; never among the nearest.
pub const LA_TURBIE_FAR: Location = Location::new("Far hillside", 43.9000, 7.9000);

// ============================================================================
// Builders
// ============================================================================

pub struct VehicleBuilder {
    vehicle: Vehicle,
}

impl VehicleBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            vehicle: Vehicle {
                id: id.to_string(),
                position: GeoPoint::new(0.0, 0.0),
                vehicle_type: VehicleType::Taxi,
                fuel_type: FuelType::Electric,
                driver: DriverContact {
                    name: format!("Driver {}", id),
                    phone: "9020000000".to_string(),
                },
                cluster_label: Some(1),
            },
        }
    }

    pub fn at(mut self, location: &Location) -> Self {
        self.vehicle.position = location.point();
        self
    }

    pub fn position(mut self, lat: f64, lon: f64) -> Self {
        self.vehicle.position = GeoPoint::new(lat, lon);
        self
    }

    pub fn fuel(mut self, fuel: FuelType) -> Self {
        self.vehicle.fuel_type = fuel;
        self
    }

    pub fn kind(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle.vehicle_type = vehicle_type;
        self
    }

    pub fn cluster(mut self, cluster: i64) -> Self {
        self.vehicle.cluster_label = Some(cluster);
        self
    }

    pub fn build(self) -> Vehicle {
        self.vehicle
    }
}

pub fn traveller(id: &str, name: &str, at: &Location, preference: FuelPreference) -> Traveller {
    Traveller {
        id: id.to_string(),
        name: name.to_string(),
        position: at.point(),
        fuel_preference: preference,
    }
}

/// The four-vehicle Monaco scenario: three near ranks and one far away.
pub fn monaco_vehicles() -> Vec<Vehicle> {
    vec![
        VehicleBuilder::new("v1").at(&TAXI_RANKS[0]).fuel(FuelType::Electric).build(),
        VehicleBuilder::new("v2").at(&TAXI_RANKS[1]).fuel(FuelType::Petrol).build(),
        VehicleBuilder::new("v3").at(&TAXI_RANKS[2]).fuel(FuelType::Electric).build(),
        VehicleBuilder::new("v4").at(&LA_TURBIE_FAR).fuel(FuelType::Electric).build(),
    ]
}
