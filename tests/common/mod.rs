#![allow(dead_code)]

use std::sync::Arc;

use fleet_dashboard::config::EnvironmentConfig;
use fleet_dashboard::repositories::InMemoryVehicleRepository;
use fleet_dashboard::routes::create_app;
use fleet_dashboard::state::AppState;
use fleet_dashboard::Vehicle;
use rust_decimal::Decimal;

pub fn vehicle(id: i32, make: &str, model: &str, year: i32, fuel_type: &str) -> Vehicle {
    Vehicle {
        id,
        make: make.to_string(),
        model: model.to_string(),
        year,
        price: Decimal::new(20000, 0),
        fuel_type: fuel_type.to_string(),
        mileage: 10000,
        transmission: "Automatic".to_string(),
    }
}

/// Flota de los escenarios de referencia
pub fn sample_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: 1,
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            price: Decimal::new(20000, 0),
            fuel_type: "Gasoline".to_string(),
            mileage: 10000,
            transmission: "Automatic".to_string(),
        },
        Vehicle {
            id: 2,
            make: "Tesla".to_string(),
            model: "Model 3".to_string(),
            year: 2022,
            price: Decimal::new(40000, 0),
            fuel_type: "Electric".to_string(),
            mileage: 500,
            transmission: "Automatic".to_string(),
        },
    ]
}

pub fn create_test_app(repo: InMemoryVehicleRepository) -> axum::Router {
    create_app(AppState::new(Arc::new(repo), EnvironmentConfig::default()))
}
