//! Motor de filtrado del dashboard
//!
//! Deriva, a partir de la colección completa y del estado de filtros,
//! el subconjunto visible. Es una función pura: no muta nada y preserva
//! el orden relativo de la colección de entrada.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Vehicle, VehicleField};

/// Estado de búsqueda/filtros que mantiene el cliente
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub make: Option<String>,
    pub year: Option<String>,
    pub fuel_type: Option<String>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.make.is_none()
            && self.year.is_none()
            && self.fuel_type.is_none()
    }

    /// Comprobar si un vehículo pasa todas las condiciones
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        matches_search(vehicle, &self.search)
            && self.make.as_deref().map_or(true, |make| vehicle.make == make)
            && self
                .year
                .as_deref()
                .map_or(true, |year| vehicle.year.to_string() == year)
            && self
                .fuel_type
                .as_deref()
                .map_or(true, |fuel| vehicle.fuel_type == fuel)
    }
}

/// Búsqueda libre sin distinguir mayúsculas sobre marca, modelo, año y combustible
fn matches_search(vehicle: &Vehicle, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    let year = vehicle.year.to_string();
    [
        vehicle.make.as_str(),
        vehicle.model.as_str(),
        year.as_str(),
        vehicle.fuel_type.as_str(),
    ]
    .iter()
    .any(|haystack| haystack.to_lowercase().contains(&needle))
}

/// Vista filtrada de la colección
pub fn filter_vehicles(vehicles: &[Vehicle], state: &FilterState) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|vehicle| state.matches(vehicle))
        .cloned()
        .collect()
}

/// Valores distintos y no vacíos de un campo, ordenados para un selector.
///
/// Los campos numéricos se ordenan por valor; los textuales por orden
/// alfabético sin distinguir mayúsculas, con orden estable entre iguales.
pub fn unique_values(vehicles: &[Vehicle], field: VehicleField) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values: Vec<String> = vehicles
        .iter()
        .map(|vehicle| vehicle.field_text(field))
        .filter(|value| !value.trim().is_empty())
        .filter(|value| seen.insert(value.clone()))
        .collect();

    if field.is_numeric() {
        values.sort_by_key(|value| value.parse::<i64>().unwrap_or(i64::MAX));
    } else {
        values.sort_by(|a, b| compare_text(a, b));
    }

    values
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Opciones de los selectores del dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub makes: Vec<String>,
    pub years: Vec<String>,
    pub fuel_types: Vec<String>,
}

impl FilterOptions {
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        Self {
            makes: unique_values(vehicles, VehicleField::Make),
            years: unique_values(vehicles, VehicleField::Year),
            fuel_types: unique_values(vehicles, VehicleField::FuelType),
        }
    }
}
