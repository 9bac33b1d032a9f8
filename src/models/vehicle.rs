//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como lo devuelve la API y el
//! registro de importación usado por el seed. Mapea exactamente a la tabla
//! `vehicles` con primary key entera `id`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Tope de la columna `NUMERIC(12, 2)`: diez dígitos enteros y dos decimales
const MAX_PRICE_SCALE: u32 = 2;
const MAX_PRICE_EXCLUSIVE: i64 = 10_000_000_000;

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub fuel_type: String,
    pub mileage: i32,
    pub transmission: String,
}

/// Registro de importación (sin id, lo asigna la base de datos)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewVehicle {
    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1886, max = 2100))]
    pub year: i32,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom = "validate_price")]
    pub price: Decimal,

    #[validate(length(min = 1, max = 50))]
    pub fuel_type: String,

    #[validate(range(min = 0))]
    pub mileage: i32,

    #[validate(length(min = 1, max = 50))]
    pub transmission: String,
}

/// Precio no negativo y representable sin redondeo en la columna
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("negative_price"));
    }
    if price.normalize().scale() > MAX_PRICE_SCALE {
        return Err(ValidationError::new("price_scale"));
    }
    if *price >= Decimal::from(MAX_PRICE_EXCLUSIVE) {
        return Err(ValidationError::new("price_too_large"));
    }
    Ok(())
}

impl NewVehicle {
    /// Materializar el registro con un id asignado por el store
    pub fn with_id(self, id: i32) -> Vehicle {
        Vehicle {
            id,
            make: self.make,
            model: self.model,
            year: self.year,
            price: self.price,
            fuel_type: self.fuel_type,
            mileage: self.mileage,
            transmission: self.transmission,
        }
    }
}

/// Campos de Vehicle por los que se pueden derivar opciones de filtro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleField {
    Make,
    Model,
    Year,
    FuelType,
    Mileage,
    Transmission,
}

impl VehicleField {
    pub fn is_numeric(self) -> bool {
        matches!(self, VehicleField::Year | VehicleField::Mileage)
    }
}

impl Vehicle {
    /// Valor textual de un campo (los numéricos en decimal)
    pub fn field_text(&self, field: VehicleField) -> String {
        match field {
            VehicleField::Make => self.make.clone(),
            VehicleField::Model => self.model.clone(),
            VehicleField::Year => self.year.to_string(),
            VehicleField::FuelType => self.fuel_type.clone(),
            VehicleField::Mileage => self.mileage.to_string(),
            VehicleField::Transmission => self.transmission.clone(),
        }
    }
}
