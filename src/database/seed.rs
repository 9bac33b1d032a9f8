//! Carga inicial de vehículos
//!
//! Lee un arreglo JSON de registros, los valida y los inserta en bloque
//! dentro de una sola transacción.

use std::path::Path;

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::info;
use validator::Validate;

use crate::models::NewVehicle;
use crate::utils::errors::{AppError, AppResult};

/// Límite de parámetros de PostgreSQL (65535) dividido entre 7 columnas
const INSERT_CHUNK: usize = 5000;

/// Parsear y validar el contenido de un archivo de seed
pub fn parse_seed_data(raw: &str) -> AppResult<Vec<NewVehicle>> {
    let records: Vec<NewVehicle> = serde_json::from_str(raw)
        .map_err(|e| AppError::MalformedInput(format!("Invalid seed file: {}", e)))?;

    for record in &records {
        record.validate()?;
    }

    Ok(records)
}

/// Leer un archivo de seed del disco
pub async fn load_seed_file(path: &Path) -> AppResult<Vec<NewVehicle>> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::MalformedInput(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_seed_data(&raw)
}

/// Insertar todos los registros; devuelve cuántos se insertaron
pub async fn seed_vehicles(pool: &PgPool, records: &[NewVehicle]) -> AppResult<u64> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for chunk in records.chunks(INSERT_CHUNK) {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO vehicles (make, model, year, price, fuel_type, mileage, transmission) ",
        );
        builder.push_values(chunk, |mut row, vehicle| {
            row.push_bind(&vehicle.make)
                .push_bind(&vehicle.model)
                .push_bind(vehicle.year)
                .push_bind(vehicle.price)
                .push_bind(&vehicle.fuel_type)
                .push_bind(vehicle.mileage)
                .push_bind(&vehicle.transmission);
        });

        inserted += builder.build().execute(&mut *tx).await?.rows_affected();
    }

    tx.commit().await?;
    info!("🌱 {} vehículos insertados", inserted);
    Ok(inserted)
}
