use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::models::{NewVehicle, Vehicle};
use crate::utils::errors::AppError;

/// Acceso de solo lectura a la tabla de vehículos
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Vehicle>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError>;
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleStore for VehicleRepository {
    async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, make, model, year, price, fuel_type, mileage, transmission
            FROM vehicles
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::StoreUnavailable(format!("Error listing vehicles: {}", e)))?;

        Ok(vehicles)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT id, make, model, year, price, fuel_type, mileage, transmission
            FROM vehicles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::StoreUnavailable(format!("Error finding vehicle: {}", e)))?;

        Ok(vehicle)
    }
}

/// Store en memoria, con ids asignados en orden de inserción.
/// Se usa en tests y para levantar la API sin PostgreSQL.
#[derive(Clone, Default)]
pub struct InMemoryVehicleRepository {
    vehicles: Arc<RwLock<Vec<Vehicle>>>,
    unavailable: Arc<RwLock<bool>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles: Arc::new(RwLock::new(vehicles)),
            unavailable: Arc::new(RwLock::new(false)),
        }
    }

    /// Insertar registros nuevos; devuelve los vehículos con su id
    pub async fn insert_many(&self, records: Vec<NewVehicle>) -> Vec<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        let mut next_id = vehicles.iter().map(|v| v.id).max().unwrap_or(0) + 1;

        let inserted: Vec<Vehicle> = records
            .into_iter()
            .map(|record| {
                let vehicle = record.with_id(next_id);
                next_id += 1;
                vehicle
            })
            .collect();

        vehicles.extend(inserted.iter().cloned());
        inserted
    }

    /// Simular una caída del store
    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().await = unavailable;
    }

    async fn check_available(&self) -> Result<(), AppError> {
        if *self.unavailable.read().await {
            return Err(AppError::StoreUnavailable(
                "In-memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleRepository {
    async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        self.check_available().await?;
        Ok(self.vehicles.read().await.clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        self.check_available().await?;
        Ok(self.vehicles.read().await.iter().find(|v| v.id == id).cloned())
    }
}
