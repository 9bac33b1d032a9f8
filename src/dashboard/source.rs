//! Origen de datos del dashboard
//!
//! El dashboard no sabe si los vehículos llegan por HTTP o en proceso:
//! solo necesita las dos lecturas del servicio de listado.

use async_trait::async_trait;

use crate::models::Vehicle;
use crate::utils::errors::AppError;

#[async_trait]
pub trait VehicleSource: Send + Sync {
    /// Todos los vehículos, en el orden del store
    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError>;

    /// Un vehículo por id; `AppError::NotFound` si no existe
    async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError>;
}
