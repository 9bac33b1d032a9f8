use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::dashboard::source::VehicleSource;
use crate::models::Vehicle;
use crate::repositories::vehicle_repository::VehicleStore;
use crate::utils::errors::{not_found_error, AppError};

/// Servicio de listado: consulta el store en cada llamada, sin cache
#[derive(Clone)]
pub struct VehicleController {
    store: Arc<dyn VehicleStore>,
}

impl VehicleController {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = self.store.find_all().await?;
        info!("🚗 {} vehículos listados", vehicles.len());
        Ok(vehicles)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
        debug!("🔍 Buscando vehículo {}", id);
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))
    }
}

#[async_trait]
impl VehicleSource for VehicleController {
    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        VehicleController::list_all(self).await
    }

    async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
        VehicleController::get_by_id(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::vehicle_repository::InMemoryVehicleRepository;
    use rust_decimal::Decimal;

    fn tesla() -> Vehicle {
        Vehicle {
            id: 2,
            make: "Tesla".to_string(),
            model: "Model 3".to_string(),
            year: 2022,
            price: Decimal::new(40000, 0),
            fuel_type: "Electric".to_string(),
            mileage: 500,
            transmission: "Automatic".to_string(),
        }
    }

    #[tokio::test]
    async fn test_get_by_id_round_trip() {
        let controller =
            VehicleController::new(Arc::new(InMemoryVehicleRepository::with_vehicles(vec![tesla()])));

        let listed = controller.list_all().await.unwrap();
        let fetched = controller.get_by_id(listed[0].id).await.unwrap();
        assert_eq!(fetched, listed[0]);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let controller =
            VehicleController::new(Arc::new(InMemoryVehicleRepository::with_vehicles(vec![tesla()])));

        let err = controller.get_by_id(999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_store_unavailable_propagates() {
        let repo = InMemoryVehicleRepository::with_vehicles(vec![tesla()]);
        repo.set_unavailable(true).await;
        let controller = VehicleController::new(Arc::new(repo));

        assert!(matches!(
            controller.list_all().await,
            Err(AppError::StoreUnavailable(_))
        ));
    }
}
