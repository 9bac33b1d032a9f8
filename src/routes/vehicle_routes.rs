use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::models::Vehicle;
use crate::state::AppState;
use crate::utils::errors::{malformed_input_error, AppError};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.store.clone());
    let vehicles = controller.list_all().await?;
    Ok(Json(vehicles))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    // Validar antes de tocar el store
    let id: i32 = id
        .trim()
        .parse()
        .map_err(|_| malformed_input_error("vehicle id", &id))?;

    let controller = VehicleController::new(state.store.clone());
    let vehicle = controller.get_by_id(id).await?;
    Ok(Json(vehicle))
}
