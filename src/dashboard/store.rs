//! Contenedor de estado del dashboard
//!
//! Mantiene la colección cargada, los filtros, la vista filtrada y la
//! selección de detalle. Todas las transiciones pasan por un único
//! `watch::Sender`, de modo que la capa de presentación se suscribe y
//! recibe cada nuevo estado sin depender de un framework reactivo.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::filter::{filter_vehicles, FilterOptions, FilterState};
use super::source::VehicleSource;
use crate::config::environment::EnvironmentConfig;
use crate::models::Vehicle;

/// Retardo por defecto antes de mostrar el detalle, para que el spinner sea visible
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Estado de la carga inicial del listado
#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Máquina de estados de la selección de detalle
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Idle,
    Loading { id: i32 },
    Selected(Vehicle),
}

impl Selection {
    pub fn selected_id(&self) -> Option<i32> {
        match self {
            Selection::Selected(vehicle) => Some(vehicle.id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub list: ListStatus,
    pub vehicles: Vec<Vehicle>,
    pub filters: FilterState,
    pub visible: Vec<Vehicle>,
    pub selection: Selection,
    pub detail_error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            list: ListStatus::Loading,
            vehicles: Vec::new(),
            filters: FilterState::default(),
            visible: Vec::new(),
            selection: Selection::Idle,
            detail_error: None,
        }
    }
}

impl DashboardState {
    /// Recalcular la vista y anular la selección si quedó fuera de ella
    fn refresh_view(&mut self) {
        self.visible = filter_vehicles(&self.vehicles, &self.filters);

        if let Some(id) = self.selection.selected_id() {
            if !self.visible.iter().any(|v| v.id == id) {
                debug!("🧹 Vehículo {} fuera de la vista filtrada, se limpia la selección", id);
                self.selection = Selection::Idle;
            }
        }
    }
}

/// Dashboard de flota sobre un origen de vehículos
pub struct Dashboard<S> {
    source: S,
    state: watch::Sender<DashboardState>,
    reveal_delay: Duration,
    detail_seq: AtomicU64,
}

impl<S: VehicleSource> Dashboard<S> {
    pub fn new(source: S) -> Self {
        Self::with_reveal_delay(source, DEFAULT_REVEAL_DELAY)
    }

    /// Usar el retardo configurado en `DETAIL_REVEAL_DELAY_MS`
    pub fn from_config(source: S, config: &EnvironmentConfig) -> Self {
        Self::with_reveal_delay(source, config.detail_reveal_delay)
    }

    pub fn with_reveal_delay(source: S, reveal_delay: Duration) -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        Self {
            source,
            state,
            reveal_delay,
            detail_seq: AtomicU64::new(0),
        }
    }

    /// Suscribirse a los cambios de estado
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    /// Copia del estado actual
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Opciones de los selectores, siempre sobre la colección sin filtrar
    pub fn options(&self) -> FilterOptions {
        FilterOptions::from_vehicles(&self.state.borrow().vehicles)
    }

    /// Cargar (o recargar) la colección completa
    pub async fn load(&self) {
        self.state.send_modify(|state| state.list = ListStatus::Loading);

        match self.source.list_all().await {
            Ok(vehicles) => {
                info!("✅ {} vehículos cargados en el dashboard", vehicles.len());
                self.state.send_modify(|state| {
                    state.vehicles = vehicles;
                    state.list = ListStatus::Ready;
                    state.refresh_view();
                });
            }
            Err(e) => {
                warn!("❌ Error cargando vehículos: {}", e);
                self.state.send_modify(|state| {
                    state.list = ListStatus::Failed(e.to_string());
                });
            }
        }
    }

    pub fn set_search(&self, query: impl Into<String>) {
        let query = query.into();
        self.update_filters(|filters| filters.search = query);
    }

    pub fn set_make(&self, make: Option<String>) {
        self.update_filters(|filters| filters.make = normalize(make));
    }

    pub fn set_year(&self, year: Option<String>) {
        self.update_filters(|filters| filters.year = normalize(year));
    }

    pub fn set_fuel_type(&self, fuel_type: Option<String>) {
        self.update_filters(|filters| filters.fuel_type = normalize(fuel_type));
    }

    pub fn clear_filters(&self) {
        self.update_filters(|filters| *filters = FilterState::default());
    }

    fn update_filters(&self, mutate: impl FnOnce(&mut FilterState)) {
        self.state.send_modify(|state| {
            mutate(&mut state.filters);
            state.refresh_view();
        });
    }

    /// Activar un vehículo de la lista y cargar su detalle.
    ///
    /// Cada activación recibe un número de secuencia; si otra activación
    /// posterior ya está en curso cuando esta responde, la respuesta se
    /// descarta.
    pub async fn activate(&self, id: i32) {
        let seq = self.detail_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            state.selection = Selection::Loading { id };
            state.detail_error = None;
        });

        let result = self.source.get_by_id(id).await;

        if result.is_ok() && !self.reveal_delay.is_zero() {
            tokio::time::sleep(self.reveal_delay).await;
        }

        if self.detail_seq.load(Ordering::SeqCst) != seq {
            debug!("⏭️ Respuesta obsoleta para vehículo {} descartada", id);
            return;
        }

        match result {
            Ok(vehicle) => self.state.send_modify(|state| {
                state.selection = Selection::Selected(vehicle);
                state.refresh_view();
            }),
            Err(e) => {
                warn!("❌ Error cargando detalle del vehículo {}: {}", id, e);
                self.state.send_modify(|state| {
                    state.selection = Selection::Idle;
                    state.detail_error = Some(e.to_string());
                });
            }
        }
    }
}

/// Un valor vacío equivale a la opción "todos"
fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn vehicle(id: i32, make: &str, model: &str, year: i32, fuel_type: &str) -> Vehicle {
        Vehicle {
            id,
            make: make.to_string(),
            model: model.to_string(),
            year,
            price: Decimal::new(20000 * id as i64, 0),
            fuel_type: fuel_type.to_string(),
            mileage: 500,
            transmission: "Automatic".to_string(),
        }
    }

    /// Origen con latencia configurable por id
    struct SlowSource {
        vehicles: Vec<Vehicle>,
        latency: HashMap<i32, Duration>,
        fail_list: bool,
    }

    impl SlowSource {
        fn new(vehicles: Vec<Vehicle>) -> Self {
            Self {
                vehicles,
                latency: HashMap::new(),
                fail_list: false,
            }
        }
    }

    #[async_trait]
    impl VehicleSource for SlowSource {
        async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
            if self.fail_list {
                return Err(AppError::StoreUnavailable("connection refused".to_string()));
            }
            Ok(self.vehicles.clone())
        }

        async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
            if let Some(delay) = self.latency.get(&id) {
                tokio::time::sleep(*delay).await;
            }
            self.vehicles
                .iter()
                .find(|v| v.id == id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("Vehicle with id '{}' not found", id)))
        }
    }

    fn fleet() -> Vec<Vehicle> {
        vec![
            vehicle(1, "Toyota", "Corolla", 2020, "Gasoline"),
            vehicle(2, "Tesla", "Model 3", 2022, "Electric"),
        ]
    }

    #[tokio::test]
    async fn test_initial_state_is_loading() {
        let dashboard = Dashboard::with_reveal_delay(SlowSource::new(fleet()), Duration::ZERO);
        let state = dashboard.state();
        assert_eq!(state.list, ListStatus::Loading);
        assert_eq!(state.selection, Selection::Idle);
        assert!(state.filters.is_empty());
    }

    #[tokio::test]
    async fn test_load_failure_is_visible() {
        let mut source = SlowSource::new(fleet());
        source.fail_list = true;
        let dashboard = Dashboard::with_reveal_delay(source, Duration::ZERO);

        dashboard.load().await;

        match dashboard.state().list {
            ListStatus::Failed(message) => assert!(message.contains("connection refused")),
            other => panic!("expected failed list, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stale_detail_response_is_discarded() {
        let mut source = SlowSource::new(fleet());
        source.latency.insert(1, Duration::from_millis(80));
        let dashboard = Dashboard::with_reveal_delay(source, Duration::ZERO);
        dashboard.load().await;

        tokio::join!(dashboard.activate(1), dashboard.activate(2));

        assert_eq!(dashboard.state().selection.selected_id(), Some(2));
    }

    #[tokio::test]
    async fn test_loading_shown_during_reveal_delay() {
        let dashboard =
            Dashboard::with_reveal_delay(SlowSource::new(fleet()), Duration::from_millis(100));
        dashboard.load().await;
        let mut rx = dashboard.subscribe();

        let observer = async {
            rx.changed().await.unwrap();
            rx.borrow_and_update().selection.clone()
        };
        let (_, observed) = tokio::join!(dashboard.activate(2), observer);

        assert_eq!(observed, Selection::Loading { id: 2 });
        assert_eq!(dashboard.state().selection.selected_id(), Some(2));
    }

    #[tokio::test]
    async fn test_filters_while_loading_keep_request() {
        let mut source = SlowSource::new(fleet());
        source.latency.insert(2, Duration::from_millis(50));
        let dashboard = Dashboard::with_reveal_delay(source, Duration::ZERO);
        dashboard.load().await;

        let filter_later = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            dashboard.set_make(Some("Toyota".to_string()));
        };
        tokio::join!(dashboard.activate(2), filter_later);

        // El detalle llega después del filtro y ya no está en la vista
        assert_eq!(dashboard.state().selection, Selection::Idle);
    }

    #[test]
    fn test_normalize_empty_is_unset() {
        assert_eq!(normalize(Some(String::new())), None);
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("Tesla".to_string())), Some("Tesla".to_string()));
    }
}
