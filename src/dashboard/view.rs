//! Modelo de vista del dashboard
//!
//! Proyección pura del estado a lo que la capa de presentación pinta:
//! spinners, tarjetas del listado y panel de detalle.

use serde::Serialize;

use super::filter::{FilterOptions, FilterState};
use super::store::{DashboardState, ListStatus, Selection};
use crate::models::Vehicle;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum ListPanel {
    Spinner,
    Error(String),
    Cards(Vec<VehicleCard>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleCard {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum DetailPanel {
    Hidden,
    Spinner,
    Error(String),
    Details(Vec<DetailField>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub list: ListPanel,
    pub detail: DetailPanel,
    pub filters: FilterState,
    pub options: FilterOptions,
}

impl From<&DashboardState> for DashboardView {
    fn from(state: &DashboardState) -> Self {
        let list = match &state.list {
            ListStatus::Loading => ListPanel::Spinner,
            ListStatus::Failed(message) => ListPanel::Error(message.clone()),
            ListStatus::Ready => ListPanel::Cards(state.visible.iter().map(card).collect()),
        };

        let detail = match (&state.selection, &state.detail_error) {
            (Selection::Loading { .. }, _) => DetailPanel::Spinner,
            (Selection::Selected(vehicle), _) => DetailPanel::Details(detail_fields(vehicle)),
            (Selection::Idle, Some(message)) => DetailPanel::Error(message.clone()),
            (Selection::Idle, None) => DetailPanel::Hidden,
        };

        Self {
            list,
            detail,
            filters: state.filters.clone(),
            options: FilterOptions::from_vehicles(&state.vehicles),
        }
    }
}

fn card(vehicle: &Vehicle) -> VehicleCard {
    VehicleCard {
        id: vehicle.id,
        make: vehicle.make.clone(),
        model: vehicle.model.clone(),
        year: vehicle.year,
        price: format_price(vehicle),
    }
}

/// Sin ceros de relleno: PostgreSQL devuelve escala 2 (`20000.00`)
fn format_price(vehicle: &Vehicle) -> String {
    format!("${}", vehicle.price.normalize())
}

fn detail_fields(vehicle: &Vehicle) -> Vec<DetailField> {
    vec![
        DetailField { label: "Make", value: vehicle.make.clone() },
        DetailField { label: "Model", value: vehicle.model.clone() },
        DetailField { label: "Year", value: vehicle.year.to_string() },
        DetailField { label: "Price", value: format_price(vehicle) },
        DetailField { label: "Fuel Type", value: vehicle.fuel_type.clone() },
        DetailField { label: "Mileage", value: format!("{} miles", vehicle.mileage) },
        DetailField { label: "Transmission", value: vehicle.transmission.clone() },
    ]
}
