//! Fleet Management Dashboard
//!
//! API de solo lectura sobre la tabla de vehículos y la lógica del
//! dashboard (búsqueda, filtros y selección de detalle).

pub mod clients;
pub mod config;
pub mod controllers;
pub mod dashboard;
pub mod database;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

pub use models::Vehicle;
pub use utils::errors::{AppError, AppResult};
