//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores compartido por la API,
//! el seed y el dashboard.

pub mod errors;

pub use errors::{AppError, AppResult};
