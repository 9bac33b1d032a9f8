//! Dashboard de flota
//!
//! Lógica del lado cliente: motor de filtrado, selección de detalle y
//! modelo de vista, desacoplados de cualquier framework de renderizado.

pub mod filter;
pub mod source;
pub mod store;
pub mod view;

pub use filter::{filter_vehicles, unique_values, FilterOptions, FilterState};
pub use source::VehicleSource;
pub use store::{Dashboard, DashboardState, ListStatus, Selection, DEFAULT_REVEAL_DELAY};
pub use view::DashboardView;
