//! Seed de vehículos
//!
//! Uso: `seed [ruta]` (por defecto `data.json`). Requiere `DATABASE_URL`.

use std::path::PathBuf;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info};

use fleet_dashboard::database::seed::{load_seed_file, seed_vehicles};
use fleet_dashboard::database::DatabaseConnection;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data.json"));

    info!("📂 Leyendo vehículos de {}", path.display());
    let records = load_seed_file(&path).await.map_err(|e| {
        error!("❌ {}", e);
        e
    })?;

    let db_connection = DatabaseConnection::new_default().await?;
    let inserted = seed_vehicles(db_connection.pool(), &records).await?;

    info!("✅ Vehicles seeded successfully ({} records)", inserted);
    Ok(())
}
