//! Middleware de CORS
//!
//! Este módulo maneja la configuración de CORS para que el dashboard
//! pueda consultar la API desde otro origen.

use http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::warn;

/// CORS permisivo, para desarrollo
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// CORS restringido a orígenes concretos (la API es de solo lectura)
pub fn cors_middleware_with_origins(origins: Vec<String>) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("⚠️ Origen CORS inválido ignorado: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::ORIGIN])
        .max_age(std::time::Duration::from_secs(3600))
}
