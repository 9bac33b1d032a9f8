//! Cliente HTTP de la API de vehículos
//!
//! Lo usa el dashboard cuando corre fuera del proceso del servidor.
//! Sin reintentos: cada petición se intenta exactamente una vez.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::debug;

use crate::dashboard::source::VehicleSource;
use crate::models::Vehicle;
use crate::utils::errors::{AppError, ErrorResponse};

#[derive(Clone)]
pub struct VehicleApiClient {
    client: Client,
    base_url: String,
}

impl VehicleApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/vehicles{}", self.base_url, path)
    }

    async fn get(&self, url: String) -> Result<Response, AppError> {
        debug!("🌐 GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("Request to {} failed: {}", url, e)))?;

        if response.status().is_success() {
            return Ok(response);
        }

        Err(error_from_response(response).await)
    }
}

/// Traducir una respuesta no exitosa a la taxonomía de errores
async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message,
        Err(_) => format!("HTTP {}", status),
    };

    match status {
        StatusCode::NOT_FOUND => AppError::NotFound(message),
        StatusCode::BAD_REQUEST => AppError::MalformedInput(message),
        _ => AppError::StoreUnavailable(message),
    }
}

#[async_trait]
impl VehicleSource for VehicleApiClient {
    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let response = self.get(self.url("")).await?;
        response
            .json::<Vec<Vehicle>>()
            .await
            .map_err(|e| AppError::Internal(format!("Invalid vehicle list payload: {}", e)))
    }

    async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
        let response = self.get(self.url(&format!("/{}", id))).await?;
        response
            .json::<Vehicle>()
            .await
            .map_err(|e| AppError::Internal(format!("Invalid vehicle payload: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building_trims_trailing_slash() {
        let client = VehicleApiClient::new("http://localhost:3000/");
        assert_eq!(client.url(""), "http://localhost:3000/api/vehicles");
        assert_eq!(client.url("/7"), "http://localhost:3000/api/vehicles/7");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_store_unavailable() {
        // Puerto efímero recién liberado: nadie escucha en él
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = VehicleApiClient::new(format!("http://{}", addr));
        let err = client.list_all().await.unwrap_err();
        assert!(matches!(err, AppError::StoreUnavailable(_)));
    }
}
