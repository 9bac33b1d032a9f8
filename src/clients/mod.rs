//! Clients - HTTP Clients
//!
//! This module contains the HTTP client for the vehicle API.

pub mod vehicle_api_client;

pub use vehicle_api_client::VehicleApiClient;
