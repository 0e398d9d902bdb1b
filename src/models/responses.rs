use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Uniform success/error/data wrapper returned by the service boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub error: Option<String>,
    pub data: Vec<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: Vec<T>) -> Self {
        Self {
            success: true,
            error: None,
            data,
        }
    }

    pub fn failure(error: impl Display) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            data: Vec::new(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub source: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
