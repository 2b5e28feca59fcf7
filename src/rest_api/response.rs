//! # Response Formatting
//!
//! Standard success payloads for the REST API.

use serde::Serialize;

use crate::store::Car;

/// List response
#[derive(Debug, Clone, Serialize)]
pub struct CarListResponse {
    pub data: Vec<Car>,
    pub count: usize,
}

impl CarListResponse {
    pub fn new(data: Vec<Car>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// Single car response (create and update)
#[derive(Debug, Clone, Serialize)]
pub struct CarResponse {
    pub data: Car,
}

impl CarResponse {
    pub fn new(data: Car) -> Self {
        Self { data }
    }
}

/// Delete confirmation
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: u64,
}

impl DeleteResponse {
    pub fn success(id: u64) -> Self {
        Self { deleted: true, id }
    }
}
