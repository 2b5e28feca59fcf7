//! # Car Operation Handler
//!
//! Translates parsed requests into store calls plus the filter/sort and
//! validation rules of the `/cars` resource. The store is injected at
//! construction; the handler owns no state of its own.

use std::sync::Arc;

use super::errors::{ApiError, ApiResult};
use super::parser::{validate_price, ListParams, SortKey, UpdatePriceRequest};
use crate::store::{Car, CarRepository, NewCar};

/// Handler for the `/cars` resource, generic over the backing repository.
pub struct CarHandler<R: CarRepository> {
    store: Arc<R>,
}

impl<R: CarRepository> CarHandler<R> {
    pub fn new(store: Arc<R>) -> Self {
        Self { store }
    }

    /// List cars, filtered then sorted per the parsed parameters.
    pub fn list(&self, params: &ListParams) -> ApiResult<Vec<Car>> {
        let mut cars = self.store.get_all()?;

        // Filter always runs before sort.
        if let Some(max_price) = params.max_price {
            cars.retain(|car| car.price <= max_price);
        }

        if let Some(key) = params.sort_key {
            sort_cars(&mut cars, key, params.descending);
        }

        Ok(cars)
    }

    /// Validate and save a new car; returns it with its assigned id.
    pub fn create(&self, new_car: NewCar) -> ApiResult<Car> {
        if new_car.brand.trim().is_empty() {
            return Err(ApiError::InvalidBody("brand must not be empty".to_string()));
        }
        validate_price("price", new_car.price).map_err(ApiError::InvalidBody)?;

        Ok(self.store.save(new_car)?)
    }

    /// Update the price of an existing car.
    ///
    /// Returns the car as it existed before the mutation; the reference
    /// behavior reports the pre-update snapshot.
    pub fn update_price(&self, request: &UpdatePriceRequest) -> ApiResult<Car> {
        let car = self
            .store
            .get_by_id(request.id)?
            .ok_or(ApiError::NotFound(request.id))?;

        self.store.update_price(request.id, request.price)?;

        Ok(car)
    }

    /// Delete a car by id; reports the deleted id.
    pub fn delete(&self, id: u64) -> ApiResult<u64> {
        self.store
            .get_by_id(id)?
            .ok_or(ApiError::NotFound(id))?;

        self.store.delete_by_id(id)?;

        Ok(id)
    }
}

/// Stable sort by the requested key. Equal keys keep their pre-sort
/// relative order.
fn sort_cars(cars: &mut [Car], key: SortKey, descending: bool) {
    cars.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Brand => a.brand.cmp(&b.brand),
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Year => a.year.cmp(&b.year),
        };
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}
