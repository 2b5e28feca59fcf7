//! In-memory car store.

use std::collections::BTreeMap;
use std::sync::Mutex;

use super::car::{Car, NewCar};
use super::errors::{StoreError, StoreResult};

/// Repository contract for car records.
///
/// One instance is shared across all requests; implementations must
/// serialize concurrent access internally.
pub trait CarRepository: Send + Sync {
    /// Every currently held car, in ascending id order.
    fn get_all(&self) -> StoreResult<Vec<Car>>;

    /// Assign the next identity, store the car under it, and return the
    /// car carrying its id.
    fn save(&self, new_car: NewCar) -> StoreResult<Car>;

    /// The car with that id, if any.
    fn get_by_id(&self, id: u64) -> StoreResult<Option<Car>>;

    /// Replace the price of the car with `id` in place. Returns `false`
    /// if the id is unknown. `new_price` is assumed already validated by
    /// the caller.
    fn update_price(&self, id: u64, new_price: f64) -> StoreResult<bool>;

    /// Remove the car with that id. Returns `false` if the id is unknown.
    fn delete_by_id(&self, id: u64) -> StoreResult<bool>;
}

/// Mutable store interior, guarded by the outer mutex.
struct Inner {
    /// BTreeMap keeps iteration in id order, which equals insertion order
    /// since ids are monotonic.
    cars: BTreeMap<u64, Car>,

    /// Last issued id. Instance-lifetime state; never rewinds.
    current_id: u64,
}

/// Mutex-guarded in-memory implementation of [`CarRepository`].
pub struct MemoryCarStore {
    inner: Mutex<Inner>,
}

impl MemoryCarStore {
    /// An empty store; the first saved car gets id 1.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                cars: BTreeMap::new(),
                current_id: 0,
            }),
        }
    }

    /// A store pre-seeded with three demo cars (ids 1-3).
    pub fn with_demo_inventory() -> Self {
        let store = Self::new();
        for car in [
            NewCar::new("Volkswagen", 10000.0, 2010),
            NewCar::new("Mazda", 30000.0, 2015),
            NewCar::new("Honda", 50000.0, 2020),
        ] {
            // A fresh private mutex cannot be poisoned yet.
            store.save(car).expect("seeding a fresh store cannot fail");
        }
        store
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for MemoryCarStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CarRepository for MemoryCarStore {
    fn get_all(&self) -> StoreResult<Vec<Car>> {
        let inner = self.lock()?;
        Ok(inner.cars.values().cloned().collect())
    }

    fn save(&self, new_car: NewCar) -> StoreResult<Car> {
        let mut inner = self.lock()?;
        inner.current_id += 1;
        let car = new_car.with_id(inner.current_id);
        inner.cars.insert(car.id, car.clone());
        Ok(car)
    }

    fn get_by_id(&self, id: u64) -> StoreResult<Option<Car>> {
        let inner = self.lock()?;
        Ok(inner.cars.get(&id).cloned())
    }

    fn update_price(&self, id: u64, new_price: f64) -> StoreResult<bool> {
        let mut inner = self.lock()?;
        match inner.cars.get_mut(&id) {
            Some(car) => {
                car.price = new_price;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_by_id(&self, id: u64) -> StoreResult<bool> {
        let mut inner = self.lock()?;
        Ok(inner.cars.remove(&id).is_some())
    }
}
