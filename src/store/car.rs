//! Car record types.

use serde::{Deserialize, Serialize};

/// A car as held by the store, id already assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    /// Store-assigned identity, non-zero and immutable
    pub id: u64,
    pub brand: String,
    pub price: f64,
    pub year: i32,
}

/// The id-less shape accepted at creation time.
///
/// A client-supplied `id` field is ignored during deserialization; the
/// store assigns identities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCar {
    pub brand: String,
    pub price: f64,
    pub year: i32,
}

impl NewCar {
    pub fn new(brand: impl Into<String>, price: f64, year: i32) -> Self {
        Self {
            brand: brand.into(),
            price,
            year,
        }
    }

    /// Attach a store-assigned id.
    pub fn with_id(self, id: u64) -> Car {
        Car {
            id,
            brand: self.brand,
            price: self.price,
            year: self.year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_id_preserves_fields() {
        let car = NewCar::new("Mazda", 30000.0, 2015).with_id(7);
        assert_eq!(car.id, 7);
        assert_eq!(car.brand, "Mazda");
        assert_eq!(car.price, 30000.0);
        assert_eq!(car.year, 2015);
    }

    #[test]
    fn test_new_car_ignores_client_id() {
        let parsed: NewCar =
            serde_json::from_str(r#"{"id": 99, "brand": "Honda", "price": 50000, "year": 2020}"#)
                .unwrap();
        assert_eq!(parsed, NewCar::new("Honda", 50000.0, 2020));
    }

    #[test]
    fn test_car_serialization_shape() {
        let car = NewCar::new("Volkswagen", 10000.0, 2010).with_id(1);
        let json = serde_json::to_value(&car).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["brand"], "Volkswagen");
        assert_eq!(json["price"], 10000.0);
        assert_eq!(json["year"], 2010);
    }
}
