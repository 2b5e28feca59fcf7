//! Car store subsystem for carlot
//!
//! The store owns the authoritative set of car records and all
//! identity/mutation rules.
//!
//! # Invariants Enforced
//!
//! - Every stored car carries a non-zero id
//! - Ids are assigned strictly increasing from 1
//! - An id, once issued, is never reassigned, even after deletion
//! - At most one car per id
//!
//! Absence of a record is a normal return value, not an error. The only
//! store-level failure is a poisoned lock, which callers classify as an
//! internal error.

mod car;
mod errors;
mod memory;

pub use car::{Car, NewCar};
pub use errors::{StoreError, StoreResult};
pub use memory::{CarRepository, MemoryCarStore};
