//! REST API subsystem for carlot
//!
//! Maps HTTP operations on the `/cars` resource to store calls:
//! list (with optional filter and sort), create, price update, and
//! delete by id. Every failure is classified before it reaches the
//! boundary; no raw error crosses it.

mod config;
mod errors;
mod handler;
mod parser;
mod response;
mod server;

pub use config::ServiceConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use handler::CarHandler;
pub use parser::{ListParams, SortKey, UpdatePriceRequest};
pub use response::{CarListResponse, CarResponse, DeleteResponse};
pub use server::RestServer;
