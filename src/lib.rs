//! carlot - an in-memory car inventory service with a REST API

pub mod cli;
pub mod observability;
pub mod rest_api;
pub mod store;
