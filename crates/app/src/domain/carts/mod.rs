//! Carts

pub mod data;
pub mod errors;
pub mod models;
mod repositories;
pub mod service;

pub use errors::{CartsServiceError, ValidationError};
pub use service::*;
