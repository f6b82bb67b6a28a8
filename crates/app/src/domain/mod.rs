//! Domain modules

pub mod carts;
