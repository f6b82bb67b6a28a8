//! Cart Handlers

pub(crate) mod errors;
mod handlers;
pub(crate) mod items;

pub(crate) use handlers::{clear, create, delete, get, index, selected_price, total_price, update};
