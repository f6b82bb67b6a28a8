//! Cart Item Handlers

mod handlers;

pub(crate) use handlers::{create, delete, get, index, update};
