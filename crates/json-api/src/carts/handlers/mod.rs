//! Cart Handlers

pub(crate) mod clear;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod selected_price;
pub(crate) mod total_price;
pub(crate) mod update;
