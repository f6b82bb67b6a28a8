//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use shopcarts_app::{
    context::AppContext,
    domain::carts::{
        MockCartsService,
        models::{Cart, Item},
    },
};

use crate::{errors, state::State};

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    Arc::new(State::new(AppContext {
        carts: Arc::new(carts),
    }))
}

/// Wraps a route in a service carrying the mocked carts service and the
/// same response catcher the real server uses.
pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .push(route),
    )
    .catcher(errors::catcher())
}

pub(crate) fn make_cart(id: i32, name: &str) -> Cart {
    Cart {
        id,
        name: name.to_string(),
        items: Vec::new(),
    }
}

pub(crate) fn make_item(id: i32, cart_id: i32, item_id: &str, quantity: i32, price: i64) -> Item {
    Item {
        id,
        cart_id,
        item_id: item_id.to_string(),
        description: format!("item {item_id}"),
        quantity,
        price,
    }
}
