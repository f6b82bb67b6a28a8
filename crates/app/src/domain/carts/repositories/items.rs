//! Cart Items Repository

use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};

use crate::domain::carts::{
    data::{ItemUpdate, NewItem},
    models::Item,
};

const LIST_CART_ITEMS_SQL: &str = include_str!("../sql/list_cart_items.sql");
const GET_CART_ITEM_SQL: &str = include_str!("../sql/get_cart_item.sql");
const CREATE_CART_ITEM_SQL: &str = include_str!("../sql/create_cart_item.sql");
const UPDATE_CART_ITEM_SQL: &str = include_str!("../sql/update_cart_item.sql");
const DELETE_CART_ITEM_SQL: &str = include_str!("../sql/delete_cart_item.sql");
const DELETE_CART_ITEMS_SQL: &str = include_str!("../sql/delete_cart_items.sql");
const TOTAL_PRICE_SQL: &str = include_str!("../sql/total_price.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartItemsRepository;

impl PgCartItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: i32,
    ) -> Result<Vec<Item>, sqlx::Error> {
        query_as::<Postgres, Item>(LIST_CART_ITEMS_SQL)
            .bind(cart)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: i32,
        item: i32,
    ) -> Result<Item, sqlx::Error> {
        query_as::<Postgres, Item>(GET_CART_ITEM_SQL)
            .bind(item)
            .bind(cart)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: i32,
        item: &NewItem,
    ) -> Result<Item, sqlx::Error> {
        query_as::<Postgres, Item>(CREATE_CART_ITEM_SQL)
            .bind(cart)
            .bind(&item.item_id)
            .bind(&item.description)
            .bind(item.quantity)
            .bind(item.price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: i32,
        item: i32,
        update: &ItemUpdate,
    ) -> Result<Item, sqlx::Error> {
        query_as::<Postgres, Item>(UPDATE_CART_ITEM_SQL)
            .bind(item)
            .bind(cart)
            .bind(update.item_id.as_deref())
            .bind(update.description.as_deref())
            .bind(update.quantity)
            .bind(update.price)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_cart_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: i32,
        item: i32,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEM_SQL)
            .bind(item)
            .bind(cart)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// Delete every item belonging to the cart.
    pub(crate) async fn delete_cart_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: i32,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_ITEMS_SQL)
            .bind(cart)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    /// `SUM(quantity * price)` over the cart's items; 0 for an empty cart.
    pub(crate) async fn total_price(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: i32,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(TOTAL_PRICE_SQL)
            .bind(cart)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for Item {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: row.try_get("id")?,
            cart_id: row.try_get("cart_id")?,
            item_id: row.try_get("item_id")?,
            description: row.try_get("description")?,
            quantity: row.try_get("quantity")?,
            price: row.try_get("price")?,
        })
    }
}
