//! Carts service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::carts::{
        data::{ItemFilter, ItemUpdate, NewCart, NewItem},
        errors::CartsServiceError,
        models::{Cart, Item},
        repositories::{PgCartItemsRepository, PgCartsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    items_repository: PgCartItemsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            items_repository: PgCartItemsRepository::new(),
        }
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn list_carts<'a>(&self, name: Option<&'a str>) -> Result<Vec<Cart>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut carts = match name {
            Some(name) => self.carts_repository.find_carts_by_name(&mut tx, name).await?,
            None => self.carts_repository.list_carts(&mut tx).await?,
        };

        for cart in &mut carts {
            cart.items = self
                .items_repository
                .list_cart_items(&mut tx, cart.id)
                .await?;
        }

        tx.commit().await?;

        Ok(carts)
    }

    async fn get_cart(&self, cart: i32) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut cart = self.carts_repository.get_cart(&mut tx, cart).await?;

        cart.items = self
            .items_repository
            .list_cart_items(&mut tx, cart.id)
            .await?;

        tx.commit().await?;

        Ok(cart)
    }

    #[tracing::instrument(skip(self, cart), fields(item_count = cart.items.len()))]
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut created = self.carts_repository.create_cart(&mut tx, &cart.name).await?;

        for item in &cart.items {
            let item = self
                .items_repository
                .create_cart_item(&mut tx, created.id, item)
                .await?;

            created.items.push(item);
        }

        tx.commit().await?;

        Ok(created)
    }

    #[tracing::instrument(skip(self, update), fields(item_count = update.items.len()))]
    async fn update_cart(&self, cart: i32, update: NewCart) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let mut updated = self
            .carts_repository
            .update_cart(&mut tx, cart, &update.name)
            .await?;

        // Replace semantics: the provided collection becomes the cart's items.
        self.items_repository
            .delete_cart_items(&mut tx, updated.id)
            .await?;

        for item in &update.items {
            let item = self
                .items_repository
                .create_cart_item(&mut tx, updated.id, item)
                .await?;

            updated.items.push(item);
        }

        tx.commit().await?;

        Ok(updated)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_cart(&self, cart: i32) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        // Idempotent: deleting a missing cart is a success.
        let rows_affected = self.carts_repository.delete_cart(&mut tx, cart).await?;

        tx.commit().await?;

        tracing::debug!(cart, rows_affected, "deleted cart");

        Ok(())
    }

    async fn clear_cart(&self, cart: i32) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.carts_repository.get_cart(&mut tx, cart).await?;

        self.items_repository
            .delete_cart_items(&mut tx, cart.id)
            .await?;

        tx.commit().await?;

        Ok(cart)
    }

    async fn total_price(&self, cart: i32) -> Result<i64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.carts_repository.get_cart(&mut tx, cart).await?;

        let total = self.items_repository.total_price(&mut tx, cart.id).await?;

        tx.commit().await?;

        Ok(total)
    }

    async fn selected_items_price(
        &self,
        cart: i32,
        selected: &[i64],
    ) -> Result<i64, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.carts_repository.get_cart(&mut tx, cart).await?;

        let items = self
            .items_repository
            .list_cart_items(&mut tx, cart.id)
            .await?;

        tx.commit().await?;

        // Items whose external identifier is not numeric are never selectable.
        let total = items
            .iter()
            .filter(|item| {
                item.item_id
                    .parse::<i64>()
                    .is_ok_and(|id| selected.contains(&id))
            })
            .map(|item| i64::from(item.quantity) * item.price)
            .sum();

        Ok(total)
    }

    async fn list_items(
        &self,
        cart: i32,
        filter: ItemFilter,
    ) -> Result<Vec<Item>, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.carts_repository.get_cart(&mut tx, cart).await?;

        let items = self
            .items_repository
            .list_cart_items(&mut tx, cart.id)
            .await?;

        tx.commit().await?;

        Ok(items.into_iter().filter(|i| filter.matches(i)).collect())
    }

    async fn get_item(&self, cart: i32, item: i32) -> Result<Item, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let item = self
            .items_repository
            .get_cart_item(&mut tx, cart, item)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn add_item(&self, cart: i32, item: NewItem) -> Result<Item, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let cart = self.carts_repository.get_cart(&mut tx, cart).await?;

        let item = self
            .items_repository
            .create_cart_item(&mut tx, cart.id, &item)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn update_item(
        &self,
        cart: i32,
        item: i32,
        update: ItemUpdate,
    ) -> Result<Item, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let item = self
            .items_repository
            .update_cart_item(&mut tx, cart, item, &update)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn delete_item(&self, cart: i32, item: i32) -> Result<(), CartsServiceError> {
        let mut tx = self.db.begin().await?;

        // The cart itself must exist; a missing item is a no-op.
        let cart = self.carts_repository.get_cart(&mut tx, cart).await?;

        self.items_repository
            .delete_cart_item(&mut tx, cart.id, item)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// List all carts in creation order, optionally filtered by exact name.
    async fn list_carts<'a>(&self, name: Option<&'a str>) -> Result<Vec<Cart>, CartsServiceError>;

    /// Retrieve a single cart with its items.
    async fn get_cart(&self, cart: i32) -> Result<Cart, CartsServiceError>;

    /// Create a cart together with any provided items.
    async fn create_cart(&self, cart: NewCart) -> Result<Cart, CartsServiceError>;

    /// Replace a cart's name and item collection.
    async fn update_cart(&self, cart: i32, update: NewCart) -> Result<Cart, CartsServiceError>;

    /// Delete a cart and, by cascade, its items. Succeeds if the cart is
    /// already gone.
    async fn delete_cart(&self, cart: i32) -> Result<(), CartsServiceError>;

    /// Delete all items under the cart, leaving the cart itself.
    async fn clear_cart(&self, cart: i32) -> Result<Cart, CartsServiceError>;

    /// Sum of quantity times price over the cart's items.
    async fn total_price(&self, cart: i32) -> Result<i64, CartsServiceError>;

    /// Sum restricted to items whose numeric `item_id` is in `selected`.
    async fn selected_items_price(
        &self,
        cart: i32,
        selected: &[i64],
    ) -> Result<i64, CartsServiceError>;

    /// List a cart's items, filtered by exact-match predicates.
    async fn list_items(
        &self,
        cart: i32,
        filter: ItemFilter,
    ) -> Result<Vec<Item>, CartsServiceError>;

    /// Retrieve a single item scoped to its owning cart.
    async fn get_item(&self, cart: i32, item: i32) -> Result<Item, CartsServiceError>;

    /// Append an item to the cart.
    async fn add_item(&self, cart: i32, item: NewItem) -> Result<Item, CartsServiceError>;

    /// Apply a partial update to an item.
    async fn update_item(
        &self,
        cart: i32,
        item: i32,
        update: ItemUpdate,
    ) -> Result<Item, CartsServiceError>;

    /// Delete an item from the cart. The cart must exist; a missing item is
    /// a no-op.
    async fn delete_item(&self, cart: i32, item: i32) -> Result<(), CartsServiceError>;
}
