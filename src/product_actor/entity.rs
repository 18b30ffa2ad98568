//! [`ActorEntity`] implementation for [`Product`].
//!
//! The entity accepts any well-formed payload; rejecting malformed input is the job of the
//! form layer in front of the store.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{NewProduct, Product, ProductId, ProductQuery, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = NewProduct;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Query = ProductQuery;
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn from_create_params(id: ProductId, params: NewProduct) -> Result<Self, Self::Error> {
        Ok(Product::from_new(id, params))
    }

    fn matches(&self, query: &ProductQuery) -> bool {
        query.matches(self)
    }

    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        update.apply(self);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::ToggleLike => {
                self.is_liked = !self.is_liked;
                Ok(ProductActionResult::ToggleLike(self.is_liked))
            }
        }
    }
}
